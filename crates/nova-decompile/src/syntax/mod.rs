//! Syntax tree rebuilt by the decompiler from class-file data.
//!
//! Every expression carries the static type inferred for it upstream; declarations carry the type
//! bounds of their scope and calls carry resolved parameter types. Passes such as
//! [`crate::cast`] rewrite this tree in place before source text is emitted.

mod decl;
mod expr;
mod stmt;

pub use decl::{
    BodyDeclaration, CompilationUnit, ConstructorDeclaration, FieldDeclaration, MemberDeclaration,
    MethodDeclaration, StaticInitializerDeclaration, TypeDeclaration, TypeKind, VariableDeclarator,
    VariableInitializer, ACC_BRIDGE, ACC_FINAL, ACC_PRIVATE, ACC_PUBLIC, ACC_STATIC, ACC_SYNTHETIC,
    ACC_VARARGS,
};
pub use expr::{
    BinaryOperator, ConstructorInvocation, ExprKind, Expression, FieldReference, MethodInvocation,
    NewExpression, UnaryOperator, UNKNOWN_LINE_NUMBER,
};
pub use stmt::{CatchClause, LocalVariableDeclaration, Statement, SwitchBlock, SwitchLabel};

impl CompilationUnit {
    /// Load a compilation unit previously serialized with `serde_json`.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
