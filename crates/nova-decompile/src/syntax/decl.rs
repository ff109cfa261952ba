use nova_types::{Type, TypeBounds};
use serde::{Deserialize, Serialize};

use super::{Expression, Statement};

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_PRIVATE: u16 = 0x0002;
pub const ACC_STATIC: u16 = 0x0008;
pub const ACC_FINAL: u16 = 0x0010;
pub const ACC_BRIDGE: u16 = 0x0040;
pub const ACC_VARARGS: u16 = 0x0080;
pub const ACC_SYNTHETIC: u16 = 0x1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub type_declarations: Vec<TypeDeclaration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    #[serde(default)]
    pub access_flags: u16,
    pub internal_name: String,
    #[serde(default)]
    pub body: Option<BodyDeclaration>,
}

/// The member list of a class, interface, enum or anonymous class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDeclaration {
    pub internal_name: String,
    /// Bounds of the type parameters declared by the class itself.
    #[serde(default)]
    pub type_bounds: TypeBounds,
    pub members: Vec<MemberDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum MemberDeclaration {
    Field(FieldDeclaration),
    StaticInitializer(StaticInitializerDeclaration),
    Constructor(ConstructorDeclaration),
    Method(MethodDeclaration),
    Type(TypeDeclaration),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    #[serde(default)]
    pub access_flags: u16,
    pub ty: Type,
    pub declarators: Vec<VariableDeclarator>,
}

/// One name in a field or local variable declaration: `x[] = {...}` in `int x[] = {...}, y;`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub name: String,
    /// Array dimensions written after the name, on top of the declared type's.
    #[serde(default)]
    pub dimension: u32,
    #[serde(default)]
    pub initializer: Option<VariableInitializer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "init", rename_all = "snake_case")]
pub enum VariableInitializer {
    Expression { expression: Expression },
    /// `{ a, b, { c } }`
    Array { initializers: Vec<VariableInitializer> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticInitializerDeclaration {
    #[serde(default)]
    pub type_bounds: TypeBounds,
    #[serde(default)]
    pub statements: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    #[serde(default)]
    pub access_flags: u16,
    pub descriptor: String,
    /// Class bounds plus the constructor's own type parameters.
    #[serde(default)]
    pub type_bounds: TypeBounds,
    #[serde(default)]
    pub exception_types: Option<Vec<Type>>,
    #[serde(default)]
    pub statements: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    #[serde(default)]
    pub access_flags: u16,
    pub name: String,
    pub descriptor: String,
    /// Class bounds plus the method's own type parameters.
    #[serde(default)]
    pub type_bounds: TypeBounds,
    pub return_type: Type,
    #[serde(default)]
    pub exception_types: Option<Vec<Type>>,
    #[serde(default)]
    pub statements: Option<Vec<Statement>>,
}

fn has_flag(access_flags: u16, flag: u16) -> bool {
    access_flags & flag != 0
}

impl FieldDeclaration {
    pub fn is_synthetic(&self) -> bool {
        has_flag(self.access_flags, ACC_SYNTHETIC)
    }
}

impl ConstructorDeclaration {
    /// Compiler-generated constructors never need source-level casts.
    pub fn is_generated(&self) -> bool {
        has_flag(self.access_flags, ACC_SYNTHETIC | ACC_BRIDGE)
    }
}

impl MethodDeclaration {
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>, return_type: Type) -> Self {
        Self {
            access_flags: ACC_PUBLIC,
            name: name.into(),
            descriptor: descriptor.into(),
            type_bounds: TypeBounds::new(),
            return_type,
            exception_types: None,
            statements: Some(Vec::new()),
        }
    }

    /// Synthetic accessors and generic bridge methods never need source-level casts.
    pub fn is_generated(&self) -> bool {
        has_flag(self.access_flags, ACC_SYNTHETIC | ACC_BRIDGE)
    }
}

impl VariableDeclarator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimension: 0,
            initializer: None,
        }
    }

    #[must_use]
    pub fn with_dimension(mut self, dimension: u32) -> Self {
        self.dimension = dimension;
        self
    }

    #[must_use]
    pub fn with_expression(mut self, expression: Expression) -> Self {
        self.initializer = Some(VariableInitializer::Expression { expression });
        self
    }

    #[must_use]
    pub fn with_initializer(mut self, initializer: VariableInitializer) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

impl BodyDeclaration {
    pub fn new(internal_name: impl Into<String>) -> Self {
        Self {
            internal_name: internal_name.into(),
            type_bounds: TypeBounds::new(),
            members: Vec::new(),
        }
    }
}
