use nova_types::{ObjectType, Type, TypeArgument};
use serde::{Deserialize, Serialize};

use super::{BodyDeclaration, Statement, VariableInitializer};

/// Line number attached to nodes whose bytecode carried no `LineNumberTable` entry.
pub const UNKNOWN_LINE_NUMBER: u32 = 0;

/// An expression together with the static type inferred for it upstream.
///
/// For a cast node, `ty` is the cast's target type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    #[serde(default)]
    pub line_number: u32,
    pub ty: Type,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "expr", rename_all = "snake_case")]
pub enum ExprKind {
    IntegerConstant {
        value: i32,
    },
    LongConstant {
        value: i64,
    },
    FloatConstant {
        value: f32,
    },
    DoubleConstant {
        value: f64,
    },
    BooleanConstant {
        value: bool,
    },
    CharConstant {
        value: char,
    },
    StringConstant {
        value: String,
    },
    Null,
    This,
    Super,
    LocalVariableReference {
        name: String,
    },
    /// A type used as a qualifier, e.g. `String` in `String.valueOf(x)`; `ty` is the type.
    ObjectTypeReference,
    /// `Foo.class`
    TypeReferenceDotClass {
        type_ref: Type,
    },
    EnumConstantReference {
        owner: String,
        name: String,
    },
    FieldReference(FieldReference),
    MethodInvocation(MethodInvocation),
    /// `this(...)` inside a constructor.
    ConstructorInvocation(ConstructorInvocation),
    /// `super(...)` inside a constructor.
    SuperConstructorInvocation(ConstructorInvocation),
    /// `new Foo(...)`; the constructed type is the expression's `ty`.
    New(NewExpression),
    /// `new int[n][m]`
    NewArray {
        dimensions: Vec<Expression>,
    },
    /// `new String[] { ... }`
    NewInitializedArray {
        initializers: Vec<VariableInitializer>,
    },
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    PreOperator {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
    PostOperator {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
    InstanceOf {
        expression: Box<Expression>,
        instance_of_type: Type,
    },
    Ternary {
        condition: Box<Expression>,
        when_true: Box<Expression>,
        when_false: Box<Expression>,
    },
    ArrayAccess {
        array: Box<Expression>,
        index: Box<Expression>,
    },
    Cast {
        expression: Box<Expression>,
    },
    Lambda {
        parameters: Vec<String>,
        statements: Option<Vec<Statement>>,
    },
    MethodReference {
        qualifier: Box<Expression>,
        name: String,
    },
    ConstructorReference {
        owner: ObjectType,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReference {
    /// `None` for an unqualified access to a field of the enclosing class.
    pub qualifier: Option<Box<Expression>>,
    /// Internal name of the class declaring the field.
    pub owner: String,
    pub name: String,
    pub descriptor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodInvocation {
    pub qualifier: Box<Expression>,
    /// Internal name of the class the call resolves against.
    pub owner: String,
    pub name: String,
    pub descriptor: String,
    /// Explicit type arguments written at the call site: `this.<T>get()`.
    #[serde(default)]
    pub type_parameters: Option<Vec<TypeArgument>>,
    pub arguments: Vec<Expression>,
    /// One resolved parameter type per argument position.
    pub parameter_types: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorInvocation {
    pub owner: ObjectType,
    pub descriptor: String,
    pub arguments: Vec<Expression>,
    pub parameter_types: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpression {
    pub descriptor: String,
    pub arguments: Vec<Expression>,
    pub parameter_types: Vec<Type>,
    /// Body of an anonymous class.
    #[serde(default)]
    pub body: Option<Box<BodyDeclaration>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,
    UshrAssign,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    Ushr,
    BitAnd,
    BitOr,
    BitXor,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Assign => "=",
            BinaryOperator::AddAssign => "+=",
            BinaryOperator::SubAssign => "-=",
            BinaryOperator::MulAssign => "*=",
            BinaryOperator::DivAssign => "/=",
            BinaryOperator::RemAssign => "%=",
            BinaryOperator::AndAssign => "&=",
            BinaryOperator::OrAssign => "|=",
            BinaryOperator::XorAssign => "^=",
            BinaryOperator::ShlAssign => "<<=",
            BinaryOperator::ShrAssign => ">>=",
            BinaryOperator::UshrAssign => ">>>=",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Rem => "%",
            BinaryOperator::Shl => "<<",
            BinaryOperator::Shr => ">>",
            BinaryOperator::Ushr => ">>>",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOperator {
    Increment,
    Decrement,
    Plus,
    Minus,
    Not,
    BitNot,
}

impl Expression {
    pub fn new(line_number: u32, ty: Type, kind: ExprKind) -> Self {
        Self {
            line_number,
            ty,
            kind,
        }
    }

    pub fn null(line_number: u32) -> Self {
        Self::new(line_number, Type::java_lang_object(), ExprKind::Null)
    }

    pub fn int(line_number: u32, value: i32) -> Self {
        Self::new(
            line_number,
            Type::primitive(nova_types::PrimitiveType::Int),
            ExprKind::IntegerConstant { value },
        )
    }

    pub fn string(line_number: u32, value: impl Into<String>) -> Self {
        Self::new(
            line_number,
            Type::Object(ObjectType::string()),
            ExprKind::StringConstant {
                value: value.into(),
            },
        )
    }

    pub fn this(line_number: u32, ty: impl Into<Type>) -> Self {
        Self::new(line_number, ty.into(), ExprKind::This)
    }

    pub fn local(line_number: u32, ty: impl Into<Type>, name: impl Into<String>) -> Self {
        Self::new(
            line_number,
            ty.into(),
            ExprKind::LocalVariableReference { name: name.into() },
        )
    }

    pub fn type_reference(line_number: u32, ty: ObjectType) -> Self {
        Self::new(line_number, Type::Object(ty), ExprKind::ObjectTypeReference)
    }

    pub fn cast(line_number: u32, ty: Type, expression: Expression) -> Self {
        Self::new(
            line_number,
            ty,
            ExprKind::Cast {
                expression: Box::new(expression),
            },
        )
    }

    pub fn binary(
        line_number: u32,
        ty: Type,
        operator: BinaryOperator,
        left: Expression,
        right: Expression,
    ) -> Self {
        Self::new(
            line_number,
            ty,
            ExprKind::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            },
        )
    }

    pub fn assign(line_number: u32, left: Expression, right: Expression) -> Self {
        let ty = left.ty.clone();
        Self::binary(line_number, ty, BinaryOperator::Assign, left, right)
    }

    pub fn ternary(
        line_number: u32,
        ty: Type,
        condition: Expression,
        when_true: Expression,
        when_false: Expression,
    ) -> Self {
        Self::new(
            line_number,
            ty,
            ExprKind::Ternary {
                condition: Box::new(condition),
                when_true: Box::new(when_true),
                when_false: Box::new(when_false),
            },
        )
    }

    pub fn method_invocation(line_number: u32, ty: Type, invocation: MethodInvocation) -> Self {
        Self::new(line_number, ty, ExprKind::MethodInvocation(invocation))
    }

    pub fn new_object(line_number: u32, ty: ObjectType, new: NewExpression) -> Self {
        Self::new(line_number, Type::Object(ty), ExprKind::New(new))
    }

    pub fn is_null_literal(&self) -> bool {
        matches!(self.kind, ExprKind::Null)
    }

    pub fn is_cast(&self) -> bool {
        matches!(self.kind, ExprKind::Cast { .. })
    }

    pub fn is_new(&self) -> bool {
        matches!(self.kind, ExprKind::New(_))
    }

    pub fn is_object_type_reference(&self) -> bool {
        matches!(self.kind, ExprKind::ObjectTypeReference)
    }

    /// The expression wrapped by a cast node.
    pub fn cast_operand(&self) -> Option<&Expression> {
        match &self.kind {
            ExprKind::Cast { expression } => Some(expression),
            _ => None,
        }
    }

    /// Move this expression out of its slot, leaving a `null` placeholder behind.
    ///
    /// Rewrites take the node by value and put the result back into the same slot.
    pub fn take(&mut self) -> Expression {
        std::mem::replace(self, Expression::null(UNKNOWN_LINE_NUMBER))
    }
}
