use nova_types::{ObjectType, Type};
use serde::{Deserialize, Serialize};

use super::{Expression, TypeDeclaration, VariableDeclarator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stmt", rename_all = "snake_case")]
pub enum Statement {
    Expression {
        expression: Expression,
    },
    LocalVariableDeclaration(LocalVariableDeclaration),
    /// `return;`
    Return,
    ReturnExpression {
        expression: Expression,
    },
    Throw {
        expression: Expression,
    },
    If {
        condition: Expression,
        then_statements: Vec<Statement>,
        #[serde(default)]
        else_statements: Option<Vec<Statement>>,
    },
    While {
        condition: Expression,
        statements: Vec<Statement>,
    },
    DoWhile {
        condition: Expression,
        statements: Vec<Statement>,
    },
    For {
        #[serde(default)]
        init: Vec<Statement>,
        #[serde(default)]
        condition: Option<Expression>,
        #[serde(default)]
        update: Vec<Expression>,
        statements: Vec<Statement>,
    },
    ForEach {
        ty: Type,
        name: String,
        expression: Expression,
        statements: Vec<Statement>,
    },
    Switch {
        selector: Expression,
        blocks: Vec<SwitchBlock>,
    },
    Synchronized {
        monitor: Expression,
        statements: Vec<Statement>,
    },
    Try {
        #[serde(default)]
        resources: Vec<LocalVariableDeclaration>,
        statements: Vec<Statement>,
        #[serde(default)]
        catches: Vec<CatchClause>,
        #[serde(default)]
        finally: Option<Vec<Statement>>,
    },
    Labeled {
        label: String,
        statements: Vec<Statement>,
    },
    Block {
        statements: Vec<Statement>,
    },
    /// A local or anonymous-in-statement class declaration.
    TypeDeclaration(Box<TypeDeclaration>),
    Assert {
        condition: Expression,
        #[serde(default)]
        message: Option<Expression>,
    },
    Break {
        #[serde(default)]
        label: Option<String>,
    },
    Continue {
        #[serde(default)]
        label: Option<String>,
    },
    /// Bytecode the decompiler could not turn into source.
    ByteCode {
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalVariableDeclaration {
    pub ty: Type,
    #[serde(default)]
    pub is_final: bool,
    pub declarators: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchBlock {
    pub labels: Vec<SwitchLabel>,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "label", rename_all = "snake_case")]
pub enum SwitchLabel {
    Case { expression: Expression },
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    pub types: Vec<ObjectType>,
    pub name: String,
    pub statements: Vec<Statement>,
}

impl Statement {
    pub fn expression(expression: Expression) -> Self {
        Statement::Expression { expression }
    }

    pub fn return_expression(expression: Expression) -> Self {
        Statement::ReturnExpression { expression }
    }

    pub fn throw(expression: Expression) -> Self {
        Statement::Throw { expression }
    }

    pub fn local(ty: Type, declarator: VariableDeclarator) -> Self {
        Statement::LocalVariableDeclaration(LocalVariableDeclaration {
            ty,
            is_final: false,
            declarators: vec![declarator],
        })
    }
}
