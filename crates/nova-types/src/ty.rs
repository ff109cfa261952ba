use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TypeArgument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    /// The single-character JVM descriptor for this primitive (`I` for `int`).
    pub fn descriptor(self) -> char {
        match self {
            PrimitiveType::Boolean => 'Z',
            PrimitiveType::Byte => 'B',
            PrimitiveType::Char => 'C',
            PrimitiveType::Short => 'S',
            PrimitiveType::Int => 'I',
            PrimitiveType::Long => 'J',
            PrimitiveType::Float => 'F',
            PrimitiveType::Double => 'D',
            PrimitiveType::Void => 'V',
        }
    }

    pub fn from_descriptor(ch: char) -> Option<Self> {
        Some(match ch {
            'Z' => PrimitiveType::Boolean,
            'B' => PrimitiveType::Byte,
            'C' => PrimitiveType::Char,
            'S' => PrimitiveType::Short,
            'I' => PrimitiveType::Int,
            'J' => PrimitiveType::Long,
            'F' => PrimitiveType::Float,
            'D' => PrimitiveType::Double,
            'V' => PrimitiveType::Void,
            _ => return None,
        })
    }

    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }
}

/// A class or interface type, possibly parameterized, possibly an array of it.
///
/// `type_arguments == None` is the raw (or non-generic) form. `Some(vec![])` is the diamond form
/// `new ArrayList<>()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectType {
    pub internal_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_arguments: Option<Vec<TypeArgument>>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub dimension: u32,
}

impl ObjectType {
    pub const OBJECT: &'static str = "java/lang/Object";
    pub const STRING: &'static str = "java/lang/String";
    pub const CLASS: &'static str = "java/lang/Class";

    pub fn new(internal_name: impl Into<String>) -> Self {
        Self {
            internal_name: internal_name.into(),
            type_arguments: None,
            dimension: 0,
        }
    }

    pub fn object() -> Self {
        Self::new(Self::OBJECT)
    }

    pub fn string() -> Self {
        Self::new(Self::STRING)
    }

    pub fn class(argument: Option<TypeArgument>) -> Self {
        let ty = Self::new(Self::CLASS);
        match argument {
            Some(arg) => ty.with_type_arguments(vec![arg]),
            None => ty,
        }
    }

    #[must_use]
    pub fn with_type_arguments(mut self, type_arguments: Vec<TypeArgument>) -> Self {
        self.type_arguments = Some(type_arguments);
        self
    }

    #[must_use]
    pub fn with_dimension(&self, dimension: u32) -> Self {
        Self {
            dimension,
            ..self.clone()
        }
    }

    /// The erased form of this type: same class, same dimension, no type arguments.
    #[must_use]
    pub fn raw(&self) -> Self {
        Self {
            internal_name: self.internal_name.clone(),
            type_arguments: None,
            dimension: self.dimension,
        }
    }

    pub fn is_raw(&self) -> bool {
        self.type_arguments.is_none()
    }

    /// `java.lang.Object` itself: no dimension, no type arguments.
    pub fn is_java_lang_object(&self) -> bool {
        self.dimension == 0 && self.type_arguments.is_none() && self.internal_name == Self::OBJECT
    }

    /// Binary name in source form, e.g. `java.util.Map.Entry` for `java/util/Map$Entry`.
    pub fn qualified_name(&self) -> String {
        self.internal_name.replace(['/', '$'], ".")
    }

    pub fn simple_name(&self) -> &str {
        self.internal_name
            .rsplit(['/', '$'])
            .next()
            .unwrap_or(&self.internal_name)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())?;
        if let Some(args) = &self.type_arguments {
            f.write_str("<")?;
            for (idx, arg) in args.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        write_dimension(f, self.dimension)
    }
}

/// A type variable such as `T` in `class Box<T>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericType {
    pub name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub dimension: u32,
}

impl GenericType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimension: 0,
        }
    }

    #[must_use]
    pub fn with_dimension(&self, dimension: u32) -> Self {
        Self {
            name: self.name.clone(),
            dimension,
        }
    }
}

impl fmt::Display for GenericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        write_dimension(f, self.dimension)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    Primitive {
        primitive: PrimitiveType,
        #[serde(default, skip_serializing_if = "is_zero")]
        dimension: u32,
    },
    Object(ObjectType),
    Generic(GenericType),
}

impl Type {
    pub fn primitive(primitive: PrimitiveType) -> Self {
        Type::Primitive {
            primitive,
            dimension: 0,
        }
    }

    pub fn object(internal_name: impl Into<String>) -> Self {
        Type::Object(ObjectType::new(internal_name))
    }

    pub fn generic(name: impl Into<String>) -> Self {
        Type::Generic(GenericType::new(name))
    }

    pub fn java_lang_object() -> Self {
        Type::Object(ObjectType::object())
    }

    pub fn dimension(&self) -> u32 {
        match self {
            Type::Primitive { dimension, .. } => *dimension,
            Type::Object(ty) => ty.dimension,
            Type::Generic(ty) => ty.dimension,
        }
    }

    /// Derive the same base type with a different array dimension.
    #[must_use]
    pub fn with_dimension(&self, dimension: u32) -> Self {
        match self {
            Type::Primitive { primitive, .. } => Type::Primitive {
                primitive: *primitive,
                dimension,
            },
            Type::Object(ty) => Type::Object(ty.with_dimension(dimension)),
            Type::Generic(ty) => Type::Generic(ty.with_dimension(dimension)),
        }
    }

    /// Erase type arguments from an object type; other kinds are returned unchanged.
    #[must_use]
    pub fn raw(&self) -> Self {
        match self {
            Type::Object(ty) => Type::Object(ty.raw()),
            other => other.clone(),
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive { .. })
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Type::Object(_))
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, Type::Generic(_))
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Type::Object(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_generic(&self) -> Option<&GenericType> {
        match self {
            Type::Generic(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn is_java_lang_object(&self) -> bool {
        self.as_object().is_some_and(ObjectType::is_java_lang_object)
    }
}

impl From<ObjectType> for Type {
    fn from(ty: ObjectType) -> Self {
        Type::Object(ty)
    }
}

impl From<GenericType> for Type {
    fn from(ty: GenericType) -> Self {
        Type::Generic(ty)
    }
}

impl From<PrimitiveType> for Type {
    fn from(primitive: PrimitiveType) -> Self {
        Type::primitive(primitive)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive {
                primitive,
                dimension,
            } => {
                f.write_str(primitive.keyword())?;
                write_dimension(f, *dimension)
            }
            Type::Object(ty) => fmt::Display::fmt(ty, f),
            Type::Generic(ty) => fmt::Display::fmt(ty, f),
        }
    }
}

fn write_dimension(f: &mut fmt::Formatter<'_>, dimension: u32) -> fmt::Result {
    for _ in 0..dimension {
        f.write_str("[]")?;
    }
    Ok(())
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}
