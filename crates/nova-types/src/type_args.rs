use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GenericType, ObjectType, Type, TypeBounds};

/// One argument of a parameterized type: `String`, `?`, `? extends T` or `? super T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "bound", content = "type", rename_all = "snake_case")]
pub enum TypeArgument {
    Type(Type),
    Wildcard,
    Extends(Type),
    Super(Type),
}

impl TypeArgument {
    /// Whether a value parameterized with `other` may stand where `self` is required, i.e. the
    /// containment test used when comparing `List<A>` against `List<B>`.
    ///
    /// Generic variables are resolved through `bounds` only far enough to compare class names;
    /// an unknown variable never matches anything but itself.
    pub fn is_assignable_from(&self, bounds: &TypeBounds, other: &TypeArgument) -> bool {
        match self {
            TypeArgument::Wildcard => true,
            TypeArgument::Extends(upper) => match other {
                TypeArgument::Extends(ty) | TypeArgument::Type(ty) => accepts(bounds, upper, ty),
                TypeArgument::Wildcard | TypeArgument::Super(_) => false,
            },
            TypeArgument::Super(lower) => match other {
                TypeArgument::Super(ty) | TypeArgument::Type(ty) => accepts(bounds, ty, lower),
                TypeArgument::Wildcard | TypeArgument::Extends(_) => false,
            },
            TypeArgument::Type(ty) => match other {
                TypeArgument::Type(other) => accepts(bounds, ty, other),
                _ => false,
            },
        }
    }
}

/// Pairwise [`TypeArgument::is_assignable_from`] over two argument lists.
///
/// An empty list on either side is the diamond form and accepts anything; otherwise the lists
/// must have the same length.
pub fn is_type_arguments_assignable_from(
    bounds: &TypeBounds,
    targets: &[TypeArgument],
    sources: &[TypeArgument],
) -> bool {
    if targets.is_empty() || sources.is_empty() {
        return true;
    }
    targets.len() == sources.len()
        && targets
            .iter()
            .zip(sources)
            .all(|(target, source)| target.is_assignable_from(bounds, source))
}

fn accepts(bounds: &TypeBounds, target: &Type, source: &Type) -> bool {
    match target {
        Type::Primitive { .. } => target == source,
        Type::Object(target) => object_accepts(bounds, target, source),
        Type::Generic(target) => generic_accepts(bounds, target, source),
    }
}

fn object_accepts(bounds: &TypeBounds, target: &ObjectType, source: &Type) -> bool {
    match source {
        Type::Object(source) => {
            if target.dimension != source.dimension || target.internal_name != source.internal_name
            {
                return false;
            }
            match (&target.type_arguments, &source.type_arguments) {
                (None, None) => true,
                (None, Some(_)) | (Some(_), None) => false,
                (Some(targets), Some(sources)) => {
                    is_type_arguments_assignable_from(bounds, targets, sources)
                }
            }
        }
        Type::Generic(source) => bound_names(bounds, source)
            .any(|(name, dimension)| name == target.internal_name && dimension == target.dimension),
        Type::Primitive { .. } => false,
    }
}

fn generic_accepts(bounds: &TypeBounds, target: &GenericType, source: &Type) -> bool {
    match source {
        Type::Generic(source) => source == target,
        Type::Object(source) => bound_names(bounds, target).any(|(name, dimension)| {
            name == source.internal_name && dimension == source.dimension
        }),
        Type::Primitive { .. } => false,
    }
}

/// Internal names (and effective dimensions) of the object bounds declared for `var`.
fn bound_names<'a>(
    bounds: &'a TypeBounds,
    var: &'a GenericType,
) -> impl Iterator<Item = (&'a str, u32)> + 'a {
    bounds
        .get(&var.name)
        .unwrap_or_default()
        .iter()
        .filter_map(Type::as_object)
        .map(move |bound| (bound.internal_name.as_str(), bound.dimension + var.dimension))
}

impl fmt::Display for TypeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArgument::Type(ty) => fmt::Display::fmt(ty, f),
            TypeArgument::Wildcard => f.write_str("?"),
            TypeArgument::Extends(ty) => write!(f, "? extends {ty}"),
            TypeArgument::Super(ty) => write!(f, "? super {ty}"),
        }
    }
}

impl From<Type> for TypeArgument {
    fn from(ty: Type) -> Self {
        TypeArgument::Type(ty)
    }
}
