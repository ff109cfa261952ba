//! Semantic type model for Nova's bytecode decompiler.
//!
//! Types here are immutable values produced by upstream type inference. Deriving a new array
//! dimension or erasing type arguments always creates a new value; nothing in this crate mutates a
//! type in place.

#![forbid(unsafe_code)]

mod bounds;
mod descriptor;
mod error;
mod ty;
mod type_args;

pub use crate::bounds::TypeBounds;
pub use crate::descriptor::{parse_field_descriptor, parse_method_descriptor, MethodDescriptor};
pub use crate::error::{DescriptorError, Result};
pub use crate::ty::{GenericType, ObjectType, PrimitiveType, Type};
pub use crate::type_args::{is_type_arguments_assignable_from, TypeArgument};
