//! Type queries the decompiler's rewrite passes ask about the program being decompiled.

mod hierarchy;
mod jdk;

use nova_types::{is_type_arguments_assignable_from, ObjectType, TypeArgument, TypeBounds};

pub use hierarchy::{ClassDef, ClassHierarchy, ClassKind};

/// Read-only view of the class universe visible to a compilation unit.
///
/// Implementations must be safe to share between passes running on different units.
pub trait TypeOracle: Send + Sync {
    /// Whether a value of type `source` may be used where `target` is required, given the bounds
    /// of the type variables in scope.
    fn is_assignable(&self, bounds: &TypeBounds, target: &ObjectType, source: &ObjectType)
        -> bool;

    /// Whether `owner` (or its supertypes) declares more than one `member` taking
    /// `argument_count` parameters. Constructors are queried as `<init>`.
    fn has_multiple_overloads(&self, owner: &str, member: &str, argument_count: usize) -> bool;

    fn resolve_type_by_internal_name(&self, internal_name: &str) -> Option<ObjectType>;

    /// Whether the `sources` type arguments fit the `targets` ones, e.g. for `List<A>` vs
    /// `List<B>`.
    fn are_type_arguments_assignable(
        &self,
        bounds: &TypeBounds,
        targets: &[TypeArgument],
        sources: &[TypeArgument],
    ) -> bool {
        is_type_arguments_assignable_from(bounds, targets, sources)
    }
}
