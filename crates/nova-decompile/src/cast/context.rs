use nova_types::{Type, TypeBounds};

static EMPTY_BOUNDS: TypeBounds = TypeBounds::new();

/// The scope a node is reconciled in.
///
/// A context is never mutated: entering a declaration, lambda or initializer derives a new value
/// and the outer one is still in hand when the walk returns.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context<'a> {
    /// Bounds of the type variables visible in the innermost declaration.
    pub bounds: &'a TypeBounds,
    /// Declared return type of the enclosing method, `Object` inside a lambda body.
    pub return_type: Option<&'a Type>,
    /// `throws` clause of the enclosing method or constructor.
    pub exception_types: Option<&'a [Type]>,
    /// Declared type of the field or local variable whose initializer is being walked.
    pub expected: Option<&'a Type>,
}

impl<'a> Context<'a> {
    pub fn root() -> Self {
        Self {
            bounds: &EMPTY_BOUNDS,
            return_type: None,
            exception_types: None,
            expected: None,
        }
    }

    pub fn with_bounds(self, bounds: &'a TypeBounds) -> Self {
        Self { bounds, ..self }
    }

    pub fn returning(self, return_type: &'a Type) -> Self {
        Self {
            return_type: Some(return_type),
            ..self
        }
    }

    pub fn throwing(self, exception_types: Option<&'a [Type]>) -> Self {
        Self {
            exception_types,
            ..self
        }
    }

    pub fn expecting(self, expected: &'a Type) -> Self {
        Self {
            expected: Some(expected),
            ..self
        }
    }
}
