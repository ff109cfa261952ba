//! Cast reconciliation.
//!
//! Erasure and overload resolution lose information that the regenerated source needs in order
//! to compile the same way the original did: a value read back through a type variable needs a
//! downcast, `null` passed to an overloaded method needs a cast to pick the overload, and so on.
//! [`CastPass`] walks a typed tree and inserts, retargets or removes cast nodes so every
//! expression fits the type its position requires.
//!
//! The pass never infers types. It trusts the static type recorded on each node and asks a
//! [`TypeOracle`] about assignability and overloads.

mod context;
mod engine;
mod line;
mod walker;

use nova_types::{Type, TypeBounds};
use serde::Serialize;

use crate::config::CastConfig;
use crate::error::Result;
use crate::oracle::TypeOracle;
use crate::syntax::{BodyDeclaration, CompilationUnit, Expression};

use self::context::Context;

/// `tracing` target of every event the pass emits.
pub const LOG_TARGET: &str = "nova.decompile.cast";

/// What a run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CastReport {
    /// New cast nodes wrapped around an expression.
    pub inserted: usize,
    /// Existing casts whose target type was changed in place.
    pub retargeted: usize,
    /// Outer casts discarded because the wrapped expression already had the requested type.
    pub collapsed: usize,
    /// Casts unwrapped because the operand was already assignable.
    pub removed: usize,
    /// `new` expressions whose type arguments were erased under a disambiguating cast.
    pub erased: usize,
}

impl CastReport {
    pub fn is_empty(&self) -> bool {
        *self == CastReport::default()
    }
}

/// A cast reconciliation walker.
///
/// A pass holds mutable bookkeeping and must not be shared between threads; create one per unit
/// of work. The oracle is only read and may be shared freely.
pub struct CastPass<'o> {
    oracle: &'o dyn TypeOracle,
    config: CastConfig,
    report: CastReport,
}

impl<'o> CastPass<'o> {
    pub fn new(oracle: &'o dyn TypeOracle) -> Self {
        Self {
            oracle,
            config: CastConfig::default(),
            report: CastReport::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: CastConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CastConfig {
        &self.config
    }

    /// Changes made by [`CastPass::reconcile`] and [`CastPass::add_cast`] since the last run.
    pub fn report(&self) -> CastReport {
        self.report
    }

    /// Reconcile every type declared in `unit`.
    ///
    /// Stops at the first inconsistency in the tree; the unit is then left partially rewritten
    /// and should be discarded.
    pub fn run(&mut self, unit: &mut CompilationUnit) -> Result<CastReport> {
        self.report = CastReport::default();
        for declaration in &mut unit.type_declarations {
            self.visit_type_declaration(declaration)?;
        }
        Ok(self.finish())
    }

    /// Reconcile the members of a single class body.
    pub fn run_body(&mut self, body: &mut BodyDeclaration) -> Result<CastReport> {
        self.report = CastReport::default();
        self.visit_body(body)?;
        Ok(self.finish())
    }

    /// Fit `expression` to `expected`, then reconcile everything nested inside it.
    ///
    /// `force` requests a cast whenever the class names differ, which is how call sites with
    /// ambiguous overloads pin the overload the original code called.
    pub fn reconcile(
        &mut self,
        bounds: &TypeBounds,
        expected: &Type,
        expression: Expression,
        force: bool,
    ) -> Result<Expression> {
        let cx = Context::root().with_bounds(bounds);
        self.reconcile_expression(cx, expected, expression, force)
    }

    fn finish(&mut self) -> CastReport {
        let report = std::mem::take(&mut self.report);
        tracing::debug!(
            target: LOG_TARGET,
            inserted = report.inserted,
            retargeted = report.retargeted,
            collapsed = report.collapsed,
            removed = report.removed,
            erased = report.erased,
            "cast reconciliation finished"
        );
        report
    }
}

/// Run the cast pass over `unit` with the default configuration.
pub fn add_cast_expressions(
    unit: &mut CompilationUnit,
    oracle: &dyn TypeOracle,
) -> Result<CastReport> {
    CastPass::new(oracle).run(unit)
}
