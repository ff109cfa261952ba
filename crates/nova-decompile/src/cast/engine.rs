use nova_types::Type;
use tracing::trace;

use super::context::Context;
use super::line::first_line_number;
use super::{CastPass, LOG_TARGET};
use crate::error::{CastError, Result};
use crate::syntax::{ExprKind, Expression};

enum Decision {
    Keep,
    Cast(Type),
    /// Cast a `new` expression whose own type arguments become redundant under the cast.
    EraseAndCast(Type),
}

impl CastPass<'_> {
    pub(super) fn reconcile_expression(
        &mut self,
        cx: Context<'_>,
        expected: &Type,
        expression: Expression,
        force: bool,
    ) -> Result<Expression> {
        if expression.is_null_literal() {
            // A bare `null` is legal anywhere; it only needs a cast to select an overload.
            return Ok(if force {
                self.add_cast(expected.clone(), expression)
            } else {
                expression
            });
        }

        let mut expression = match self.decide(cx, expected, &expression, force) {
            Decision::Keep => expression,
            Decision::Cast(target) => self.add_cast(target, expression),
            Decision::EraseAndCast(target) => {
                let mut expression = expression;
                expression.ty = expression.ty.raw();
                self.report.erased += 1;
                self.add_cast(target, expression)
            }
        };

        if !force && self.config.remove_redundant_casts {
            expression = self.drop_redundant_cast(cx, expected, expression);
        }

        self.walk_expression(cx, &mut expression)?;
        Ok(expression)
    }

    fn decide(
        &self,
        cx: Context<'_>,
        expected: &Type,
        expression: &Expression,
        force: bool,
    ) -> Decision {
        if expression.ty == *expected || expected.is_java_lang_object() {
            return Decision::Keep;
        }

        match (expected, &expression.ty) {
            (Type::Object(target), Type::Object(source)) => {
                if force && target.internal_name != source.internal_name {
                    return if expression.is_new() {
                        Decision::EraseAndCast(expected.clone())
                    } else {
                        Decision::Cast(expected.clone())
                    };
                }
                if self.oracle.is_assignable(cx.bounds, target, source) {
                    return Decision::Keep;
                }
                // `(List<String>) listOfIntegers` does not compile; fall back to the raw type.
                let incompatible_arguments = match (&target.type_arguments, &source.type_arguments)
                {
                    (Some(targets), Some(sources)) => {
                        !self
                            .oracle
                            .are_type_arguments_assignable(cx.bounds, targets, sources)
                    }
                    _ => false,
                };
                if incompatible_arguments {
                    Decision::Cast(Type::Object(target.raw()))
                } else {
                    Decision::Cast(expected.clone())
                }
            }
            (Type::Object(_), Type::Generic(_))
            | (Type::Generic(_), Type::Object(_) | Type::Generic(_)) => {
                Decision::Cast(expected.clone())
            }
            _ => Decision::Keep,
        }
    }

    fn drop_redundant_cast(
        &mut self,
        cx: Context<'_>,
        expected: &Type,
        expression: Expression,
    ) -> Expression {
        let Type::Object(target) = expected else {
            return expression;
        };
        let redundant = expression
            .cast_operand()
            .and_then(|operand| operand.ty.as_object())
            .is_some_and(|source| self.oracle.is_assignable(cx.bounds, target, source));
        if !redundant {
            return expression;
        }

        match expression.kind {
            ExprKind::Cast { expression: operand } => {
                self.report.removed += 1;
                trace!(
                    target: LOG_TARGET,
                    line = expression.line_number,
                    cast = %expression.ty,
                    "removed redundant cast"
                );
                *operand
            }
            kind => Expression { kind, ..expression },
        }
    }

    /// Cast `expression` to `ty`.
    ///
    /// Returns one of:
    /// - the operand of `expression`, when it is a cast whose operand already has type `ty`;
    /// - `expression` itself with its target changed to `ty`, when it is any other cast;
    /// - a new cast node wrapping `expression`, carrying the first line number found inside it.
    ///
    /// Never produces a cast directly wrapping another cast.
    pub fn add_cast(&mut self, ty: Type, expression: Expression) -> Expression {
        match expression.kind {
            ExprKind::Cast { expression: operand } if operand.ty == ty => {
                self.report.collapsed += 1;
                trace!(
                    target: LOG_TARGET,
                    line = expression.line_number,
                    cast = %expression.ty,
                    "collapsed cast onto an operand of type {ty}"
                );
                *operand
            }
            ExprKind::Cast { expression: operand } => {
                self.report.retargeted += 1;
                trace!(
                    target: LOG_TARGET,
                    line = expression.line_number,
                    from = %expression.ty,
                    to = %ty,
                    "retargeted cast"
                );
                Expression::new(
                    expression.line_number,
                    ty,
                    ExprKind::Cast {
                        expression: operand,
                    },
                )
            }
            kind => {
                let expression = Expression { kind, ..expression };
                let line_number = first_line_number(&expression);
                self.report.inserted += 1;
                trace!(target: LOG_TARGET, line = line_number, cast = %ty, "inserted cast");
                Expression::cast(line_number, ty, expression)
            }
        }
    }

    /// Fit each argument to the parameter type at the same position.
    pub(super) fn reconcile_arguments(
        &mut self,
        cx: Context<'_>,
        owner: &str,
        member: &str,
        parameter_types: &[Type],
        arguments: &mut [Expression],
        force: bool,
    ) -> Result<()> {
        if parameter_types.len() < arguments.len() {
            return Err(CastError::MissingParameterTypes {
                member: format!("{owner}.{member}"),
                arguments: arguments.len(),
                parameter_types: parameter_types.len(),
            });
        }

        // Last to first. Each rewrite only touches its own slot, so lower indices are still the
        // original arguments when their turn comes.
        for index in (0..arguments.len()).rev() {
            let argument = arguments[index].take();
            arguments[index] =
                self.reconcile_expression(cx, &parameter_types[index], argument, force)?;
        }
        Ok(())
    }

    /// Reconcile the expression in `slot` and put the result back.
    pub(super) fn reconcile_slot(
        &mut self,
        cx: Context<'_>,
        expected: &Type,
        slot: &mut Expression,
        force: bool,
    ) -> Result<()> {
        let expression = slot.take();
        *slot = self.reconcile_expression(cx, expected, expression, force)?;
        Ok(())
    }
}
