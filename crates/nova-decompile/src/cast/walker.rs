use nova_types::Type;
use tracing::debug;

use super::context::Context;
use super::{CastPass, LOG_TARGET};
use crate::error::Result;
use crate::syntax::{
    BinaryOperator, BodyDeclaration, ConstructorDeclaration, ConstructorInvocation, ExprKind,
    Expression, FieldDeclaration, FieldReference, LocalVariableDeclaration, MemberDeclaration,
    MethodDeclaration, MethodInvocation, Statement, StaticInitializerDeclaration, SwitchLabel,
    TypeDeclaration, VariableDeclarator, VariableInitializer,
};

impl CastPass<'_> {
    pub(super) fn visit_type_declaration(&mut self, declaration: &mut TypeDeclaration) -> Result<()> {
        match &mut declaration.body {
            Some(body) => self.visit_body(body),
            None => Ok(()),
        }
    }

    /// Members of a nested or anonymous class never see the enclosing method's return and
    /// exception types.
    pub(super) fn visit_body(&mut self, body: &mut BodyDeclaration) -> Result<()> {
        let BodyDeclaration {
            type_bounds,
            members,
            ..
        } = body;
        let cx = Context::root().with_bounds(type_bounds);
        for member in members {
            self.visit_member(cx, member)?;
        }
        Ok(())
    }

    fn visit_member(&mut self, cx: Context<'_>, member: &mut MemberDeclaration) -> Result<()> {
        match member {
            MemberDeclaration::Field(field) => self.visit_field(cx, field),
            MemberDeclaration::StaticInitializer(initializer) => {
                self.visit_static_initializer(cx, initializer)
            }
            MemberDeclaration::Constructor(constructor) => self.visit_constructor(cx, constructor),
            MemberDeclaration::Method(method) => self.visit_method(cx, method),
            MemberDeclaration::Type(declaration) => self.visit_type_declaration(declaration),
        }
    }

    fn visit_field(&mut self, cx: Context<'_>, field: &mut FieldDeclaration) -> Result<()> {
        if field.is_synthetic() {
            debug!(target: LOG_TARGET, "skipping synthetic field");
            return Ok(());
        }
        let FieldDeclaration {
            ty, declarators, ..
        } = field;
        let cx = cx.expecting(ty);
        for declarator in declarators {
            self.visit_declarator(cx, declarator)?;
        }
        Ok(())
    }

    fn visit_static_initializer(
        &mut self,
        cx: Context<'_>,
        initializer: &mut StaticInitializerDeclaration,
    ) -> Result<()> {
        let StaticInitializerDeclaration {
            type_bounds,
            statements,
        } = initializer;
        match statements {
            Some(statements) => self.visit_statements(cx.with_bounds(type_bounds), statements),
            None => Ok(()),
        }
    }

    fn visit_constructor(
        &mut self,
        cx: Context<'_>,
        constructor: &mut ConstructorDeclaration,
    ) -> Result<()> {
        if constructor.is_generated() {
            debug!(
                target: LOG_TARGET,
                descriptor = %constructor.descriptor,
                "skipping generated constructor"
            );
            return Ok(());
        }
        let ConstructorDeclaration {
            type_bounds,
            exception_types,
            statements: Some(statements),
            ..
        } = constructor
        else {
            return Ok(());
        };
        let cx = cx
            .with_bounds(type_bounds)
            .throwing(exception_types.as_deref());
        self.visit_statements(cx, statements)
    }

    fn visit_method(&mut self, cx: Context<'_>, method: &mut MethodDeclaration) -> Result<()> {
        if method.is_generated() {
            debug!(
                target: LOG_TARGET,
                name = %method.name,
                descriptor = %method.descriptor,
                "skipping generated method"
            );
            return Ok(());
        }
        let MethodDeclaration {
            type_bounds,
            return_type,
            exception_types,
            statements: Some(statements),
            ..
        } = method
        else {
            return Ok(());
        };
        let cx = cx
            .with_bounds(type_bounds)
            .returning(return_type)
            .throwing(exception_types.as_deref());
        self.visit_statements(cx, statements)
    }

    fn visit_local(&mut self, cx: Context<'_>, local: &mut LocalVariableDeclaration) -> Result<()> {
        let cx = cx.expecting(&local.ty);
        for declarator in &mut local.declarators {
            self.visit_declarator(cx, declarator)?;
        }
        Ok(())
    }

    /// `int[] a[] = ...` expects `int[][]` for its initializer.
    fn visit_declarator(
        &mut self,
        cx: Context<'_>,
        declarator: &mut VariableDeclarator,
    ) -> Result<()> {
        let Some(initializer) = &mut declarator.initializer else {
            return Ok(());
        };
        match cx.expected {
            Some(expected) if declarator.dimension > 0 => {
                let widened = expected.with_dimension(expected.dimension() + declarator.dimension);
                self.visit_initializer(cx.expecting(&widened), initializer)
            }
            _ => self.visit_initializer(cx, initializer),
        }
    }

    fn visit_initializer(
        &mut self,
        cx: Context<'_>,
        initializer: &mut VariableInitializer,
    ) -> Result<()> {
        match initializer {
            VariableInitializer::Array { initializers } => {
                self.visit_array_initializer(cx, initializers)
            }
            // Array elements are initialized in place; only the elements themselves get checked.
            VariableInitializer::Expression { expression }
                if matches!(expression.kind, ExprKind::NewInitializedArray { .. }) =>
            {
                self.walk_expression(cx, expression)
            }
            VariableInitializer::Expression { expression } => match cx.expected {
                Some(expected) => self.reconcile_slot(cx, expected, expression, false),
                None => self.walk_expression(cx, expression),
            },
        }
    }

    /// `{ a, b }` checks each element against the expected array type minus one dimension.
    fn visit_array_initializer(
        &mut self,
        cx: Context<'_>,
        initializers: &mut [VariableInitializer],
    ) -> Result<()> {
        match cx.expected {
            Some(expected) if expected.dimension() > 0 => {
                let element = expected.with_dimension(expected.dimension() - 1);
                self.visit_initializers(cx.expecting(&element), initializers)
            }
            _ => self.visit_initializers(cx, initializers),
        }
    }

    fn visit_initializers(
        &mut self,
        cx: Context<'_>,
        initializers: &mut [VariableInitializer],
    ) -> Result<()> {
        for initializer in initializers {
            self.visit_initializer(cx, initializer)?;
        }
        Ok(())
    }

    fn visit_statements(&mut self, cx: Context<'_>, statements: &mut [Statement]) -> Result<()> {
        for statement in statements {
            self.visit_statement(cx, statement)?;
        }
        Ok(())
    }

    fn visit_statement(&mut self, cx: Context<'_>, statement: &mut Statement) -> Result<()> {
        match statement {
            Statement::Expression { expression } => self.walk_expression(cx, expression),
            Statement::LocalVariableDeclaration(local) => self.visit_local(cx, local),
            Statement::ReturnExpression { expression } => match cx.return_type {
                Some(return_type) => self.reconcile_slot(cx, return_type, expression, false),
                None => self.walk_expression(cx, expression),
            },
            Statement::Throw { expression } => self.visit_throw(cx, expression),
            Statement::If {
                condition,
                then_statements,
                else_statements,
            } => {
                self.walk_expression(cx, condition)?;
                self.visit_statements(cx, then_statements)?;
                match else_statements {
                    Some(statements) => self.visit_statements(cx, statements),
                    None => Ok(()),
                }
            }
            Statement::While {
                condition,
                statements,
            }
            | Statement::DoWhile {
                condition,
                statements,
            } => {
                self.walk_expression(cx, condition)?;
                self.visit_statements(cx, statements)
            }
            Statement::For {
                init,
                condition,
                update,
                statements,
            } => {
                self.visit_statements(cx, init)?;
                if let Some(condition) = condition {
                    self.walk_expression(cx, condition)?;
                }
                for expression in update {
                    self.walk_expression(cx, expression)?;
                }
                self.visit_statements(cx, statements)
            }
            Statement::ForEach {
                expression,
                statements,
                ..
            } => {
                self.walk_expression(cx, expression)?;
                self.visit_statements(cx, statements)
            }
            Statement::Switch { selector, blocks } => {
                self.walk_expression(cx, selector)?;
                for block in blocks {
                    for label in &mut block.labels {
                        if let SwitchLabel::Case { expression } = label {
                            self.walk_expression(cx, expression)?;
                        }
                    }
                    self.visit_statements(cx, &mut block.statements)?;
                }
                Ok(())
            }
            Statement::Synchronized {
                monitor,
                statements,
            } => {
                self.walk_expression(cx, monitor)?;
                self.visit_statements(cx, statements)
            }
            Statement::Try {
                resources,
                statements,
                catches,
                finally,
            } => {
                for resource in resources {
                    self.visit_local(cx, resource)?;
                }
                self.visit_statements(cx, statements)?;
                for catch in catches {
                    self.visit_statements(cx, &mut catch.statements)?;
                }
                match finally {
                    Some(statements) => self.visit_statements(cx, statements),
                    None => Ok(()),
                }
            }
            Statement::Labeled { statements, .. } | Statement::Block { statements } => {
                self.visit_statements(cx, statements)
            }
            Statement::TypeDeclaration(declaration) => {
                self.visit_type_declaration(declaration)
            }
            Statement::Assert { condition, message } => {
                self.walk_expression(cx, condition)?;
                match message {
                    Some(message) => self.walk_expression(cx, message),
                    None => Ok(()),
                }
            }
            Statement::Return
            | Statement::Break { .. }
            | Statement::Continue { .. }
            | Statement::ByteCode { .. } => Ok(()),
        }
    }

    /// `throw (E) e;` when the enclosing member declares a single type-variable exception `E`.
    fn visit_throw(&mut self, cx: Context<'_>, expression: &mut Expression) -> Result<()> {
        if let Some([exception_type]) = cx.exception_types {
            if exception_type.is_generic() && expression.ty != *exception_type {
                let thrown = expression.take();
                *expression = self.add_cast(exception_type.clone(), thrown);
            }
        }
        self.walk_expression(cx, expression)
    }

    /// Reconcile everything nested inside `expression`, leaving the node itself in place.
    pub(super) fn walk_expression(
        &mut self,
        cx: Context<'_>,
        expression: &mut Expression,
    ) -> Result<()> {
        let Expression { ty, kind, .. } = expression;
        match kind {
            ExprKind::FieldReference(field) => self.visit_field_reference(cx, field),
            ExprKind::MethodInvocation(invocation) => self.visit_method_invocation(cx, invocation),
            ExprKind::ConstructorInvocation(invocation)
            | ExprKind::SuperConstructorInvocation(invocation) => {
                self.visit_constructor_invocation(cx, invocation)
            }
            ExprKind::New(new) => {
                let owner = ty.as_object().map_or("", |ty| ty.internal_name.as_str());
                self.reconcile_arguments(
                    cx,
                    owner,
                    "<init>",
                    &new.parameter_types,
                    &mut new.arguments,
                    false,
                )?;
                match &mut new.body {
                    Some(body) if self.config.anonymous_class_bodies => self.visit_body(body),
                    _ => Ok(()),
                }
            }
            ExprKind::NewArray { dimensions } => {
                for dimension in dimensions {
                    self.walk_expression(cx, dimension)?;
                }
                Ok(())
            }
            ExprKind::NewInitializedArray { initializers } => {
                self.visit_array_initializer(cx.expecting(ty), initializers)
            }
            ExprKind::Binary {
                operator,
                left,
                right,
            } => {
                self.walk_expression(cx, left)?;
                let explicitly_typed_call = matches!(
                    &right.kind,
                    ExprKind::MethodInvocation(MethodInvocation {
                        type_parameters: Some(_),
                        ..
                    })
                );
                if *operator == BinaryOperator::Assign && !explicitly_typed_call {
                    self.reconcile_slot(cx, &left.ty, right, false)
                } else {
                    self.walk_expression(cx, right)
                }
            }
            ExprKind::PreOperator { operand, .. } | ExprKind::PostOperator { operand, .. } => {
                self.walk_expression(cx, operand)
            }
            ExprKind::InstanceOf { expression, .. } | ExprKind::Cast { expression } => {
                self.walk_expression(cx, expression)
            }
            ExprKind::Ternary {
                condition,
                when_true,
                when_false,
            } => {
                self.walk_expression(cx, condition)?;
                self.reconcile_slot(cx, ty, when_true, false)?;
                self.reconcile_slot(cx, ty, when_false, false)
            }
            ExprKind::ArrayAccess { array, index } => {
                self.walk_expression(cx, array)?;
                self.walk_expression(cx, index)
            }
            // The functional interface's return type is not known here.
            ExprKind::Lambda { statements, .. } => match statements {
                Some(statements) => {
                    let object = Type::java_lang_object();
                    self.visit_statements(cx.returning(&object), statements)
                }
                None => Ok(()),
            },
            ExprKind::IntegerConstant { .. }
            | ExprKind::LongConstant { .. }
            | ExprKind::FloatConstant { .. }
            | ExprKind::DoubleConstant { .. }
            | ExprKind::BooleanConstant { .. }
            | ExprKind::CharConstant { .. }
            | ExprKind::StringConstant { .. }
            | ExprKind::Null
            | ExprKind::This
            | ExprKind::Super
            | ExprKind::LocalVariableReference { .. }
            | ExprKind::ObjectTypeReference
            | ExprKind::TypeReferenceDotClass { .. }
            | ExprKind::EnumConstantReference { .. }
            | ExprKind::MethodReference { .. }
            | ExprKind::ConstructorReference { .. } => Ok(()),
        }
    }

    fn visit_field_reference(&mut self, cx: Context<'_>, field: &mut FieldReference) -> Result<()> {
        let FieldReference {
            qualifier, owner, ..
        } = field;
        let Some(qualifier) = qualifier else {
            return Ok(());
        };
        if qualifier.is_object_type_reference() {
            return Ok(());
        }
        match self.oracle.resolve_type_by_internal_name(owner) {
            Some(declaring) => {
                let declaring = Type::Object(declaring);
                self.reconcile_slot(cx, &declaring, qualifier, false)
            }
            None => self.walk_expression(cx, qualifier),
        }
    }

    fn visit_method_invocation(
        &mut self,
        cx: Context<'_>,
        invocation: &mut MethodInvocation,
    ) -> Result<()> {
        let argument_count = invocation.arguments.len();
        let force = argument_count > 0
            && self.oracle.has_multiple_overloads(
                &invocation.owner,
                &invocation.name,
                argument_count,
            );
        self.reconcile_arguments(
            cx,
            &invocation.owner,
            &invocation.name,
            &invocation.parameter_types,
            &mut invocation.arguments,
            force,
        )?;
        self.walk_expression(cx, &mut invocation.qualifier)
    }

    fn visit_constructor_invocation(
        &mut self,
        cx: Context<'_>,
        invocation: &mut ConstructorInvocation,
    ) -> Result<()> {
        let owner = invocation.owner.internal_name.as_str();
        let argument_count = invocation.arguments.len();
        let force =
            argument_count > 0 && self.oracle.has_multiple_overloads(owner, "<init>", argument_count);
        self.reconcile_arguments(
            cx,
            owner,
            "<init>",
            &invocation.parameter_types,
            &mut invocation.arguments,
            force,
        )
    }
}
