use crate::syntax::{
    ExprKind, Expression, FieldReference, MethodInvocation, VariableInitializer,
    UNKNOWN_LINE_NUMBER,
};

/// First known line number of `expr` in source order, or [`UNKNOWN_LINE_NUMBER`].
///
/// For `a.b(c)` and `a + b` the leading operand is written before the node itself, so it is
/// searched before the node's own line.
pub(crate) fn first_line_number(expr: &Expression) -> u32 {
    search(expr).unwrap_or(UNKNOWN_LINE_NUMBER)
}

fn search(expr: &Expression) -> Option<u32> {
    let operands = operands(expr);
    let (leading, rest) = match operands.split_first() {
        Some((first, rest)) if starts_with_operand(&expr.kind) => (Some(*first), rest),
        _ => (None, operands.as_slice()),
    };

    leading
        .and_then(search)
        .or_else(|| known(expr.line_number))
        .or_else(|| rest.iter().find_map(|operand| search(operand)))
}

fn known(line_number: u32) -> Option<u32> {
    (line_number != UNKNOWN_LINE_NUMBER).then_some(line_number)
}

fn starts_with_operand(kind: &ExprKind) -> bool {
    match kind {
        ExprKind::FieldReference(FieldReference { qualifier, .. }) => qualifier.is_some(),
        ExprKind::MethodInvocation(_)
        | ExprKind::Binary { .. }
        | ExprKind::PostOperator { .. }
        | ExprKind::InstanceOf { .. }
        | ExprKind::Ternary { .. }
        | ExprKind::ArrayAccess { .. }
        | ExprKind::MethodReference { .. } => true,
        _ => false,
    }
}

/// Direct sub-expressions in the order they are written.
fn operands(expr: &Expression) -> Vec<&Expression> {
    match &expr.kind {
        ExprKind::FieldReference(FieldReference { qualifier, .. }) => {
            qualifier.iter().map(|q| &**q).collect()
        }
        ExprKind::MethodInvocation(MethodInvocation {
            qualifier,
            arguments,
            ..
        }) => std::iter::once(&**qualifier).chain(arguments).collect(),
        ExprKind::ConstructorInvocation(invocation)
        | ExprKind::SuperConstructorInvocation(invocation) => {
            invocation.arguments.iter().collect()
        }
        ExprKind::New(new) => new.arguments.iter().collect(),
        ExprKind::NewArray { dimensions } => dimensions.iter().collect(),
        ExprKind::NewInitializedArray { initializers } => {
            let mut out = Vec::new();
            collect_initializers(initializers, &mut out);
            out
        }
        ExprKind::Binary { left, right, .. } => vec![&**left, &**right],
        ExprKind::PreOperator { operand, .. } | ExprKind::PostOperator { operand, .. } => {
            vec![&**operand]
        }
        ExprKind::InstanceOf { expression, .. } | ExprKind::Cast { expression } => {
            vec![&**expression]
        }
        ExprKind::Ternary {
            condition,
            when_true,
            when_false,
        } => vec![&**condition, &**when_true, &**when_false],
        ExprKind::ArrayAccess { array, index } => vec![&**array, &**index],
        ExprKind::MethodReference { qualifier, .. } => vec![&**qualifier],
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
        | ExprKind::Lambda { .. }
        | ExprKind::ConstructorReference { .. } => Vec::new(),
    }
}

fn collect_initializers<'a>(initializers: &'a [VariableInitializer], out: &mut Vec<&'a Expression>) {
    for initializer in initializers {
        match initializer {
            VariableInitializer::Expression { expression } => out.push(expression),
            VariableInitializer::Array { initializers } => collect_initializers(initializers, out),
        }
    }
}
