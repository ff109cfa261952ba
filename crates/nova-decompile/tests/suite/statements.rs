use nova_decompile::syntax::{
    BinaryOperator, BodyDeclaration, CatchClause, ConstructorDeclaration, ExprKind, Expression,
    FieldReference, MemberDeclaration, Statement, StaticInitializerDeclaration, SwitchBlock,
    SwitchLabel, TypeDeclaration, TypeKind,
};
use nova_decompile::{CastConfig, CastPass};
use nova_types::{ObjectType, PrimitiveType, Type};

use pretty_assertions::assert_eq;

use super::support::*;

fn void() -> Type {
    Type::primitive(PrimitiveType::Void)
}

fn exception(line: u32) -> Expression {
    local(line, object("java/lang/Exception"), "e")
}

fn thrown(statement: &Statement) -> &Expression {
    match statement {
        Statement::Throw { expression } => expression,
        other => panic!("expected a throw statement, found {other:?}"),
    }
}

fn rethrowing_method(exception_types: Vec<Type>, thrown: Expression) -> BodyDeclaration {
    let mut rethrow = method("rethrow", void(), vec![Statement::throw(thrown)]);
    rethrow.exception_types = Some(exception_types);
    body(BOX, vec![MemberDeclaration::Method(rethrow)])
}

fn run(body: &mut BodyDeclaration) -> nova_decompile::CastReport {
    let oracle = hierarchy();
    CastPass::new(&oracle).run_body(body).unwrap()
}

#[test]
fn rethrow_is_cast_to_a_single_type_variable_exception() {
    let mut body = rethrowing_method(vec![Type::generic("E")], exception(9));
    run(&mut body);

    assert_eq!(
        thrown(&method_statements(&body, 0)[0]),
        &Expression::cast(9, Type::generic("E"), exception(9))
    );
}

#[test]
fn constructors_apply_the_rethrow_rule_too() {
    let constructor = ConstructorDeclaration {
        access_flags: 0,
        descriptor: "()V".to_string(),
        type_bounds: Default::default(),
        exception_types: Some(vec![Type::generic("E")]),
        statements: Some(vec![Statement::throw(exception(4))]),
    };
    let mut body = body(BOX, vec![MemberDeclaration::Constructor(constructor)]);
    run(&mut body);

    let MemberDeclaration::Constructor(constructor) = &body.members[0] else {
        panic!("constructor expected");
    };
    let statements = constructor.statements.as_deref().unwrap();
    assert_eq!(
        thrown(&statements[0]),
        &Expression::cast(4, Type::generic("E"), exception(4))
    );
}

#[test]
fn rethrow_is_left_alone_otherwise() {
    let cases = [
        (
            vec![Type::generic("E"), object("java/lang/Exception")],
            exception(9),
        ),
        (vec![object("java/lang/RuntimeException")], exception(9)),
        (vec![Type::generic("E")], local(9, Type::generic("E"), "e")),
        (Vec::new(), exception(9)),
    ];

    for (exception_types, expression) in cases {
        let mut body = rethrowing_method(exception_types.clone(), expression.clone());
        let report = run(&mut body);
        assert!(report.is_empty(), "throws {exception_types:?}");
        assert_eq!(thrown(&method_statements(&body, 0)[0]), &expression);
    }
}

fn value_of(line: u32, qualifier: Expression, owner: &str) -> Expression {
    Expression::new(
        line,
        Type::generic("T"),
        ExprKind::FieldReference(FieldReference {
            qualifier: Some(Box::new(qualifier)),
            owner: owner.to_string(),
            name: "value".to_string(),
            descriptor: "Ljava/lang/Object;".to_string(),
        }),
    )
}

fn qualifier_after_pass(qualifier: Expression, owner: &str) -> Expression {
    let read = value_of(3, qualifier, owner);
    let mut body = body(
        BOX,
        vec![MemberDeclaration::Method(method(
            "peek",
            Type::java_lang_object(),
            vec![Statement::return_expression(read)],
        ))],
    );
    run(&mut body);

    match &returned(&method_statements(&body, 0)[0]).kind {
        ExprKind::FieldReference(FieldReference {
            qualifier: Some(qualifier),
            ..
        }) => (**qualifier).clone(),
        other => panic!("expected a field read, found {other:?}"),
    }
}

#[test]
fn field_qualifier_is_cast_to_the_declaring_class() {
    let holder = local(3, Type::java_lang_object(), "holder");
    assert_eq!(
        qualifier_after_pass(holder.clone(), BOX),
        Expression::cast(3, object(BOX), holder)
    );

    let typed = local(
        3,
        parameterized(BOX, &[object("java/lang/String")]),
        "holder",
    );
    assert_eq!(qualifier_after_pass(typed.clone(), BOX), typed);
}

#[test]
fn static_and_unresolved_field_qualifiers_are_left_alone() {
    let class = Expression::type_reference(3, ObjectType::new(BOX));
    assert_eq!(qualifier_after_pass(class.clone(), BOX), class);

    let holder = local(3, Type::java_lang_object(), "holder");
    assert_eq!(
        qualifier_after_pass(holder.clone(), "com/example/Missing"),
        holder
    );
}

#[test]
fn plain_assignment_fits_the_right_operand_to_the_left() {
    let text = || local(5, object("java/lang/String"), "text");
    let value = || local(5, Type::java_lang_object(), "value");

    let mut body = body(
        BOX,
        vec![MemberDeclaration::Method(method(
            "update",
            void(),
            vec![
                Statement::expression(Expression::assign(5, text(), value())),
                Statement::expression(Expression::binary(
                    6,
                    object("java/lang/String"),
                    BinaryOperator::AddAssign,
                    text(),
                    value(),
                )),
            ],
        ))],
    );
    let report = run(&mut body);

    let statements = method_statements(&body, 0);
    assert_eq!(
        expression_of(&statements[0]),
        &Expression::assign(
            5,
            text(),
            Expression::cast(5, object("java/lang/String"), value())
        )
    );
    assert_eq!(report.inserted, 1);
}

/// One `return` in every kind of nested block.
fn nested_returns(returned: impl Fn(u32) -> Expression) -> Vec<Statement> {
    let flag = || local(1, Type::primitive(PrimitiveType::Boolean), "flag");
    let ret = |line| Statement::return_expression(returned(line));
    vec![
        Statement::If {
            condition: flag(),
            then_statements: vec![ret(2)],
            else_statements: Some(vec![Statement::While {
                condition: flag(),
                statements: vec![ret(3)],
            }]),
        },
        Statement::Try {
            resources: Vec::new(),
            statements: vec![ret(4)],
            catches: vec![CatchClause {
                types: vec![ObjectType::new("java/lang/RuntimeException")],
                name: "e".to_string(),
                statements: vec![ret(5)],
            }],
            finally: None,
        },
        Statement::Switch {
            selector: Expression::int(6, 0),
            blocks: vec![SwitchBlock {
                labels: vec![SwitchLabel::Case {
                    expression: Expression::int(6, 1),
                }],
                statements: vec![ret(7)],
            }],
        },
        Statement::Synchronized {
            monitor: Expression::this(8, object(BOX)),
            statements: vec![ret(9)],
        },
    ]
}

#[test]
fn returns_in_nested_blocks_are_fitted_to_the_return_type() {
    let item = |line| local(line, Type::java_lang_object(), "item");
    let mut body = body(
        BOX,
        vec![MemberDeclaration::Method(method(
            "get",
            Type::generic("T"),
            nested_returns(item),
        ))],
    );
    let report = run(&mut body);

    assert_eq!(report.inserted, 6);
    assert_eq!(
        method_statements(&body, 0),
        nested_returns(|line| Expression::cast(line, Type::generic("T"), item(line))).as_slice()
    );
}

#[test]
fn returns_outside_a_method_are_only_walked() {
    let item = || local(2, Type::java_lang_object(), "item");
    let initializer = MemberDeclaration::StaticInitializer(StaticInitializerDeclaration {
        type_bounds: Default::default(),
        statements: Some(vec![Statement::return_expression(item())]),
    });

    // A local class declared inside `get` does not see `get`'s return type.
    let local_class = Statement::TypeDeclaration(Box::new(TypeDeclaration {
        kind: TypeKind::Class,
        access_flags: 0,
        internal_name: "com/example/Box$1Local".to_string(),
        body: Some(body("com/example/Box$1Local", vec![initializer.clone()])),
    }));
    let mut body = body(
        BOX,
        vec![
            initializer,
            MemberDeclaration::Method(method("get", Type::generic("T"), vec![local_class])),
        ],
    );
    let original = body.clone();

    let report = run(&mut body);
    assert!(report.is_empty(), "{report:?}");
    assert_eq!(body, original);
}

#[test]
fn redundant_casts_survive_when_removal_is_disabled() {
    let text = local(2, object("java/lang/String"), "text");
    let redundant = Expression::cast(2, object("java/lang/String"), text.clone());
    let class = || {
        body(
            BOX,
            vec![MemberDeclaration::Method(method(
                "describe",
                object("java/lang/CharSequence"),
                vec![Statement::return_expression(redundant.clone())],
            ))],
        )
    };
    let oracle = hierarchy();

    let mut cleaned = class();
    let report = CastPass::new(&oracle).run_body(&mut cleaned).unwrap();
    assert_eq!(report.removed, 1);
    assert_eq!(returned(&method_statements(&cleaned, 0)[0]), &text);

    let config = CastConfig {
        remove_redundant_casts: false,
        ..CastConfig::default()
    };
    let mut kept = class();
    let report = CastPass::new(&oracle)
        .with_config(config)
        .run_body(&mut kept)
        .unwrap();
    assert!(report.is_empty());
    assert_eq!(returned(&method_statements(&kept, 0)[0]), &redundant);
}
