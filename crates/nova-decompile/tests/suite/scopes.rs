use nova_decompile::syntax::{
    BodyDeclaration, ConstructorDeclaration, ExprKind, Expression, MemberDeclaration,
    NewExpression, Statement, StaticInitializerDeclaration, VariableDeclarator,
    VariableInitializer, ACC_BRIDGE, ACC_PRIVATE, ACC_STATIC, ACC_SYNTHETIC,
};
use nova_decompile::{CastConfig, CastPass};
use nova_types::{Type, TypeBounds};

use pretty_assertions::assert_eq;

use super::support::*;

fn initializer_of(body: &BodyDeclaration, index: usize) -> &VariableInitializer {
    match &body.members[index] {
        MemberDeclaration::Field(field) => field.declarators[0]
            .initializer
            .as_ref()
            .expect("field initializer"),
        other => panic!("expected a field, found {other:?}"),
    }
}

fn initialized_expression(initializer: &VariableInitializer) -> &Expression {
    match initializer {
        VariableInitializer::Expression { expression } => expression,
        other => panic!("expected an expression initializer, found {other:?}"),
    }
}

fn list_of_t_field() -> MemberDeclaration {
    MemberDeclaration::Field(field(
        parameterized("java/util/List", &[object("java/lang/Number")]),
        VariableDeclarator::new("numbers").with_expression(local(
            3,
            parameterized("java/util/List", &[Type::generic("T")]),
            "items",
        )),
    ))
}

#[test]
fn class_bounds_apply_to_field_initializers() {
    let oracle = hierarchy();

    let mut bounded = body(BOX, vec![list_of_t_field()]);
    bounded.type_bounds = TypeBounds::new().with_bound("T", vec![object("java/lang/Number")]);
    let report = CastPass::new(&oracle).run_body(&mut bounded).unwrap();
    assert!(report.is_empty(), "{report:?}");
    assert!(!initialized_expression(initializer_of(&bounded, 0)).is_cast());

    let mut unbounded = body(BOX, vec![list_of_t_field()]);
    CastPass::new(&oracle).run_body(&mut unbounded).unwrap();
    let cast = initialized_expression(initializer_of(&unbounded, 0));
    assert_eq!(cast.ty, object("java/util/List"));
}

#[test]
fn synthetic_fields_are_skipped() {
    let oracle = hierarchy();
    let synthetic = MemberDeclaration::Field(nova_decompile::syntax::FieldDeclaration {
        access_flags: ACC_PRIVATE | ACC_SYNTHETIC,
        ..field(
            object("java/lang/String"),
            VariableDeclarator::new("this$0")
                .with_expression(local(1, Type::java_lang_object(), "outer")),
        )
    });
    let mut body = body(BOX, vec![synthetic.clone()]);

    CastPass::new(&oracle).run_body(&mut body).unwrap();
    assert_eq!(body.members, vec![synthetic]);
}

#[test]
fn extra_declarator_dimensions_widen_the_expected_type() {
    let oracle = hierarchy();
    let objects = local(2, Type::java_lang_object().with_dimension(1), "objects");
    let mut body = body(
        BOX,
        vec![MemberDeclaration::Field(field(
            object("java/lang/String"),
            VariableDeclarator::new("names")
                .with_dimension(1)
                .with_expression(objects.clone()),
        ))],
    );

    CastPass::new(&oracle).run_body(&mut body).unwrap();
    assert_eq!(
        initialized_expression(initializer_of(&body, 0)),
        &Expression::cast(2, object("java/lang/String").with_dimension(1), objects)
    );
}

#[test]
fn nested_array_initializers_expect_the_element_type() {
    let oracle = hierarchy();
    let value = local(4, Type::java_lang_object(), "value");
    let grid = Statement::local(
        object("java/lang/String").with_dimension(2),
        VariableDeclarator::new("grid").with_initializer(VariableInitializer::Array {
            initializers: vec![VariableInitializer::Array {
                initializers: vec![VariableInitializer::Expression {
                    expression: value.clone(),
                }],
            }],
        }),
    );
    let mut body = body(
        BOX,
        vec![MemberDeclaration::Method(method(
            "fill",
            Type::primitive(nova_types::PrimitiveType::Void),
            vec![grid],
        ))],
    );

    CastPass::new(&oracle).run_body(&mut body).unwrap();

    let Statement::LocalVariableDeclaration(grid) = &method_statements(&body, 0)[0] else {
        panic!("expected a local declaration");
    };
    let Some(VariableInitializer::Array { initializers }) = &grid.declarators[0].initializer
    else {
        panic!("expected an array initializer");
    };
    let VariableInitializer::Array { initializers } = &initializers[0] else {
        panic!("expected a nested array initializer");
    };
    assert_eq!(
        initialized_expression(&initializers[0]),
        &Expression::cast(4, object("java/lang/String"), value)
    );
}

#[test]
fn initialized_array_elements_expect_the_component_type() {
    let oracle = hierarchy();
    let value = local(5, Type::java_lang_object(), "value");
    let names_type = object("java/lang/String").with_dimension(1);
    let new_array = Expression::new(
        5,
        names_type.clone(),
        ExprKind::NewInitializedArray {
            initializers: vec![VariableInitializer::Expression {
                expression: value.clone(),
            }],
        },
    );
    let mut body = body(
        BOX,
        vec![MemberDeclaration::Field(field(
            names_type.clone(),
            VariableDeclarator::new("names").with_expression(new_array),
        ))],
    );

    CastPass::new(&oracle).run_body(&mut body).unwrap();

    let array = initialized_expression(initializer_of(&body, 0));
    assert_eq!(array.ty, names_type);
    let ExprKind::NewInitializedArray { initializers } = &array.kind else {
        panic!("array construction should not be wrapped");
    };
    assert_eq!(
        initialized_expression(&initializers[0]),
        &Expression::cast(5, object("java/lang/String"), value)
    );
}

#[test]
fn static_initializers_use_their_own_bounds() {
    let oracle = hierarchy();
    let assignment = |bound: bool| {
        MemberDeclaration::StaticInitializer(StaticInitializerDeclaration {
            type_bounds: if bound {
                TypeBounds::new().with_bound("U", vec![object("java/lang/Number")])
            } else {
                TypeBounds::new()
            },
            statements: Some(vec![Statement::local(
                parameterized("java/util/List", &[object("java/lang/Number")]),
                VariableDeclarator::new("numbers").with_expression(local(
                    8,
                    parameterized("java/util/List", &[Type::generic("U")]),
                    "values",
                )),
            )]),
        })
    };

    let mut bounded = body(BOX, vec![assignment(true)]);
    let report = CastPass::new(&oracle).run_body(&mut bounded).unwrap();
    assert!(report.is_empty(), "{report:?}");

    let mut unbounded = body(BOX, vec![assignment(false)]);
    let report = CastPass::new(&oracle).run_body(&mut unbounded).unwrap();
    assert_eq!(report.inserted, 1);
}

#[test]
fn generated_members_are_skipped() {
    let oracle = hierarchy();
    let bridge = MemberDeclaration::Method(nova_decompile::syntax::MethodDeclaration {
        access_flags: ACC_BRIDGE | ACC_SYNTHETIC,
        ..method(
            "get",
            object("java/lang/String"),
            vec![Statement::return_expression(local(
                1,
                Type::java_lang_object(),
                "value",
            ))],
        )
    });
    let accessor = MemberDeclaration::Constructor(ConstructorDeclaration {
        access_flags: ACC_SYNTHETIC,
        descriptor: "(Ljava/lang/Object;)V".to_string(),
        type_bounds: TypeBounds::new(),
        exception_types: None,
        statements: Some(vec![Statement::expression(super_call(
            1,
            "java/lang/RuntimeException",
            vec![Expression::null(1)],
            vec![object("java/lang/String")],
        ))]),
    });
    let mut body = body(BOX, vec![bridge.clone(), accessor.clone()]);

    let report = CastPass::new(&oracle).run_body(&mut body).unwrap();
    assert!(report.is_empty());
    assert_eq!(body.members, vec![bridge, accessor]);
}

#[test]
fn lambda_bodies_return_object() {
    let oracle = hierarchy();
    let value = || local(3, Type::java_lang_object(), "value");
    let lambda = Expression::new(
        3,
        object("java/util/function/Supplier"),
        ExprKind::Lambda {
            parameters: Vec::new(),
            statements: Some(vec![Statement::return_expression(value())]),
        },
    );
    let mut body = body(
        BOX,
        vec![MemberDeclaration::Method(method(
            "name",
            object("java/lang/String"),
            vec![
                Statement::local(
                    object("java/util/function/Supplier"),
                    VariableDeclarator::new("supplier").with_expression(lambda.clone()),
                ),
                Statement::return_expression(value()),
            ],
        ))],
    );

    let report = CastPass::new(&oracle).run_body(&mut body).unwrap();

    // Only the method's own `return value;` is cast.
    assert_eq!(report.inserted, 1);
    let statements = method_statements(&body, 0);
    let Statement::LocalVariableDeclaration(supplier) = &statements[0] else {
        panic!("expected a local declaration");
    };
    assert_eq!(
        supplier.declarators[0].initializer,
        Some(VariableInitializer::Expression { expression: lambda })
    );
    assert!(returned(&statements[1]).is_cast());
}

fn anonymous_subclass() -> MemberDeclaration {
    let mut anonymous = BodyDeclaration::new("com/example/Box$1");
    anonymous.members.push(MemberDeclaration::Method(method(
        "toString",
        object("java/lang/String"),
        vec![Statement::return_expression(local(
            6,
            Type::java_lang_object(),
            "value",
        ))],
    )));
    let new = Expression::new(
        6,
        object("java/lang/Object"),
        ExprKind::New(NewExpression {
            descriptor: "()V".to_string(),
            arguments: Vec::new(),
            parameter_types: Vec::new(),
            body: Some(Box::new(anonymous)),
        }),
    );
    MemberDeclaration::Field(static_field(new))
}

fn static_field(initializer: Expression) -> nova_decompile::syntax::FieldDeclaration {
    nova_decompile::syntax::FieldDeclaration {
        access_flags: ACC_PRIVATE | ACC_STATIC,
        ..field(
            Type::java_lang_object(),
            VariableDeclarator::new("anonymous").with_expression(initializer),
        )
    }
}

#[test]
fn anonymous_class_bodies_are_walked_unless_disabled() {
    let oracle = hierarchy();

    let mut walked = body(BOX, vec![anonymous_subclass()]);
    let report = CastPass::new(&oracle).run_body(&mut walked).unwrap();
    assert_eq!(report.inserted, 1);

    let config = CastConfig {
        anonymous_class_bodies: false,
        ..CastConfig::default()
    };
    let mut skipped = body(BOX, vec![anonymous_subclass()]);
    let report = CastPass::new(&oracle)
        .with_config(config)
        .run_body(&mut skipped)
        .unwrap();
    assert!(report.is_empty());
    assert_eq!(skipped.members, vec![anonymous_subclass()]);
}
