use nova_types::{ObjectType, Type, TypeArgument, TypeBounds};
use serde_json::json;

use pretty_assertions::assert_eq;

#[test]
fn types_use_a_kind_tag() {
    let list = Type::Object(
        ObjectType::new("java/util/List")
            .with_type_arguments(vec![TypeArgument::Type(Type::generic("T"))]),
    );

    assert_eq!(
        serde_json::to_value(&list).unwrap(),
        json!({
            "kind": "object",
            "internal_name": "java/util/List",
            "type_arguments": [
                { "bound": "type", "type": { "kind": "generic", "name": "T" } }
            ]
        })
    );
}

#[test]
fn omitted_fields_default_to_raw_scalar_types() {
    let ty: Type = serde_json::from_value(json!({
        "kind": "object",
        "internal_name": "java/lang/String"
    }))
    .unwrap();
    assert_eq!(ty, Type::Object(ObjectType::string()));

    let ty: Type = serde_json::from_value(json!({
        "kind": "primitive",
        "primitive": "int",
        "dimension": 2
    }))
    .unwrap();
    assert_eq!(ty.dimension(), 2);
    assert!(ty.is_primitive());
}

#[test]
fn bounds_serialize_as_a_plain_map() {
    let bounds = TypeBounds::new().with_bound("T", vec![Type::object("java/lang/Number")]);
    let value = serde_json::to_value(&bounds).unwrap();
    assert_eq!(
        value,
        json!({ "T": [{ "kind": "object", "internal_name": "java/lang/Number" }] })
    );

    let back: TypeBounds = serde_json::from_value(value).unwrap();
    assert_eq!(back, bounds);
    assert_eq!(back.get("T").map(<[Type]>::len), Some(1));
    assert!(back.get("U").is_none());
}
