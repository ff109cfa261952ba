use nova_types::{
    parse_field_descriptor, GenericType, ObjectType, PrimitiveType, Type, TypeArgument,
};

use pretty_assertions::assert_eq;

#[test]
fn object_types_render_as_source_text() {
    let map = ObjectType::new("java/util/Map").with_type_arguments(vec![
        TypeArgument::Type(Type::object("java/lang/String")),
        TypeArgument::Extends(Type::object("java/lang/Number")),
    ]);
    assert_eq!(
        map.to_string(),
        "java.util.Map<java.lang.String, ? extends java.lang.Number>"
    );

    let entries = ObjectType::new("java/util/Map$Entry").with_dimension(2);
    assert_eq!(entries.to_string(), "java.util.Map.Entry[][]");
    assert_eq!(entries.simple_name(), "Entry");
}

#[test]
fn generic_and_primitive_types_render_as_source_text() {
    assert_eq!(GenericType::new("T").with_dimension(1).to_string(), "T[]");
    assert_eq!(
        Type::primitive(PrimitiveType::Boolean).with_dimension(1).to_string(),
        "boolean[]"
    );
    assert_eq!(TypeArgument::Wildcard.to_string(), "?");
    assert_eq!(
        TypeArgument::Super(Type::generic("T")).to_string(),
        "? super T"
    );
}

#[test]
fn descriptors_produce_erased_types() {
    let ty = parse_field_descriptor("[Ljava/util/List;").unwrap();
    let object = ty.as_object().expect("object type");
    assert!(object.is_raw());
    assert_eq!(object.dimension, 1);
    assert_eq!(ty.to_string(), "java.util.List[]");
}
