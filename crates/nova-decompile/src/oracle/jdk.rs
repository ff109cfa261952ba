use nova_types::{GenericType, ObjectType, Type, TypeArgument};

use super::{ClassDef, ClassHierarchy};

fn var(name: &str) -> TypeArgument {
    TypeArgument::Type(Type::Generic(GenericType::new(name)))
}

fn of(internal_name: &str, args: Vec<TypeArgument>) -> ObjectType {
    ObjectType::new(internal_name).with_type_arguments(args)
}

fn minimal_jdk_classes() -> Vec<ClassDef> {
    vec![
        ClassDef {
            super_class: None,
            ..ClassDef::class(ObjectType::OBJECT)
        }
        .method("<init>", "()V")
        .method("equals", "(Ljava/lang/Object;)Z")
        .method("hashCode", "()I")
        .method("toString", "()Ljava/lang/String;")
        .method("getClass", "()Ljava/lang/Class;"),
        ClassDef::interface("java/lang/CharSequence")
            .method("length", "()I")
            .method("charAt", "(I)C"),
        ClassDef::interface("java/lang/Comparable")
            .type_parameters(&["T"])
            .method("compareTo", "(Ljava/lang/Object;)I"),
        ClassDef::class(ObjectType::STRING)
            .implements(ObjectType::new("java/lang/CharSequence"))
            .implements(of(
                "java/lang/Comparable",
                vec![TypeArgument::Type(Type::Object(ObjectType::string()))],
            ))
            .method("<init>", "()V")
            .method("<init>", "(Ljava/lang/String;)V")
            .method("<init>", "([C)V")
            .method("<init>", "([B)V")
            .method("valueOf", "(Ljava/lang/Object;)Ljava/lang/String;")
            .method("valueOf", "([C)Ljava/lang/String;")
            .method("valueOf", "(I)Ljava/lang/String;")
            .method("valueOf", "(J)Ljava/lang/String;")
            .method("valueOf", "(Z)Ljava/lang/String;")
            .method("equals", "(Ljava/lang/Object;)Z")
            .method("indexOf", "(I)I")
            .method("indexOf", "(Ljava/lang/String;)I")
            .method("compareTo", "(Ljava/lang/String;)I"),
        ClassDef::class("java/lang/Number")
            .method("<init>", "()V")
            .method("intValue", "()I")
            .method("longValue", "()J"),
        ClassDef::class("java/lang/Integer")
            .extends(ObjectType::new("java/lang/Number"))
            .implements(of(
                "java/lang/Comparable",
                vec![TypeArgument::Type(Type::object("java/lang/Integer"))],
            ))
            .method("<init>", "(I)V")
            .method("<init>", "(Ljava/lang/String;)V")
            .method("valueOf", "(I)Ljava/lang/Integer;")
            .method("valueOf", "(Ljava/lang/String;)Ljava/lang/Integer;"),
        ClassDef::class("java/lang/Long")
            .extends(ObjectType::new("java/lang/Number"))
            .implements(of(
                "java/lang/Comparable",
                vec![TypeArgument::Type(Type::object("java/lang/Long"))],
            ))
            .method("<init>", "(J)V")
            .method("<init>", "(Ljava/lang/String;)V")
            .method("valueOf", "(J)Ljava/lang/Long;")
            .method("valueOf", "(Ljava/lang/String;)Ljava/lang/Long;"),
        ClassDef::interface("java/lang/Iterable")
            .type_parameters(&["T"])
            .method("iterator", "()Ljava/util/Iterator;"),
        ClassDef::interface("java/util/Collection")
            .type_parameters(&["E"])
            .implements(of("java/lang/Iterable", vec![var("E")]))
            .method("add", "(Ljava/lang/Object;)Z")
            .method("remove", "(Ljava/lang/Object;)Z")
            .method("contains", "(Ljava/lang/Object;)Z")
            .method("addAll", "(Ljava/util/Collection;)Z")
            .method("size", "()I"),
        ClassDef::interface("java/util/List")
            .type_parameters(&["E"])
            .implements(of("java/util/Collection", vec![var("E")]))
            .method("add", "(ILjava/lang/Object;)V")
            .method("get", "(I)Ljava/lang/Object;")
            .method("set", "(ILjava/lang/Object;)Ljava/lang/Object;")
            .method("remove", "(I)Ljava/lang/Object;")
            .method("addAll", "(ILjava/util/Collection;)Z"),
        ClassDef::class("java/util/ArrayList")
            .type_parameters(&["E"])
            .implements(of("java/util/List", vec![var("E")]))
            .method("<init>", "()V")
            .method("<init>", "(I)V")
            .method("<init>", "(Ljava/util/Collection;)V"),
        ClassDef::interface("java/util/Map")
            .type_parameters(&["K", "V"])
            .method("get", "(Ljava/lang/Object;)Ljava/lang/Object;")
            .method("put", "(Ljava/lang/Object;Ljava/lang/Object;)Ljava/lang/Object;")
            .method("remove", "(Ljava/lang/Object;)Ljava/lang/Object;")
            .method("containsKey", "(Ljava/lang/Object;)Z"),
        ClassDef::class("java/util/HashMap")
            .type_parameters(&["K", "V"])
            .implements(of("java/util/Map", vec![var("K"), var("V")]))
            .method("<init>", "()V")
            .method("<init>", "(I)V")
            .method("<init>", "(Ljava/util/Map;)V"),
        ClassDef::class("java/lang/Throwable")
            .method("<init>", "()V")
            .method("<init>", "(Ljava/lang/String;)V")
            .method("<init>", "(Ljava/lang/Throwable;)V")
            .method("<init>", "(Ljava/lang/String;Ljava/lang/Throwable;)V")
            .method("getMessage", "()Ljava/lang/String;"),
        ClassDef::class("java/lang/Exception")
            .extends(ObjectType::new("java/lang/Throwable"))
            .method("<init>", "()V")
            .method("<init>", "(Ljava/lang/String;)V")
            .method("<init>", "(Ljava/lang/Throwable;)V")
            .method("<init>", "(Ljava/lang/String;Ljava/lang/Throwable;)V"),
        ClassDef::class("java/lang/RuntimeException")
            .extends(ObjectType::new("java/lang/Exception"))
            .method("<init>", "()V")
            .method("<init>", "(Ljava/lang/String;)V")
            .method("<init>", "(Ljava/lang/Throwable;)V")
            .method("<init>", "(Ljava/lang/String;Ljava/lang/Throwable;)V"),
    ]
}

impl ClassHierarchy {
    /// A hierarchy preloaded with the handful of `java.lang`/`java.util` classes that decompiled
    /// code touches most often. Callers add the classes of the program being decompiled on top.
    pub fn with_minimal_jdk() -> Self {
        let mut hierarchy = Self::new();
        for def in minimal_jdk_classes() {
            hierarchy
                .add_class(def)
                .expect("built-in JDK descriptors are well-formed");
        }
        hierarchy
    }
}
