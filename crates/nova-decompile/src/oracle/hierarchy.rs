use std::collections::{HashMap, HashSet, VecDeque};

use nova_types::{
    parse_method_descriptor, DescriptorError, ObjectType, Type, TypeArgument, TypeBounds,
};

use super::TypeOracle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
}

/// What the oracle needs to know about one class: its generic header, its direct supertypes
/// and the erased signatures of its methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    pub internal_name: String,
    pub kind: ClassKind,
    pub type_parameters: Vec<String>,
    pub super_class: Option<ObjectType>,
    /// Direct super-interfaces, parameterized in terms of `type_parameters`.
    pub interfaces: Vec<ObjectType>,
    /// `(name, descriptor)` pairs; constructors are named `<init>`.
    pub methods: Vec<(String, String)>,
}

impl ClassDef {
    pub fn class(internal_name: impl Into<String>) -> Self {
        Self {
            internal_name: internal_name.into(),
            kind: ClassKind::Class,
            type_parameters: Vec::new(),
            super_class: Some(ObjectType::object()),
            interfaces: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn interface(internal_name: impl Into<String>) -> Self {
        Self {
            kind: ClassKind::Interface,
            super_class: None,
            ..Self::class(internal_name)
        }
    }

    #[must_use]
    pub fn type_parameters(mut self, names: &[&str]) -> Self {
        self.type_parameters = names.iter().map(|name| name.to_string()).collect();
        self
    }

    #[must_use]
    pub fn extends(mut self, super_class: ObjectType) -> Self {
        self.super_class = Some(super_class);
        self
    }

    #[must_use]
    pub fn implements(mut self, interface: ObjectType) -> Self {
        self.interfaces.push(interface);
        self
    }

    #[must_use]
    pub fn method(mut self, name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        self.methods.push((name.into(), descriptor.into()));
        self
    }
}

#[derive(Debug, Clone)]
struct MethodEntry {
    name: String,
    descriptor: String,
    arity: usize,
}

#[derive(Debug, Clone)]
struct ClassEntry {
    def: ClassDef,
    methods: Vec<MethodEntry>,
}

/// In-memory [`TypeOracle`] over a set of registered classes.
///
/// Classes that were never registered are opaque: they are only assignable to themselves and to
/// `java.lang.Object`, and declare no methods.
#[derive(Debug, Clone, Default)]
pub struct ClassHierarchy {
    classes: HashMap<String, ClassEntry>,
}

impl ClassHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a class. Method descriptors are parsed eagerly so overload queries
    /// can compare arities.
    pub fn add_class(&mut self, def: ClassDef) -> Result<(), DescriptorError> {
        let methods = def
            .methods
            .iter()
            .map(|(name, descriptor)| {
                let parsed = parse_method_descriptor(descriptor)?;
                Ok(MethodEntry {
                    name: name.clone(),
                    descriptor: descriptor.clone(),
                    arity: parsed.arity(),
                })
            })
            .collect::<Result<Vec<_>, DescriptorError>>()?;

        self.classes
            .insert(def.internal_name.clone(), ClassEntry { def, methods });
        Ok(())
    }

    pub fn class(&self, internal_name: &str) -> Option<&ClassDef> {
        self.classes.get(internal_name).map(|entry| &entry.def)
    }

    pub fn contains(&self, internal_name: &str) -> bool {
        self.classes.contains_key(internal_name)
    }

    /// Direct supertypes of `ty`, with `ty`'s type arguments substituted into them.
    ///
    /// A raw use of a generic class yields raw supertypes.
    fn direct_supertypes(&self, ty: &ObjectType) -> Vec<ObjectType> {
        let Some(entry) = self.classes.get(&ty.internal_name) else {
            return Vec::new();
        };
        let def = &entry.def;
        let params = def.type_parameters.as_slice();
        let args = ty
            .type_arguments
            .as_deref()
            .filter(|args| args.len() == params.len());

        let instantiate = |sup: &ObjectType| match (params.is_empty(), args) {
            (true, _) => sup.clone(),
            (false, None) => sup.raw(),
            (false, Some(args)) => substitute_object(sup, params, args),
        };

        let mut out: Vec<ObjectType> = def
            .super_class
            .iter()
            .chain(def.interfaces.iter())
            .map(instantiate)
            .collect();
        if def.kind == ClassKind::Interface && def.super_class.is_none() {
            out.push(ObjectType::object());
        }
        out
    }

    /// Breadth-first search for `target` among the supertypes of `source` (including itself).
    fn find_supertype(&self, source: &ObjectType, target: &str) -> Option<ObjectType> {
        let mut queue = VecDeque::from([source.clone()]);
        let mut seen = HashSet::new();
        while let Some(current) = queue.pop_front() {
            if current.internal_name == target {
                return Some(current);
            }
            if !seen.insert(current.internal_name.clone()) {
                continue;
            }
            queue.extend(self.direct_supertypes(&current));
        }
        None
    }

    fn supertype_names(&self, owner: &str) -> Vec<String> {
        let mut queue = VecDeque::from([ObjectType::new(owner)]);
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current.internal_name.clone()) {
                continue;
            }
            queue.extend(self.direct_supertypes(&current));
            out.push(current.internal_name);
        }
        out
    }
}

impl TypeOracle for ClassHierarchy {
    fn is_assignable(
        &self,
        bounds: &TypeBounds,
        target: &ObjectType,
        source: &ObjectType,
    ) -> bool {
        if target.is_java_lang_object() {
            return true;
        }
        if target.dimension != source.dimension {
            // `Object[]` accepts `String[][]`; no other target crosses dimensions.
            return target.dimension < source.dimension
                && target.internal_name == ObjectType::OBJECT
                && target.is_raw();
        }
        if target.internal_name == ObjectType::OBJECT {
            return target.is_raw();
        }

        let Some(found) = self.find_supertype(&source.with_dimension(0), &target.internal_name)
        else {
            return false;
        };

        match (&target.type_arguments, &found.type_arguments) {
            (Some(targets), Some(sources)) => {
                self.are_type_arguments_assignable(bounds, targets, sources)
            }
            // Raw on either side is an unchecked conversion, which still compiles.
            _ => true,
        }
    }

    fn has_multiple_overloads(&self, owner: &str, member: &str, argument_count: usize) -> bool {
        let owners = if member == "<init>" {
            vec![owner.to_string()]
        } else {
            self.supertype_names(owner)
        };

        let mut descriptors = HashSet::new();
        for name in &owners {
            let Some(entry) = self.classes.get(name) else {
                continue;
            };
            for method in &entry.methods {
                if method.name == member && method.arity == argument_count {
                    descriptors.insert(method.descriptor.as_str());
                }
            }
        }
        descriptors.len() > 1
    }

    fn resolve_type_by_internal_name(&self, internal_name: &str) -> Option<ObjectType> {
        self.contains(internal_name)
            .then(|| ObjectType::new(internal_name))
    }
}

fn substitute_object(ty: &ObjectType, params: &[String], args: &[TypeArgument]) -> ObjectType {
    ObjectType {
        internal_name: ty.internal_name.clone(),
        type_arguments: ty.type_arguments.as_ref().map(|list| {
            list.iter()
                .map(|arg| substitute_argument(arg, params, args))
                .collect()
        }),
        dimension: ty.dimension,
    }
}

fn substitute_argument(arg: &TypeArgument, params: &[String], args: &[TypeArgument]) -> TypeArgument {
    match arg {
        TypeArgument::Type(ty) => substitute_type(ty, params, args),
        TypeArgument::Wildcard => TypeArgument::Wildcard,
        TypeArgument::Extends(ty) => match substitute_type(ty, params, args) {
            TypeArgument::Type(ty) | TypeArgument::Extends(ty) => TypeArgument::Extends(ty),
            TypeArgument::Wildcard | TypeArgument::Super(_) => TypeArgument::Wildcard,
        },
        TypeArgument::Super(ty) => match substitute_type(ty, params, args) {
            TypeArgument::Type(ty) | TypeArgument::Super(ty) => TypeArgument::Super(ty),
            TypeArgument::Wildcard | TypeArgument::Extends(_) => TypeArgument::Wildcard,
        },
    }
}

fn substitute_type(ty: &Type, params: &[String], args: &[TypeArgument]) -> TypeArgument {
    match ty {
        Type::Generic(var) => {
            let actual = params
                .iter()
                .position(|param| *param == var.name)
                .and_then(|idx| args.get(idx));
            match actual {
                Some(TypeArgument::Type(actual)) => {
                    TypeArgument::Type(actual.with_dimension(actual.dimension() + var.dimension))
                }
                Some(other) if var.dimension == 0 => other.clone(),
                _ => TypeArgument::Type(ty.clone()),
            }
        }
        Type::Object(obj) => TypeArgument::Type(Type::Object(substitute_object(obj, params, args))),
        Type::Primitive { .. } => TypeArgument::Type(ty.clone()),
    }
}
