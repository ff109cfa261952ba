use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Type;

/// Declared bounds of the type variables visible in one declaration scope.
///
/// `<T extends Number & Comparable<T>>` is stored as `T -> [Number, Comparable<T>]`. A variable
/// declared without a bound is absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeBounds {
    bounds: BTreeMap<String, Vec<Type>>,
}

impl TypeBounds {
    pub const fn new() -> Self {
        Self {
            bounds: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_bound(mut self, name: impl Into<String>, bounds: Vec<Type>) -> Self {
        self.insert(name, bounds);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bounds: Vec<Type>) {
        self.bounds.insert(name.into(), bounds);
    }

    pub fn get(&self, name: &str) -> Option<&[Type]> {
        self.bounds.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bounds.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Type])> {
        self.bounds
            .iter()
            .map(|(name, bounds)| (name.as_str(), bounds.as_slice()))
    }
}

impl FromIterator<(String, Vec<Type>)> for TypeBounds {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Type>)>>(iter: I) -> Self {
        Self {
            bounds: iter.into_iter().collect(),
        }
    }
}
