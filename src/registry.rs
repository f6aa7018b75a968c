//! Transform registry: the ordered set of transformations one setup resolves.
//!
//! Iteration order is the order transformations run in when several are
//! enabled on one attribute: built-ins first in their fixed relative order,
//! then caller additions in registration order. A caller entry registered
//! under a built-in name replaces the built-in without moving it.

use crate::transforms::{self, Transform};
use indexmap::IndexMap;
use std::sync::Arc;

/// Ordered registry of named transformation functions.
pub struct TransformRegistry {
    transforms: IndexMap<String, Arc<dyn Transform>>,
}

impl TransformRegistry {
    /// Create a new empty transform registry
    pub fn new() -> Self {
        Self {
            transforms: IndexMap::new(),
        }
    }

    /// Registry seeded with the built-in transformations, in their fixed
    /// order: `trim`, `lowercase`, `uppercase`.
    pub fn builtins() -> Self {
        let mut registry = Self::new();
        registry.register("trim", transforms::trim);
        registry.register("lowercase", transforms::lowercase);
        registry.register("uppercase", transforms::uppercase);
        registry
    }

    /// Built-ins overlaid with caller-supplied transformations.
    ///
    /// Produces a fresh registry on every call; nothing is shared across
    /// setups. A pair whose name matches an existing entry replaces it in
    /// place (the entry keeps its position); new names are appended.
    pub fn with_custom<I>(custom: I) -> Self
    where
        I: IntoIterator<Item = (String, Arc<dyn Transform>)>,
    {
        let mut registry = Self::builtins();
        for (name, transform) in custom {
            registry.transforms.insert(name, transform);
        }
        registry
    }

    /// Register a transformation function, replacing any existing entry of
    /// the same name in place.
    pub fn register<T>(&mut self, name: impl Into<String>, transform: T)
    where
        T: Transform + 'static,
    {
        self.transforms.insert(name.into(), Arc::new(transform));
    }

    /// Get a transformation by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Transform>> {
        self.transforms.get(name)
    }

    /// Check if a transform is registered
    pub fn has_transform(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// Registered names, in iteration order.
    pub fn names(&self) -> Vec<&String> {
        self.transforms.keys().collect()
    }

    /// Number of registered transformations.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Iterate entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Arc<dyn Transform>)> {
        self.transforms.iter()
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::builtins()
    }
}
