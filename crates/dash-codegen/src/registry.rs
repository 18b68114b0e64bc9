//! Registry of loaded component namespaces.

use indexmap::IndexSet;

/// Set of namespaces whose components have been loaded.
///
/// Owned by the caller and passed to [`crate::load_components`]; adding a
/// namespace twice has no further effect.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    namespaces: IndexSet<String>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `namespace`. Returns `true` if it was not yet present.
    pub fn add(&mut self, namespace: impl Into<String>) -> bool {
        self.namespaces.insert(namespace.into())
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.namespaces.contains(namespace)
    }

    /// Registered namespaces in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.namespaces.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
