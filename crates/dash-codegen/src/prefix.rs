//! Namespace to R function prefix mapping.

use indexmap::IndexMap;

/// Maps a component namespace to the prefix prepended to generated R
/// function names (`html` + `Div` = `htmlDiv`).
///
/// Unknown namespaces map to the empty prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixTable {
    entries: IndexMap<String, String>,
}

impl Default for PrefixTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("dash_html_components", "html");
        table.insert("dash_core_components", "core");
        table
    }
}

impl PrefixTable {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds or replaces the prefix for `namespace`.
    pub fn insert(&mut self, namespace: impl Into<String>, prefix: impl Into<String>) -> Option<String> {
        self.entries.insert(namespace.into(), prefix.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, namespace: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.insert(namespace, prefix);
        self
    }

    pub fn prefix_for(&self, namespace: &str) -> &str {
        self.entries.get(namespace).map(String::as_str).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes() {
        let table = PrefixTable::default();
        assert_eq!(table.prefix_for("dash_html_components"), "html");
        assert_eq!(table.prefix_for("dash_core_components"), "core");
        assert_eq!(table.prefix_for("my_lib"), "");
    }

    #[test]
    fn test_custom_prefix() {
        let table = PrefixTable::default().with("dash_table", "dash");
        assert_eq!(table.prefix_for("dash_table"), "dash");
        assert_eq!(table.prefix_for("dash_html_components"), "html");
    }

    #[test]
    fn test_override_default() {
        let mut table = PrefixTable::default();
        assert_eq!(table.insert("dash_core_components", "dcc"), Some("core".to_string()));
        assert_eq!(table.prefix_for("dash_core_components"), "dcc");
    }
}
