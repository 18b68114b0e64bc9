//! Loading of react-docgen component metadata.
//!
//! The metadata document is a JSON object keyed by component source path
//! (`src/components/Button.react.js`). Generation order is observable in the
//! output (import order, export lists), so object key order is preserved:
//! the document deserializes into an [`IndexMap`] and `serde_json` is built
//! with `preserve_order` so nested prop maps keep their order as well.

mod prop;
mod record;

pub use prop::{PropDescriptor, PropType};
pub use record::{ComponentRecord, Props};

use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::diagnostic::CodegenError;
use crate::naming::component_name;

/// Reads a JSON file into any deserializable type, keeping key order for
/// order-aware targets such as [`IndexMap`].
pub fn read_json_object<T: DeserializeOwned>(path: &Path) -> Result<T, CodegenError> {
    let content = std::fs::read_to_string(path).map_err(|e| CodegenError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| CodegenError::parse(path, &e))
}

/// Reads the metadata document at `path`.
///
/// Fails with [`CodegenError::Io`] when the file cannot be read and with
/// [`CodegenError::Parse`] when it is not a JSON object.
pub fn read_metadata(path: &Path) -> Result<MetadataDocument, CodegenError> {
    let entries: IndexMap<String, Value> = read_json_object(path)?;
    log::debug!("read {} component records from {}", entries.len(), path.display());
    Ok(MetadataDocument { entries })
}

/// A parsed metadata document, in source key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataDocument {
    entries: IndexMap<String, Value>,
}

impl MetadataDocument {
    /// Builds a document from already-parsed entries.
    pub fn from_entries(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Component paths in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Raw record for a component path.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Typed records in document order.
    ///
    /// Records are extracted lazily, so a malformed record only fails when
    /// iteration reaches it.
    pub fn records(&self) -> impl Iterator<Item = Result<(&str, ComponentRecord), CodegenError>> {
        self.entries
            .iter()
            .map(|(key, value)| ComponentRecord::from_value(key, value).map(|r| (key.as_str(), r)))
    }

    /// Derived component names in document order, duplicates included.
    pub fn component_names(&self) -> Vec<&str> {
        self.keys().map(component_name).collect()
    }
}
