//! Generator configuration.

use std::path::PathBuf;

use crate::prefix::PrefixTable;

/// What to do when two metadata keys derive the same component name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateNamePolicy {
    /// Later records overwrite earlier ones; a warning is logged.
    #[default]
    LastWins,
    /// Abort before writing anything.
    Error,
}

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Component namespace; also the Python package directory name.
    pub namespace: String,

    /// react-docgen metadata file.
    pub metadata_path: PathBuf,

    /// `package.json` read by the R package generator.
    pub package_json_path: PathBuf,

    /// Root of the generated package. The Python package is written to
    /// `<output_root>/<namespace>/`, R sources and manifests to `<output_root>/`.
    pub output_root: PathBuf,

    /// Namespace to R function prefix mapping.
    pub prefixes: PrefixTable,

    pub duplicate_names: DuplicateNamePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "default_namespace".to_string(),
            metadata_path: PathBuf::from("lib/metadata.json"),
            package_json_path: PathBuf::from("package.json"),
            output_root: PathBuf::from("."),
            prefixes: PrefixTable::default(),
            duplicate_names: DuplicateNamePolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Default configuration for `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Directory of the generated Python package.
    pub fn package_dir(&self) -> PathBuf {
        self.output_root.join(&self.namespace)
    }
}
