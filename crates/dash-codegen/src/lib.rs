//! # Dash Component Code Generator
//!
//! This crate turns the component metadata that `react-docgen` extracts from a
//! React component library into bindings for two languages:
//!
//! - **Python**: one class per component plus an `_imports_.py` aggregation module
//! - **R**: one function and help page per component plus the package manifests
//!
//! ## Architecture
//!
//! ```text
//! metadata.json           package.json
//!        │                      │
//!        ▼                      │
//! ┌──────────────┐              │
//! │   Metadata   │  Order-preserving JSON load
//! │    Reader    │              │
//! └──────┬───────┘              │
//!        │                      │
//!        ▼                      │
//! ┌──────────────┐              │
//! │  Component   │  Name derivation, prop model
//! │ Descriptors  │              │
//! └──────┬───────┘              │
//!        │                      ▼
//!        ▼               ┌──────────────┐
//! ┌──────────────┐       │  Package     │
//! │   Codegen    │◀──────│  Descriptor  │
//! │  (Py / R)    │       └──────────────┘
//! └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dash_codegen::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig {
//!     metadata_path: "lib/metadata.json".into(),
//!     ..GeneratorConfig::new("dash_html_components")
//! };
//!
//! let generator = Generator::new(config);
//! generator.generate_classes()?;
//! generator.generate_r_package()?;
//! ```
//!
//! Every run regenerates from scratch: each entry point re-reads the metadata
//! file and rewrites all of its outputs.

pub mod codegen;
pub mod config;
pub mod diagnostic;
pub mod loader;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod package;
pub mod prefix;
pub mod registry;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use codegen::{help, python, r, rpackage};

pub use config::{DuplicateNamePolicy, GeneratorConfig};
pub use diagnostic::CodegenError;
pub use loader::{load_components, ComponentDescriptor};
pub use metadata::{read_metadata, MetadataDocument};
pub use naming::component_name;
pub use package::PackageDescriptor;
pub use prefix::PrefixTable;
pub use registry::ComponentRegistry;

/// Writes generated bindings for one component namespace.
pub struct Generator {
    config: GeneratorConfig,
}

/// Files written by a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Component names in document order, duplicates included.
    pub components: Vec<String>,
    /// Every file written, in write order.
    pub files: Vec<PathBuf>,
}

impl Generator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the Python package.
    ///
    /// Writes `<namespace>/<Name>.py` for every component and rebuilds
    /// `<namespace>/_imports_.py` with one import per component followed by
    /// the `__all__` list. A stale `_imports_.py` is deleted first, since the
    /// file is built by appending.
    pub fn generate_classes(&self) -> Result<GenerationReport, CodegenError> {
        let document = read_metadata(&self.config.metadata_path)?;
        self.check_component_names(&document)?;

        let package_dir = self.config.package_dir();
        let imports_path = package_dir.join(python::IMPORTS_FILE);
        output::remove_stale(&imports_path)?;
        output::create_dir(&package_dir)?;

        let mut report = GenerationReport::default();

        for record in document.records() {
            let (key, record) = record?;
            let component = ComponentDescriptor::from_record(key, record, &self.config.namespace);

            let class_path = package_dir.join(format!("{}.py", component.name));
            output::write_file(&class_path, &python::generate_class_file(&component))?;
            output::append_file(&imports_path, &python::import_statement(&component.name))?;

            report.files.push(class_path);
            report.components.push(component.name);
        }

        output::append_file(&imports_path, &python::all_list(&report.components))?;
        report.files.push(imports_path);

        log::info!(
            "generated {} Python classes for '{}'",
            report.components.len(),
            self.config.namespace
        );
        Ok(report)
    }

    /// Generates the R package.
    ///
    /// Writes `R/<prefix><Name>.R` and `man/<prefix><Name>.Rd` for every
    /// component, the dependency metadata `R/internal.R` unless the document
    /// is empty, and the package
    /// files `NAMESPACE`, `DESCRIPTION` and `.Rbuildignore` at the output
    /// root. A stale `NAMESPACE` is deleted first. A failed write aborts the
    /// run and leaves already written files in place.
    pub fn generate_r_package(&self) -> Result<GenerationReport, CodegenError> {
        let document = read_metadata(&self.config.metadata_path)?;
        let package = PackageDescriptor::load(&self.config.package_json_path)?;
        self.check_component_names(&document)?;

        let root = &self.config.output_root;
        let namespace = &self.config.namespace;
        let namespace_path = root.join("NAMESPACE");
        output::remove_stale(&namespace_path)?;

        let prefix = self.config.prefixes.prefix_for(namespace);
        let mut report = GenerationReport::default();

        // Dependency metadata is identical for every component and only
        // written when there is at least one.
        if !document.is_empty() {
            let package_dir = self.config.package_dir();
            let dist = rpackage::collect_js_dist(&package_dir)?;
            for file in &dist {
                let target = root.join("inst").join("deps").join(file);
                output::copy_file(&package_dir.join(file), &target)?;
                report.files.push(target);
            }
            let internal_path = root.join("R").join("internal.R");
            output::write_file(
                &internal_path,
                &rpackage::generate_js_metadata(namespace, &package.version, &dist),
            )?;
            report.files.push(internal_path);
        }

        let mut export_string = String::new();

        for record in document.records() {
            let (key, record) = record?;
            let component = ComponentDescriptor::from_record(key, record, namespace);
            let funcname = r::function_name(&component.name, prefix);

            export_string.push_str(&r::export_statement(&component.name, prefix));

            let function_path = root.join("R").join(format!("{}.R", funcname));
            output::write_file(&function_path, &r::generate_function_file(&component, prefix))?;

            let help_path = root.join("man").join(format!("{}.Rd", funcname));
            output::write_file(&help_path, &help::generate_help_file(&component, prefix))?;

            report.files.push(function_path);
            report.files.push(help_path);
            report.components.push(component.name);
        }

        let has_license_file = self.prepare_license(root)?;

        output::write_file(
            &namespace_path,
            &rpackage::generate_namespace_file(&package, &export_string),
        )?;
        report.files.push(namespace_path);

        let description_path = root.join("DESCRIPTION");
        output::write_file(
            &description_path,
            &rpackage::generate_description(&package, has_license_file),
        )?;
        report.files.push(description_path);

        let rbuildignore_path = root.join(".Rbuildignore");
        output::write_file(&rbuildignore_path, rpackage::generate_rbuildignore())?;
        report.files.push(rbuildignore_path);

        log::info!(
            "generated R package '{}' with {} components (prefix '{}')",
            package.name,
            report.components.len(),
            prefix
        );
        Ok(report)
    }

    /// Applies the duplicate-name policy and flags empty names.
    fn check_component_names(&self, document: &MetadataDocument) -> Result<(), CodegenError> {
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for key in document.keys() {
            let name = component_name(key);
            if name.is_empty() {
                log::warn!("metadata key '{}' derives an empty component name", key);
            }

            if let Some(first) = seen.insert(name, key) {
                match self.config.duplicate_names {
                    DuplicateNamePolicy::LastWins => log::warn!(
                        "component '{}' from '{}' overwrites the one from '{}'",
                        name,
                        key,
                        first
                    ),
                    DuplicateNamePolicy::Error => {
                        return Err(CodegenError::DuplicateComponent {
                            name: name.to_string(),
                            first: first.to_string(),
                            second: key.to_string(),
                        })
                    }
                }
            }
        }

        Ok(())
    }

    /// R requires the license file to be called `LICENSE`; a `LICENSE.txt`
    /// is copied over when that is all there is.
    fn prepare_license(&self, root: &Path) -> Result<bool, CodegenError> {
        let license = root.join("LICENSE");
        if license.is_file() {
            return Ok(true);
        }
        let license_txt = root.join("LICENSE.txt");
        if license_txt.is_file() {
            output::copy_file(&license_txt, &license)?;
            return Ok(true);
        }
        Ok(false)
    }
}

/// Generates the Python package for `namespace` below the current directory.
pub fn generate_classes(namespace: &str, metadata_path: &Path) -> Result<GenerationReport, CodegenError> {
    let config = GeneratorConfig {
        metadata_path: metadata_path.to_path_buf(),
        ..GeneratorConfig::new(namespace)
    };
    Generator::new(config).generate_classes()
}

/// Generates the R package for `namespace` in the current directory.
pub fn generate_r_package(
    namespace: &str,
    metadata_path: &Path,
    package_json_path: &Path,
) -> Result<GenerationReport, CodegenError> {
    let config = GeneratorConfig {
        metadata_path: metadata_path.to_path_buf(),
        package_json_path: package_json_path.to_path_buf(),
        ..GeneratorConfig::new(namespace)
    };
    Generator::new(config).generate_r_package()
}
