//! Generator error types.
#![allow(unused_assignments)]

use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while generating component bindings.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug)]
pub enum CodegenError {
    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("I/O error on '{}': {message}", path.display())]
    #[diagnostic(code(dashgen::io::error))]
    Io {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("Failed to parse '{}' at line {line}, column {column}: {message}", path.display())]
    #[diagnostic(
        code(dashgen::parse::invalid_json),
        help("Metadata files are produced by react-docgen and must contain a single JSON object")
    )]
    Parse {
        path: PathBuf,
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Invalid package descriptor '{}': {message}", path.display())]
    #[diagnostic(
        code(dashgen::parse::invalid_package),
        help("package.json must define at least \"name\" and \"version\"")
    )]
    InvalidPackageDescriptor {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Metadata Errors
    // =========================================================================
    #[error("Component '{component}' is missing required field '{field}'")]
    #[diagnostic(
        code(dashgen::metadata::missing_field),
        help("Every metadata record needs both \"props\" and \"description\"")
    )]
    MissingField {
        component: String,
        field: String,
    },

    #[error("Field '{field}' of component '{component}' must be {expected}")]
    #[diagnostic(code(dashgen::metadata::invalid_field))]
    InvalidField {
        component: String,
        field: String,
        expected: String,
    },

    // =========================================================================
    // Naming Errors
    // =========================================================================
    #[error("Duplicate component name '{name}' derived from '{first}' and '{second}'")]
    #[diagnostic(
        code(dashgen::names::duplicate_component),
        help("Rename one of the component files, or allow last-wins overwrites")
    )]
    DuplicateComponent {
        name: String,
        first: String,
        second: String,
    },
}

impl CodegenError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a parse error from a `serde_json` failure.
    pub fn parse(path: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }

    /// Creates a missing-field error.
    pub fn missing_field(component: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            component: component.into(),
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_location() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let error = CodegenError::parse("lib/metadata.json", &err);
        match error {
            CodegenError::Parse { line, column, .. } => {
                assert_eq!(line, 2);
                assert!(column > 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_message() {
        let error = CodegenError::missing_field("src/Button.react.js", "props");
        assert_eq!(
            error.to_string(),
            "Component 'src/Button.react.js' is missing required field 'props'"
        );
    }
}
