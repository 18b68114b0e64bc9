//! Package descriptor (`package.json`) loading.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostic::CodegenError;
use crate::metadata::read_json_object;

/// The parts of `package.json` the R package assembler reads.
///
/// Unrecognised keys are kept in [`extra`](Self::extra), in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDescriptor {
    pub name: String,
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Person>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bugs: Option<Bugs>,

    /// Extra entries for the R `Depends:` field (comma separated).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r_depends: Option<String>,

    /// Entries for the R `Imports:` field; defaults to `dash`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r_imports: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r_suggests: Option<String>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// An npm person field, either `"Name <email>"` or `{"name": ..., "email": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Person {
    Text(String),
    Detailed {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
}

impl Person {
    /// The name without any `<email>` part.
    pub fn name(&self) -> &str {
        match self {
            Person::Text(text) => text.split(" <").next().unwrap_or(text).trim(),
            Person::Detailed { name, .. } => name,
        }
    }

    /// `Name <email>` form.
    pub fn full(&self) -> String {
        match self {
            Person::Text(text) => text.trim().to_string(),
            Person::Detailed { name, email: Some(email) } => format!("{} <{}>", name, email),
            Person::Detailed { name, email: None } => name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bugs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PackageDescriptor {
    /// Loads the descriptor at `path`.
    ///
    /// Malformed JSON is a [`CodegenError::Parse`]; a well-formed file lacking
    /// `name` or `version` is a [`CodegenError::InvalidPackageDescriptor`].
    pub fn load(path: &Path) -> Result<Self, CodegenError> {
        let value: Value = read_json_object(path)?;
        serde_json::from_value(value).map_err(|e| CodegenError::InvalidPackageDescriptor {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn bug_reports(&self) -> Option<&str> {
        self.bugs.as_ref().and_then(|b| b.url.as_deref())
    }
}
