//! Typed view of one metadata record.

use indexmap::IndexMap;
use serde_json::Value;

use super::PropDescriptor;
use crate::diagnostic::CodegenError;

/// Props of a component, in declaration order.
pub type Props = IndexMap<String, PropDescriptor>;

/// One component entry of the metadata document.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRecord {
    pub props: Props,
    pub description: String,
}

impl ComponentRecord {
    /// Extracts `props` and `description` from a raw record.
    ///
    /// `component` is the record's key and is only used for error reporting.
    pub fn from_value(component: &str, value: &Value) -> Result<Self, CodegenError> {
        let record = value.as_object().ok_or_else(|| CodegenError::InvalidField {
            component: component.to_string(),
            field: "<record>".to_string(),
            expected: "an object".to_string(),
        })?;

        let props = record
            .get("props")
            .ok_or_else(|| CodegenError::missing_field(component, "props"))?
            .as_object()
            .ok_or_else(|| CodegenError::InvalidField {
                component: component.to_string(),
                field: "props".to_string(),
                expected: "an object".to_string(),
            })?
            .iter()
            .map(|(name, prop)| (name.clone(), PropDescriptor::new(prop.clone())))
            .collect();

        let description = record
            .get("description")
            .ok_or_else(|| CodegenError::missing_field(component, "description"))?
            .as_str()
            .ok_or_else(|| CodegenError::InvalidField {
                component: component.to_string(),
                field: "description".to_string(),
                expected: "a string".to_string(),
            })?
            .to_string();

        Ok(Self { props, description })
    }
}
