//! In-memory component loading.

use std::path::Path;

use crate::codegen::python;
use crate::diagnostic::CodegenError;
use crate::metadata::{read_metadata, ComponentRecord, PropDescriptor, Props};
use crate::naming::component_name;
use crate::registry::ComponentRegistry;

/// Props the generated wrappers never expose.
pub const RESERVED_PROPS: &[&str] = &["setProps", "dashEvents", "fireEvent"];

/// Wildcard attribute props, declared in metadata as `data-*` / `aria-*`.
pub const WILDCARD_PROPS: &[&str] = &["data-*", "aria-*"];

/// A component as the generated bindings see it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDescriptor {
    pub name: String,
    pub props: Props,
    pub description: String,
    pub namespace: String,
}

impl ComponentDescriptor {
    /// Builds a descriptor from a metadata record, deriving the name from
    /// its key.
    pub fn from_record(key: &str, record: ComponentRecord, namespace: &str) -> Self {
        Self {
            name: component_name(key).to_string(),
            props: record.props,
            description: record.description,
            namespace: namespace.to_string(),
        }
    }

    /// Props that become explicit arguments, in declaration order.
    pub fn prop_names(&self) -> Vec<&str> {
        self.props
            .keys()
            .map(String::as_str)
            .filter(|name| !RESERVED_PROPS.contains(name) && !WILDCARD_PROPS.contains(name))
            .collect()
    }

    /// Props that are documented: everything but the reserved ones.
    pub fn documented_props(&self) -> impl Iterator<Item = (&str, &PropDescriptor)> {
        self.props
            .iter()
            .filter(|(name, _)| !RESERVED_PROPS.contains(&name.as_str()))
            .map(|(name, prop)| (name.as_str(), prop))
    }

    pub fn required_props(&self) -> Vec<&str> {
        self.prop_names()
            .into_iter()
            .filter(|name| self.props.get(*name).is_some_and(PropDescriptor::is_required))
            .collect()
    }

    /// Attribute prefixes accepted as wildcards (`data-`, `aria-`).
    pub fn wildcard_prefixes(&self) -> Vec<&'static str> {
        WILDCARD_PROPS
            .iter()
            .copied()
            .filter(|w| self.props.contains_key(*w))
            .map(|w| w.trim_end_matches('*'))
            .collect()
    }

    pub fn has_children(&self) -> bool {
        self.props.contains_key("children")
    }

    /// The Python docstring of this component.
    pub fn docstring(&self) -> String {
        python::create_docstring(self)
    }
}

/// Loads component descriptors without writing any files.
///
/// Registers `namespace` in `registry` first, then returns one descriptor
/// per metadata record in document order.
pub fn load_components(
    metadata_path: &Path,
    namespace: &str,
    registry: &mut ComponentRegistry,
) -> Result<Vec<ComponentDescriptor>, CodegenError> {
    registry.add(namespace);

    let document = read_metadata(metadata_path)?;

    document
        .records()
        .map(|record| {
            record.map(|(key, record)| ComponentDescriptor::from_record(key, record, namespace))
        })
        .collect()
}
