//! Prop descriptors and the prop type model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single prop as emitted by react-docgen, kept verbatim.
///
/// The usual shape is
/// `{"type": {"name": "string"}, "required": false, "description": "...", "defaultValue": {"value": "'x'"}}`,
/// but a bare `{"type": "string"}` is accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropDescriptor(Value);

impl PropDescriptor {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The raw JSON value.
    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn prop_type(&self) -> PropType {
        self.0.get("type").map(PropType::from_value).unwrap_or(PropType::Unknown(String::new()))
    }

    pub fn is_required(&self) -> bool {
        self.0.get("required").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn description(&self) -> &str {
        self.0.get("description").and_then(Value::as_str).unwrap_or("")
    }

    /// The JS source text of the default value, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.0
            .get("defaultValue")
            .and_then(|d| d.get("value"))
            .and_then(Value::as_str)
    }
}

/// Prop types understood by the renderers.
#[derive(Debug, Clone, PartialEq)]
pub enum PropType {
    String,
    Bool,
    Number,
    Object,
    Array,
    Func,
    Symbol,
    Any,
    Node,
    Element,
    /// Literal values, as JS source (`'primary'`, `2`).
    Enum(Vec<String>),
    Union(Vec<PropType>),
    ArrayOf(Box<PropType>),
    ObjectOf(Box<PropType>),
    Shape(IndexMap<String, PropType>),
    Custom,
    /// Anything else, carrying the raw type name (possibly empty).
    Unknown(String),
}

impl PropType {
    /// Parses a react-docgen `type` value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(name) => Self::from_name(name, None),
            Value::Object(obj) => {
                let name = obj.get("name").and_then(Value::as_str).unwrap_or("");
                Self::from_name(name, obj.get("value"))
            }
            _ => Self::Unknown(String::new()),
        }
    }

    fn from_name(name: &str, value: Option<&Value>) -> Self {
        match name {
            "string" => Self::String,
            "bool" => Self::Bool,
            "number" => Self::Number,
            "object" => Self::Object,
            "array" => Self::Array,
            "func" => Self::Func,
            "symbol" => Self::Symbol,
            "any" => Self::Any,
            "node" => Self::Node,
            "element" => Self::Element,
            "custom" => Self::Custom,
            "enum" => Self::Enum(
                value
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(|item| match item.get("value") {
                                Some(Value::String(s)) => Some(s.clone()),
                                Some(other) => Some(other.to_string()),
                                None => None,
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            ),
            "union" => Self::Union(
                value
                    .and_then(Value::as_array)
                    .map(|items| items.iter().map(Self::from_value).collect())
                    .unwrap_or_default(),
            ),
            "arrayOf" => Self::ArrayOf(Box::new(Self::inner(value))),
            "objectOf" => Self::ObjectOf(Box::new(Self::inner(value))),
            "shape" | "exact" => Self::Shape(
                value
                    .and_then(Value::as_object)
                    .map(|fields| {
                        fields
                            .iter()
                            .map(|(key, field)| (key.clone(), Self::from_value(field)))
                            .collect()
                    })
                    .unwrap_or_default(),
            ),
            other => Self::Unknown(other.to_string()),
        }
    }

    fn inner(value: Option<&Value>) -> Self {
        value.map(Self::from_value).unwrap_or(Self::Unknown(String::new()))
    }
}
