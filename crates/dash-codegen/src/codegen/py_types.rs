//! Python docstring type descriptions.

use crate::metadata::PropType;

/// Describes a prop type for a Python docstring. Unknown types render empty.
pub fn to_py_type(typ: &PropType) -> String {
    match typ {
        PropType::String => "string".to_string(),
        PropType::Bool => "boolean".to_string(),
        PropType::Number => "number".to_string(),
        PropType::Object => "dict".to_string(),
        PropType::Array => "list".to_string(),
        PropType::Func => "function".to_string(),
        PropType::Symbol => "symbol".to_string(),
        PropType::Any => "boolean | number | string | dict | list".to_string(),
        PropType::Node => "a list of or a singular dash component, string or number".to_string(),
        PropType::Element => "dash component".to_string(),
        PropType::Enum(values) => format!("a value equal to: {}", values.join(", ")),
        PropType::Union(types) => types
            .iter()
            .map(to_py_type)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" | "),
        PropType::ArrayOf(inner) => {
            let inner = to_py_type(inner);
            if inner.is_empty() {
                "list".to_string()
            } else {
                format!("list of {}s", inner)
            }
        }
        PropType::ObjectOf(inner) => {
            format!("dict with strings as keys and values of type {}", to_py_type(inner))
        }
        PropType::Shape(fields) => {
            let keys: Vec<String> = fields.keys().map(|k| format!("'{}'", k)).collect();
            format!("dict containing keys {}", keys.join(", "))
        }
        PropType::Custom | PropType::Unknown(_) => String::new(),
    }
}
