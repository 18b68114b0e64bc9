//! R help page type descriptions.

use crate::metadata::PropType;

/// Describes a prop type for an R help page. Unknown types render empty.
pub fn to_r_type(typ: &PropType) -> String {
    match typ {
        PropType::String => "character".to_string(),
        PropType::Bool => "logical".to_string(),
        PropType::Number => "numeric".to_string(),
        PropType::Object => "named list".to_string(),
        PropType::Array => "unnamed list".to_string(),
        PropType::Func => "function".to_string(),
        PropType::Symbol => "symbol".to_string(),
        PropType::Any => "logical | numeric | character | named list | unnamed list".to_string(),
        PropType::Node => "a list of or a singular dash component, string or number".to_string(),
        PropType::Element => "dash component".to_string(),
        PropType::Enum(values) => format!("a value equal to: {}", values.join(", ")),
        PropType::Union(types) => types
            .iter()
            .map(to_r_type)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" | "),
        PropType::ArrayOf(inner) => {
            let inner = to_r_type(inner);
            if inner.is_empty() {
                "unnamed list".to_string()
            } else {
                format!("list of {}s", inner)
            }
        }
        PropType::ObjectOf(inner) => {
            format!("list with named elements and values of type {}", to_r_type(inner))
        }
        PropType::Shape(fields) => {
            let keys: Vec<String> = fields.keys().map(|k| format!("'{}'", k)).collect();
            format!("lists containing elements {}", keys.join(", "))
        }
        PropType::Custom | PropType::Unknown(_) => String::new(),
    }
}
