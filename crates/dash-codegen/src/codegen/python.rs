//! Python class generation.

use crate::loader::ComponentDescriptor;
use super::py_types::to_py_type;
use super::AUTO_GENERATED_HEADER;

/// Name of the aggregation module inside the Python package.
pub const IMPORTS_FILE: &str = "_imports_.py";

/// Generates the complete `<Name>.py` module for a component.
pub fn generate_class_file(component: &ComponentDescriptor) -> String {
    let mut output = String::new();
    output.push_str(AUTO_GENERATED_HEADER);
    output.push_str("from dash.development.base_component import Component, _explicitize_args\n\n\n");
    output.push_str(&generate_class_string(component));
    output
}

/// Generates the `class <Name>(Component)` definition.
pub fn generate_class_string(component: &ComponentDescriptor) -> String {
    let name = &component.name;
    let prop_names = component.prop_names();
    let prop_list = py_list(&prop_names);
    let wildcards = py_list(&component.wildcard_prefixes());
    let required: Vec<&str> = component
        .required_props()
        .into_iter()
        .filter(|p| *p != "children")
        .collect();

    let mut args: Vec<String> = Vec::new();
    if component.has_children() {
        args.push("children=None".to_string());
    }
    args.extend(
        prop_names
            .iter()
            .filter(|p| **p != "children")
            .map(|p| format!("{}=Component.UNDEFINED", p)),
    );
    args.push("**kwargs".to_string());

    let super_args = if component.has_children() {
        "children=children, **args"
    } else {
        "**args"
    };

    format!(
        r#"class {name}(Component):
    """{docstring}"""
    @_explicitize_args
    def __init__(self, {default_argtext}):
        self._prop_names = {prop_list}
        self._type = {type_literal}
        self._namespace = {namespace_literal}
        self._valid_wildcard_attributes = {wildcards}
        self.available_properties = {prop_list}
        self.available_wildcard_properties = {wildcards}

        _explicit_args = kwargs.pop('_explicit_args')
        _locals = locals()
        _locals.update(kwargs)  # For wildcard attrs
        args = {{k: _locals[k] for k in _explicit_args if k != 'children'}}

        for k in {required}:
            if k not in args:
                raise TypeError(
                    'Required argument `' + k + '` was not specified.')
        super({name}, self).__init__({super_args})
"#,
        name = name,
        docstring = escape_docstring(&create_docstring(component)),
        default_argtext = args.join(", "),
        prop_list = prop_list,
        type_literal = py_str(name),
        namespace_literal = py_str(&component.namespace),
        wildcards = wildcards,
        required = py_list(&required),
        super_args = super_args,
    )
}

/// Builds the class docstring: summary, description and one line per prop.
pub fn create_docstring(component: &ComponentDescriptor) -> String {
    let args: Vec<String> = component
        .documented_props()
        .map(|(name, prop)| {
            let typ = to_py_type(&prop.prop_type());
            let mut spec = String::new();
            if !typ.is_empty() {
                spec.push_str(&typ);
                spec.push_str("; ");
            }
            if prop.is_required() {
                spec.push_str("required");
            } else {
                spec.push_str("optional");
                if let Some(default) = prop.default_value() {
                    spec.push_str(&format!(", default {}", default));
                }
            }

            let description = prop.description().trim();
            if description.is_empty() {
                format!("- {} ({})", name, spec)
            } else {
                format!("- {} ({}): {}", name, spec, description)
            }
        })
        .collect();

    format!(
        "A {} component.\n{}\n\nKeyword arguments:\n{}",
        component.name,
        component.description,
        args.join("\n")
    )
}

/// `from .<Name> import <Name>` line of the aggregation module.
pub fn import_statement(name: &str) -> String {
    format!("from .{0} import {0}\n", name)
}

/// The trailing `__all__` export list of the aggregation module.
pub fn all_list<S: AsRef<str>>(names: &[S]) -> String {
    let mut output = String::from("\n\n__all__ = [\n");
    for name in names {
        output.push_str(&format!("    \"{}\",\n", name.as_ref()));
    }
    output.push_str("]\n");
    output
}

/// Python single-quoted string literal.
fn py_str(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn py_list(items: &[&str]) -> String {
    let items: Vec<String> = items.iter().map(|s| py_str(s)).collect();
    format!("[{}]", items.join(", "))
}

/// Escapes text for a `"""` literal. Every quote is escaped, so a quote
/// next to the closing delimiter cannot end the string early.
fn escape_docstring(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ComponentRecord;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn component(key: &str, record: serde_json::Value, namespace: &str) -> ComponentDescriptor {
        let record = ComponentRecord::from_value(key, &record).unwrap();
        ComponentDescriptor::from_record(key, record, namespace)
    }

    #[test]
    fn test_button_class() {
        let button = component(
            "src/Button.react.js",
            json!({"props": {"label": {"type": "string"}}, "description": "A button."}),
            "my_lib",
        );

        let expected = r#"# AUTO GENERATED FILE - DO NOT EDIT

from dash.development.base_component import Component, _explicitize_args


class Button(Component):
    """A Button component.
A button.

Keyword arguments:
- label (string; optional)"""
    @_explicitize_args
    def __init__(self, label=Component.UNDEFINED, **kwargs):
        self._prop_names = ['label']
        self._type = 'Button'
        self._namespace = 'my_lib'
        self._valid_wildcard_attributes = []
        self.available_properties = ['label']
        self.available_wildcard_properties = []

        _explicit_args = kwargs.pop('_explicit_args')
        _locals = locals()
        _locals.update(kwargs)  # For wildcard attrs
        args = {k: _locals[k] for k in _explicit_args if k != 'children'}

        for k in []:
            if k not in args:
                raise TypeError(
                    'Required argument `' + k + '` was not specified.')
        super(Button, self).__init__(**args)
"#;
        assert_eq!(generate_class_file(&button), expected);
    }

    #[test]
    fn test_children_and_required_props() {
        let div = component(
            "src/components/Div.react.js",
            json!({
                "description": "A div.",
                "props": {
                    "children": {"type": {"name": "node"}, "required": true, "description": "Contents"},
                    "id": {"type": {"name": "string"}, "required": true, "description": "The ID"},
                    "n_clicks": {
                        "type": {"name": "number"},
                        "description": "Click count",
                        "defaultValue": {"value": "0", "computed": false}
                    },
                    "data-*": {"type": {"name": "string"}, "description": "Data attributes"},
                    "setProps": {"type": {"name": "func"}}
                }
            }),
            "dash_html_components",
        );

        let code = generate_class_string(&div);
        assert!(code.contains(
            "def __init__(self, children=None, id=Component.UNDEFINED, n_clicks=Component.UNDEFINED, **kwargs):"
        ));
        assert!(code.contains("self._prop_names = ['children', 'id', 'n_clicks']"));
        assert!(code.contains("self._valid_wildcard_attributes = ['data-']"));
        assert!(code.contains("for k in ['id']:"));
        assert!(code.contains("super(Div, self).__init__(children=children, **args)"));
        assert!(!code.contains("setProps"));

        let doc = create_docstring(&div);
        assert!(doc.contains(
            "- children (a list of or a singular dash component, string or number; required): Contents"
        ));
        assert!(doc.contains("- n_clicks (number; optional, default 0): Click count"));
        assert!(doc.contains("- data-* (string; optional): Data attributes"));
    }

    #[test]
    fn test_docstring_quotes_are_escaped() {
        let c = component(
            "Quote.js",
            json!({"props": {}, "description": "Says \"\"\"hi\"\"\""}),
            "ns",
        );
        assert!(!generate_class_string(&c).contains("\"\"\"hi"));
    }

    #[test]
    fn test_trailing_quote_does_not_close_docstring() {
        let input = component(
            "src/Input.react.js",
            json!({
                "description": "An input.",
                "props": {
                    "type": {"type": {"name": "string"}, "description": "Defaults to \"text\""}
                }
            }),
            "ns",
        );
        let code = generate_class_string(&input);
        assert!(code.contains("- type (string; optional): Defaults to \\\"text\\\"\"\"\"\n"));

        let bare = component("Quote.js", json!({"props": {}, "description": "Ends in \""}), "ns");
        assert!(generate_class_string(&bare).contains("Ends in \\\"\n"));
        assert_eq!(escape_docstring("say \"hi\""), "say \\\"hi\\\"");
    }

    #[test]
    fn test_aggregation_fragments() {
        assert_eq!(import_statement("Button"), "from .Button import Button\n");
        assert_eq!(all_list(&["A", "B"]), "\n\n__all__ = [\n    \"A\",\n    \"B\",\n]\n");
        assert_eq!(all_list::<&str>(&[]), "\n\n__all__ = [\n]\n");
    }
}
