//! R help page (`.Rd`) generation.

use crate::loader::ComponentDescriptor;
use super::r::{function_name, usage_signature};
use super::r_types::to_r_type;

/// Generates `man/<prefix><Name>.Rd` for a component.
pub fn generate_help_file(component: &ComponentDescriptor, prefix: &str) -> String {
    let funcname = function_name(&component.name, prefix);

    let mut items: Vec<String> = component
        .documented_props()
        .filter(|(name, _)| !name.ends_with("-*"))
        .map(|(name, prop)| {
            let typ = to_r_type(&prop.prop_type());
            let description = prop.description().trim();
            let mut text = String::new();
            if !typ.is_empty() {
                text.push_str(&capitalize(&typ));
                text.push('.');
            }
            if !description.is_empty() {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(description);
            }
            format!("\\item{{{}}}{{{}}}", rd_escape(name), rd_escape(&text))
        })
        .collect();

    let wildcards = component.wildcard_prefixes();
    if !wildcards.is_empty() {
        let forms: Vec<String> = wildcards.iter().map(|w| format!("'{}*'", w)).collect();
        items.push(format!(
            "\\item{{...}}{{wildcards allowed have the form: {}}}",
            forms.join(", ")
        ));
    }

    let description = if component.description.trim().is_empty() {
        format!("{} component", component.name)
    } else {
        component.description.trim().to_string()
    };

    format!(
        r#"% Auto-generated: do not edit by hand
\name{{{funcname}}}

\alias{{{funcname}}}

\title{{{name} component}}

\description{{
{description}
}}

\usage{{
{usage}
}}

\arguments{{
{items}
}}
"#,
        funcname = funcname,
        name = component.name,
        description = rd_escape(&description),
        usage = usage_signature(component, prefix),
        items = items.join("\n\n"),
    )
}

/// Escapes characters with meaning in Rd markup.
pub fn rd_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '%' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ComponentRecord;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_help_file() {
        let record = ComponentRecord::from_value(
            "src/Button.react.js",
            &json!({
                "description": "A button.",
                "props": {
                    "label": {"type": {"name": "string"}, "description": "Text shown"},
                    "n_clicks": {"type": {"name": "number"}}
                }
            }),
        )
        .unwrap();
        let button = ComponentDescriptor::from_record("src/Button.react.js", record, "my_lib");

        let expected = r#"% Auto-generated: do not edit by hand
\name{Button}

\alias{Button}

\title{Button component}

\description{
A button.
}

\usage{
Button(label=NULL, n_clicks=NULL)
}

\arguments{
\item{label}{Character. Text shown}

\item{n_clicks}{Numeric.}
}
"#;
        assert_eq!(generate_help_file(&button, ""), expected);
    }

    #[test]
    fn test_wildcard_item() {
        let record = ComponentRecord::from_value(
            "Div.js",
            &json!({"description": "", "props": {"data-*": {"type": {"name": "string"}}}}),
        )
        .unwrap();
        let div = ComponentDescriptor::from_record("Div.js", record, "dash_html_components");

        let page = generate_help_file(&div, "html");
        assert!(page.contains("\\name{htmlDiv}"));
        assert!(page.contains("\\description{\nDiv component\n}"));
        assert!(page.contains("\\item{...}{wildcards allowed have the form: 'data-*'}"));
        assert!(!page.contains("\\item{data-*}"));
    }

    #[test]
    fn test_rd_escape() {
        assert_eq!(rd_escape("50% of {x}"), "50\\% of \\{x\\}");
    }
}
