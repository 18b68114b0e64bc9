//! R component function generation.

use crate::loader::ComponentDescriptor;
use crate::naming::r_package_name;
use super::AUTO_GENERATED_HEADER;

/// `export(<prefix><Name>)` line of the R `NAMESPACE` file.
pub fn export_statement(name: &str, prefix: &str) -> String {
    format!("export({}{})\n", prefix, name)
}

/// Name of the generated R function.
pub fn function_name(name: &str, prefix: &str) -> String {
    format!("{}{}", prefix, name)
}

/// Generates `R/<prefix><Name>.R` for a component.
pub fn generate_function_file(component: &ComponentDescriptor, prefix: &str) -> String {
    let mut output = String::new();
    output.push_str(AUTO_GENERATED_HEADER);

    for line in component.description.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            output.push_str("#\n");
        } else {
            output.push_str(&format!("# {}\n", line));
        }
    }

    let prop_names = component.prop_names();
    let has_wildcards = !component.wildcard_prefixes().is_empty();

    let mut params: Vec<String> = prop_names.iter().map(|p| format!("{}=NULL", r_arg(p))).collect();
    let mut props: Vec<String> = prop_names
        .iter()
        .map(|p| format!("{}={}", r_arg(p), r_arg(p)))
        .collect();
    let mut names: Vec<String> = prop_names.iter().map(|p| format!("'{}'", p)).collect();
    let mut wildcard_declaration = String::new();
    if has_wildcards {
        params.push("...".to_string());
        props.push("...".to_string());
        names.push("wildcard_names".to_string());
        wildcard_declaration
            .push_str("    wildcard_names = names(assert_valid_wildcards(...))\n\n");
    }

    output.push_str(&format!(
        r#"{funcname} <- function({params}) {{
{wildcard_declaration}    component <- list(
        props = list({props}),
        type = '{name}',
        namespace = '{namespace}',
        propNames = c({names}),
        package = '{package}'
        )

    component$props <- filter_null(component$props)

    structure(component, class = c('dash_component', 'list'))
}}
"#,
        funcname = function_name(&component.name, prefix),
        params = params.join(", "),
        wildcard_declaration = wildcard_declaration,
        props = props.join(", "),
        name = component.name,
        namespace = component.namespace,
        names = names.join(", "),
        package = r_package_name(&component.namespace),
    ));

    output
}

/// Usage signature shared by the function file and its help page.
pub fn usage_signature(component: &ComponentDescriptor, prefix: &str) -> String {
    let mut params: Vec<String> = component
        .prop_names()
        .iter()
        .map(|p| format!("{}=NULL", r_arg(p)))
        .collect();
    if !component.wildcard_prefixes().is_empty() {
        params.push("...".to_string());
    }
    format!("{}({})", function_name(&component.name, prefix), params.join(", "))
}

/// Backtick-quotes names that are not syntactic R identifiers.
fn r_arg(name: &str) -> String {
    let mut chars = name.chars();
    let syntactic = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '.')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        }
        None => false,
    };
    if syntactic {
        name.to_string()
    } else {
        format!("`{}`", name)
    }
}
