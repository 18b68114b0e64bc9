//! Name derivation for generated components and packages.

/// Derives the component name from a metadata key.
///
/// Takes the text after the last `/` and before the first `.`:
/// `src/components/MyControl.react.js` becomes `MyControl`. No validation is
/// done, so an empty or odd key yields an empty or odd name.
pub fn component_name(path: &str) -> &str {
    let file = path.rsplit('/').next().unwrap_or(path);
    file.split('.').next().unwrap_or(file)
}

/// Converts a package name (`dash-html-components`, `dash_html_components`)
/// into the lower camel case R package name (`dashHtmlComponents`).
pub fn r_package_name(name: &str) -> String {
    let mut words = name.split(['-', '_']).filter(|w| !w.is_empty());
    let mut result = words.next().map(str::to_lowercase).unwrap_or_default();
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_name() {
        assert_eq!(component_name("src/components/MyControl.react.js"), "MyControl");
        assert_eq!(component_name("Button.jsx"), "Button");
        assert_eq!(component_name("lib/Tabs"), "Tabs");
        assert_eq!(component_name("Plain"), "Plain");
    }

    #[test]
    fn test_component_name_edge_cases() {
        assert_eq!(component_name(""), "");
        assert_eq!(component_name("src/"), "");
        assert_eq!(component_name(".hidden"), "");
    }

    #[test]
    fn test_r_package_name() {
        assert_eq!(r_package_name("dash-html-components"), "dashHtmlComponents");
        assert_eq!(r_package_name("dash_core_components"), "dashCoreComponents");
        assert_eq!(r_package_name("mylib"), "mylib");
    }
}
