use std::path::Path;

use dash_codegen::{CodegenError, Generator, GeneratorConfig, PrefixTable};

const METADATA: &str = r#"{
    "src/components/Div.react.js": {
        "description": "A Div component.",
        "props": {
            "children": {"type": {"name": "node"}, "description": "The children"},
            "id": {"type": {"name": "string"}, "description": "The ID"},
            "data-*": {"type": {"name": "string"}}
        }
    },
    "src/components/A.react.js": {
        "description": "An anchor.",
        "props": {
            "href": {"type": {"name": "string"}, "required": true}
        }
    }
}"#;

const PACKAGE_JSON: &str = r#"{
    "name": "dash-html-components",
    "version": "0.13.5",
    "description": "Vanilla HTML components for Dash",
    "author": "Chris Parmer <chris@plot.ly>",
    "license": "MIT"
}"#;

fn setup(dir: &Path, namespace: &str) -> GeneratorConfig {
    std::fs::write(dir.join("metadata.json"), METADATA).unwrap();
    std::fs::write(dir.join("package.json"), PACKAGE_JSON).unwrap();
    GeneratorConfig {
        metadata_path: dir.join("metadata.json"),
        package_json_path: dir.join("package.json"),
        output_root: dir.join("pkg"),
        ..GeneratorConfig::new(namespace)
    }
}

fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn html_package_end_to_end() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = setup(dir.path(), "dash_html_components");
    let root = config.output_root.clone();

    let bundle_dir = root.join("dash_html_components");
    std::fs::create_dir_all(&bundle_dir).unwrap();
    std::fs::write(bundle_dir.join("dash_html_components.min.js"), "/* js */").unwrap();

    let report = Generator::new(config).generate_r_package().unwrap();
    assert_eq!(report.components, vec!["Div", "A"]);

    let div = read(root.join("R").join("htmlDiv.R"));
    assert!(div.contains("htmlDiv <- function(children=NULL, id=NULL, ...) {"));
    assert!(div.contains("type = 'Div'"));

    let help = read(root.join("man").join("htmlA.Rd"));
    assert!(help.contains("\\name{htmlA}"));
    assert!(help.contains("\\item{href}{Character.}"));

    assert_eq!(
        read(root.join("NAMESPACE")),
        "# AUTO GENERATED FILE - DO NOT EDIT\n\nexport(htmlDiv)\nexport(htmlA)\nimport(dash)\n"
    );

    let description = read(root.join("DESCRIPTION"));
    assert!(description.starts_with("Package: dashHtmlComponents\n"));
    assert!(description.contains("Version: 0.13.5\n"));
    assert!(description.contains("License: MIT\n"));

    let internal = read(root.join("R").join("internal.R"));
    assert!(internal.contains("script = \"dash_html_components.min.js\""));
    assert_eq!(
        read(root.join("inst").join("deps").join("dash_html_components.min.js")),
        "/* js */"
    );
    assert!(root.join(".Rbuildignore").is_file());
}

#[test]
fn unknown_namespace_has_no_prefix() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = setup(dir.path(), "my_lib");
    let root = config.output_root.clone();

    Generator::new(config).generate_r_package().unwrap();

    assert!(root.join("R").join("Div.R").is_file());
    assert!(root.join("man").join("A.Rd").is_file());
    assert!(read(root.join("NAMESPACE")).contains("export(Div)\nexport(A)\n"));
}

#[test]
fn custom_prefix_from_table() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut config = setup(dir.path(), "my_lib");
    config.prefixes = PrefixTable::default().with("my_lib", "my");
    let root = config.output_root.clone();

    Generator::new(config).generate_r_package().unwrap();
    assert!(root.join("R").join("myDiv.R").is_file());
}

#[test]
fn stale_namespace_is_replaced() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = setup(dir.path(), "dash_core_components");
    let root = config.output_root.clone();
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("NAMESPACE"), "export(coreStale)\n").unwrap();

    let generator = Generator::new(config);
    generator.generate_r_package().unwrap();
    generator.generate_r_package().unwrap();

    let namespace = read(root.join("NAMESPACE"));
    assert!(!namespace.contains("coreStale"));
    assert_eq!(namespace.matches("export(coreDiv)").count(), 1);
}

#[test]
fn license_txt_is_copied() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = setup(dir.path(), "my_lib");
    let root = config.output_root.clone();
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("LICENSE.txt"), "MIT License").unwrap();

    Generator::new(config).generate_r_package().unwrap();

    assert_eq!(read(root.join("LICENSE")), "MIT License");
    assert!(read(root.join("DESCRIPTION")).contains("License: MIT + file LICENSE\n"));
}

#[test]
fn invalid_package_descriptor_fails_before_writing() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = setup(dir.path(), "my_lib");
    std::fs::write(&config.package_json_path, r#"{"name": "no-version"}"#).unwrap();
    let root = config.output_root.clone();

    let result = Generator::new(config).generate_r_package();
    assert!(matches!(result, Err(CodegenError::InvalidPackageDescriptor { .. })));
    assert!(!root.exists());
}

#[test]
fn empty_document_writes_no_dependency_metadata() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = setup(dir.path(), "dash_html_components");
    std::fs::write(&config.metadata_path, "{}").unwrap();
    let root = config.output_root.clone();

    let bundle_dir = root.join("dash_html_components");
    std::fs::create_dir_all(&bundle_dir).unwrap();
    std::fs::write(bundle_dir.join("dash_html_components.min.js"), "/* js */").unwrap();

    let report = Generator::new(config).generate_r_package().unwrap();

    assert!(report.components.is_empty());
    assert!(!root.join("R").join("internal.R").exists());
    assert!(!root.join("inst").exists());
    assert_eq!(
        read(root.join("NAMESPACE")),
        "# AUTO GENERATED FILE - DO NOT EDIT\n\nimport(dash)\n"
    );
    assert!(root.join("DESCRIPTION").is_file());
}
