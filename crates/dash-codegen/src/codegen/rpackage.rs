//! R package scaffolding: `NAMESPACE`, `DESCRIPTION`, `.Rbuildignore` and
//! the JavaScript dependency metadata in `R/internal.R`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::diagnostic::CodegenError;
use crate::naming::r_package_name;
use crate::package::PackageDescriptor;
use super::AUTO_GENERATED_HEADER;

/// R imports used when the package descriptor names none.
pub const DEFAULT_R_IMPORTS: &str = "dash";

/// Minimum R version in the `Depends:` field.
const R_DEPENDS: &str = "R (>= 3.0.2)";

/// Finds the JavaScript and CSS distribution files below `package_dir`.
///
/// Returns paths relative to `package_dir`, sorted. A missing directory
/// yields no files.
pub fn collect_js_dist(package_dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
    if !package_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(package_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| CodegenError::io(package_dir, e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_dist = matches!(
            entry.path().extension().and_then(|e| e.to_str()),
            Some("js") | Some("css")
        );
        if is_dist {
            if let Ok(relative) = entry.path().strip_prefix(package_dir) {
                files.push(relative.to_path_buf());
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Generates `R/internal.R`, describing the package's JavaScript bundle as
/// an `html_dependency` so the R runtime can serve it from `inst/deps`.
pub fn generate_js_metadata(namespace: &str, version: &str, dist: &[PathBuf]) -> String {
    let package = r_package_name(namespace);
    let as_r_path = |p: &PathBuf| p.to_string_lossy().replace('\\', "/");
    let scripts: Vec<String> = dist
        .iter()
        .filter(|p| p.extension().is_some_and(|e| e == "js"))
        .map(as_r_path)
        .collect();
    let stylesheets: Vec<String> = dist
        .iter()
        .filter(|p| p.extension().is_some_and(|e| e == "css"))
        .map(as_r_path)
        .collect();

    format!(
        r#"{header}.{package}_js_metadata <- function() {{
deps_metadata <- list(`{namespace}` = structure(list(name = "{namespace}",
version = "{version}", src = list(href = NULL,
file = "deps"), meta = NULL,
script = {scripts},
stylesheet = {stylesheets}, head = NULL, attachment = NULL, package = "{package}",
all_files = FALSE), class = "html_dependency"))
return(deps_metadata)
}}
"#,
        header = AUTO_GENERATED_HEADER,
        package = package,
        namespace = namespace,
        version = version,
        scripts = r_character_vector(&scripts),
        stylesheets = r_character_vector(&stylesheets),
    )
}

/// Generates the `NAMESPACE` file from the accumulated export statements.
pub fn generate_namespace_file(package: &PackageDescriptor, export_string: &str) -> String {
    let mut output = String::from(AUTO_GENERATED_HEADER);
    output.push_str(export_string);
    for dependency in r_package_list(package.r_depends.as_deref().unwrap_or(""))
        .into_iter()
        .chain(r_package_list(package.r_imports.as_deref().unwrap_or(DEFAULT_R_IMPORTS)))
    {
        output.push_str(&format!("import({})\n", dependency));
    }
    output
}

/// Generates the `DESCRIPTION` file.
///
/// `has_license_file` appends `+ file LICENSE` to the license field.
pub fn generate_description(package: &PackageDescriptor, has_license_file: bool) -> String {
    let description = package
        .description
        .clone()
        .unwrap_or_else(|| package.name.clone());

    let depends = match package.r_depends.as_deref().map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{}, {}", R_DEPENDS, extra),
        _ => R_DEPENDS.to_string(),
    };

    let mut license = package.license.clone().unwrap_or_else(|| "file LICENSE".to_string());
    if has_license_file && package.license.is_some() {
        license.push_str(" + file LICENSE");
    }

    let mut lines = vec![
        format!("Package: {}", r_package_name(&package.name)),
        format!("Title: {}", description),
        format!("Version: {}", package.version),
        format!("Description: {}", description),
        format!("Depends: {}", depends),
        format!(
            "Imports: {}",
            package.r_imports.as_deref().unwrap_or(DEFAULT_R_IMPORTS)
        ),
    ];
    if let Some(suggests) = package.r_suggests.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(format!("Suggests: {}", suggests));
    }
    lines.push(format!("License: {}", license));
    if let Some(url) = &package.homepage {
        lines.push(format!("URL: {}", url));
    }
    if let Some(bugs) = package.bug_reports() {
        lines.push(format!("BugReports: {}", bugs));
    }
    lines.push("Encoding: UTF-8".to_string());
    lines.push("LazyData: true".to_string());
    lines.push("KeepSource: true".to_string());
    if let Some(author) = &package.author {
        lines.push(format!("Author: {} [aut]", author.name()));
        lines.push(format!("Maintainer: {}", author.full()));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Contents of `.Rbuildignore`.
pub fn generate_rbuildignore() -> &'static str {
    r#"# ignore JS config files/folders
node_modules/
coverage/
src/
lib/
.babelrc
.builderrc
.eslintrc
.npmignore

# demo folder has special meaning in R
demo/.*\.js
demo/.*\.html
demo/.*\.css

# ignore python files/folders
setup.py
usage.py
requirements.txt
MANIFEST.in
CHANGELOG.md
test/
# CRAN has weird LICENSE requirements
LICENSE.txt
^.*\.Rproj$
^\.Rproj\.user$
"#
}

/// Splits a `Depends:`/`Imports:` style list into bare package names,
/// dropping version constraints and `R` itself.
fn r_package_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|entry| entry.split('(').next().unwrap_or("").trim())
        .filter(|name| !name.is_empty() && *name != "R")
        .map(str::to_string)
        .collect()
}

fn r_character_vector(items: &[String]) -> String {
    match items {
        [] => "NULL".to_string(),
        [single] => format!("\"{}\"", single),
        _ => {
            let quoted: Vec<String> = items.iter().map(|i| format!("\"{}\"", i)).collect();
            format!("c({})", quoted.join(", "))
        }
    }
}
