//! dash-generate CLI.
//!
//! Generates Python and R bindings from react-docgen component metadata.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{ArgAction, Parser, Subcommand};

use dash_codegen::{
    load_components, ComponentRegistry, DuplicateNamePolicy, GenerationReport, Generator,
    GeneratorConfig, PrefixTable,
};

mod ui;

#[derive(Parser)]
#[command(name = "dash-generate")]
#[command(about = "Generate Python and R bindings for Dash component libraries")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Python package (<namespace>/<Name>.py and _imports_.py)
    Python {
        /// Component namespace, also the package directory
        namespace: String,

        /// react-docgen metadata file
        #[arg(short, long, default_value = "lib/metadata.json")]
        metadata: PathBuf,

        /// Root directory the package directory is created in
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Fail when two components derive the same name
        #[arg(long)]
        strict_names: bool,
    },

    /// Generate the R package (R/, man/, NAMESPACE, DESCRIPTION)
    R {
        /// Component namespace
        namespace: String,

        /// react-docgen metadata file
        #[arg(short, long, default_value = "lib/metadata.json")]
        metadata: PathBuf,

        /// package.json describing the package
        #[arg(short, long, default_value = "package.json")]
        package_json: PathBuf,

        /// Package root directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Function prefix for a namespace, as NAMESPACE=PREFIX (repeatable)
        #[arg(long = "prefix", value_parser = parse_prefix)]
        prefixes: Vec<(String, String)>,

        /// Fail when two components derive the same name
        #[arg(long)]
        strict_names: bool,
    },

    /// Load the components in memory and list them
    Inspect {
        /// Namespace the components are registered under
        #[arg(short, long, default_value = "default_namespace")]
        namespace: String,

        /// react-docgen metadata file
        #[arg(short, long, default_value = "lib/metadata.json")]
        metadata: PathBuf,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Python {
            namespace,
            metadata,
            output,
            strict_names,
        } => {
            let config = GeneratorConfig {
                metadata_path: metadata,
                output_root: output,
                duplicate_names: duplicate_policy(strict_names),
                ..GeneratorConfig::new(namespace)
            };
            run_generation("Python package", config, Generator::generate_classes)
        }

        Commands::R {
            namespace,
            metadata,
            package_json,
            output,
            prefixes,
            strict_names,
        } => {
            let mut table = PrefixTable::default();
            for (ns, prefix) in prefixes {
                table.insert(ns, prefix);
            }
            let config = GeneratorConfig {
                metadata_path: metadata,
                package_json_path: package_json,
                output_root: output,
                prefixes: table,
                duplicate_names: duplicate_policy(strict_names),
                ..GeneratorConfig::new(namespace)
            };
            run_generation("R package", config, Generator::generate_r_package)
        }

        Commands::Inspect { namespace, metadata } => inspect(&namespace, &metadata),
    }
}

/// Initializes env_logger; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn duplicate_policy(strict: bool) -> DuplicateNamePolicy {
    if strict {
        DuplicateNamePolicy::Error
    } else {
        DuplicateNamePolicy::LastWins
    }
}

fn parse_prefix(s: &str) -> Result<(String, String), String> {
    let (namespace, prefix) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAMESPACE=PREFIX, got '{}'", s))?;
    if namespace.is_empty() {
        return Err("namespace must not be empty".to_string());
    }
    Ok((namespace.to_string(), prefix.to_string()))
}

/// Runs one generator entry point with spinner and summary output.
fn run_generation(
    label: &str,
    config: GeneratorConfig,
    run: fn(&Generator) -> Result<GenerationReport, dash_codegen::CodegenError>,
) -> miette::Result<()> {
    let start = Instant::now();
    ui::banner();

    let namespace = config.namespace.clone();
    let root = config.output_root.clone();
    let generator = Generator::new(config);
    let spinner = ui::working(&format!("Generating {} for {}", label, namespace));

    let result = run(&generator);
    spinner.finish_and_clear();
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            ui::status(ui::Status::Failed, &format!("{} generation failed", label));
            return Err(e.into());
        }
    };

    ui::status(
        ui::Status::Done,
        &format!("{} written, {} files", label, report.files.len()),
    );
    println!();

    ui::summary_box(
        &namespace,
        &[
            format!("components  {}", report.components.len()),
            format!("output      {}", root.display()),
        ],
    );
    ui::file_tree(&root, &report.files);

    ui::elapsed(start);
    Ok(())
}

/// Lists components loaded through the in-memory path.
fn inspect(namespace: &str, metadata: &Path) -> miette::Result<()> {
    let mut registry = ComponentRegistry::new();
    let components = load_components(metadata, namespace, &mut registry)?;

    ui::banner();

    if components.is_empty() {
        ui::status(
            ui::Status::Note,
            &format!("No components in {}", metadata.display()),
        );
        return Ok(());
    }

    ui::summary_box(
        "components",
        &[
            format!("namespace   {}", namespace),
            format!("count       {}", components.len()),
        ],
    );

    let max_props = components
        .iter()
        .map(|c| c.prop_names().len())
        .max()
        .unwrap_or(1);

    for component in &components {
        ui::component_row(
            &component.name,
            component.prop_names().len(),
            component.required_props().len(),
            max_props,
        );
        let summary = component.description.lines().next().unwrap_or("").trim();
        if !summary.is_empty() {
            ui::detail(summary);
        }
    }
    println!();

    let namespaces: Vec<&str> = registry.iter().collect();
    ui::status(
        ui::Status::Note,
        &format!("Registered namespaces: {}", namespaces.join(", ")),
    );
    Ok(())
}
