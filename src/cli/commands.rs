//! CLI command definitions for pipespec.
//!
//! This module provides a command-line interface over the component-spec
//! loader: validate a document, print its canonical form, compute its
//! content digest, or scan a directory of components.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use crate::loader::{self, ComponentRegistry};

/// Pipeline component specification toolkit.
#[derive(Parser)]
#[command(name = "pipespec")]
#[command(about = "Load, validate and inspect pipeline component specifications")]
#[command(version)]
#[command(
    long_about = "pipespec parses YAML component specifications describing containerized \
pipeline steps into a typed object graph and reports validation failures.\n\nExample usage:\n  \
pipespec validate component.yaml\n  pipespec inspect component.yaml --format json"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Validate a component specification document.
    Validate(ValidateArgs),

    /// Parse a component document and print its canonical form.
    Inspect(InspectArgs),

    /// Print the content digest of a component document.
    Digest(DigestArgs),

    /// Load every component document in a directory and summarize them.
    Scan(ScanArgs),
}

/// Arguments for `pipespec validate`.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the component YAML document.
    pub file: PathBuf,
}

/// Arguments for `pipespec inspect`.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Path to the component YAML document.
    pub file: PathBuf,

    /// Output format (yaml or json).
    #[arg(short, long, default_value = "yaml")]
    pub format: String,
}

/// Arguments for `pipespec digest`.
#[derive(Parser, Debug)]
pub struct DigestArgs {
    /// Path to the component YAML document.
    pub file: PathBuf,
}

/// Arguments for `pipespec scan`.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directory containing component YAML documents.
    pub dir: PathBuf,
}

/// Parse CLI arguments and return the Cli struct.
///
/// This allows main.rs to access CLI arguments (like log_level) before running commands.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI by parsing arguments and executing the command.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli())
}

/// Run the CLI with the parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Validate(args) => run_validate_command(args),
        Commands::Inspect(args) => run_inspect_command(args),
        Commands::Digest(args) => run_digest_command(args),
        Commands::Scan(args) => run_scan_command(args),
    }
}

fn run_validate_command(args: ValidateArgs) -> anyhow::Result<()> {
    let spec = loader::load_component_from_file(&args.file)?;
    info!(component = %spec.name, "component spec is valid");

    println!(
        "OK {} ({} inputs, {} outputs, digest {})",
        spec.name,
        spec.inputs.len(),
        spec.outputs.len(),
        spec.digest.as_deref().unwrap_or("-"),
    );
    Ok(())
}

fn run_inspect_command(args: InspectArgs) -> anyhow::Result<()> {
    let spec = loader::load_component_from_file(&args.file)?;

    let rendered = match args.format.as_str() {
        "yaml" => spec.to_yaml()?,
        "json" => spec.to_json()?,
        other => anyhow::bail!("unsupported output format '{}' (expected yaml or json)", other),
    };

    println!("{rendered}");
    Ok(())
}

fn run_digest_command(args: DigestArgs) -> anyhow::Result<()> {
    let data = fs::read(&args.file)?;
    println!("{}", loader::content_digest(&data));
    Ok(())
}

fn run_scan_command(args: ScanArgs) -> anyhow::Result<()> {
    let mut registry = ComponentRegistry::new();
    let count = registry.load_directory(&args.dir)?;

    if count == 0 {
        warn!(dir = %args.dir.display(), "no component documents found");
        return Ok(());
    }

    let mut components: Vec<_> = registry.iter().collect();
    components.sort_by_key(|(name, _)| name.to_string());

    for (name, spec) in components {
        println!(
            "{}  {}  inputs={} outputs={}",
            spec.digest.as_deref().unwrap_or("-"),
            name,
            spec.inputs.len(),
            spec.outputs.len(),
        );
    }
    info!(count, "loaded component specs");
    Ok(())
}
