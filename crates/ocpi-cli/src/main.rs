//! # ocpi CLI entry point
//!
//! Parses command-line arguments, installs logging, loads configuration and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use ocpi_cli::generate::{run_generate, GenerateArgs};
use ocpi_cli::kinds::{run_kinds, KindsArgs};
use ocpi_cli::load_config;
use ocpi_cli::parse::{run_parse, ParseArgs};
use ocpi_cli::registry::{run_registry, RegistryArgs};

/// OCPI identifier toolkit
///
/// Parses, validates and generates OCPI 2.2 and 3.0 identifiers.
#[derive(Parser, Debug)]
#[command(name = "ocpi", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate text as an identifier kind and print its canonical form.
    Parse(ParseArgs),

    /// Generate random identifiers.
    Generate(GenerateArgs),

    /// List identifier kinds with their comparison policy and format.
    Kinds(KindsArgs),

    /// List the values a registry is seeded with.
    Registry(RegistryArgs),
}

fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "ocpi CLI starting");

    let result = load_config(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Parse(args) => run_parse(args, &config),
        Commands::Generate(args) => run_generate(args, &config),
        Commands::Kinds(args) => run_kinds(args),
        Commands::Registry(args) => run_registry(args, &config),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
