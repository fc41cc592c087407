//! # Parse Subcommand
//!
//! Validates text as one identifier kind and prints its canonical form.
//! Rejected input exits with code 1 and the format error on stderr.
//!
//! ```bash
//! ocpi parse party-id " GDF "
//! ocpi parse emsp-id DE-GDF --json
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use ocpi_core::{IdentifierError, OcpiConfig, Registries};

use crate::kinds::KindArg;

/// Arguments for the `ocpi parse` subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Identifier kind to parse as.
    pub kind: KindArg,

    /// Text to parse. Surrounding whitespace is trimmed.
    pub text: String,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of a parse result.
#[derive(Debug, Serialize)]
pub struct ParseOutput {
    /// Kind name as used in error messages.
    pub kind: &'static str,
    /// Canonical text of the parsed value.
    pub value: String,
}

/// Parse `args.text` as `args.kind`, resolving registry kinds through
/// registries built from `config`.
pub fn parse_value(args: &ParseArgs, config: &OcpiConfig) -> Result<ParseOutput, IdentifierError> {
    let registries = Registries::from_config(&config.registries);
    let value = args.kind.parse(&args.text, &registries)?;
    Ok(ParseOutput {
        kind: args.kind.info().name,
        value,
    })
}

/// Execute the parse subcommand.
pub fn run_parse(args: &ParseArgs, config: &OcpiConfig) -> Result<u8> {
    match parse_value(args, config) {
        Ok(output) => {
            if args.json {
                println!("{}", serde_json::to_string(&output)?);
            } else {
                println!("{}", output.value);
            }
            Ok(0)
        }
        Err(e) => {
            tracing::debug!(kind = e.kind(), "parse rejected");
            eprintln!("{e}");
            Ok(1)
        }
    }
}
