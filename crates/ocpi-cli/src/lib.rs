//! # ocpi-cli: Command-Line Tool for OCPI Identifiers
//!
//! Provides the `ocpi` command-line interface over `ocpi-core`.
//!
//! ## Subcommands
//!
//! - `ocpi parse`: Validate text as one identifier kind and print it canonically.
//! - `ocpi generate`: Generate random tokens, correlation ids and UUID-backed ids.
//! - `ocpi kinds`: Describe every kind: namespace, comparison policy, format.
//! - `ocpi registry`: List the values a registry is seeded with.
//!
//! ```bash
//! ocpi parse party-id "DE "
//! ocpi generate access-token --count 2
//! ocpi --config ocpi.yaml registry payment-brand
//! ```

#![deny(missing_docs)]

pub mod generate;
pub mod kinds;
pub mod parse;
pub mod registry;

use std::path::Path;

use anyhow::{Context, Result};

use ocpi_core::OcpiConfig;

/// Load the configuration at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<OcpiConfig> {
    match path {
        Some(path) => OcpiConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(OcpiConfig::default()),
    }
}
