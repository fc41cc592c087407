//! # Registry Subcommand
//!
//! Lists the values a registry holds at startup: the well-known seeds plus
//! any extras from the `registries` section of the configuration.

use anyhow::Result;
use clap::{Args, ValueEnum};

use ocpi_core::{OcpiConfig, Registries};

/// Registries that can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegistryName {
    /// OCPI 2.2 roles.
    RoleV2,
    /// OCPI 3.0 roles.
    RoleV3,
    /// OCPI 3.0 payment methods.
    PaymentMethod,
    /// OCPI 3.0 payment brands.
    PaymentBrand,
}

/// Arguments for the `ocpi registry` subcommand.
#[derive(Args, Debug)]
pub struct RegistryArgs {
    /// Registry to list.
    pub name: RegistryName,

    /// Print the entries as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Entries of the named registry, sorted under its comparison policy.
pub fn registry_entries(name: RegistryName, config: &OcpiConfig) -> Vec<String> {
    let registries = Registries::from_config(&config.registries);
    match name {
        RegistryName::RoleV2 => texts(registries.roles_v2.all()),
        RegistryName::RoleV3 => texts(registries.roles_v3.all()),
        RegistryName::PaymentMethod => texts(registries.payment_methods.all()),
        RegistryName::PaymentBrand => texts(registries.payment_brands.all()),
    }
}

fn texts<T: ToString>(values: Vec<T>) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Execute the registry subcommand.
pub fn run_registry(args: &RegistryArgs, config: &OcpiConfig) -> Result<u8> {
    let entries = registry_entries(args.name, config);
    if args.json {
        println!("{}", serde_json::to_string(&entries)?);
    } else {
        for entry in &entries {
            println!("{entry}");
        }
    }
    Ok(0)
}
