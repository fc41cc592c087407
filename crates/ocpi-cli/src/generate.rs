//! # Generate Subcommand
//!
//! Prints freshly generated random identifiers, one per line. Lengths
//! default to the `generators` section of the configuration.
//!
//! ```bash
//! ocpi generate access-token
//! ocpi generate correlation-id --local --count 3
//! ocpi generate reservation-id
//! ```

use anyhow::{bail, Result};
use clap::Args;

use ocpi_core::{GeneratorConfig, OcpiConfig};

use crate::kinds::KindArg;

/// Arguments for the `ocpi generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Identifier kind to generate.
    pub kind: KindArg,

    /// Number of random characters. Overrides the configured length.
    #[arg(long)]
    pub length: Option<usize>,

    /// Mark correlation ids as locally originated.
    #[arg(long)]
    pub local: bool,

    /// How many values to generate.
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

/// Upper bound on `--count`.
pub const MAX_COUNT: usize = 10_000;

/// Generate `args.count` values.
pub fn generate_values(args: &GenerateArgs, config: &OcpiConfig) -> Result<Vec<String>> {
    let name = args.kind.info().name;
    if !args.kind.can_generate() {
        bail!("{name} has no random generator");
    }
    if args.length.is_some() && !args.kind.takes_length() {
        bail!("{name} is generated at a fixed length; --length does not apply");
    }
    if let Some(length) = args.length {
        if length == 0 || length > GeneratorConfig::MAX_LENGTH {
            bail!(
                "--length must be between 1 and {}",
                GeneratorConfig::MAX_LENGTH
            );
        }
    }
    if args.count > MAX_COUNT {
        bail!("--count must be at most {MAX_COUNT}");
    }
    if args.local && args.kind != KindArg::CorrelationId {
        bail!("--local applies only to correlation ids");
    }

    let Some(values) = (0..args.count)
        .map(|_| {
            args.kind
                .generate(args.length, args.local, &config.generators)
        })
        .collect::<Option<Vec<_>>>()
    else {
        bail!("{name} has no random generator");
    };
    tracing::debug!(kind = name, count = values.len(), "generated identifiers");
    Ok(values)
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, config: &OcpiConfig) -> Result<u8> {
    for value in generate_values(args, config)? {
        println!("{value}");
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: KindArg) -> GenerateArgs {
        GenerateArgs {
            kind,
            length: None,
            local: false,
            count: 1,
        }
    }

    #[test]
    fn default_lengths_come_from_config() {
        let config = OcpiConfig::from_yaml_str("generators:\n  access_token_length: 16\n").unwrap();
        let values = generate_values(&args(KindArg::AccessToken), &config).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].len(), 16);
    }

    #[test]
    fn count_and_length_are_honored() {
        let mut a = args(KindArg::AuthenticationId);
        a.count = 5;
        a.length = Some(12);
        let values = generate_values(&a, &OcpiConfig::default()).unwrap();
        assert_eq!(values.len(), 5);
        assert!(values.iter().all(|v| v.len() == 12));
        assert!(values.iter().all(|v| v.chars().all(|c| c.is_ascii_alphanumeric())));
    }

    #[test]
    fn local_correlation_ids_are_prefixed() {
        let mut a = args(KindArg::CorrelationId);
        a.local = true;
        let values = generate_values(&a, &OcpiConfig::default()).unwrap();
        assert!(values[0].starts_with("Local:"));
        assert_eq!(values[0].len(), "Local:".len() + 30);
    }

    #[test]
    fn kinds_without_generator_rejected() {
        let err = generate_values(&args(KindArg::PartyId), &OcpiConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no random generator"));
    }

    #[test]
    fn invalid_flag_combinations_rejected() {
        let config = OcpiConfig::default();

        let mut zero = args(KindArg::AccessToken);
        zero.length = Some(0);
        assert!(generate_values(&zero, &config).is_err());

        let mut uuid_length = args(KindArg::UserId);
        uuid_length.length = Some(10);
        assert!(generate_values(&uuid_length, &config).is_err());

        let mut local_token = args(KindArg::AccessToken);
        local_token.local = true;
        assert!(generate_values(&local_token, &config).is_err());
    }

    #[test]
    fn oversized_count_is_rejected_without_allocating() {
        let mut a = args(KindArg::GroupId);
        a.count = usize::MAX;
        let err = generate_values(&a, &OcpiConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--count"));

        a.count = MAX_COUNT;
        assert_eq!(generate_values(&a, &OcpiConfig::default()).unwrap().len(), MAX_COUNT);
    }

    #[test]
    fn oversized_length_is_rejected() {
        let mut a = args(KindArg::AccessToken);
        a.length = Some(usize::MAX);
        let err = generate_values(&a, &OcpiConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--length"));
    }

    #[test]
    fn zero_count_yields_nothing() {
        let mut a = args(KindArg::GroupId);
        a.count = 0;
        assert!(generate_values(&a, &OcpiConfig::default()).unwrap().is_empty());
    }
}
