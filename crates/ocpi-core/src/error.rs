//! # Error Types
//!
//! Defines the error types used throughout the OCPI identifier toolkit. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Identifier parsing has exactly one failure mode, [`IdentifierError::InvalidFormat`],
//!   which names the identifier kind and echoes the rejected input verbatim.
//! - `try_parse` entry points never produce an error value; they report
//!   failure through `Option`.
//! - Configuration errors carry the offending field name.

use thiserror::Error;

/// Error raised by the fallible `parse` entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The input text is not a valid representation of the identifier kind.
    #[error("invalid {kind} format: '{input}'")]
    InvalidFormat {
        /// Human-readable name of the identifier kind.
        kind: &'static str,
        /// The rejected input, untrimmed.
        input: String,
    },
}

impl IdentifierError {
    /// Build an [`IdentifierError::InvalidFormat`] for `kind`.
    pub fn invalid_format(kind: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            kind,
            input: input.into(),
        }
    }

    /// Name of the identifier kind that rejected the input.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat { kind, .. } => kind,
        }
    }

    /// The rejected input text.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input, .. } => input,
        }
    }
}

/// Error while loading or validating an [`OcpiConfig`](crate::config::OcpiConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration document is not valid YAML for the schema.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A field holds a value outside its permitted range.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A registry seed entry is not a valid identifier.
    #[error("invalid registry seed in `{field}`: {source}")]
    InvalidSeed {
        /// Dotted path of the offending seed list.
        field: &'static str,
        /// The underlying identifier error.
        #[source]
        source: IdentifierError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_message_names_kind_and_input() {
        let err = IdentifierError::invalid_format("party id", "TOOLONG");
        assert_eq!(err.to_string(), "invalid party id format: 'TOOLONG'");
        assert_eq!(err.kind(), "party id");
        assert_eq!(err.input(), "TOOLONG");
    }

    #[test]
    fn invalid_format_echoes_whitespace_verbatim() {
        let err = IdentifierError::invalid_format("country code", "  D E ");
        assert!(err.to_string().contains("'  D E '"));
    }

    #[test]
    fn config_error_seed_chains_source() {
        use std::error::Error as _;

        let err = ConfigError::InvalidSeed {
            field: "registries.roles_v3",
            source: IdentifierError::invalid_format("role", ""),
        };
        assert!(err.to_string().contains("registries.roles_v3"));
        assert!(err.source().is_some());
    }
}
