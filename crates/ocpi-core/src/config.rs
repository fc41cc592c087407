//! # Configuration
//!
//! Deployment configuration loaded from YAML: generator lengths and extra
//! registry seeds.
//!
//! ```yaml
//! generators:
//!   access_token_length: 64
//! registries:
//!   roles_v3: [BILLING]
//!   payment_brands: [UNIONPAY]
//! ```
//!
//! Every field has a default, so an empty document is a valid
//! configuration. Unknown keys are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{AccessToken, AuthenticationId, CorrelationId};
use crate::error::ConfigError;
use crate::identifier::{Identifier, IdentifierKind};
use crate::{v2_2, v3};

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OcpiConfig {
    /// Random identifier generation.
    pub generators: GeneratorConfig,
    /// Extra registry seeds.
    pub registries: RegistryConfig,
}

/// Lengths used when generating random identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Characters in a generated access token.
    pub access_token_length: usize,
    /// Characters in the random part of a generated correlation id.
    pub correlation_id_length: usize,
    /// Characters in a generated authentication id.
    pub authentication_id_length: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            access_token_length: AccessToken::DEFAULT_RANDOM_LENGTH,
            correlation_id_length: CorrelationId::DEFAULT_RANDOM_LENGTH,
            authentication_id_length: AuthenticationId::DEFAULT_RANDOM_LENGTH,
        }
    }
}

impl GeneratorConfig {
    /// Largest accepted generator length.
    pub const MAX_LENGTH: usize = 4096;

    /// A random access token of the configured length.
    pub fn access_token(&self) -> AccessToken {
        AccessToken::new_random(self.access_token_length)
    }

    /// A random correlation id of the configured length, optionally marked
    /// as locally originated.
    pub fn correlation_id(&self, local: bool) -> CorrelationId {
        if local {
            CorrelationId::new_random_local(self.correlation_id_length)
        } else {
            CorrelationId::new_random(self.correlation_id_length)
        }
    }

    /// A random authentication id of the configured length.
    pub fn authentication_id(&self) -> AuthenticationId {
        AuthenticationId::new_random(self.authentication_id_length)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("generators.access_token_length", self.access_token_length),
            ("generators.correlation_id_length", self.correlation_id_length),
            (
                "generators.authentication_id_length",
                self.authentication_id_length,
            ),
        ];
        for (field, value) in lengths {
            if value == 0 || value > Self::MAX_LENGTH {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("length must be between 1 and {}", Self::MAX_LENGTH),
                });
            }
        }
        Ok(())
    }
}

/// Values added to each registry on top of its well-known seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Extra OCPI 2.2 roles.
    pub roles_v2: Vec<String>,
    /// Extra OCPI 3.0 roles.
    pub roles_v3: Vec<String>,
    /// Extra payment methods.
    pub payment_methods: Vec<String>,
    /// Extra payment brands.
    pub payment_brands: Vec<String>,
}

impl RegistryConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        check_seeds::<v2_2::RoleKind>("registries.roles_v2", &self.roles_v2)?;
        check_seeds::<v3::RoleKind>("registries.roles_v3", &self.roles_v3)?;
        check_seeds::<v3::PaymentMethodKind>(
            "registries.payment_methods",
            &self.payment_methods,
        )?;
        check_seeds::<v3::PaymentBrandKind>("registries.payment_brands", &self.payment_brands)?;
        Ok(())
    }
}

fn check_seeds<K: IdentifierKind>(
    field: &'static str,
    seeds: &[String],
) -> Result<(), ConfigError> {
    for seed in seeds {
        Identifier::<K>::parse(seed)
            .map_err(|source| ConfigError::InvalidSeed { field, source })?;
    }
    Ok(())
}

impl OcpiConfig {
    /// Parse and validate a YAML document. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] for malformed or unknown fields, and
    /// [`ConfigError::InvalidValue`] / [`ConfigError::InvalidSeed`] when a
    /// value fails validation.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`OcpiConfig::from_yaml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check every field. Called by the loaders.
    ///
    /// # Errors
    ///
    /// See [`OcpiConfig::from_yaml_str`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generators.validate()?;
        self.registries.validate()
    }
}
