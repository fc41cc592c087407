//! # ocpi-core: Validated OCPI Identifiers
//!
//! Identifier value types for the Open Charge Point Interface (OCPI) data
//! model, in the OCPI 2.2 ([`v2_2`]) and OCPI 3.0 ([`v3`]) namespaces.
//!
//! ## Key Design Principles
//!
//! 1. **One generic identifier.** Every simple identifier kind is
//!    `Identifier<K>` for a zero-sized kind marker `K` that fixes the kind's
//!    name, [`ComparisonPolicy`] and [`Constraint`] at compile time. Equality,
//!    ordering, hashing, parsing, `Display` and serde are written once.
//!
//! 2. **Hash follows equality structurally.** Case-insensitive kinds fold
//!    case inside the one policy primitive that equality, ordering, hashing
//!    and registry keys all share.
//!
//! 3. **One fallible primitive.** `try_parse` trims and validates; `parse`,
//!    `parse_optional`, `FromStr` and `Deserialize` derive from it.
//!
//! 4. **Composites compare by component.** [`EmspId`] and [`v3::PartyIdV3`]
//!    hold a typed [`CountryCode`] and [`PartyId`] and order country first.
//!
//! 5. **Registries are injected, not global.** Roles, payment methods and
//!    payment brands intern through a [`Registry`] the caller owns.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All identifiers are immutable, `Send + Sync`, and serialize as plain
//!   strings.

pub mod common;
pub mod composite;
pub mod config;
pub mod constraint;
pub mod error;
pub mod identifier;
pub mod policy;
pub mod random;
pub mod registry;
pub mod v2_2;
pub mod v3;

// Re-export primary types for ergonomic imports.
pub use common::{
    AccessToken, AuthenticationId, CorrelationId, CountryCode, Currency, EmspId, PartyId,
};
pub use composite::CompositePattern;
pub use config::{GeneratorConfig, OcpiConfig, RegistryConfig};
pub use constraint::Constraint;
pub use error::{ConfigError, IdentifierError};
pub use identifier::{Identifier, IdentifierKind, KindInfo};
pub use policy::ComparisonPolicy;
pub use registry::{Registries, Registry, RegistryKind};
