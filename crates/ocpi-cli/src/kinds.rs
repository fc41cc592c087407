//! # Kind Catalog
//!
//! Maps the kind names accepted on the command line to the identifier types
//! in `ocpi-core`, and implements the `ocpi kinds` subcommand.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use ocpi_core::{v2_2, v3};
use ocpi_core::{
    EmspId, GeneratorConfig, Identifier, IdentifierError, IdentifierKind, KindInfo, Registries,
};

/// Every identifier kind the CLI can parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    // Shared by OCPI 2.2 and 3.0.
    /// Country code, e.g. `DE`.
    CountryCode,
    /// Party code, e.g. `GDF`.
    PartyId,
    /// EMSP id, e.g. `DE-GDF`.
    EmspId,
    /// Credentials token.
    AccessToken,
    /// `X-Correlation-ID` header value.
    CorrelationId,
    /// Token holder authentication id.
    AuthenticationId,
    /// ISO 4217 currency code.
    Currency,
    // OCPI 2.2.
    /// Location id.
    LocationId,
    /// EVSE uid.
    EvseUid,
    /// EVSE id, e.g. `BE*BEC*E041503001`.
    EvseId,
    /// Connector id.
    ConnectorId,
    /// Session id.
    SessionId,
    /// CDR id.
    CdrId,
    /// Tariff id.
    TariffId,
    /// Token uid.
    TokenUid,
    /// Authorization reference.
    AuthorizationReference,
    /// Protocol version number, e.g. `2.2.1`.
    VersionNumber,
    /// OCPI 2.2 role.
    RoleV2,
    // OCPI 3.0.
    /// Packed party id, e.g. `DEGDF`.
    PartyIdV3,
    /// Reservation id.
    ReservationId,
    /// User id.
    UserId,
    /// Token group id.
    GroupId,
    /// Smart-charging profile id.
    ChargingProfileId,
    /// Certificate chain.
    CertificateChain,
    /// OCPI 3.0 role.
    RoleV3,
    /// Payment method.
    PaymentMethod,
    /// Payment brand.
    PaymentBrand,
}

/// Protocol namespace a kind lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    /// Shared by both protocol versions.
    Common,
    /// OCPI 2.2.
    V2_2,
    /// OCPI 3.0.
    V3,
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Common => "common",
            Self::V2_2 => "2.2",
            Self::V3 => "3.0",
        })
    }
}

fn canonical<K: IdentifierKind>(text: &str) -> Result<String, IdentifierError> {
    Identifier::<K>::parse(text).map(|id| id.to_string())
}

impl KindArg {
    /// The name clap accepts for this kind.
    pub fn cli_name(self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }

    /// Protocol namespace the kind is defined in.
    pub fn namespace(self) -> Namespace {
        match self {
            Self::CountryCode
            | Self::PartyId
            | Self::EmspId
            | Self::AccessToken
            | Self::CorrelationId
            | Self::AuthenticationId
            | Self::Currency => Namespace::Common,
            Self::LocationId
            | Self::EvseUid
            | Self::EvseId
            | Self::ConnectorId
            | Self::SessionId
            | Self::CdrId
            | Self::TariffId
            | Self::TokenUid
            | Self::AuthorizationReference
            | Self::VersionNumber
            | Self::RoleV2 => Namespace::V2_2,
            Self::PartyIdV3
            | Self::ReservationId
            | Self::UserId
            | Self::GroupId
            | Self::ChargingProfileId
            | Self::CertificateChain
            | Self::RoleV3
            | Self::PaymentMethod
            | Self::PaymentBrand => Namespace::V3,
        }
    }

    /// `true` for kinds whose values intern through a registry.
    pub fn is_registry_backed(self) -> bool {
        matches!(
            self,
            Self::RoleV2 | Self::RoleV3 | Self::PaymentMethod | Self::PaymentBrand
        )
    }

    /// Parse `text` as this kind and return its canonical text.
    ///
    /// Registry-backed kinds resolve through `registries`, so a known value
    /// comes back in its registered spelling.
    pub fn parse(self, text: &str, registries: &Registries) -> Result<String, IdentifierError> {
        match self {
            Self::CountryCode => canonical::<ocpi_core::common::CountryCodeKind>(text),
            Self::PartyId => canonical::<ocpi_core::common::PartyIdKind>(text),
            Self::EmspId => EmspId::parse(text).map(|id| id.to_string()),
            Self::AccessToken => canonical::<ocpi_core::common::AccessTokenKind>(text),
            Self::CorrelationId => canonical::<ocpi_core::common::CorrelationIdKind>(text),
            Self::AuthenticationId => canonical::<ocpi_core::common::AuthenticationIdKind>(text),
            Self::Currency => canonical::<ocpi_core::common::CurrencyKind>(text),
            Self::LocationId => canonical::<v2_2::LocationIdKind>(text),
            Self::EvseUid => canonical::<v2_2::EvseUidKind>(text),
            Self::EvseId => canonical::<v2_2::EvseIdKind>(text),
            Self::ConnectorId => canonical::<v2_2::ConnectorIdKind>(text),
            Self::SessionId => canonical::<v2_2::SessionIdKind>(text),
            Self::CdrId => canonical::<v2_2::CdrIdKind>(text),
            Self::TariffId => canonical::<v2_2::TariffIdKind>(text),
            Self::TokenUid => canonical::<v2_2::TokenUidKind>(text),
            Self::AuthorizationReference => canonical::<v2_2::AuthorizationReferenceKind>(text),
            Self::VersionNumber => canonical::<v2_2::VersionNumberKind>(text),
            Self::RoleV2 => registries.roles_v2.parse(text).map(|id| id.to_string()),
            Self::PartyIdV3 => v3::PartyIdV3::parse(text).map(|id| id.to_string()),
            Self::ReservationId => canonical::<v3::ReservationIdKind>(text),
            Self::UserId => canonical::<v3::UserIdKind>(text),
            Self::GroupId => canonical::<v3::GroupIdKind>(text),
            Self::ChargingProfileId => canonical::<v3::ChargingProfileIdKind>(text),
            Self::CertificateChain => canonical::<v3::CertificateChainKind>(text),
            Self::RoleV3 => registries.roles_v3.parse(text).map(|id| id.to_string()),
            Self::PaymentMethod => registries
                .payment_methods
                .parse(text)
                .map(|id| id.to_string()),
            Self::PaymentBrand => registries
                .payment_brands
                .parse(text)
                .map(|id| id.to_string()),
        }
    }

    /// `true` if [`KindArg::generate`] produces values for this kind.
    pub fn can_generate(self) -> bool {
        matches!(
            self,
            Self::AccessToken
                | Self::CorrelationId
                | Self::AuthenticationId
                | Self::ReservationId
                | Self::UserId
                | Self::GroupId
                | Self::ChargingProfileId
        )
    }

    /// `true` if `length` applies to this kind's generator. UUID kinds have
    /// a fixed length.
    pub fn takes_length(self) -> bool {
        matches!(
            self,
            Self::AccessToken | Self::CorrelationId | Self::AuthenticationId
        )
    }

    /// Generate one random value. `length` overrides the configured length
    /// for alphanumeric generators; `local` marks a correlation id as
    /// locally originated. Returns `None` for kinds without a generator.
    pub fn generate(
        self,
        length: Option<usize>,
        local: bool,
        generators: &GeneratorConfig,
    ) -> Option<String> {
        let value = match self {
            Self::AccessToken => length
                .map(ocpi_core::AccessToken::new_random)
                .unwrap_or_else(|| generators.access_token())
                .to_string(),
            Self::CorrelationId => match (length, local) {
                (Some(n), true) => ocpi_core::CorrelationId::new_random_local(n).to_string(),
                (Some(n), false) => ocpi_core::CorrelationId::new_random(n).to_string(),
                (None, local) => generators.correlation_id(local).to_string(),
            },
            Self::AuthenticationId => length
                .map(ocpi_core::AuthenticationId::new_random)
                .unwrap_or_else(|| generators.authentication_id())
                .to_string(),
            Self::ReservationId => v3::ReservationId::new_random().to_string(),
            Self::UserId => v3::UserId::new_random().to_string(),
            Self::GroupId => v3::GroupId::new_random().to_string(),
            Self::ChargingProfileId => v3::ChargingProfileId::new_random().to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Name, comparison policy and format rule of this kind.
    pub fn info(self) -> KindInfo {
        match self {
            Self::CountryCode => ocpi_core::CountryCode::info(),
            Self::PartyId => ocpi_core::PartyId::info(),
            Self::EmspId => EmspId::info(),
            Self::AccessToken => ocpi_core::AccessToken::info(),
            Self::CorrelationId => ocpi_core::CorrelationId::info(),
            Self::AuthenticationId => ocpi_core::AuthenticationId::info(),
            Self::Currency => ocpi_core::Currency::info(),
            Self::LocationId => v2_2::LocationId::info(),
            Self::EvseUid => v2_2::EvseUid::info(),
            Self::EvseId => v2_2::EvseId::info(),
            Self::ConnectorId => v2_2::ConnectorId::info(),
            Self::SessionId => v2_2::SessionId::info(),
            Self::CdrId => v2_2::CdrId::info(),
            Self::TariffId => v2_2::TariffId::info(),
            Self::TokenUid => v2_2::TokenUid::info(),
            Self::AuthorizationReference => v2_2::AuthorizationReference::info(),
            Self::VersionNumber => v2_2::VersionNumber::info(),
            Self::RoleV2 => v2_2::Role::info(),
            Self::PartyIdV3 => v3::PartyIdV3::info(),
            Self::ReservationId => v3::ReservationId::info(),
            Self::UserId => v3::UserId::info(),
            Self::GroupId => v3::GroupId::info(),
            Self::ChargingProfileId => v3::ChargingProfileId::info(),
            Self::CertificateChain => v3::CertificateChain::info(),
            Self::RoleV3 => v3::Role::info(),
            Self::PaymentMethod => v3::PaymentMethod::info(),
            Self::PaymentBrand => v3::PaymentBrand::info(),
        }
    }
}

/// Arguments for the `ocpi kinds` subcommand.
#[derive(Args, Debug)]
pub struct KindsArgs {
    /// Print the catalog as JSON.
    #[arg(long)]
    pub json: bool,
}

/// One row of the kind catalog.
#[derive(Debug, Clone, Serialize)]
pub struct KindRow {
    /// Name accepted on the command line.
    pub kind: String,
    /// Protocol namespace.
    pub namespace: Namespace,
    /// Kind name, comparison policy and format rule.
    #[serde(flatten)]
    pub info: KindInfo,
    /// Values intern through a registry.
    pub registry: bool,
    /// `ocpi generate` supports the kind.
    pub generator: bool,
}

/// The full catalog, in declaration order.
pub fn catalog() -> Vec<KindRow> {
    KindArg::value_variants()
        .iter()
        .map(|&kind| KindRow {
            kind: kind.cli_name(),
            namespace: kind.namespace(),
            info: kind.info(),
            registry: kind.is_registry_backed(),
            generator: kind.can_generate(),
        })
        .collect()
}

/// Render the catalog as an aligned text table.
pub fn render_table(rows: &[KindRow]) -> String {
    let width = rows.iter().map(|r| r.kind.len()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let mut flags = Vec::new();
        if row.registry {
            flags.push("registry");
        }
        if row.generator {
            flags.push("generator");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        out.push_str(&format!(
            "{:<width$}  {:<6}  {:<19}  {}{}\n",
            row.kind,
            row.namespace,
            row.info.policy.as_str(),
            row.info.constraint,
            flags
        ));
    }
    out
}

/// Execute the kinds subcommand.
pub fn run_kinds(args: &KindsArgs) -> Result<u8> {
    let rows = catalog();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_table(&rows));
    }
    Ok(0)
}
