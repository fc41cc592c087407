//! # OCPI 2.2 Identifiers
//!
//! Identifier kinds of the OCPI 2.2 data model. Module-object identifiers
//! follow the `CiString(n)` convention of the protocol: case-insensitive
//! text with a maximum length.

pub use crate::common::{
    AccessToken, AuthenticationId, CorrelationId, CountryCode, Currency, EmspId, PartyId,
};

use crate::constraint::Constraint;
use crate::identifier::identifier_kind;
use crate::registry::RegistryKind;

identifier_kind! {
    /// Identifier of a location, unique per CPO (`CiString(36)`).
    LocationId, LocationIdKind, "location id", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 36 }
}

identifier_kind! {
    /// Internal identifier of an EVSE, unique per CPO (`CiString(36)`).
    EvseUid, EvseUidKind, "EVSE uid", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 36 }
}

identifier_kind! {
    /// eMI3 EVSE identifier shown to drivers (e.g. `DE*GDF*E12345*1`).
    EvseId, EvseIdKind, "EVSE id", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 48 }
}

identifier_kind! {
    /// Identifier of a connector within its EVSE (`CiString(36)`).
    ConnectorId, ConnectorIdKind, "connector id", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 36 }
}

identifier_kind! {
    /// Identifier of a charging session (`CiString(36)`).
    SessionId, SessionIdKind, "session id", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 36 }
}

identifier_kind! {
    /// Identifier of a charge detail record (`CiString(39)`).
    CdrId, CdrIdKind, "CDR id", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 39 }
}

identifier_kind! {
    /// Identifier of a tariff (`CiString(36)`).
    TariffId, TariffIdKind, "tariff id", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 36 }
}

identifier_kind! {
    /// Unique identifier of a token within an eMSP (`CiString(36)`).
    TokenUid, TokenUidKind, "token uid", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 36 }
}

identifier_kind! {
    /// Reference to a real-time authorization (`CiString(36)`).
    AuthorizationReference, AuthorizationReferenceKind, "authorization reference",
    OrdinalIgnoreCase, Constraint::Length { min: 1, max: 36 }
}

identifier_kind! {
    /// Protocol version label from the versions endpoint (e.g. `2.2.1`).
    VersionNumber, VersionNumberKind, "version number", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 10 }
}

identifier_kind! {
    /// Role a party plays in OCPI 2.2. Registry-backed.
    Role, RoleKind, "role", OrdinalIgnoreCase
}

impl RegistryKind for RoleKind {
    const WELL_KNOWN: &'static [&'static str] =
        &["CPO", "EMSP", "HUB", "NAP", "NSP", "OTHER", "SCSP"];
}

impl Role {
    /// Charge point operator.
    pub const CPO: &'static str = "CPO";
    /// E-mobility service provider.
    pub const EMSP: &'static str = "EMSP";
    /// Roaming hub.
    pub const HUB: &'static str = "HUB";
    /// National access point.
    pub const NAP: &'static str = "NAP";
    /// Navigation service provider.
    pub const NSP: &'static str = "NSP";
    /// Any other role.
    pub const OTHER: &'static str = "OTHER";
    /// Smart charging service provider.
    pub const SCSP: &'static str = "SCSP";

    /// `true` if this role is [`Role::EMSP`].
    pub fn is_emsp(&self) -> bool {
        self.matches(Self::EMSP)
    }
}
