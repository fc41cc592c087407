//! # OCPI 3.0 Identifiers
//!
//! OCPI 3.0 addresses parties with a packed five-character [`PartyIdV3`]
//! (country code + party code), introduces UUID-generated identifiers for
//! reservations, users, groups and charging profiles, and adds the payment
//! registries.

use std::fmt;

pub use crate::common::{
    AccessToken, AuthenticationId, CorrelationId, CountryCode, Currency, EmspId, PartyId,
};

use crate::composite::{impl_composite_text, CompositePattern};
use crate::constraint::Constraint;
use crate::error::IdentifierError;
use crate::identifier::{identifier_kind, KindInfo};
use crate::policy::ComparisonPolicy;
use crate::registry::RegistryKind;

identifier_kind! {
    /// Identifier of a reservation. Generated as a UUID.
    ReservationId, ReservationIdKind, "reservation id", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 36 }
}

identifier_kind! {
    /// Identifier of a user. Generated as a UUID.
    UserId, UserIdKind, "user id", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 36 }
}

identifier_kind! {
    /// Identifier of a token group. Generated as a UUID.
    GroupId, GroupIdKind, "group id", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 36 }
}

identifier_kind! {
    /// Identifier of a smart-charging profile. Generated as a UUID.
    ChargingProfileId, ChargingProfileIdKind, "charging profile id", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 36 }
}

identifier_kind! {
    /// PEM-encoded certificate chain. Compared byte-exactly.
    CertificateChain, CertificateChainKind, "certificate chain", Ordinal
}

identifier_kind! {
    /// Role a party plays in OCPI 3.0. Registry-backed.
    Role, RoleKind, "role", OrdinalIgnoreCase
}

identifier_kind! {
    /// How a charging session is paid for. Registry-backed.
    PaymentMethod, PaymentMethodKind, "payment method", OrdinalIgnoreCase
}

identifier_kind! {
    /// Card scheme or wallet brand accepted for payment. Registry-backed.
    PaymentBrand, PaymentBrandKind, "payment brand", OrdinalIgnoreCase
}

/// Generates `new_random` for UUID-backed identifiers.
macro_rules! uuid_generated {
    ($($alias:ident),+ $(,)?) => {
        $(
            impl $alias {
                /// A fresh identifier holding a hyphenated UUIDv4.
                pub fn new_random() -> Self {
                    Self::random_uuid()
                }
            }
        )+
    };
}

uuid_generated!(ReservationId, UserId, GroupId, ChargingProfileId);

impl RegistryKind for RoleKind {
    const WELL_KNOWN: &'static [&'static str] = &[
        "CPO", "EMSP", "PTP", "HUB", "NAP", "NSP", "SCSP", "OTHER", "Unknown", "OpenData",
    ];
}

impl Role {
    /// Charge point operator.
    pub const CPO: &'static str = "CPO";
    /// E-mobility service provider.
    pub const EMSP: &'static str = "EMSP";
    /// Payment terminal provider.
    pub const PTP: &'static str = "PTP";
    /// Roaming hub.
    pub const HUB: &'static str = "HUB";
    /// National access point.
    pub const NAP: &'static str = "NAP";
    /// Navigation service provider.
    pub const NSP: &'static str = "NSP";
    /// Smart charging service provider.
    pub const SCSP: &'static str = "SCSP";
    /// Any other role.
    pub const OTHER: &'static str = "OTHER";
    /// Role not (yet) known.
    pub const UNKNOWN: &'static str = "Unknown";
    /// Consumer of public open data.
    pub const OPEN_DATA: &'static str = "OpenData";

    /// `true` if this role is [`Role::EMSP`].
    pub fn is_emsp(&self) -> bool {
        self.matches(Self::EMSP)
    }
}

impl RegistryKind for PaymentMethodKind {
    const WELL_KNOWN: &'static [&'static str] = &[
        "AD_HOC",
        "DIRECT",
        "CREDIT_CARD",
        "DEBIT_CARD",
        "INVOICE",
        "WALLET",
    ];
}

impl RegistryKind for PaymentBrandKind {
    const WELL_KNOWN: &'static [&'static str] = &[
        "VISA",
        "MASTERCARD",
        "AMEX",
        "MAESTRO",
        "GIROCARD",
        "PAYPAL",
        "APPLE_PAY",
        "GOOGLE_PAY",
    ];
}

// ---------------------------------------------------------------------------
// Party identifier v3 (composite)
// ---------------------------------------------------------------------------

/// OCPI 3.0 party identifier: two-character country code immediately
/// followed by a three-character party code, e.g. `DEGDF`.
///
/// Equality and ordering are component-wise, country code first, both
/// case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartyIdV3 {
    country_code: CountryCode,
    party_id: PartyId,
}

impl PartyIdV3 {
    /// Kind name used in error messages.
    pub const NAME: &'static str = "party id v3";

    /// Separator used when rendering for an eMSP.
    pub const EMSP_SEPARATOR: char = '-';

    /// Separator used when rendering for every other role.
    pub const OPERATOR_SEPARATOR: char = '*';

    const SHAPE: CompositePattern = CompositePattern {
        separator: "",
        head: Constraint::Alphanumeric { min: 2, max: 2 },
        tail: Constraint::Alphanumeric { min: 3, max: 3 },
    };

    /// Build from typed components if the party code is three alphanumerics.
    pub fn try_from_parts(country_code: CountryCode, party_id: PartyId) -> Option<Self> {
        Self::SHAPE
            .accepts(country_code.as_str(), party_id.as_str())
            .then_some(Self {
                country_code,
                party_id,
            })
    }

    /// Build from typed components.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::InvalidFormat`] unless the party id is
    /// exactly three ASCII alphanumerics.
    pub fn from_parts(
        country_code: CountryCode,
        party_id: PartyId,
    ) -> Result<Self, IdentifierError> {
        let rendered = format!("{country_code}{party_id}");
        Self::try_from_parts(country_code, party_id)
            .ok_or_else(|| IdentifierError::invalid_format(Self::NAME, rendered))
    }

    /// Parse five alphanumerics. Never panics.
    pub fn try_parse(text: &str) -> Option<Self> {
        let parsed = Self::SHAPE.split(text.trim()).and_then(|(country, party)| {
            Some(Self {
                country_code: CountryCode::try_parse(country)?,
                party_id: PartyId::try_parse(party)?,
            })
        });
        if parsed.is_none() {
            tracing::trace!(kind = Self::NAME, input = text, "rejected identifier");
        }
        parsed
    }

    /// Parse five alphanumerics.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::InvalidFormat`] when
    /// [`try_parse`](Self::try_parse) would return `None`.
    pub fn parse(text: &str) -> Result<Self, IdentifierError> {
        Self::try_parse(text).ok_or_else(|| IdentifierError::invalid_format(Self::NAME, text))
    }

    /// Parse possibly absent input. `None` never parses.
    pub fn parse_optional(text: Option<&str>) -> Option<Self> {
        text.and_then(Self::try_parse)
    }

    /// Country code component.
    pub fn country_code(&self) -> &CountryCode {
        &self.country_code
    }

    /// Party code component.
    pub fn party_id(&self) -> &PartyId {
        &self.party_id
    }

    /// Split into components.
    pub fn into_parts(self) -> (CountryCode, PartyId) {
        (self.country_code, self.party_id)
    }

    /// `true` only for the default party id.
    pub fn is_empty(&self) -> bool {
        self.country_code.is_empty() && self.party_id.is_empty()
    }

    /// Render as `CC-PPP` for an eMSP consumer, `CC*PPP` for any other role.
    pub fn render_for(&self, role: &Role) -> String {
        if self.is_empty() {
            return String::new();
        }
        let separator = if role.is_emsp() {
            Self::EMSP_SEPARATOR
        } else {
            Self::OPERATOR_SEPARATOR
        };
        format!("{}{separator}{}", self.country_code, self.party_id)
    }

    /// The equivalent OCPI 2.2 EMSP id.
    pub fn to_emsp_id(&self) -> Option<EmspId> {
        EmspId::try_from_parts(self.country_code.clone(), self.party_id.clone())
    }

    /// Describe this identifier kind.
    pub fn info() -> KindInfo {
        KindInfo {
            name: Self::NAME,
            policy: ComparisonPolicy::OrdinalIgnoreCase,
            constraint: Self::SHAPE.to_string(),
        }
    }
}

impl fmt::Display for PartyIdV3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.country_code, self.party_id)
    }
}

impl_composite_text!(PartyIdV3);
