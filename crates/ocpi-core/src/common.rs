//! # Shared Identifier Kinds
//!
//! Identifier kinds whose format and comparison policy are identical in
//! OCPI 2.2 and OCPI 3.0. Both version namespaces re-export them.
//!
//! | Kind | Policy | Format |
//! |------|--------|--------|
//! | [`CountryCode`] | ignore case | exactly 2 ASCII alphanumerics |
//! | [`PartyId`] | ignore case | 1-3 characters |
//! | [`EmspId`] | ignore case | `CC-PPP`, country code + 2-10 alphanumerics |
//! | [`AccessToken`] | ordinal | non-empty |
//! | [`CorrelationId`] | ordinal | non-empty |
//! | [`AuthenticationId`] | ordinal | non-empty |
//! | [`Currency`] | ignore case | exactly 3 ASCII letters |

use std::fmt;

use crate::composite::{impl_composite_text, CompositePattern};
use crate::constraint::Constraint;
use crate::error::IdentifierError;
use crate::identifier::{identifier_kind, KindInfo};
use crate::policy::ComparisonPolicy;

identifier_kind! {
    /// ISO 3166-1 alpha-2 country code of a party (e.g. `DE`).
    CountryCode, CountryCodeKind, "country code", OrdinalIgnoreCase,
    Constraint::Alphanumeric { min: 2, max: 2 }
}

identifier_kind! {
    /// Party code assigned to a CPO or eMSP within its country (e.g. `GDF`).
    PartyId, PartyIdKind, "party id", OrdinalIgnoreCase,
    Constraint::Length { min: 1, max: 3 }
}

identifier_kind! {
    /// Credentials token exchanged in the `Authorization: Token` header.
    AccessToken, AccessTokenKind, "access token", Ordinal
}

identifier_kind! {
    /// Value of the `X-Correlation-ID` header.
    ///
    /// Locally originated values carry the [`CorrelationId::LOCAL_PREFIX`]
    /// marker inside the text itself.
    CorrelationId, CorrelationIdKind, "correlation id", Ordinal
}

identifier_kind! {
    /// Authentication identifier of a token holder (e.g. an RFID UID).
    AuthenticationId, AuthenticationIdKind, "authentication id", Ordinal
}

identifier_kind! {
    /// ISO 4217 currency code (e.g. `EUR`).
    Currency, CurrencyKind, "currency", OrdinalIgnoreCase,
    Constraint::Alphabetic { min: 3, max: 3 }
}

impl AccessToken {
    /// Length of [`AccessToken::random`] output.
    pub const DEFAULT_RANDOM_LENGTH: usize = 50;

    /// A random access token of `length` alphanumerics (minimum 1).
    pub fn new_random(length: usize) -> Self {
        Self::random_alphanumeric(length)
    }

    /// A random access token of [`Self::DEFAULT_RANDOM_LENGTH`].
    pub fn random() -> Self {
        Self::new_random(Self::DEFAULT_RANDOM_LENGTH)
    }
}

impl CorrelationId {
    /// Length of the random part of [`CorrelationId::random`] output.
    pub const DEFAULT_RANDOM_LENGTH: usize = 30;

    /// Marker prefixed to correlation ids generated by this node.
    pub const LOCAL_PREFIX: &'static str = "Local:";

    /// A random correlation id of `length` alphanumerics (minimum 1).
    pub fn new_random(length: usize) -> Self {
        Self::random_alphanumeric(length)
    }

    /// A random correlation id of [`Self::DEFAULT_RANDOM_LENGTH`].
    pub fn random() -> Self {
        Self::new_random(Self::DEFAULT_RANDOM_LENGTH)
    }

    /// A random, locally originated correlation id: [`Self::LOCAL_PREFIX`]
    /// followed by `length` alphanumerics (minimum 1).
    pub fn new_random_local(length: usize) -> Self {
        let body = crate::random::alphanumeric(length.max(1));
        Self::from_generated(format!("{}{body}", Self::LOCAL_PREFIX))
    }

    /// `true` if this id was generated locally.
    pub fn is_local(&self) -> bool {
        self.as_str().starts_with(Self::LOCAL_PREFIX)
    }
}

impl AuthenticationId {
    /// Length of [`AuthenticationId::random`] output.
    pub const DEFAULT_RANDOM_LENGTH: usize = 30;

    /// A random authentication id of `length` alphanumerics (minimum 1).
    pub fn new_random(length: usize) -> Self {
        Self::random_alphanumeric(length)
    }

    /// A random authentication id of [`Self::DEFAULT_RANDOM_LENGTH`].
    pub fn random() -> Self {
        Self::new_random(Self::DEFAULT_RANDOM_LENGTH)
    }
}

// ---------------------------------------------------------------------------
// EMSP identifier (composite)
// ---------------------------------------------------------------------------

/// Identifier of an e-mobility service provider: `{country}-{party}`.
///
/// Built from a [`CountryCode`] and a [`PartyId`]. Equality and ordering are
/// component-wise, country code first. The text form must match
/// [`EmspId::PATTERN`], so the effective party part is 2-3 characters: the
/// pattern demands at least two and [`PartyId`] allows at most three.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmspId {
    country_code: CountryCode,
    party_id: PartyId,
}

impl EmspId {
    /// Kind name used in error messages.
    pub const NAME: &'static str = "EMSP id";

    /// Textual pattern of a valid EMSP id.
    ///
    /// The party part must also be a valid [`PartyId`] (at most three
    /// characters), so `DE-ABCD` through `DE-ABCDEFGHIJ` match the pattern
    /// but are rejected.
    pub const PATTERN: &'static str = "^([a-zA-Z0-9]{2})-([a-zA-Z0-9]{2,10})$";

    /// Separator between country code and party id.
    pub const SEPARATOR: &'static str = "-";

    const SHAPE: CompositePattern = CompositePattern {
        separator: Self::SEPARATOR,
        head: Constraint::Alphanumeric { min: 2, max: 2 },
        tail: Constraint::Alphanumeric { min: 2, max: 10 },
    };

    /// Build from typed components if their rendering matches the pattern.
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
    /// Returns [`IdentifierError::InvalidFormat`] if `{country}-{party}` does
    /// not match [`Self::PATTERN`] (e.g. a one-character party id).
    pub fn from_parts(
        country_code: CountryCode,
        party_id: PartyId,
    ) -> Result<Self, IdentifierError> {
        let rendered = format!("{country_code}{}{party_id}", Self::SEPARATOR);
        Self::try_from_parts(country_code, party_id)
            .ok_or_else(|| IdentifierError::invalid_format(Self::NAME, rendered))
    }

    /// Parse `CC-PPP` text. Never panics.
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

    /// Parse `CC-PPP` text.
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

    /// Party id component.
    pub fn party_id(&self) -> &PartyId {
        &self.party_id
    }

    /// Split into components.
    pub fn into_parts(self) -> (CountryCode, PartyId) {
        (self.country_code, self.party_id)
    }

    /// `true` only for the default EMSP id.
    pub fn is_empty(&self) -> bool {
        self.country_code.is_empty() && self.party_id.is_empty()
    }

    /// Describe this identifier kind.
    pub fn info() -> KindInfo {
        KindInfo {
            name: Self::NAME,
            policy: ComparisonPolicy::OrdinalIgnoreCase,
            constraint: Self::PATTERN.to_string(),
        }
    }
}

impl fmt::Display for EmspId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}{}{}", self.country_code, Self::SEPARATOR, self.party_id)
    }
}

impl_composite_text!(EmspId);
