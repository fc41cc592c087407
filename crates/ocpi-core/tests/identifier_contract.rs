//! # Identifier Contract Tests
//!
//! Exercises the public parse / compare / render contract across every
//! identifier kind through the crate's public API only.
//!
//! ## How It Works
//!
//! 1. **Per-kind vectors**: each kind gets one valid sample with surrounding
//!    whitespace. The sample must parse, trim, render, and re-parse to an
//!    equal value.
//!
//! 2. **Rejection boundary**: blank and absent input is rejected by every
//!    kind, through all three parse shapes.
//!
//! 3. **Interop vectors**: the worked examples from the protocol notes
//!    (`DE `, `TOOLONG`, `DE-GDF`) are checked literally.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use ocpi_core::{v2_2, v3};
use ocpi_core::{
    ComparisonPolicy, CountryCode, EmspId, Identifier, IdentifierError, IdentifierKind, PartyId,
    Registries,
};

/// Helper: hash a value with the std hasher.
fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Helper: assert the full simple-identifier contract for one sample.
fn assert_contract<K: IdentifierKind>(sample: &str) {
    let padded = format!("  {sample}\t");
    let id = Identifier::<K>::parse(&padded)
        .unwrap_or_else(|e| panic!("{} rejected {padded:?}: {e}", K::NAME));
    assert_eq!(id.as_str(), sample, "{} did not trim", K::NAME);

    let back = Identifier::<K>::parse(&id.to_string()).unwrap();
    assert_eq!(back, id, "{} round-trip", K::NAME);
    assert_eq!(back.cmp(&id), std::cmp::Ordering::Equal);
    assert_eq!(hash_of(&back), hash_of(&id));

    for blank in ["", "   ", "\t\n"] {
        assert!(Identifier::<K>::try_parse(blank).is_none(), "{} accepted blank", K::NAME);
        assert!(Identifier::<K>::parse(blank).is_err());
    }
    assert!(Identifier::<K>::parse_optional(None).is_none());

    if K::POLICY == ComparisonPolicy::OrdinalIgnoreCase {
        let flipped: String = sample
            .chars()
            .map(|c| {
                if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .collect();
        let other = Identifier::<K>::parse(&flipped).unwrap();
        assert_eq!(other, id, "{} should ignore case", K::NAME);
        assert_eq!(hash_of(&other), hash_of(&id));
    }
}

// ---------------------------------------------------------------------------
// Per-kind vectors
// ---------------------------------------------------------------------------

#[test]
fn shared_kinds_honor_contract() {
    assert_contract::<ocpi_core::common::CountryCodeKind>("DE");
    assert_contract::<ocpi_core::common::PartyIdKind>("GDF");
    assert_contract::<ocpi_core::common::AccessTokenKind>("b4d9a1f0-token");
    assert_contract::<ocpi_core::common::CorrelationIdKind>("Local:abc123");
    assert_contract::<ocpi_core::common::AuthenticationIdKind>("04A1B2C3");
    assert_contract::<ocpi_core::common::CurrencyKind>("EUR");
}

#[test]
fn v2_2_kinds_honor_contract() {
    assert_contract::<v2_2::LocationIdKind>("LOC1");
    assert_contract::<v2_2::EvseUidKind>("3256");
    assert_contract::<v2_2::EvseIdKind>("BE*BEC*E041503001");
    assert_contract::<v2_2::ConnectorIdKind>("1");
    assert_contract::<v2_2::SessionIdKind>("101");
    assert_contract::<v2_2::CdrIdKind>("12345");
    assert_contract::<v2_2::TariffIdKind>("12");
    assert_contract::<v2_2::TokenUidKind>("012345678");
    assert_contract::<v2_2::AuthorizationReferenceKind>("567890");
    assert_contract::<v2_2::VersionNumberKind>("2.2.1");
    assert_contract::<v2_2::RoleKind>("CPO");
}

#[test]
fn v3_kinds_honor_contract() {
    assert_contract::<v3::ReservationIdKind>("a1b2c3d4-0000-4000-8000-000000000001");
    assert_contract::<v3::UserIdKind>("user-42");
    assert_contract::<v3::GroupIdKind>("fleet-7");
    assert_contract::<v3::ChargingProfileIdKind>("profile-1");
    assert_contract::<v3::CertificateChainKind>("-----BEGIN CERTIFICATE-----");
    assert_contract::<v3::RoleKind>("OpenData");
    assert_contract::<v3::PaymentMethodKind>("CREDIT_CARD");
    assert_contract::<v3::PaymentBrandKind>("MASTERCARD");
}

// ---------------------------------------------------------------------------
// Case policy
// ---------------------------------------------------------------------------

#[test]
fn party_id_ignores_case_access_token_does_not() {
    assert_eq!(PartyId::parse("CPO").unwrap(), PartyId::parse("cpo").unwrap());
    assert_ne!(
        ocpi_core::AccessToken::parse("CPO").unwrap(),
        ocpi_core::AccessToken::parse("cpo").unwrap()
    );
}

// ---------------------------------------------------------------------------
// Interop vectors
// ---------------------------------------------------------------------------

#[test]
fn party_id_trailing_space_is_trimmed() {
    let id = PartyId::try_parse("DE ").expect("DE should parse");
    assert_eq!(id.as_str(), "DE");
    assert_eq!(id.len(), 2);
}

#[test]
fn party_id_too_long_is_rejected() {
    assert!(PartyId::try_parse("TOOLONG").is_none());
    assert_eq!(
        PartyId::parse("TOOLONG").unwrap_err(),
        IdentifierError::invalid_format("party id", "TOOLONG")
    );
}

#[test]
fn emsp_id_from_parts_renders_de_gdf() {
    let id = EmspId::from_parts(
        CountryCode::parse("DE").unwrap(),
        PartyId::parse("GDF").unwrap(),
    )
    .unwrap();
    assert_eq!(id.to_string(), "DE-GDF");

    let back = EmspId::parse(&id.to_string()).unwrap();
    assert_eq!(back.country_code().as_str(), "DE");
    assert_eq!(back.party_id().as_str(), "GDF");
}

#[test]
fn party_id_v3_length_boundary() {
    assert!(v3::PartyIdV3::try_parse("AB").is_none());
    assert!(v3::PartyIdV3::try_parse("ABCDE").is_some());
    assert!(v3::PartyIdV3::try_parse("AB CD").is_none());
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

#[test]
fn access_token_generator_output_parses() {
    let token = ocpi_core::AccessToken::new_random(50);
    assert_eq!(token.len(), 50);
    assert!(ocpi_core::AccessToken::try_parse(&token.to_string()).is_some());
}

// ---------------------------------------------------------------------------
// Registries
// ---------------------------------------------------------------------------

#[test]
fn registry_idempotence_across_threads() {
    let registries = Arc::new(Registries::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registries = Arc::clone(&registries);
            std::thread::spawn(move || registries.roles_v3.parse("NewRole").unwrap())
        })
        .collect();
    let roles: Vec<v3::Role> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(roles.windows(2).all(|w| w[0] == w[1] && w[0].ptr_eq(&w[1])));
    let entries = registries
        .roles_v3
        .all()
        .into_iter()
        .filter(|r| r.matches("newrole"))
        .count();
    assert_eq!(entries, 1);
}

#[test]
fn registry_parse_and_plain_parse_agree_on_value() {
    let registries = Registries::new();
    let interned = registries.payment_methods.parse("wallet").unwrap();
    let plain = v3::PaymentMethod::parse("WALLET").unwrap();
    assert_eq!(interned, plain);
    assert_eq!(interned.as_str(), "WALLET");
}
