//! # Validated Identifier
//!
//! The single generic value type every simple OCPI identifier instantiates.
//! An [`Identifier<K>`] wraps trimmed text that satisfied the kind's
//! [`Constraint`], and compares, orders and hashes it under the kind's
//! [`ComparisonPolicy`]. Kinds are zero-sized marker types implementing
//! [`IdentifierKind`]; concrete identifiers are type aliases such as
//! `type PartyId = Identifier<PartyIdKind>`.
//!
//! ## Parse Contract
//!
//! - [`Identifier::try_parse`] is the one fallible primitive. It trims,
//!   checks the constraint, and never panics.
//! - [`Identifier::parse`], [`Identifier::parse_optional`], [`FromStr`] and
//!   serde deserialization are all derived from it, so they cannot disagree.
//!
//! ## Empty State
//!
//! `Identifier::default()` is the explicit empty identifier. No parse path
//! ever produces it. It renders as `""` and hashes to
//! [`EMPTY_HASH_SENTINEL`](crate::policy::EMPTY_HASH_SENTINEL).

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::error::IdentifierError;
use crate::policy::ComparisonPolicy;
use crate::random;

/// Compile-time configuration of one identifier kind.
pub trait IdentifierKind: 'static {
    /// Human-readable kind name used in error messages.
    const NAME: &'static str;
    /// Comparison policy for equality, ordering and hashing.
    const POLICY: ComparisonPolicy;
    /// Format rule applied to trimmed input.
    const CONSTRAINT: Constraint = Constraint::NonEmpty;
}

/// Static description of an identifier kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindInfo {
    /// Kind name.
    pub name: &'static str,
    /// Comparison policy.
    pub policy: ComparisonPolicy,
    /// Human-readable format rule.
    pub constraint: String,
}

/// Immutable, validated identifier of kind `K`.
///
/// Cloning shares the backing text.
pub struct Identifier<K: IdentifierKind> {
    raw: Arc<str>,
    kind: PhantomData<fn() -> K>,
}

impl<K: IdentifierKind> Identifier<K> {
    /// Parse `text`, returning `None` if it is empty after trimming or
    /// violates the kind's constraint.
    pub fn try_parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if K::CONSTRAINT.accepts(trimmed) {
            Some(Self::from_trusted(trimmed))
        } else {
            tracing::trace!(kind = K::NAME, input = text, "rejected identifier");
            None
        }
    }

    /// Parse `text`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::InvalidFormat`] naming the kind and echoing
    /// `text` when [`try_parse`](Self::try_parse) would return `None`.
    pub fn parse(text: &str) -> Result<Self, IdentifierError> {
        Self::try_parse(text).ok_or_else(|| IdentifierError::invalid_format(K::NAME, text))
    }

    /// Parse possibly absent input. `None` never parses.
    pub fn parse_optional(text: Option<&str>) -> Option<Self> {
        text.and_then(Self::try_parse)
    }

    /// Wrap text that is already known to satisfy the constraint.
    pub(crate) fn from_trusted(raw: impl Into<Arc<str>>) -> Self {
        let raw = raw.into();
        debug_assert!(
            K::CONSTRAINT.accepts(&raw),
            "{} constraint violated by trusted input {:?}",
            K::NAME,
            raw
        );
        Self {
            raw,
            kind: PhantomData,
        }
    }

    /// Validate generated text through [`try_parse`](Self::try_parse).
    ///
    /// Text the constraint rejects is cut to the constraint's maximum length
    /// and parsed again; if that still fails the result is `A` repeated to
    /// that length, which every [`Constraint`] accepts.
    pub(crate) fn from_generated(text: String) -> Self {
        if let Some(id) = Self::try_parse(&text) {
            return id;
        }
        let max = K::CONSTRAINT.max_len();
        tracing::warn!(kind = K::NAME, "generated text rejected by constraint");
        let fitted: String = match max {
            Some(max) => text.chars().take(max).collect(),
            None => text,
        };
        Self::try_parse(&fitted)
            .unwrap_or_else(|| Self::from_trusted("A".repeat(max.unwrap_or(1))))
    }

    /// A random identifier of `length` ASCII alphanumerics (at least one).
    pub(crate) fn random_alphanumeric(length: usize) -> Self {
        Self::from_generated(random::alphanumeric(length.max(1)))
    }

    /// A random identifier holding a hyphenated UUIDv4.
    pub(crate) fn random_uuid() -> Self {
        Self::from_generated(random::uuid_v4())
    }

    /// The stored text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Number of characters in the stored text.
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    /// `true` only for the default identifier.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The text equality is decided on (case-folded for case-insensitive kinds).
    pub fn normalized(&self) -> Cow<'_, str> {
        K::POLICY.normalize(&self.raw)
    }

    /// Compare against raw text under this kind's policy. `text` is trimmed.
    pub fn matches(&self, text: &str) -> bool {
        K::POLICY.equals(&self.raw, text.trim())
    }

    /// `true` if both identifiers share the same backing allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.raw, &other.raw)
    }

    /// Describe this identifier kind.
    pub fn info() -> KindInfo {
        KindInfo {
            name: K::NAME,
            policy: K::POLICY,
            constraint: K::CONSTRAINT.to_string(),
        }
    }
}

impl<K: IdentifierKind> Clone for Identifier<K> {
    fn clone(&self) -> Self {
        Self {
            raw: Arc::clone(&self.raw),
            kind: PhantomData,
        }
    }
}

impl<K: IdentifierKind> Default for Identifier<K> {
    fn default() -> Self {
        Self {
            raw: Arc::from(""),
            kind: PhantomData,
        }
    }
}

impl<K: IdentifierKind> PartialEq for Identifier<K> {
    fn eq(&self, other: &Self) -> bool {
        K::POLICY.equals(&self.raw, &other.raw)
    }
}

impl<K: IdentifierKind> Eq for Identifier<K> {}

impl<K: IdentifierKind> PartialOrd for Identifier<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: IdentifierKind> Ord for Identifier<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        K::POLICY.compare(&self.raw, &other.raw)
    }
}

impl<K: IdentifierKind> Hash for Identifier<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        K::POLICY.hash(&self.raw, state);
    }
}

impl<K: IdentifierKind> fmt::Debug for Identifier<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", K::NAME, &*self.raw)
    }
}

impl<K: IdentifierKind> fmt::Display for Identifier<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<K: IdentifierKind> AsRef<str> for Identifier<K> {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl<K: IdentifierKind> FromStr for Identifier<K> {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<K: IdentifierKind> TryFrom<&str> for Identifier<K> {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<K: IdentifierKind> From<Identifier<K>> for String {
    fn from(id: Identifier<K>) -> String {
        id.raw.to_string()
    }
}

impl<K: IdentifierKind> Serialize for Identifier<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de, K: IdentifierKind> Deserialize<'de> for Identifier<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Declare an identifier kind marker and its public type alias.
///
/// ```ignore
/// identifier_kind! {
///     /// OCPI party identifier.
///     PartyId, PartyIdKind, "party id", OrdinalIgnoreCase,
///     Constraint::Length { min: 1, max: 3 }
/// }
/// ```
macro_rules! identifier_kind {
    (
        $(#[$meta:meta])*
        $alias:ident, $kind:ident, $name:literal, $policy:ident $(, $constraint:expr)?
    ) => {
        #[doc = concat!("Kind marker for [`", stringify!($alias), "`].")]
        #[derive(Debug)]
        pub enum $kind {}

        impl $crate::identifier::IdentifierKind for $kind {
            const NAME: &'static str = $name;
            const POLICY: $crate::policy::ComparisonPolicy =
                $crate::policy::ComparisonPolicy::$policy;
            $(const CONSTRAINT: $crate::constraint::Constraint = $constraint;)?
        }

        $(#[$meta])*
        pub type $alias = $crate::identifier::Identifier<$kind>;
    };
}

pub(crate) use identifier_kind;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::{BTreeSet, HashSet};

    identifier_kind! {
        /// Case-insensitive test kind.
        Code, CodeKind, "code", OrdinalIgnoreCase,
        Constraint::Length { min: 1, max: 4 }
    }

    identifier_kind! {
        /// Case-sensitive test kind.
        Secret, SecretKind, "secret", Ordinal
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // -- parse --

    #[test]
    fn try_parse_trims_whitespace() {
        let code = Code::try_parse("  ab \t").unwrap();
        assert_eq!(code.as_str(), "ab");
        assert_eq!(code.len(), 2);
    }

    #[test]
    fn try_parse_rejects_blank_and_constraint_violations() {
        assert!(Code::try_parse("").is_none());
        assert!(Code::try_parse("    ").is_none());
        assert!(Code::try_parse("ABCDE").is_none());
        assert!(Secret::try_parse("\n").is_none());
    }

    #[test]
    fn parse_optional_rejects_none() {
        assert!(Code::parse_optional(None).is_none());
        assert_eq!(Code::parse_optional(Some("x")).unwrap().as_str(), "x");
    }

    #[test]
    fn parse_error_names_kind_and_echoes_input() {
        let err = Code::parse(" ABCDE ").unwrap_err();
        assert_eq!(err, IdentifierError::invalid_format("code", " ABCDE "));
    }

    #[test]
    fn from_str_and_try_from_agree_with_parse() {
        let a: Code = "ab".parse().unwrap();
        let b = Code::try_from("AB").unwrap();
        assert_eq!(a, b);
        assert!("".parse::<Code>().is_err());
    }

    // -- empty state --

    #[test]
    fn default_is_empty_and_renders_blank() {
        let code = Code::default();
        assert!(code.is_empty());
        assert_eq!(code.to_string(), "");
        assert_eq!(code.len(), 0);
        assert_ne!(code, Code::parse("a").unwrap());
    }

    // -- policy --

    #[test]
    fn case_insensitive_kind_equal_across_case() {
        let upper = Code::parse("CPO").unwrap();
        let lower = Code::parse("cpo").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.cmp(&lower), Ordering::Equal);
        assert_eq!(hash_of(&upper), hash_of(&lower));
        // Stored text is not rewritten.
        assert_eq!(lower.as_str(), "cpo");
    }

    #[test]
    fn case_sensitive_kind_distinct_across_case() {
        let upper = Secret::parse("CPO").unwrap();
        let lower = Secret::parse("cpo").unwrap();
        assert_ne!(upper, lower);
        assert!(upper < lower);
    }

    #[test]
    fn relational_operators_follow_policy() {
        let a = Code::parse("a").unwrap();
        let b = Code::parse("B").unwrap();
        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(a != b);
    }

    #[test]
    fn hash_set_deduplicates_by_policy() {
        let mut set = HashSet::new();
        set.insert(Code::parse("de").unwrap());
        set.insert(Code::parse("DE").unwrap());
        set.insert(Code::parse("nl").unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn btree_set_orders_by_policy() {
        let set: BTreeSet<Code> = ["b", "A", "c"]
            .into_iter()
            .map(|s| Code::parse(s).unwrap())
            .collect();
        let ordered: Vec<&str> = set.iter().map(Code::as_str).collect();
        assert_eq!(ordered, vec!["A", "b", "c"]);
    }

    #[test]
    fn matches_uses_policy_and_trims() {
        let code = Code::parse("Hub").unwrap();
        assert!(code.matches(" HUB "));
        assert!(!Secret::parse("Hub").unwrap().matches("HUB"));
    }

    #[test]
    fn clone_shares_storage() {
        let a = Secret::parse("token").unwrap();
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Secret::parse("token").unwrap()));
    }

    // -- formatting --

    #[test]
    fn debug_includes_kind_name() {
        let code = Code::parse("ab").unwrap();
        assert_eq!(format!("{code:?}"), "code(\"ab\")");
    }

    #[test]
    fn info_describes_kind() {
        let info = Code::info();
        assert_eq!(info.name, "code");
        assert_eq!(info.policy, ComparisonPolicy::OrdinalIgnoreCase);
        assert_eq!(info.constraint, "1-4 characters");
    }

    // -- serde --

    #[test]
    fn serde_roundtrip_as_plain_string() {
        let code = Code::parse("ab").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"ab\"");
        let back: Code = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn serde_rejects_invalid_and_trims() {
        assert!(serde_json::from_str::<Code>("\"ABCDE\"").is_err());
        assert!(serde_json::from_str::<Code>("\"  \"").is_err());
        let code: Code = serde_json::from_str("\" ab \"").unwrap();
        assert_eq!(code.as_str(), "ab");
    }

    // -- generation --

    #[test]
    fn random_alphanumeric_has_requested_length() {
        let secret = Secret::random_alphanumeric(17);
        assert_eq!(secret.len(), 17);
        assert!(secret.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(Secret::random_alphanumeric(0).len() == 1);
    }

    #[test]
    fn generated_text_outside_constraint_is_fitted() {
        // Code admits at most four characters; a UUID is 36.
        let code = Code::random_uuid();
        assert_eq!(code.len(), 4);
        assert!(Code::try_parse(code.as_str()).is_some());
        let code = Code::random_alphanumeric(20);
        assert_eq!(code.len(), 4);
    }

    #[test]
    fn generated_text_that_cannot_be_cut_to_fit_falls_back() {
        identifier_kind! {
            /// Letters-only test kind.
            Letters, LettersKind, "letters", Ordinal,
            Constraint::Alphabetic { min: 3, max: 3 }
        }
        for _ in 0..20 {
            let letters = Letters::random_uuid();
            assert!(LettersKind::CONSTRAINT.accepts(letters.as_str()), "{letters:?}");
        }
        assert_eq!(Letters::from_generated("12345".to_string()).as_str(), "AAA");
    }

    #[test]
    fn random_uuid_is_hyphenated() {
        let secret = Secret::random_uuid();
        assert_eq!(secret.len(), 36);
        assert!(Secret::try_parse(secret.as_str()).is_some());
    }
}
