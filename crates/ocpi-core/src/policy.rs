//! # Comparison Policy
//!
//! Every identifier kind declares, at compile time, whether its values
//! compare byte-exactly ([`ComparisonPolicy::Ordinal`]) or ignoring case
//! ([`ComparisonPolicy::OrdinalIgnoreCase`]).
//!
//! ## Invariant
//!
//! Equality, ordering, hashing and registry keys are all computed from the
//! same case-folded character sequence. Two values that compare equal
//! therefore always hash identically; this holds by construction rather than
//! by each call site remembering to lower-case.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Hash written for the empty identifier, regardless of policy.
pub const EMPTY_HASH_SENTINEL: u64 = 0;

/// String comparison policy of an identifier kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPolicy {
    /// Code-point exact, case-sensitive.
    Ordinal,
    /// Code-point comparison after Unicode lower-case folding.
    OrdinalIgnoreCase,
}

impl ComparisonPolicy {
    /// Total order over `a` and `b` under this policy.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Ordinal => a.cmp(b),
            Self::OrdinalIgnoreCase => fold(a).cmp(fold(b)),
        }
    }

    /// `true` when `a` and `b` are equal under this policy.
    pub fn equals(self, a: &str, b: &str) -> bool {
        match self {
            Self::Ordinal => a == b,
            Self::OrdinalIgnoreCase => fold(a).eq(fold(b)),
        }
    }

    /// Feed the normalized form of `value` into `state`.
    pub fn hash<H: Hasher>(self, value: &str, state: &mut H) {
        if value.is_empty() {
            state.write_u64(EMPTY_HASH_SENTINEL);
            return;
        }
        match self {
            Self::Ordinal => value.hash(state),
            Self::OrdinalIgnoreCase => {
                for c in fold(value) {
                    state.write_u32(c as u32);
                }
                // Terminator keeps ("ab", "c") and ("a", "bc") apart in tuples.
                state.write_u8(0xff);
            }
        }
    }

    /// The text form equality is decided on.
    pub fn normalize(self, value: &str) -> Cow<'_, str> {
        match self {
            Self::Ordinal => Cow::Borrowed(value),
            Self::OrdinalIgnoreCase => Cow::Owned(fold(value).collect()),
        }
    }

    /// `true` for [`ComparisonPolicy::OrdinalIgnoreCase`].
    pub fn ignores_case(self) -> bool {
        matches!(self, Self::OrdinalIgnoreCase)
    }

    /// Stable lower-case name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ordinal => "ordinal",
            Self::OrdinalIgnoreCase => "ordinal_ignore_case",
        }
    }
}

impl std::fmt::Display for ComparisonPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn fold(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().flat_map(char::to_lowercase)
}
