//! # Format Constraints
//!
//! Declarative length and character-class rules applied to trimmed input
//! before an identifier is constructed. Each identifier kind carries one
//! [`Constraint`] as a compile-time constant.
//!
//! Lengths count Unicode scalar values, not bytes.

use serde::Serialize;

/// Format rule an identifier's trimmed text must satisfy.
///
/// Every variant rejects the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Constraint {
    /// Any non-empty text.
    NonEmpty,
    /// Between `min` and `max` characters of any class.
    Length {
        /// Minimum character count (inclusive).
        min: usize,
        /// Maximum character count (inclusive).
        max: usize,
    },
    /// Between `min` and `max` ASCII letters or digits.
    Alphanumeric {
        /// Minimum character count (inclusive).
        min: usize,
        /// Maximum character count (inclusive).
        max: usize,
    },
    /// Between `min` and `max` ASCII letters.
    Alphabetic {
        /// Minimum character count (inclusive).
        min: usize,
        /// Maximum character count (inclusive).
        max: usize,
    },
}

impl Constraint {
    /// `true` if `value` satisfies this constraint.
    pub fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match *self {
            Self::NonEmpty => true,
            Self::Length { min, max } => within(value.chars().count(), min, max),
            Self::Alphanumeric { min, max } => {
                value.chars().all(|c| c.is_ascii_alphanumeric())
                    && within(value.len(), min, max)
            }
            Self::Alphabetic { min, max } => {
                value.chars().all(|c| c.is_ascii_alphabetic()) && within(value.len(), min, max)
            }
        }
    }

    /// Largest length this constraint admits, if bounded.
    pub fn max_len(&self) -> Option<usize> {
        match *self {
            Self::NonEmpty => None,
            Self::Length { max, .. }
            | Self::Alphanumeric { max, .. }
            | Self::Alphabetic { max, .. } => Some(max),
        }
    }
}

fn within(len: usize, min: usize, max: usize) -> bool {
    len >= min && len <= max
}

fn describe_len(f: &mut std::fmt::Formatter<'_>, min: usize, max: usize) -> std::fmt::Result {
    if min == max {
        write!(f, "exactly {min}")
    } else {
        write!(f, "{min}-{max}")
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::NonEmpty => f.write_str("non-empty"),
            Self::Length { min, max } => {
                describe_len(f, min, max)?;
                f.write_str(" characters")
            }
            Self::Alphanumeric { min, max } => {
                describe_len(f, min, max)?;
                f.write_str(" ASCII alphanumeric characters")
            }
            Self::Alphabetic { min, max } => {
                describe_len(f, min, max)?;
                f.write_str(" ASCII letters")
            }
        }
    }
}
