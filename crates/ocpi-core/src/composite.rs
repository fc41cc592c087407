//! # Composite Patterns
//!
//! Splitting rule shared by identifiers built from two sub-identifiers
//! (country code + party code). The text form is `head`, `separator`,
//! `tail`; with an empty separator the head must be fixed-width and the
//! split happens at that width.

use crate::constraint::Constraint;

/// Shape of a two-part composite identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositePattern {
    /// Literal between the two parts. May be empty.
    pub separator: &'static str,
    /// Rule for the first part.
    pub head: Constraint,
    /// Rule for the second part.
    pub tail: Constraint,
}

impl CompositePattern {
    /// Split trimmed `text` into its two parts if it matches the pattern.
    pub fn split<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str)> {
        let (head, tail) = if self.separator.is_empty() {
            let at = self.head.max_len()?;
            (text.get(..at)?, text.get(at..)?)
        } else {
            text.split_once(self.separator)?
        };
        self.accepts(head, tail).then_some((head, tail))
    }

    /// `true` if `head` and `tail` satisfy their respective rules.
    pub fn accepts(&self, head: &str, tail: &str) -> bool {
        self.head.accepts(head) && self.tail.accepts(tail)
    }
}

impl std::fmt::Display for CompositePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.separator.is_empty() {
            write!(f, "{} followed by {}", self.head, self.tail)
        } else {
            write!(f, "{}, '{}', {}", self.head, self.separator, self.tail)
        }
    }
}

/// Implement `FromStr`, `Serialize` and `Deserialize` for a composite
/// identifier with inherent `parse` and a `Display` text form. Deserialization
/// routes through `parse` so invalid text is rejected, not silently accepted.
macro_rules! impl_composite_text {
    ($ty:ident) => {
        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_composite_text;

#[cfg(test)]
mod tests {
    use super::*;

    const DASHED: CompositePattern = CompositePattern {
        separator: "-",
        head: Constraint::Alphanumeric { min: 2, max: 2 },
        tail: Constraint::Alphanumeric { min: 2, max: 10 },
    };

    const PACKED: CompositePattern = CompositePattern {
        separator: "",
        head: Constraint::Alphanumeric { min: 2, max: 2 },
        tail: Constraint::Alphanumeric { min: 3, max: 3 },
    };

    #[test]
    fn dashed_split() {
        assert_eq!(DASHED.split("DE-GDF"), Some(("DE", "GDF")));
        assert_eq!(DASHED.split("DE-ABCDEFGHIJ"), Some(("DE", "ABCDEFGHIJ")));
        assert_eq!(DASHED.split("DE-A"), None);
        assert_eq!(DASHED.split("DEU-GDF"), None);
        assert_eq!(DASHED.split("DE-GD-F"), None);
        assert_eq!(DASHED.split("DEGDF"), None);
    }

    #[test]
    fn packed_split_at_head_width() {
        assert_eq!(PACKED.split("DEGDF"), Some(("DE", "GDF")));
        assert_eq!(PACKED.split("DEGD"), None);
        assert_eq!(PACKED.split("DEGDFX"), None);
    }

    #[test]
    fn packed_split_respects_char_boundaries() {
        assert_eq!(PACKED.split("Ä"), None);
        assert_eq!(PACKED.split("DÄGDF"), None);
    }

    #[test]
    fn display_describes_shape() {
        assert_eq!(
            DASHED.to_string(),
            "exactly 2 ASCII alphanumeric characters, '-', 2-10 ASCII alphanumeric characters"
        );
    }
}
