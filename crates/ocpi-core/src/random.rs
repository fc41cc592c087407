//! # Random Text
//!
//! Generators backing the `new_random` constructors. Output is not meant to
//! be cryptographically strong; it only has to be unique enough and to pass
//! the generating kind's own constraint.

use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

/// `length` characters drawn uniformly from `[A-Za-z0-9]`.
pub fn alphanumeric(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// A hyphenated, lower-case UUIDv4 (36 characters).
pub fn uuid_v4() -> String {
    Uuid::new_v4().to_string()
}
