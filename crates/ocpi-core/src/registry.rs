//! # Value Registries
//!
//! Registry identifiers (roles, payment methods, payment brands) are backed
//! by a concurrent table keyed by the normalized text. Parsing a value the
//! table has not seen registers it; the first spelling seen wins, and every
//! later parse of an equal value returns a clone of that stored instance.
//!
//! ## Lifecycle
//!
//! A [`Registry`] is an ordinary value: build it once at startup (seeded
//! with the kind's [`RegistryKind::WELL_KNOWN`] values plus any configured
//! extras), share it by reference or `Arc`, and drop it with its owner. It
//! only grows; nothing is ever removed. Tests build isolated instances.
//!
//! ## Concurrency
//!
//! Insert-if-absent runs under the owning shard's write lock via the
//! `DashMap` entry API, so two threads registering the same novel value
//! observe the same stored instance.

use std::fmt;

use dashmap::DashMap;

use crate::config::RegistryConfig;
use crate::error::IdentifierError;
use crate::identifier::{Identifier, IdentifierKind};
use crate::{v2_2, v3};

/// An identifier kind backed by a [`Registry`].
pub trait RegistryKind: IdentifierKind {
    /// Values every registry of this kind is seeded with.
    const WELL_KNOWN: &'static [&'static str];
}

/// Concurrent, grow-only table of the values of one registry kind.
pub struct Registry<K: RegistryKind> {
    entries: DashMap<String, Identifier<K>>,
}

impl<K: RegistryKind> Registry<K> {
    /// A registry holding the kind's well-known values.
    pub fn new() -> Self {
        Self::with_seeds(std::iter::empty::<&str>())
    }

    /// A registry holding the well-known values followed by `extra`.
    ///
    /// Blank entries in `extra` are skipped.
    pub fn with_seeds<I>(extra: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let registry = Self {
            entries: DashMap::new(),
        };
        for seed in K::WELL_KNOWN.iter().copied() {
            registry.try_parse(seed);
        }
        for seed in extra {
            if registry.try_parse(seed.as_ref()).is_none() {
                tracing::warn!(
                    kind = K::NAME,
                    seed = seed.as_ref(),
                    "skipped blank registry seed"
                );
            }
        }
        registry
    }

    /// Parse `text`, registering it if unseen. Fails only on blank input.
    pub fn try_parse(&self, text: &str) -> Option<Identifier<K>> {
        Identifier::<K>::try_parse(text).map(|id| self.intern(id))
    }

    /// Parse `text`, registering it if unseen.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::InvalidFormat`] when `text` is blank.
    pub fn parse(&self, text: &str) -> Result<Identifier<K>, IdentifierError> {
        self.try_parse(text)
            .ok_or_else(|| IdentifierError::invalid_format(K::NAME, text))
    }

    /// Parse possibly absent input. `None` never parses.
    pub fn parse_optional(&self, text: Option<&str>) -> Option<Identifier<K>> {
        text.and_then(|t| self.try_parse(t))
    }

    /// Return the registered instance equal to `id`, registering `id` if
    /// none exists. Use this for values obtained through deserialization.
    ///
    /// The empty identifier is returned unchanged and never registered.
    pub fn intern(&self, id: Identifier<K>) -> Identifier<K> {
        if id.is_empty() {
            return id;
        }
        let key = id.normalized().into_owned();
        let entry = self.entries.entry(key).or_insert_with(|| {
            tracing::debug!(kind = K::NAME, value = id.as_str(), "registered new value");
            id.clone()
        });
        entry.value().clone()
    }

    /// The registered instance equal to `text`, without registering.
    pub fn lookup(&self, text: &str) -> Option<Identifier<K>> {
        let key = K::POLICY.normalize(text.trim());
        self.entries.get(&*key).map(|entry| entry.value().clone())
    }

    /// `true` if a value equal to `text` is registered.
    pub fn contains(&self, text: &str) -> bool {
        self.lookup(text).is_some()
    }

    /// All registered values in policy order.
    pub fn all(&self) -> Vec<Identifier<K>> {
        let mut values: Vec<Identifier<K>> = self
            .entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        values.sort();
        values
    }

    /// Number of registered values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing is registered. Only possible for kinds without
    /// well-known values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: RegistryKind> Default for Registry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RegistryKind> fmt::Debug for Registry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &K::NAME)
            .field("len", &self.len())
            .finish()
    }
}

/// One registry per registry kind, built together at startup.
#[derive(Debug, Default)]
pub struct Registries {
    /// OCPI 2.2 roles.
    pub roles_v2: Registry<v2_2::RoleKind>,
    /// OCPI 3.0 roles.
    pub roles_v3: Registry<v3::RoleKind>,
    /// OCPI 3.0 payment methods.
    pub payment_methods: Registry<v3::PaymentMethodKind>,
    /// OCPI 3.0 payment brands.
    pub payment_brands: Registry<v3::PaymentBrandKind>,
}

impl Registries {
    /// Registries holding only the well-known values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registries seeded with the well-known values plus `config` extras.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self {
            roles_v2: Registry::with_seeds(&config.roles_v2),
            roles_v3: Registry::with_seeds(&config.roles_v3),
            payment_methods: Registry::with_seeds(&config.payment_methods),
            payment_brands: Registry::with_seeds(&config.payment_brands),
        }
    }
}
