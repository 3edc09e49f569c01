//! Concurrent caches for built casters and type traits.
//!
//! # Concurrency
//!
//! Lookups and inserts go through `DashMap`, so callers never take an
//! external lock. Builds run outside any map lock; several threads may build
//! the same key at once, and the first insert wins. Every caller, including
//! those whose build was discarded, returns the retained entry.
//!
//! For conversions without an overflow distinction the unchecked map is
//! canonical: the winner is inserted there first and the checked map always
//! receives that same entry, so both maps hold one shared caster per key.

use std::sync::Arc;

use dashmap::DashMap;
use dyncast_convert::{build_conversion, classify};
use dyncast_core::{CastError, CastKey, Caster, TypeHash};
use dyncast_registry::{TypeRegistry, TypeTraits};
use tracing::trace;

/// Unchecked and checked caster maps, plus the nullability answers.
#[derive(Debug, Default)]
pub struct CastCache {
    unchecked: DashMap<CastKey, Caster>,
    checked: DashMap<CastKey, Caster>,
    nullability: DashMap<TypeHash, bool>,
}

impl CastCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, checked: bool) -> &DashMap<CastKey, Caster> {
        if checked { &self.checked } else { &self.unchecked }
    }

    /// Cached caster for a key, without building.
    pub fn get(&self, key: CastKey, checked: bool) -> Option<Caster> {
        self.slot(checked).get(&key).map(|entry| entry.clone())
    }

    /// Get the caster for `key`, classifying and building it on a miss.
    ///
    /// Invalid pairs are not cached; every request for one fails with
    /// `InvalidCast`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn get_or_build(
        &self,
        registry: &Arc<TypeRegistry>,
        key: CastKey,
        checked: bool,
    ) -> Result<Caster, CastError> {
        if let Some(hit) = self.get(key, checked) {
            return Ok(hit);
        }

        trace!(%key, checked, "cast cache miss");

        let conversion = classify(registry, key.from, key.to);
        let built = build_conversion(registry, &conversion, checked)?;

        if conversion.has_overflow_distinction() {
            let winner = self.slot(checked).entry(key).or_insert(built).clone();
            trace!(%key, checked, "stored caster");
            return Ok(winner);
        }

        let winner = self.unchecked.entry(key).or_insert(built).clone();
        let shared = self
            .checked
            .entry(key)
            .or_insert_with(|| winner.clone())
            .clone();
        trace!(%key, shared = winner.ptr_eq(&shared), "stored mode-agnostic caster");
        Ok(winner)
    }

    /// Cached nullability of `hash`, computing it with `compute` on a miss.
    pub fn nullability(&self, hash: TypeHash, compute: impl FnOnce() -> bool) -> bool {
        if let Some(known) = self.nullability.get(&hash) {
            return *known;
        }
        *self.nullability.entry(hash).or_insert_with(compute)
    }

    /// Number of entries in the unchecked map.
    pub fn len_unchecked(&self) -> usize {
        self.unchecked.len()
    }

    /// Number of entries in the checked map.
    pub fn len_checked(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unchecked.is_empty() && self.checked.is_empty()
    }
}

/// Per-type trait cache.
#[derive(Debug, Default)]
pub struct TraitCache {
    traits: DashMap<TypeHash, TypeTraits>,
}

impl TraitCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Traits of `hash`, looked up in `registry` on first use.
    pub fn get(&self, registry: &TypeRegistry, hash: TypeHash) -> TypeTraits {
        if let Some(traits) = self.traits.get(&hash) {
            return *traits;
        }
        *self
            .traits
            .entry(hash)
            .or_insert_with(|| TypeTraits::lookup(registry, hash))
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}
