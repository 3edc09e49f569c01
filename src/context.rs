//! Cast context: a sealed type registry plus its caches.
//!
//! A `CastContext` is the entry point for every cast. It owns the registry
//! behind an `Arc` (registration is over once a context exists) and the
//! caches built from it. Contexts are `Send + Sync` and meant to be shared.
//!
//! # Example
//!
//! ```
//! use dyncast::{CastContext, ClassEntry, Dynamic, ObjectRef, TypeHash, TypeRegistry, primitives};
//!
//! let mut registry = TypeRegistry::with_primitives();
//! registry.register_type(ClassEntry::reference("Entity")).unwrap();
//! registry
//!     .register_type(ClassEntry::reference("Player").with_base(TypeHash::from_name("Entity")))
//!     .unwrap();
//! let ctx = CastContext::new(registry);
//!
//! let byte: u8 = ctx.cast(200i32).unwrap();
//! assert_eq!(byte, 200);
//! assert!(ctx.checked_cast::<i32, u8>(2000).unwrap_err().is_overflow());
//!
//! let player = Dynamic::Object(ObjectRef::with_type(TypeHash::from_name("Player"), ()));
//! assert!(ctx.dynamic_cast(player, TypeHash::from_name("Entity")).is_ok());
//! assert!(ctx.is_valid_cast(primitives::UINT8, primitives::DOUBLE));
//! ```

use std::sync::Arc;

use dyncast_convert::Conversion;
use dyncast_core::{
    CastError, CastKey, CastType, Caster, Dynamic, FromDynamic, IntoDynamic, TypeHash,
};
use dyncast_registry::{TypeRegistry, TypeTraits};
use thiserror::Error;
use tracing::trace;

use crate::cache::{CastCache, TraitCache};
use crate::typed::TypedCaster;

/// Registry plus caches; resolves and performs casts.
#[derive(Debug)]
pub struct CastContext {
    registry: Arc<TypeRegistry>,
    cache: CastCache,
    traits: TraitCache,
}

impl CastContext {
    /// Seal a populated registry into a context.
    pub fn new(registry: TypeRegistry) -> Self {
        Self::from_shared(Arc::new(registry))
    }

    /// Create a context over an already shared registry.
    pub fn from_shared(registry: Arc<TypeRegistry>) -> Self {
        Self {
            registry,
            cache: CastCache::new(),
            traits: TraitCache::new(),
        }
    }

    /// Context knowing only the built-in primitives.
    pub fn with_primitives() -> Self {
        Self::new(TypeRegistry::with_primitives())
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    pub fn cache(&self) -> &CastCache {
        &self.cache
    }

    // ==========================================================================
    // Queries
    // ==========================================================================

    /// Trait set of a type.
    pub fn traits(&self, hash: TypeHash) -> TypeTraits {
        self.traits.get(&self.registry, hash)
    }

    /// Whether null is a valid value of `hash`.
    pub fn is_nullable(&self, hash: TypeHash) -> bool {
        self.cache
            .nullability(hash, || self.traits(hash).is_nullable_capable())
    }

    /// Classify a conversion. Not cached.
    pub fn classify(&self, from: TypeHash, to: TypeHash) -> Conversion {
        dyncast_convert::classify(&self.registry, from, to)
    }

    /// Whether a conversion exists from `from` to `to`. Not cached.
    pub fn is_valid_cast(&self, from: TypeHash, to: TypeHash) -> bool {
        self.classify(from, to).is_valid()
    }

    // ==========================================================================
    // Casters
    // ==========================================================================

    /// Get the unchecked caster for a pair.
    pub fn get_caster(&self, from: TypeHash, to: TypeHash) -> Result<Caster, CastError> {
        self.get_caster_with(from, to, false)
    }

    /// Get the overflow-checking caster for a pair.
    pub fn get_checked_caster(&self, from: TypeHash, to: TypeHash) -> Result<Caster, CastError> {
        self.get_caster_with(from, to, true)
    }

    /// Get the caster for a pair and mode, building it on first use.
    pub fn get_caster_with(
        &self,
        from: TypeHash,
        to: TypeHash,
        checked: bool,
    ) -> Result<Caster, CastError> {
        self.cache
            .get_or_build(&self.registry, CastKey::new(from, to), checked)
    }

    /// Bind a caster for a Rust type pair once.
    pub fn typed_caster<F, T>(&self, checked: bool) -> Result<TypedCaster<F, T>, CastError>
    where
        F: CastType + IntoDynamic,
        T: CastType + FromDynamic,
    {
        let caster = self.get_caster_with(F::type_hash(), T::type_hash(), checked)?;
        Ok(TypedCaster::new(caster))
    }

    // ==========================================================================
    // Static casts
    // ==========================================================================

    /// Unchecked cast between two Rust types.
    ///
    /// Each call looks the pair up in the cast cache. In a hot loop, bind the
    /// caster once with [`CastContext::typed_caster`] and reuse it.
    pub fn cast<F, T>(&self, value: F) -> Result<T, CastError>
    where
        F: CastType + IntoDynamic,
        T: CastType + FromDynamic,
    {
        self.cast_with(value, false)
    }

    /// Overflow-checking cast between two Rust types.
    pub fn checked_cast<F, T>(&self, value: F) -> Result<T, CastError>
    where
        F: CastType + IntoDynamic,
        T: CastType + FromDynamic,
    {
        self.cast_with(value, true)
    }

    /// Cast between two Rust types in the given mode.
    ///
    /// The pair is resolved from the static types, so an `Option<F>` source
    /// goes through the nullable wrapper of `F`. The caster is built once per pair; later calls pay one cache lookup.
    pub fn cast_with<F, T>(&self, value: F, checked: bool) -> Result<T, CastError>
    where
        F: CastType + IntoDynamic,
        T: CastType + FromDynamic,
    {
        let caster = self.get_caster_with(F::type_hash(), T::type_hash(), checked)?;
        T::from_dynamic(caster.call(value.into_dynamic())?)
    }

    // ==========================================================================
    // Dynamic casts
    // ==========================================================================

    /// Unchecked cast of a value whose type is known only at run time.
    pub fn dynamic_cast(&self, value: Dynamic, to: TypeHash) -> Result<Dynamic, CastError> {
        self.dynamic_cast_with(value, to, false)
    }

    /// Overflow-checking cast of a value whose type is known only at run time.
    pub fn dynamic_checked_cast(&self, value: Dynamic, to: TypeHash) -> Result<Dynamic, CastError> {
        self.dynamic_cast_with(value, to, true)
    }

    /// Cast a value to `to`, resolving the source type from the value.
    ///
    /// Null succeeds iff `to` can represent absence; otherwise it fails with
    /// `NullNotAllowed`.
    pub fn dynamic_cast_with(
        &self,
        value: Dynamic,
        to: TypeHash,
        checked: bool,
    ) -> Result<Dynamic, CastError> {
        let Some(from) = value.type_hash() else {
            trace!(to = %self.registry.type_name(to), "dynamic cast of null");
            return if self.is_nullable(to) {
                Ok(Dynamic::Null)
            } else {
                Err(CastError::null_not_allowed(self.registry.type_name(to)))
            };
        };

        self.get_caster_with(from, to, checked)?.call(value)
    }
}

impl Default for CastContext {
    fn default() -> Self {
        Self::with_primitives()
    }
}

/// Errors that can occur when setting up a context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The process-wide context was already created or installed.
    #[error("the global cast context is already initialized")]
    AlreadyInitialized,
}
