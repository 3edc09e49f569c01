//! Statically typed casters.

use std::fmt;
use std::marker::PhantomData;

use dyncast_core::{CastError, Caster, FromDynamic, IntoDynamic};

/// A caster bound once to a concrete Rust type pair.
///
/// Created by [`CastContext::typed_caster`](crate::CastContext::typed_caster).
/// Holding one skips the cache lookup on every call.
pub struct TypedCaster<F, T> {
    caster: Caster,
    _marker: PhantomData<fn(F) -> T>,
}

impl<F, T> TypedCaster<F, T>
where
    F: IntoDynamic,
    T: FromDynamic,
{
    pub(crate) fn new(caster: Caster) -> Self {
        Self {
            caster,
            _marker: PhantomData,
        }
    }

    /// Convert a value.
    #[inline]
    pub fn cast(&self, value: F) -> Result<T, CastError> {
        T::from_dynamic(self.caster.call(value.into_dynamic())?)
    }

    /// The underlying type-erased caster.
    pub fn caster(&self) -> &Caster {
        &self.caster
    }
}

impl<F, T> Clone for TypedCaster<F, T> {
    fn clone(&self) -> Self {
        Self {
            caster: self.caster.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, T> fmt::Debug for TypedCaster<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedCaster")
            .field("from", &std::any::type_name::<F>())
            .field("to", &std::any::type_name::<T>())
            .field("caster", &self.caster)
            .finish()
    }
}
