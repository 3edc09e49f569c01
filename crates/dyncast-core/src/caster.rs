//! Shared conversion functions.

use std::fmt;
use std::sync::Arc;

use crate::{CastError, Dynamic};

/// Signature of a conversion function.
pub type CastFn = dyn Fn(Dynamic) -> Result<Dynamic, CastError> + Send + Sync;

/// A built, immutable conversion function.
///
/// Cloning shares the underlying function, so a caster can be handed out to
/// any number of threads. Two casters are the same entry iff [`Caster::ptr_eq`].
#[derive(Clone)]
pub struct Caster(Arc<CastFn>);

impl Caster {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Dynamic) -> Result<Dynamic, CastError> + Send + Sync + 'static,
    {
        Caster(Arc::new(f))
    }

    /// The identity conversion.
    pub fn identity() -> Self {
        Caster::new(Ok)
    }

    /// Apply the conversion.
    #[inline]
    pub fn call(&self, value: Dynamic) -> Result<Dynamic, CastError> {
        (self.0)(value)
    }

    /// Check if both casters share the same function.
    pub fn ptr_eq(&self, other: &Caster) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Caster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Caster({:p})", Arc::as_ptr(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;

    #[test]
    fn identity_returns_input() {
        let caster = Caster::identity();
        let value = Dynamic::Scalar(Scalar::I32(7));
        assert_eq!(caster.call(value.clone()), Ok(value));
    }

    #[test]
    fn clones_share_function() {
        let caster = Caster::new(|_| Ok(Dynamic::Null));
        let other = caster.clone();
        assert!(caster.ptr_eq(&other));
        assert!(!caster.ptr_eq(&Caster::identity()));
    }
}
