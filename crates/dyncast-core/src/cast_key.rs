//! Cache key for a conversion.

use std::fmt;

use crate::TypeHash;

/// Ordered (source, destination) type pair identifying one conversion.
///
/// Two keys are equal iff both components are the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastKey {
    pub from: TypeHash,
    pub to: TypeHash,
}

impl CastKey {
    pub const fn new(from: TypeHash, to: TypeHash) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for CastKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
