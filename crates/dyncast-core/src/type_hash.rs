//! Deterministic hash-based type identity.
//!
//! This module provides [`TypeHash`], a 64-bit hash that uniquely identifies a
//! type known to the cast engine. Hashes are computed from the type's name, so
//! the same name always yields the same identity regardless of registration
//! order, and a Rust type can compute its identity without a registry lookup.
//!
//! # Examples
//!
//! ```
//! use dyncast_core::{TypeHash, primitives};
//!
//! assert_eq!(TypeHash::from_name("i32"), primitives::INT32);
//!
//! let maybe_int = TypeHash::nullable_of(primitives::INT32);
//! assert_ne!(maybe_int, primitives::INT32);
//! ```

use std::fmt;

use xxhash_rust::const_xxh64;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Separator constant used when combining hashes.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for named types.
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for nullable wrappers.
    pub const NULLABLE: u64 = 0x6c8e9cf570932bd5;
}

/// A deterministic 64-bit hash identifying a type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a type name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Compile-time variant of [`TypeHash::from_name`].
    ///
    /// Produces the same hash, but is usable in `const` items.
    pub const fn from_static_name(name: &'static str) -> Self {
        TypeHash(hash_constants::TYPE ^ const_xxh64::xxh64(name.as_bytes(), 0))
    }

    /// Hash of the optional wrapper around `inner` (`T?`).
    #[inline]
    pub const fn nullable_of(inner: TypeHash) -> Self {
        TypeHash(
            hash_constants::NULLABLE
                ^ inner
                    .0
                    .wrapping_mul(hash_constants::SEP)
                    .rotate_left(17),
        )
    }

    /// Check if this is the empty hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw hash value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash(0x{:016x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

impl From<u64> for TypeHash {
    fn from(value: u64) -> Self {
        TypeHash(value)
    }
}

/// Hashes of the built-in primitive types.
///
/// Each constant equals `TypeHash::from_name` of the Rust spelling of the type.
pub mod primitives {
    use super::TypeHash;

    /// Hash for `bool`
    pub const BOOL: TypeHash = TypeHash::from_static_name("bool");

    /// Hash for `i8`
    pub const INT8: TypeHash = TypeHash::from_static_name("i8");

    /// Hash for `i16`
    pub const INT16: TypeHash = TypeHash::from_static_name("i16");

    /// Hash for `i32`
    pub const INT32: TypeHash = TypeHash::from_static_name("i32");

    /// Hash for `i64`
    pub const INT64: TypeHash = TypeHash::from_static_name("i64");

    /// Hash for `u8`
    pub const UINT8: TypeHash = TypeHash::from_static_name("u8");

    /// Hash for `u16`
    pub const UINT16: TypeHash = TypeHash::from_static_name("u16");

    /// Hash for `u32`
    pub const UINT32: TypeHash = TypeHash::from_static_name("u32");

    /// Hash for `u64`
    pub const UINT64: TypeHash = TypeHash::from_static_name("u64");

    /// Hash for `f32`
    pub const FLOAT: TypeHash = TypeHash::from_static_name("f32");

    /// Hash for `f64`
    pub const DOUBLE: TypeHash = TypeHash::from_static_name("f64");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_deterministic() {
        assert_eq!(TypeHash::from_name("Player"), TypeHash::from_name("Player"));
        assert_ne!(TypeHash::from_name("Player"), TypeHash::from_name("Enemy"));
    }

    #[test]
    fn const_hash_matches_runtime_hash() {
        assert_eq!(TypeHash::from_name("i32"), primitives::INT32);
        assert_eq!(TypeHash::from_name("u8"), primitives::UINT8);
        assert_eq!(TypeHash::from_name("f64"), primitives::DOUBLE);
        assert_eq!(TypeHash::from_name("bool"), primitives::BOOL);
    }

    #[test]
    fn primitive_hashes_are_distinct() {
        let all = [
            primitives::BOOL,
            primitives::INT8,
            primitives::INT16,
            primitives::INT32,
            primitives::INT64,
            primitives::UINT8,
            primitives::UINT16,
            primitives::UINT32,
            primitives::UINT64,
            primitives::FLOAT,
            primitives::DOUBLE,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn nullable_hash_differs_from_inner() {
        let inner = primitives::INT32;
        let wrapped = TypeHash::nullable_of(inner);
        assert_ne!(wrapped, inner);
        assert_eq!(wrapped, TypeHash::nullable_of(inner));
        assert_ne!(wrapped, TypeHash::nullable_of(primitives::INT64));
    }

    #[test]
    fn debug_format() {
        let hash = TypeHash(0x1234);
        assert_eq!(format!("{:?}", hash), "TypeHash(0x0000000000001234)");
    }
}
