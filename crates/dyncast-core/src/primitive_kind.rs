//! Primitive type kinds for the built-in numeric and boolean types.

use std::fmt;

use crate::TypeHash;

/// Primitive type kinds.
///
/// Every kind except [`PrimitiveKind::Bool`] is numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float,
    Double,
}

impl PrimitiveKind {
    /// All primitive kinds, in declaration order.
    pub const ALL: [PrimitiveKind; 11] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Int8,
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::Uint8,
        PrimitiveKind::Uint16,
        PrimitiveKind::Uint32,
        PrimitiveKind::Uint64,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// All numeric primitive kinds.
    pub const NUMERIC: [PrimitiveKind; 10] = [
        PrimitiveKind::Int8,
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::Uint8,
        PrimitiveKind::Uint16,
        PrimitiveKind::Uint32,
        PrimitiveKind::Uint64,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// Get the TypeHash for this primitive type.
    pub const fn type_hash(self) -> TypeHash {
        use crate::primitives;
        match self {
            PrimitiveKind::Bool => primitives::BOOL,
            PrimitiveKind::Int8 => primitives::INT8,
            PrimitiveKind::Int16 => primitives::INT16,
            PrimitiveKind::Int32 => primitives::INT32,
            PrimitiveKind::Int64 => primitives::INT64,
            PrimitiveKind::Uint8 => primitives::UINT8,
            PrimitiveKind::Uint16 => primitives::UINT16,
            PrimitiveKind::Uint32 => primitives::UINT32,
            PrimitiveKind::Uint64 => primitives::UINT64,
            PrimitiveKind::Float => primitives::FLOAT,
            PrimitiveKind::Double => primitives::DOUBLE,
        }
    }

    /// Look up the primitive kind identified by `hash`.
    pub fn from_hash(hash: TypeHash) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_hash() == hash)
    }

    /// Get the name of this primitive type.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Int8 => "i8",
            PrimitiveKind::Int16 => "i16",
            PrimitiveKind::Int32 => "i32",
            PrimitiveKind::Int64 => "i64",
            PrimitiveKind::Uint8 => "u8",
            PrimitiveKind::Uint16 => "u16",
            PrimitiveKind::Uint32 => "u32",
            PrimitiveKind::Uint64 => "u64",
            PrimitiveKind::Float => "f32",
            PrimitiveKind::Double => "f64",
        }
    }

    /// Width in bits (bool counts as 8).
    pub const fn bits(self) -> u32 {
        match self {
            PrimitiveKind::Bool | PrimitiveKind::Int8 | PrimitiveKind::Uint8 => 8,
            PrimitiveKind::Int16 | PrimitiveKind::Uint16 => 16,
            PrimitiveKind::Int32 | PrimitiveKind::Uint32 | PrimitiveKind::Float => 32,
            PrimitiveKind::Int64 | PrimitiveKind::Uint64 | PrimitiveKind::Double => 64,
        }
    }

    pub const fn is_numeric(self) -> bool {
        !matches!(self, PrimitiveKind::Bool)
    }

    pub const fn is_integer(self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    pub const fn is_signed_integer(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Int8 | PrimitiveKind::Int16 | PrimitiveKind::Int32 | PrimitiveKind::Int64
        )
    }

    pub const fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Uint8
                | PrimitiveKind::Uint16
                | PrimitiveKind::Uint32
                | PrimitiveKind::Uint64
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(self, PrimitiveKind::Float | PrimitiveKind::Double)
    }

    /// Number of bits of magnitude an integer kind carries, or the mantissa
    /// precision (including the implicit bit) of a float kind.
    const fn precision_bits(self) -> u32 {
        match self {
            PrimitiveKind::Float => 24,
            PrimitiveKind::Double => 53,
            _ if self.is_signed_integer() => self.bits() - 1,
            _ => self.bits(),
        }
    }

    /// Check if every value of `self` is exactly representable in `target`.
    ///
    /// Only meaningful between numeric kinds; `bool` widens only to itself.
    pub const fn widens_to(self, target: PrimitiveKind) -> bool {
        if self as u8 == target as u8 {
            return true;
        }
        if !self.is_numeric() || !target.is_numeric() {
            return false;
        }
        if self.is_float() {
            // f32 -> f64 is the only lossless float source.
            return matches!((self, target), (PrimitiveKind::Float, PrimitiveKind::Double));
        }
        if target.is_float() {
            return self.precision_bits() <= target.precision_bits();
        }
        if self.is_signed_integer() && target.is_unsigned_integer() {
            return false;
        }
        self.precision_bits() <= target.precision_bits()
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PrimitiveKind::*;

    #[test]
    fn hash_round_trip() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(PrimitiveKind::from_hash(kind.type_hash()), Some(kind));
        }
        assert_eq!(PrimitiveKind::from_hash(TypeHash::from_name("Player")), None);
    }

    #[test]
    fn integer_widening() {
        assert!(Int8.widens_to(Int16));
        assert!(Int32.widens_to(Int64));
        assert!(Uint8.widens_to(Int16));
        assert!(Uint32.widens_to(Int64));
        assert!(Uint8.widens_to(Uint64));
    }

    #[test]
    fn integer_narrowing() {
        assert!(!Int64.widens_to(Int32));
        assert!(!Int8.widens_to(Uint8));
        assert!(!Int8.widens_to(Uint64));
        assert!(!Uint8.widens_to(Int8));
        assert!(!Uint32.widens_to(Int32));
    }

    #[test]
    fn integer_to_float() {
        assert!(Int16.widens_to(Float));
        assert!(Uint16.widens_to(Float));
        assert!(!Int32.widens_to(Float));
        assert!(Int32.widens_to(Double));
        assert!(Uint32.widens_to(Double));
        assert!(!Int64.widens_to(Double));
        assert!(!Uint64.widens_to(Double));
    }

    #[test]
    fn float_conversions() {
        assert!(Float.widens_to(Double));
        assert!(!Double.widens_to(Float));
        assert!(!Float.widens_to(Int64));
    }

    #[test]
    fn bool_only_widens_to_itself() {
        assert!(Bool.widens_to(Bool));
        assert!(!Bool.widens_to(Int32));
        assert!(!Int32.widens_to(Bool));
    }

    #[test]
    fn names() {
        assert_eq!(Int32.name(), "i32");
        assert_eq!(Double.to_string(), "f64");
    }
}
