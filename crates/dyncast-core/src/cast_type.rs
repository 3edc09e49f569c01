//! Static type identity for Rust types taking part in casts.
//!
//! [`CastType`] ties a Rust type to the [`TypeHash`] the registry knows it by,
//! so typed entry points can resolve a cast pair without a value in hand.
//!
//! # Example
//!
//! ```
//! use std::borrow::Cow;
//! use dyncast_core::{CastType, TypeHash};
//!
//! struct Player;
//!
//! impl CastType for Player {
//!     fn type_hash() -> TypeHash {
//!         TypeHash::from_name("Player")
//!     }
//!
//!     fn type_name() -> Cow<'static, str> {
//!         Cow::Borrowed("Player")
//!     }
//! }
//!
//! assert_eq!(Player::type_hash(), TypeHash::from_name(&Player::type_name()));
//! ```

use std::borrow::Cow;

use crate::{PrimitiveKind, Scalar, TypeHash};

/// Trait for Rust types that have an identity in the cast registry.
pub trait CastType: 'static {
    /// Get the type hash for this type.
    fn type_hash() -> TypeHash;

    /// Get the registered type name.
    fn type_name() -> Cow<'static, str>;
}

/// Rust primitives that map one-to-one onto a [`Scalar`] variant.
pub trait ScalarRepr: CastType + Copy {
    /// The primitive kind of `Self`.
    const KIND: PrimitiveKind;

    fn into_scalar(self) -> Scalar;

    /// Extract `Self` from a scalar of exactly this kind.
    fn from_scalar(scalar: Scalar) -> Option<Self>;
}

macro_rules! impl_scalar_repr {
    ($($ty:ty => $variant:ident, $kind:ident);* $(;)?) => {
        $(
            impl CastType for $ty {
                fn type_hash() -> TypeHash {
                    PrimitiveKind::$kind.type_hash()
                }

                fn type_name() -> Cow<'static, str> {
                    Cow::Borrowed(PrimitiveKind::$kind.name())
                }
            }

            impl ScalarRepr for $ty {
                const KIND: PrimitiveKind = PrimitiveKind::$kind;

                fn into_scalar(self) -> Scalar {
                    Scalar::$variant(self)
                }

                fn from_scalar(scalar: Scalar) -> Option<Self> {
                    match scalar {
                        Scalar::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_scalar_repr! {
    bool => Bool, Bool;
    i8 => I8, Int8;
    i16 => I16, Int16;
    i32 => I32, Int32;
    i64 => I64, Int64;
    u8 => U8, Uint8;
    u16 => U16, Uint16;
    u32 => U32, Uint32;
    u64 => U64, Uint64;
    f32 => F32, Float;
    f64 => F64, Double;
}

/// `Option<T>` is the nullable wrapper of `T`.
impl<T: CastType> CastType for Option<T> {
    fn type_hash() -> TypeHash {
        TypeHash::nullable_of(T::type_hash())
    }

    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("{}?", T::type_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives;

    #[test]
    fn primitive_type_hashes() {
        assert_eq!(bool::type_hash(), primitives::BOOL);
        assert_eq!(i32::type_hash(), primitives::INT32);
        assert_eq!(u8::type_hash(), primitives::UINT8);
        assert_eq!(f32::type_hash(), primitives::FLOAT);
    }

    #[test]
    fn primitive_type_names() {
        assert_eq!(i64::type_name(), "i64");
        assert_eq!(u32::type_name(), "u32");
        assert_eq!(f64::type_name(), "f64");
    }

    #[test]
    fn scalar_repr_round_trip() {
        assert_eq!(200u8.into_scalar(), Scalar::U8(200));
        assert_eq!(u8::from_scalar(Scalar::U8(200)), Some(200));
        assert_eq!(u8::from_scalar(Scalar::I32(200)), None);
        assert_eq!(<i16 as ScalarRepr>::KIND, PrimitiveKind::Int16);
    }

    #[test]
    fn option_is_nullable_wrapper() {
        assert_eq!(
            Option::<i32>::type_hash(),
            TypeHash::nullable_of(primitives::INT32)
        );
        assert_eq!(Option::<i32>::type_name(), "i32?");
    }
}
