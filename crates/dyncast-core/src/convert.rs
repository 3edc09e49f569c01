//! Conversion traits between Rust values and [`Dynamic`].
//!
//! - [`IntoDynamic`]: erase a Rust value into a [`Dynamic`]
//! - [`FromDynamic`]: recover a Rust value from a [`Dynamic`]
//!
//! These traits do not convert between types: extracting an `i64` from a
//! `Dynamic` holding an `i32` fails. Converting is the caster's job.

use crate::{CastError, CastType, Dynamic, ObjectRef, ScalarRepr};

/// Convert a value into a [`Dynamic`].
pub trait IntoDynamic {
    fn into_dynamic(self) -> Dynamic;
}

/// Extract a value from a [`Dynamic`].
pub trait FromDynamic: Sized {
    /// Returns `NullNotAllowed` for a null input into a non-nullable type and
    /// `InvalidCast` if the value's run-time type is not exactly `Self`.
    fn from_dynamic(value: Dynamic) -> Result<Self, CastError>;
}

macro_rules! impl_dynamic_scalar {
    ($($ty:ty),*) => {
        $(
            impl IntoDynamic for $ty {
                fn into_dynamic(self) -> Dynamic {
                    Dynamic::Scalar(self.into_scalar())
                }
            }

            impl FromDynamic for $ty {
                fn from_dynamic(value: Dynamic) -> Result<Self, CastError> {
                    match value {
                        Dynamic::Scalar(s) => <$ty>::from_scalar(s)
                            .ok_or_else(|| CastError::invalid_cast(s.kind(), <$ty>::type_name())),
                        Dynamic::Null => Err(CastError::null_not_allowed(<$ty>::type_name())),
                        other => Err(CastError::invalid_cast(other.describe(), <$ty>::type_name())),
                    }
                }
            }
        )*
    };
}

impl_dynamic_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T: IntoDynamic> IntoDynamic for Option<T> {
    fn into_dynamic(self) -> Dynamic {
        match self {
            Some(v) => v.into_dynamic(),
            None => Dynamic::Null,
        }
    }
}

impl<T: FromDynamic> FromDynamic for Option<T> {
    fn from_dynamic(value: Dynamic) -> Result<Self, CastError> {
        match value {
            Dynamic::Null => Ok(None),
            other => T::from_dynamic(other).map(Some),
        }
    }
}

impl IntoDynamic for Dynamic {
    fn into_dynamic(self) -> Dynamic {
        self
    }
}

impl FromDynamic for Dynamic {
    fn from_dynamic(value: Dynamic) -> Result<Self, CastError> {
        Ok(value)
    }
}

impl IntoDynamic for ObjectRef {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Object(self)
    }
}

impl FromDynamic for ObjectRef {
    fn from_dynamic(value: Dynamic) -> Result<Self, CastError> {
        match value {
            Dynamic::Object(o) => Ok(o),
            Dynamic::Null => Err(CastError::null_not_allowed("object")),
            other => Err(CastError::invalid_cast(other.describe(), "object")),
        }
    }
}

/// Declare a Rust enum with a fixed integer representation that can take part
/// in enum/numeric casts.
///
/// Generates the enum plus `CastType`, `IntoDynamic` and `FromDynamic`
/// implementations, `from_repr`, and `enum_entry()` for registration.
///
/// ```
/// use dyncast_core::{cast_enum, CastType, IntoDynamic, FromDynamic};
///
/// cast_enum! {
///     pub enum Color: i32 {
///         Red = 0,
///         Green = 1,
///     }
/// }
///
/// let value = Color::Green.into_dynamic();
/// assert_eq!(Color::from_dynamic(value).unwrap(), Color::Green);
/// assert_eq!(Color::enum_entry().values.len(), 2);
/// ```
#[macro_export]
macro_rules! cast_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $($variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr($repr)]
        $vis enum $name {
            $($variant = $value),+
        }

        impl $name {
            /// Map an underlying value back to its enumerator.
            pub fn from_repr(raw: $repr) -> Option<Self> {
                $(
                    if raw == $name::$variant as $repr {
                        return Some($name::$variant);
                    }
                )+
                None
            }

            /// Registry entry describing this enum.
            pub fn enum_entry() -> $crate::EnumEntry {
                $crate::EnumEntry::new(
                    stringify!($name),
                    <$repr as $crate::ScalarRepr>::KIND,
                )
                $(.with_value(stringify!($variant), ($name::$variant as $repr) as i128))+
            }
        }

        impl $crate::CastType for $name {
            fn type_hash() -> $crate::TypeHash {
                $crate::TypeHash::from_name(stringify!($name))
            }

            fn type_name() -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(stringify!($name))
            }
        }

        impl $crate::IntoDynamic for $name {
            fn into_dynamic(self) -> $crate::Dynamic {
                $crate::Dynamic::Enum($crate::EnumValue::new(
                    <Self as $crate::CastType>::type_hash(),
                    $crate::ScalarRepr::into_scalar(self as $repr),
                ))
            }
        }

        impl $crate::FromDynamic for $name {
            fn from_dynamic(value: $crate::Dynamic) -> Result<Self, $crate::CastError> {
                match value {
                    $crate::Dynamic::Enum(e)
                        if e.type_hash == <Self as $crate::CastType>::type_hash() =>
                    {
                        <$repr as $crate::ScalarRepr>::from_scalar(e.raw)
                            .and_then(Self::from_repr)
                            .ok_or_else(|| $crate::CastError::invalid_cast(e.raw, stringify!($name)))
                    }
                    $crate::Dynamic::Null => {
                        Err($crate::CastError::null_not_allowed(stringify!($name)))
                    }
                    other => Err($crate::CastError::invalid_cast(
                        other.describe(),
                        stringify!($name),
                    )),
                }
            }
        }
    };
}
