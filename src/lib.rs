//! Run-time cast resolution with cached conversion functions.
//!
//! `dyncast` converts values between types known only at run time, with the
//! semantics of a statically written cast: numeric widening and narrowing
//! (wrapping or overflow-checked), enum to and from its underlying integer,
//! reference up- and downcasts, and registered custom conversions.
//!
//! Conversions are classified and built once per type pair and overflow
//! mode, then cached for concurrent reuse.
//!
//! # Example
//!
//! ```
//! use dyncast::{Dynamic, Scalar, primitives};
//!
//! assert_eq!(dyncast::cast::<u8, i32>(200), Ok(200));
//! assert_eq!(dyncast::cast::<i32, u8>(2000), Ok(208));
//! assert!(dyncast::checked_cast::<i32, u8>(2000).unwrap_err().is_overflow());
//!
//! let value = dyncast::dynamic_cast(Dynamic::Scalar(Scalar::I32(200)), primitives::UINT8).unwrap();
//! assert_eq!(value, Dynamic::Scalar(Scalar::U8(200)));
//! ```
//!
//! # Crates
//!
//! - `dyncast-core`: type identity, values, errors (re-exported at the root)
//! - [`registry`]: the host type system
//! - [`convert`]: classification and caster construction

mod cache;
mod context;
pub mod global;
mod typed;

pub use dyncast_convert as convert;
pub use dyncast_registry as registry;

pub use cache::{CastCache, TraitCache};
pub use context::{CastContext, ContextError};
pub use global::{
    cast, checked_cast, dynamic_cast, dynamic_checked_cast, get_caster, get_checked_caster,
    is_valid_cast,
};
pub use typed::TypedCaster;

pub use dyncast_convert::{Conversion, ConversionCategory};
pub use dyncast_core::*;
pub use dyncast_registry::{TypeRegistry, TypeTraits};
