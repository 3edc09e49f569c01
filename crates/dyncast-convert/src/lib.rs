//! Conversion classification and caster construction.
//!
//! - [`classify`]: decide which [`ConversionCategory`] applies to a type pair
//! - [`build`]: produce a reusable [`Caster`](dyncast_core::Caster) for a pair
//!   and overflow mode
//! - [`numeric`]: the primitive cast kernels both rely on

mod builder;
mod classify;
pub mod numeric;

pub use builder::{build, build_conversion};
pub use classify::{Conversion, ConversionCategory, classify, is_valid_cast};
