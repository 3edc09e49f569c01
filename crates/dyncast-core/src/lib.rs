//! Core types for run-time cast resolution.
//!
//! This crate holds the vocabulary shared by the registry, the classifier and
//! the cast cache:
//!
//! - [`TypeHash`] and [`primitives`]: deterministic type identity
//! - [`PrimitiveKind`]: built-in numeric and boolean kinds
//! - [`entries`]: type entries stored in the registry
//! - [`Dynamic`]: type-erased values with a run-time type
//! - [`CastKey`] and [`Caster`]: cache key and built conversion function
//! - [`CastType`], [`IntoDynamic`], [`FromDynamic`]: static typing bridge
//! - [`CastError`], [`BuildError`], [`RegistrationError`]: error taxonomy

mod cast_key;
mod cast_type;
mod caster;
mod convert;
mod dynamic;
pub mod entries;
mod error;
mod primitive_kind;
mod type_hash;
mod type_kind;

pub use cast_key::CastKey;
pub use cast_type::{CastType, ScalarRepr};
pub use caster::{CastFn, Caster};
pub use convert::{FromDynamic, IntoDynamic};
pub use dynamic::{Dynamic, EnumValue, ObjectRef, Scalar};
pub use entries::{
    ClassEntry, EnumEntry, Enumerator, InterfaceEntry, NullableEntry, PrimitiveEntry, TypeEntry,
};
pub use error::{BuildError, CastError, RegistrationError};
pub use primitive_kind::PrimitiveKind;
pub use type_hash::{TypeHash, hash_constants, primitives};
pub use type_kind::TypeKind;
