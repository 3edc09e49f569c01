//! Registry entry types.
//!
//! This module provides the entry types stored in the type registry:
//!
//! - [`TypeEntry`] - Unified enum wrapping all type entries
//! - [`PrimitiveEntry`] - Built-in primitive types
//! - [`ClassEntry`] - Value and reference classes
//! - [`InterfaceEntry`] - Interfaces (capability sets)
//! - [`EnumEntry`] - Integer-backed enumerations
//! - [`NullableEntry`] - Optional wrappers of value types

mod class;
mod enum_entry;
mod interface;
mod nullable;
mod primitive;
mod type_entry;

pub use class::ClassEntry;
pub use enum_entry::{EnumEntry, Enumerator};
pub use interface::InterfaceEntry;
pub use nullable::NullableEntry;
pub use primitive::PrimitiveEntry;
pub use type_entry::TypeEntry;
