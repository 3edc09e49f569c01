//! Error types for cast resolution and type registration.
//!
//! ## Error Hierarchy
//!
//! ```text
//! CastError           - raised by a cast (no path, overflow, null into a value type)
//! BuildError          - a conversion could not be built; wraps the CastError cause
//! RegistrationError   - the host type system rejected a registration
//! ```

use std::fmt;

use thiserror::Error;

use crate::TypeHash;

// ============================================================================
// Cast Errors
// ============================================================================

/// Errors raised while performing a cast.
///
/// Casts are deterministic, so none of these are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    /// No legal conversion exists between the two types, or a downcast found a
    /// run-time value that is not an instance of the target type.
    #[error("invalid cast from '{from}' to '{to}'")]
    InvalidCast { from: String, to: String },

    /// A checked conversion produced a value outside the target range.
    #[error("value {value} is out of range for '{target}'")]
    Overflow { value: String, target: String },

    /// A null/absent value was cast to a type that cannot represent absence.
    #[error("null cannot be cast to non-nullable type '{target}'")]
    NullNotAllowed { target: String },
}

impl CastError {
    /// Create an [`CastError::InvalidCast`].
    pub fn invalid_cast(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        CastError::InvalidCast {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an [`CastError::Overflow`].
    pub fn overflow(value: impl fmt::Display, target: impl fmt::Display) -> Self {
        CastError::Overflow {
            value: value.to_string(),
            target: target.to_string(),
        }
    }

    /// Create a [`CastError::NullNotAllowed`].
    pub fn null_not_allowed(target: impl fmt::Display) -> Self {
        CastError::NullNotAllowed {
            target: target.to_string(),
        }
    }

    pub fn is_invalid_cast(&self) -> bool {
        matches!(self, CastError::InvalidCast { .. })
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, CastError::Overflow { .. })
    }

    pub fn is_null_not_allowed(&self) -> bool {
        matches!(self, CastError::NullNotAllowed { .. })
    }
}

/// A conversion function could not be built for a type pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot build conversion: {cause}")]
pub struct BuildError {
    #[source]
    pub cause: CastError,
}

impl BuildError {
    pub fn new(cause: CastError) -> Self {
        Self { cause }
    }

    /// Get the underlying cast error.
    pub fn cause(&self) -> &CastError {
        &self.cause
    }
}

impl From<BuildError> for CastError {
    fn from(err: BuildError) -> Self {
        err.cause
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors raised while populating the type registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A type with the same identity is already registered.
    #[error("type '{name}' is already registered")]
    DuplicateType { name: String },

    /// A referenced type (base class, interface, wrapped type) is unknown.
    #[error("type '{name}' references unknown type {hash}")]
    UnknownType { name: String, hash: TypeHash },

    /// An enum was declared over a non-integer primitive.
    #[error("enum '{name}' must have an integer underlying type, found '{underlying}'")]
    InvalidEnumUnderlying { name: String, underlying: String },

    /// Only value types can be wrapped in a nullable.
    #[error("cannot make nullable wrapper of reference type '{name}'")]
    NullableOfReference { name: String },

    /// The type named as a base or interface has the wrong kind.
    #[error("'{name}' cannot derive from '{base}': {reason}")]
    InvalidBase {
        name: String,
        base: String,
        reason: &'static str,
    },

    /// The inheritance edge would make a type its own ancestor.
    #[error("inheritance cycle between '{name}' and '{base}'")]
    InheritanceCycle { name: String, base: String },

    /// A custom conversion is already registered for the ordered pair.
    #[error("a conversion from '{from}' to '{to}' is already registered")]
    DuplicateConversion { from: String, to: String },
}
