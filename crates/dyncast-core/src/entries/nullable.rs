//! Nullable wrapper entry.

use crate::TypeHash;

/// Registry entry for `T?`, the optional wrapper of a value type `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullableEntry {
    /// Display name (`"i32?"`).
    pub name: String,
    /// Type hash for identity, always `TypeHash::nullable_of(inner)`.
    pub type_hash: TypeHash,
    /// The wrapped value type.
    pub inner: TypeHash,
}

impl NullableEntry {
    /// Create the wrapper entry for a value type named `inner_name`.
    pub fn new(inner: TypeHash, inner_name: &str) -> Self {
        Self {
            name: format!("{}?", inner_name),
            type_hash: TypeHash::nullable_of(inner),
            inner,
        }
    }
}
