//! Enum type entry.
//!
//! This module provides `EnumEntry` for enumeration types.

use crate::{PrimitiveKind, TypeHash};

/// A named enumerator and its value.
///
/// Values are widened to `i128` so every integer underlying type, `u64`
/// included, is stored without wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerator {
    pub name: String,
    pub value: i128,
}

/// Registry entry for an enumeration type.
///
/// Enums are named constants over an integer primitive. Casts between an
/// enum and a numeric type follow the rules of the underlying primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    /// Enum name.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Underlying integer type.
    pub underlying: PrimitiveKind,
    /// Declared enumerators.
    pub values: Vec<Enumerator>,
}

impl EnumEntry {
    /// Create an enum identified by its name.
    pub fn new(name: impl Into<String>, underlying: PrimitiveKind) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            underlying,
            values: Vec::new(),
        }
    }

    /// Add a value to the enum.
    pub fn with_value(mut self, name: impl Into<String>, value: i128) -> Self {
        self.values.push(Enumerator {
            name: name.into(),
            value,
        });
        self
    }

    /// Look up a value by name.
    pub fn get_value(&self, name: &str) -> Option<i128> {
        self.values.iter().find(|v| v.name == name).map(|v| v.value)
    }

    /// Look up a name by value.
    pub fn get_name(&self, value: i128) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_values() {
        let entry = EnumEntry::new("Status", PrimitiveKind::Int32)
            .with_value("Idle", 0)
            .with_value("Busy", 1);

        assert_eq!(entry.type_hash, TypeHash::from_name("Status"));
        assert_eq!(entry.get_value("Busy"), Some(1));
        assert_eq!(entry.get_name(0), Some("Idle"));
        assert_eq!(entry.get_name(7), None);
    }
}
