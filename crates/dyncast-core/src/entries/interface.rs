//! Interface type entry.

use crate::TypeHash;

/// Registry entry for an interface type.
///
/// Interfaces are always reference-like and may extend other interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceEntry {
    /// Interface name.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Interfaces this interface extends.
    pub base_interfaces: Vec<TypeHash>,
}

impl InterfaceEntry {
    /// Create an interface identified by its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            base_interfaces: Vec::new(),
        }
    }

    /// Extend another interface.
    pub fn with_base(mut self, base: TypeHash) -> Self {
        self.base_interfaces.push(base);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interface_with_bases() {
        let base = TypeHash::from_name("IShape");
        let entry = InterfaceEntry::new("IDrawable").with_base(base);
        assert_eq!(entry.type_hash, TypeHash::from_name("IDrawable"));
        assert_eq!(entry.base_interfaces, vec![base]);
    }
}
