//! Class type entry.
//!
//! This module provides `ClassEntry` for value and reference classes.

use std::borrow::Cow;

use crate::{CastType, TypeHash, TypeKind};

/// Registry entry for a class type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    /// Class name.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Value or reference semantics.
    pub type_kind: TypeKind,

    // === Inheritance ===
    /// Base class type hash (single inheritance).
    pub base_class: Option<TypeHash>,
    /// Implemented interface type hashes.
    pub interfaces: Vec<TypeHash>,
}

impl ClassEntry {
    /// Create a new class entry.
    pub fn new(name: impl Into<String>, type_hash: TypeHash, type_kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            type_hash,
            type_kind,
            base_class: None,
            interfaces: Vec::new(),
        }
    }

    /// Create a reference class identified by its name.
    pub fn reference(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self::new(name, type_hash, TypeKind::Reference)
    }

    /// Create a value class identified by its name.
    pub fn value(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self::new(name, type_hash, TypeKind::Value)
    }

    /// Create a reference class for a Rust type.
    pub fn of<T: CastType>() -> Self {
        let name: Cow<'static, str> = T::type_name();
        Self::new(name.into_owned(), T::type_hash(), TypeKind::Reference)
    }

    // === Builder Methods ===

    /// Set the base class.
    pub fn with_base(mut self, base: TypeHash) -> Self {
        self.base_class = Some(base);
        self
    }

    /// Give the class value semantics.
    pub fn as_value_type(mut self) -> Self {
        self.type_kind = TypeKind::Value;
        self
    }

    /// Add an implemented interface.
    pub fn with_interface(mut self, interface: TypeHash) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Check if this class has value semantics.
    pub fn is_value_type(&self) -> bool {
        self.type_kind.is_value()
    }

    /// All direct supertypes (base class first, then interfaces).
    pub fn supertypes(&self) -> impl Iterator<Item = TypeHash> + '_ {
        self.base_class.into_iter().chain(self.interfaces.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_class() {
        let entry = ClassEntry::reference("Player");
        assert_eq!(entry.name, "Player");
        assert_eq!(entry.type_hash, TypeHash::from_name("Player"));
        assert!(!entry.is_value_type());
        assert!(entry.base_class.is_none());
    }

    #[test]
    fn value_class() {
        let entry = ClassEntry::value("Vec3");
        assert!(entry.is_value_type());
    }

    #[test]
    fn supertypes_lists_base_then_interfaces() {
        let entity = TypeHash::from_name("Entity");
        let drawable = TypeHash::from_name("IDrawable");
        let entry = ClassEntry::reference("Player")
            .with_base(entity)
            .with_interface(drawable);

        let supers: Vec<_> = entry.supertypes().collect();
        assert_eq!(supers, vec![entity, drawable]);
    }
}
