//! TypeEntry enum for unified type storage.

use crate::{TypeHash, TypeKind};

use super::{ClassEntry, EnumEntry, InterfaceEntry, NullableEntry, PrimitiveEntry};

/// Unified type entry for registry storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeEntry {
    /// Primitive type (i32, f64, bool, etc.).
    Primitive(PrimitiveEntry),
    /// Class type.
    Class(ClassEntry),
    /// Enum type.
    Enum(EnumEntry),
    /// Interface type.
    Interface(InterfaceEntry),
    /// Optional wrapper of a value type.
    Nullable(NullableEntry),
}

impl TypeEntry {
    /// Get the type hash for this entry.
    pub fn type_hash(&self) -> TypeHash {
        match self {
            TypeEntry::Primitive(e) => e.type_hash,
            TypeEntry::Class(e) => e.type_hash,
            TypeEntry::Enum(e) => e.type_hash,
            TypeEntry::Interface(e) => e.type_hash,
            TypeEntry::Nullable(e) => e.type_hash,
        }
    }

    /// Get the type name.
    pub fn name(&self) -> &str {
        match self {
            TypeEntry::Primitive(e) => e.name(),
            TypeEntry::Class(e) => &e.name,
            TypeEntry::Enum(e) => &e.name,
            TypeEntry::Interface(e) => &e.name,
            TypeEntry::Nullable(e) => &e.name,
        }
    }

    /// Memory semantics of the type.
    ///
    /// Primitives, enums and nullable wrappers are values; interfaces are
    /// references.
    pub fn type_kind(&self) -> TypeKind {
        match self {
            TypeEntry::Primitive(_) | TypeEntry::Enum(_) | TypeEntry::Nullable(_) => {
                TypeKind::Value
            }
            TypeEntry::Class(e) => e.type_kind,
            TypeEntry::Interface(_) => TypeKind::Reference,
        }
    }

    // === Type Checks ===

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeEntry::Primitive(_))
    }

    pub fn is_class(&self) -> bool {
        matches!(self, TypeEntry::Class(_))
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, TypeEntry::Enum(_))
    }

    pub fn is_interface(&self) -> bool {
        matches!(self, TypeEntry::Interface(_))
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, TypeEntry::Nullable(_))
    }

    // === Downcasting ===

    pub fn as_primitive(&self) -> Option<&PrimitiveEntry> {
        match self {
            TypeEntry::Primitive(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassEntry> {
        match self {
            TypeEntry::Class(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumEntry> {
        match self {
            TypeEntry::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceEntry> {
        match self {
            TypeEntry::Interface(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_nullable(&self) -> Option<&NullableEntry> {
        match self {
            TypeEntry::Nullable(e) => Some(e),
            _ => None,
        }
    }
}

// === From Implementations ===

impl From<PrimitiveEntry> for TypeEntry {
    fn from(entry: PrimitiveEntry) -> Self {
        TypeEntry::Primitive(entry)
    }
}

impl From<ClassEntry> for TypeEntry {
    fn from(entry: ClassEntry) -> Self {
        TypeEntry::Class(entry)
    }
}

impl From<EnumEntry> for TypeEntry {
    fn from(entry: EnumEntry) -> Self {
        TypeEntry::Enum(entry)
    }
}

impl From<InterfaceEntry> for TypeEntry {
    fn from(entry: InterfaceEntry) -> Self {
        TypeEntry::Interface(entry)
    }
}

impl From<NullableEntry> for TypeEntry {
    fn from(entry: NullableEntry) -> Self {
        TypeEntry::Nullable(entry)
    }
}
