//! Type trait lookup.
//!
//! Answers the questions the classifier and the nullability check ask about
//! a type: is it a numeric primitive, is it an enum and over what, is it a
//! value type, can it hold null. Types the registry has never seen are
//! treated as opaque reference types.

use bitflags::bitflags;
use dyncast_core::{PrimitiveKind, TypeEntry, TypeHash, TypeKind};

use crate::TypeRegistry;

bitflags! {
    /// Boolean traits of a type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TraitFlags: u8 {
        /// The type is registered (or a built-in primitive).
        const KNOWN = 1 << 0;
        /// Built-in primitive (numeric or bool).
        const PRIMITIVE = 1 << 1;
        /// Numeric primitive.
        const NUMERIC = 1 << 2;
        /// Enumeration.
        const ENUM = 1 << 3;
        /// Value semantics.
        const VALUE_TYPE = 1 << 4;
        /// Null is a valid value of this type.
        const NULLABLE = 1 << 5;
    }
}

/// Derived traits of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeTraits {
    pub flags: TraitFlags,
    /// Primitive kind, for primitives.
    pub primitive: Option<PrimitiveKind>,
    /// Underlying integer kind, for enums.
    pub enum_underlying: Option<PrimitiveKind>,
    /// Wrapped value type, for nullable wrappers.
    pub nullable_inner: Option<TypeHash>,
}

impl TypeTraits {
    /// Traits of a type the registry does not know.
    pub const OPAQUE: TypeTraits = TypeTraits {
        flags: TraitFlags::NULLABLE,
        primitive: None,
        enum_underlying: None,
        nullable_inner: None,
    };

    /// Compute the traits of `hash`.
    ///
    /// Primitives are recognised by hash even if not registered.
    pub fn lookup(registry: &TypeRegistry, hash: TypeHash) -> Self {
        if let Some(kind) = PrimitiveKind::from_hash(hash) {
            return Self::primitive(kind);
        }

        let Some(entry) = registry.get(hash) else {
            return Self::OPAQUE;
        };

        let mut traits = TypeTraits {
            flags: TraitFlags::KNOWN,
            primitive: None,
            enum_underlying: None,
            nullable_inner: None,
        };

        match entry {
            TypeEntry::Primitive(p) => return Self::primitive(p.kind),
            TypeEntry::Enum(e) => {
                traits.flags |= TraitFlags::ENUM | TraitFlags::VALUE_TYPE;
                traits.enum_underlying = Some(e.underlying);
            }
            TypeEntry::Nullable(n) => {
                traits.flags |= TraitFlags::VALUE_TYPE | TraitFlags::NULLABLE;
                traits.nullable_inner = Some(n.inner);
            }
            TypeEntry::Class(c) => match c.type_kind {
                TypeKind::Value => traits.flags |= TraitFlags::VALUE_TYPE,
                TypeKind::Reference => traits.flags |= TraitFlags::NULLABLE,
            },
            TypeEntry::Interface(_) => traits.flags |= TraitFlags::NULLABLE,
        }

        traits
    }

    fn primitive(kind: PrimitiveKind) -> Self {
        let mut flags = TraitFlags::KNOWN | TraitFlags::PRIMITIVE | TraitFlags::VALUE_TYPE;
        if kind.is_numeric() {
            flags |= TraitFlags::NUMERIC;
        }
        TypeTraits {
            flags,
            primitive: Some(kind),
            enum_underlying: None,
            nullable_inner: None,
        }
    }

    /// The numeric primitive kind, if this is a numeric primitive.
    pub fn numeric_kind(&self) -> Option<PrimitiveKind> {
        self.primitive.filter(|k| k.is_numeric())
    }

    pub fn is_numeric_primitive(&self) -> bool {
        self.flags.contains(TraitFlags::NUMERIC)
    }

    pub fn is_enum(&self) -> bool {
        self.flags.contains(TraitFlags::ENUM)
    }

    pub fn is_value_type(&self) -> bool {
        self.flags.contains(TraitFlags::VALUE_TYPE)
    }

    pub fn is_nullable_capable(&self) -> bool {
        self.flags.contains(TraitFlags::NULLABLE)
    }

    pub fn is_known(&self) -> bool {
        self.flags.contains(TraitFlags::KNOWN)
    }
}
