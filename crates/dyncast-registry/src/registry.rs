//! TypeRegistry - the host type system consulted by the cast engine.
//!
//! The registry stores every type that can take part in a cast, the
//! inheritance relation between classes and interfaces, and the custom
//! conversions registered for specific type pairs.
//!
//! # Thread Safety
//!
//! `TypeRegistry` is populated single-threaded during setup and then shared
//! immutably (typically behind an `Arc` inside a cast context). It has no
//! interior mutability.
//!
//! # Example
//!
//! ```
//! use dyncast_registry::TypeRegistry;
//! use dyncast_core::{ClassEntry, TypeHash, primitives};
//!
//! let mut registry = TypeRegistry::with_primitives();
//! registry.register_type(ClassEntry::reference("Entity")).unwrap();
//! registry
//!     .register_type(ClassEntry::reference("Player").with_base(TypeHash::from_name("Entity")))
//!     .unwrap();
//!
//! assert!(registry.contains(primitives::INT32));
//! assert!(registry.is_derived_from(TypeHash::from_name("Player"), TypeHash::from_name("Entity")));
//! ```

use std::borrow::Cow;

use dyncast_core::{
    CastError, CastKey, Caster, Dynamic, NullableEntry, PrimitiveEntry, PrimitiveKind,
    RegistrationError, TypeEntry, TypeHash,
};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{CustomConversion, TypeHierarchy};

/// Central storage for types, inheritance and custom conversions.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    /// All types by hash.
    types: FxHashMap<TypeHash, TypeEntry>,
    /// Derives/implements edges between classes and interfaces.
    hierarchy: TypeHierarchy,
    /// Custom conversions by ordered pair.
    conversions: FxHashMap<CastKey, CustomConversion>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all primitives pre-registered.
    pub fn with_primitives() -> Self {
        let mut registry = Self::new();
        registry.register_all_primitives();
        registry
    }

    /// Register every built-in primitive and its nullable wrapper.
    pub fn register_all_primitives(&mut self) {
        for kind in PrimitiveKind::ALL {
            if !self.types.contains_key(&kind.type_hash()) {
                self.insert_with_wrapper(PrimitiveEntry::new(kind).into());
            }
        }
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a type.
    ///
    /// Referenced types (base class, interfaces, wrapped type) must already
    /// be registered. Value types get their nullable wrapper registered too.
    pub fn register_type(&mut self, entry: impl Into<TypeEntry>) -> Result<(), RegistrationError> {
        let entry = entry.into();
        let hash = entry.type_hash();

        if self.types.contains_key(&hash) {
            return Err(RegistrationError::DuplicateType {
                name: entry.name().to_string(),
            });
        }

        self.validate(&entry)?;
        self.insert_with_wrapper(entry);
        Ok(())
    }

    fn validate(&self, entry: &TypeEntry) -> Result<(), RegistrationError> {
        match entry {
            TypeEntry::Primitive(_) => Ok(()),
            TypeEntry::Enum(e) => {
                if e.underlying.is_integer() {
                    Ok(())
                } else {
                    Err(RegistrationError::InvalidEnumUnderlying {
                        name: e.name.clone(),
                        underlying: e.underlying.name().to_string(),
                    })
                }
            }
            TypeEntry::Nullable(n) => {
                let inner = self.require(&n.name, n.inner)?;
                if inner.type_kind().is_value() && !inner.is_nullable() {
                    Ok(())
                } else {
                    Err(RegistrationError::NullableOfReference {
                        name: inner.name().to_string(),
                    })
                }
            }
            TypeEntry::Class(c) => {
                if let Some(base) = c.base_class {
                    self.require_supertype(
                        &c.name,
                        c.type_hash,
                        base,
                        TypeEntry::is_class,
                        "base must be a class",
                    )?;
                }
                for &iface in &c.interfaces {
                    self.require_supertype(
                        &c.name,
                        c.type_hash,
                        iface,
                        TypeEntry::is_interface,
                        "not an interface",
                    )?;
                }
                Ok(())
            }
            TypeEntry::Interface(i) => {
                for &base in &i.base_interfaces {
                    self.require_supertype(
                        &i.name,
                        i.type_hash,
                        base,
                        TypeEntry::is_interface,
                        "interfaces can only extend interfaces",
                    )?;
                }
                Ok(())
            }
        }
    }

    fn require(&self, name: &str, hash: TypeHash) -> Result<&TypeEntry, RegistrationError> {
        self.types.get(&hash).ok_or_else(|| RegistrationError::UnknownType {
            name: name.to_string(),
            hash,
        })
    }

    fn require_supertype(
        &self,
        name: &str,
        hash: TypeHash,
        base: TypeHash,
        accepts: fn(&TypeEntry) -> bool,
        reason: &'static str,
    ) -> Result<(), RegistrationError> {
        if base == hash {
            return Err(RegistrationError::InheritanceCycle {
                name: name.to_string(),
                base: name.to_string(),
            });
        }
        let entry = self.require(name, base)?;
        if accepts(entry) {
            Ok(())
        } else {
            Err(RegistrationError::InvalidBase {
                name: name.to_string(),
                base: entry.name().to_string(),
                reason,
            })
        }
    }

    /// Insert a validated entry, its hierarchy edges and its nullable wrapper.
    fn insert_with_wrapper(&mut self, entry: TypeEntry) {
        let hash = entry.type_hash();
        debug!(name = entry.name(), %hash, "registered type");

        match &entry {
            TypeEntry::Class(c) => {
                self.hierarchy.add_type(hash);
                for supertype in c.supertypes() {
                    self.hierarchy.add_edge(hash, supertype);
                }
            }
            TypeEntry::Interface(i) => {
                self.hierarchy.add_type(hash);
                for &base in &i.base_interfaces {
                    self.hierarchy.add_edge(hash, base);
                }
            }
            _ => {}
        }

        let wrapper = (entry.type_kind().is_value() && !entry.is_nullable())
            .then(|| NullableEntry::new(hash, entry.name()));

        self.types.insert(hash, entry);

        if let Some(wrapper) = wrapper {
            if !self.types.contains_key(&wrapper.type_hash) {
                debug!(name = %wrapper.name, hash = %wrapper.type_hash, "registered nullable wrapper");
                self.types.insert(wrapper.type_hash, wrapper.into());
            }
        }
    }

    /// Register a conversion for an ordered pair that behaves the same in
    /// checked and unchecked mode.
    pub fn register_conversion<F>(
        &mut self,
        from: TypeHash,
        to: TypeHash,
        f: F,
    ) -> Result<(), RegistrationError>
    where
        F: Fn(Dynamic) -> Result<Dynamic, CastError> + Send + Sync + 'static,
    {
        self.insert_conversion(from, to, CustomConversion::new(Caster::new(f)))
    }

    /// Register a conversion with a distinct overflow-checking variant.
    pub fn register_checked_conversion<U, C>(
        &mut self,
        from: TypeHash,
        to: TypeHash,
        unchecked: U,
        checked: C,
    ) -> Result<(), RegistrationError>
    where
        U: Fn(Dynamic) -> Result<Dynamic, CastError> + Send + Sync + 'static,
        C: Fn(Dynamic) -> Result<Dynamic, CastError> + Send + Sync + 'static,
    {
        self.insert_conversion(
            from,
            to,
            CustomConversion::with_checked(Caster::new(unchecked), Caster::new(checked)),
        )
    }

    fn insert_conversion(
        &mut self,
        from: TypeHash,
        to: TypeHash,
        conversion: CustomConversion,
    ) -> Result<(), RegistrationError> {
        for hash in [from, to] {
            if !self.is_known(hash) {
                return Err(RegistrationError::UnknownType {
                    name: format!("{} -> {}", self.type_name(from), self.type_name(to)),
                    hash,
                });
            }
        }

        let key = CastKey::new(from, to);
        if self.conversions.contains_key(&key) {
            return Err(RegistrationError::DuplicateConversion {
                from: self.type_name(from).into_owned(),
                to: self.type_name(to).into_owned(),
            });
        }

        debug!(
            from = %self.type_name(from),
            to = %self.type_name(to),
            checked_variant = conversion.distinguishes_checked(),
            "registered custom conversion"
        );
        self.conversions.insert(key, conversion);
        Ok(())
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Get a type by hash.
    pub fn get(&self, hash: TypeHash) -> Option<&TypeEntry> {
        self.types.get(&hash)
    }

    /// Check if a type is registered.
    pub fn contains(&self, hash: TypeHash) -> bool {
        self.types.contains_key(&hash)
    }

    /// Check if a type is registered or a built-in primitive.
    pub fn is_known(&self, hash: TypeHash) -> bool {
        self.contains(hash) || PrimitiveKind::from_hash(hash).is_some()
    }

    /// Display name of a type, with a placeholder for unknown hashes.
    pub fn type_name(&self, hash: TypeHash) -> Cow<'_, str> {
        if let Some(entry) = self.types.get(&hash) {
            return Cow::Borrowed(entry.name());
        }
        match PrimitiveKind::from_hash(hash) {
            Some(kind) => Cow::Borrowed(kind.name()),
            None => Cow::Owned(format!("<unknown {}>", hash)),
        }
    }

    /// Iterate over all registered types.
    pub fn types(&self) -> impl Iterator<Item = &TypeEntry> {
        self.types.values()
    }

    /// Number of registered types (including nullable wrappers).
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Custom conversion for an ordered pair, if registered.
    pub fn custom_conversion(&self, key: CastKey) -> Option<&CustomConversion> {
        self.conversions.get(&key)
    }

    /// Number of registered custom conversions.
    pub fn conversion_count(&self) -> usize {
        self.conversions.len()
    }

    // ==========================================================================
    // Inheritance
    // ==========================================================================

    /// Check if `derived` strictly derives from or implements `ancestor`.
    pub fn is_derived_from(&self, derived: TypeHash, ancestor: TypeHash) -> bool {
        self.hierarchy.is_ancestor(ancestor, derived)
    }

    /// Check if a value whose run-time type is `actual` is an instance of `target`.
    pub fn is_instance_of(&self, actual: TypeHash, target: TypeHash) -> bool {
        actual == target || self.is_derived_from(actual, target)
    }

    /// The inheritance graph.
    pub fn hierarchy(&self) -> &TypeHierarchy {
        &self.hierarchy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyncast_core::{ClassEntry, EnumEntry, InterfaceEntry, Scalar, primitives};

    fn h(name: &str) -> TypeHash {
        TypeHash::from_name(name)
    }

    fn game_registry() -> TypeRegistry {
        let mut registry = TypeRegistry::with_primitives();
        registry.register_type(InterfaceEntry::new("IDrawable")).unwrap();
        registry.register_type(ClassEntry::reference("Entity")).unwrap();
        registry
            .register_type(
                ClassEntry::reference("Player")
                    .with_base(h("Entity"))
                    .with_interface(h("IDrawable")),
            )
            .unwrap();
        registry
    }

    #[test]
    fn with_primitives_registers_wrappers() {
        let registry = TypeRegistry::with_primitives();
        for kind in PrimitiveKind::ALL {
            assert!(registry.contains(kind.type_hash()));
            assert!(registry.contains(TypeHash::nullable_of(kind.type_hash())));
        }
        assert_eq!(registry.type_count(), PrimitiveKind::ALL.len() * 2);
    }

    #[test]
    fn duplicate_type_rejected() {
        let mut registry = TypeRegistry::new();
        registry.register_type(ClassEntry::reference("Entity")).unwrap();
        let err = registry
            .register_type(ClassEntry::reference("Entity"))
            .unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateType { .. }));
    }

    #[test]
    fn unknown_base_rejected() {
        let mut registry = TypeRegistry::new();
        let err = registry
            .register_type(ClassEntry::reference("Player").with_base(h("Entity")))
            .unwrap_err();
        assert!(matches!(err, RegistrationError::UnknownType { .. }));
    }

    #[test]
    fn interface_as_base_class_rejected() {
        let mut registry = TypeRegistry::new();
        registry.register_type(InterfaceEntry::new("IDrawable")).unwrap();
        let err = registry
            .register_type(ClassEntry::reference("Sprite").with_base(h("IDrawable")))
            .unwrap_err();
        assert!(matches!(err, RegistrationError::InvalidBase { .. }));
    }

    #[test]
    fn self_inheritance_rejected() {
        let mut registry = TypeRegistry::new();
        let err = registry
            .register_type(ClassEntry::reference("Loop").with_base(h("Loop")))
            .unwrap_err();
        assert!(matches!(err, RegistrationError::InheritanceCycle { .. }));
    }

    #[test]
    fn enum_requires_integer_underlying() {
        let mut registry = TypeRegistry::with_primitives();
        let err = registry
            .register_type(EnumEntry::new("Ratio", PrimitiveKind::Float))
            .unwrap_err();
        assert!(matches!(err, RegistrationError::InvalidEnumUnderlying { .. }));

        registry
            .register_type(EnumEntry::new("Status", PrimitiveKind::Int32))
            .unwrap();
        assert!(registry.contains(TypeHash::nullable_of(h("Status"))));
    }

    #[test]
    fn value_class_gets_wrapper_reference_class_does_not() {
        let mut registry = TypeRegistry::new();
        registry.register_type(ClassEntry::value("Vec3")).unwrap();
        registry.register_type(ClassEntry::reference("Entity")).unwrap();

        assert!(registry.contains(TypeHash::nullable_of(h("Vec3"))));
        assert!(!registry.contains(TypeHash::nullable_of(h("Entity"))));
        assert_eq!(registry.type_name(TypeHash::nullable_of(h("Vec3"))), "Vec3?");
    }

    #[test]
    fn nullable_of_reference_rejected() {
        let mut registry = TypeRegistry::new();
        registry.register_type(ClassEntry::reference("Entity")).unwrap();
        let err = registry
            .register_type(NullableEntry::new(h("Entity"), "Entity"))
            .unwrap_err();
        assert!(matches!(err, RegistrationError::NullableOfReference { .. }));
    }

    #[test]
    fn inheritance_queries() {
        let registry = game_registry();
        assert!(registry.is_derived_from(h("Player"), h("Entity")));
        assert!(registry.is_derived_from(h("Player"), h("IDrawable")));
        assert!(!registry.is_derived_from(h("Entity"), h("Player")));
        assert!(!registry.is_derived_from(h("Player"), h("Player")));

        assert!(registry.is_instance_of(h("Player"), h("Player")));
        assert!(registry.is_instance_of(h("Player"), h("Entity")));
        assert!(!registry.is_instance_of(h("Entity"), h("Player")));
    }

    #[test]
    fn type_name_fallbacks() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.type_name(primitives::UINT8), "u8");
        assert!(registry.type_name(h("Nope")).starts_with("<unknown 0x"));
    }

    #[test]
    fn custom_conversion_registration() {
        let mut registry = game_registry();
        registry
            .register_conversion(h("Entity"), primitives::INT32, |_| {
                Ok(Dynamic::Scalar(Scalar::I32(1)))
            })
            .unwrap();

        let key = CastKey::new(h("Entity"), primitives::INT32);
        let conv = registry.custom_conversion(key).unwrap();
        assert!(!conv.distinguishes_checked());
        assert_eq!(registry.conversion_count(), 1);

        let err = registry
            .register_conversion(h("Entity"), primitives::INT32, Ok)
            .unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateConversion { .. }));
    }

    #[test]
    fn checked_conversion_registration() {
        let mut registry = game_registry();
        registry
            .register_checked_conversion(h("Player"), primitives::UINT8, Ok, |_| {
                Err(CastError::overflow("player", "u8"))
            })
            .unwrap();

        let conv = registry
            .custom_conversion(CastKey::new(h("Player"), primitives::UINT8))
            .unwrap();
        assert!(conv.distinguishes_checked());
    }

    #[test]
    fn conversion_with_unknown_type_rejected() {
        let mut registry = TypeRegistry::new();
        let err = registry
            .register_conversion(h("Ghost"), primitives::INT32, Ok)
            .unwrap_err();
        assert!(matches!(err, RegistrationError::UnknownType { .. }));
    }
}
