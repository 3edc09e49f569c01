//! Conversion classification.
//!
//! Decides whether a conversion exists between two types and which category
//! applies. Nullable wrappers are lifted first: `T? -> U?`, `T -> U?` and
//! `T? -> U` classify as `T -> U`.
//!
//! ## Decision Order
//!
//! First match wins:
//! 1. Identity (same type)
//! 2. Numeric primitive widening or narrowing
//! 3. Enum to numeric, numeric to enum
//! 4. Reference upcast (target is a base class or implemented interface)
//! 5. Reference downcast (source is an ancestor of the target)
//! 6. Registered custom conversion
//! 7. Invalid
//!
//! Classification is pure and uncached.

use dyncast_core::{CastKey, PrimitiveKind, TypeHash};
use dyncast_registry::{TypeRegistry, TypeTraits};
use tracing::trace;

/// The category of a conversion, with the data the builder needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionCategory {
    /// Same type after lifting; the value passes through.
    Identity,

    /// Lossless numeric conversion.
    WideningNumeric {
        from: PrimitiveKind,
        to: PrimitiveKind,
    },

    /// Numeric conversion that may lose information.
    NarrowingNumeric {
        from: PrimitiveKind,
        to: PrimitiveKind,
    },

    /// Enum to a numeric primitive, through its underlying type.
    EnumToNumeric {
        enum_type: TypeHash,
        underlying: PrimitiveKind,
        to: PrimitiveKind,
    },

    /// Numeric primitive to enum, through its underlying type.
    NumericToEnum {
        from: PrimitiveKind,
        enum_type: TypeHash,
        underlying: PrimitiveKind,
    },

    /// Derived to base class or implemented interface.
    ReferenceUpcast { target: TypeHash },

    /// Base to derived; validated against the run-time type.
    ReferenceDowncast { target: TypeHash },

    /// Registered conversion function.
    CustomOperator {
        /// The pair the conversion was registered under.
        key: CastKey,
        /// Whether a distinct checked variant is registered.
        checked_variant: bool,
    },

    /// No legal conversion.
    Invalid,
}

impl ConversionCategory {
    /// Whether checked and unchecked mode behave differently.
    pub fn has_overflow_distinction(&self) -> bool {
        match self {
            ConversionCategory::NarrowingNumeric { .. }
            | ConversionCategory::EnumToNumeric { .. }
            | ConversionCategory::NumericToEnum { .. } => true,
            ConversionCategory::CustomOperator {
                checked_variant, ..
            } => *checked_variant,
            _ => false,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ConversionCategory::Invalid)
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ConversionCategory::Identity => "identity",
            ConversionCategory::WideningNumeric { .. } => "widening numeric",
            ConversionCategory::NarrowingNumeric { .. } => "narrowing numeric",
            ConversionCategory::EnumToNumeric { .. } => "enum to numeric",
            ConversionCategory::NumericToEnum { .. } => "numeric to enum",
            ConversionCategory::ReferenceUpcast { .. } => "reference upcast",
            ConversionCategory::ReferenceDowncast { .. } => "reference downcast",
            ConversionCategory::CustomOperator { .. } => "custom operator",
            ConversionCategory::Invalid => "invalid",
        }
    }
}

/// A classified conversion between two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    /// Source type as requested (possibly a nullable wrapper).
    pub from: TypeHash,
    /// Destination type as requested (possibly a nullable wrapper).
    pub to: TypeHash,
    /// Source type with any nullable wrapper stripped. Every non-null input
    /// must be an instance of it.
    pub source: TypeHash,
    /// Category of the lifted conversion.
    pub category: ConversionCategory,
    /// Whether the destination can represent null.
    pub target_nullable: bool,
}

impl Conversion {
    pub fn key(&self) -> CastKey {
        CastKey::new(self.from, self.to)
    }

    pub fn is_valid(&self) -> bool {
        !self.category.is_invalid()
    }

    pub fn has_overflow_distinction(&self) -> bool {
        self.category.has_overflow_distinction()
    }
}

/// Classify the conversion from `from` to `to`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn classify(registry: &TypeRegistry, from: TypeHash, to: TypeHash) -> Conversion {
    let from_traits = TypeTraits::lookup(registry, from);
    let to_traits = TypeTraits::lookup(registry, to);
    let category = classify_category(registry, from, to, &from_traits, &to_traits);

    trace!(
        from = %registry.type_name(from),
        to = %registry.type_name(to),
        category = category.name(),
        "classified conversion"
    );

    Conversion {
        from,
        to,
        source: from_traits.nullable_inner.unwrap_or(from),
        category,
        target_nullable: to_traits.is_nullable_capable(),
    }
}

/// Check if any conversion exists from `from` to `to`.
pub fn is_valid_cast(registry: &TypeRegistry, from: TypeHash, to: TypeHash) -> bool {
    classify(registry, from, to).is_valid()
}

fn classify_category(
    registry: &TypeRegistry,
    from: TypeHash,
    to: TypeHash,
    from_traits: &TypeTraits,
    to_traits: &TypeTraits,
) -> ConversionCategory {
    if from == to {
        return ConversionCategory::Identity;
    }

    let inner_from = from_traits.nullable_inner.unwrap_or(from);
    let inner_to = to_traits.nullable_inner.unwrap_or(to);

    if inner_from == inner_to {
        return ConversionCategory::Identity;
    }

    let src = lift(registry, from_traits, inner_from);
    let dst = lift(registry, to_traits, inner_to);

    if let (Some(a), Some(b)) = (src.numeric_kind(), dst.numeric_kind()) {
        return if a.widens_to(b) {
            ConversionCategory::WideningNumeric { from: a, to: b }
        } else {
            ConversionCategory::NarrowingNumeric { from: a, to: b }
        };
    }

    if let (Some(underlying), Some(b)) = (src.enum_underlying, dst.numeric_kind()) {
        return ConversionCategory::EnumToNumeric {
            enum_type: inner_from,
            underlying,
            to: b,
        };
    }

    if let (Some(a), Some(underlying)) = (src.numeric_kind(), dst.enum_underlying) {
        return ConversionCategory::NumericToEnum {
            from: a,
            enum_type: inner_to,
            underlying,
        };
    }

    if registry.is_derived_from(inner_from, inner_to) {
        return ConversionCategory::ReferenceUpcast { target: inner_to };
    }

    if registry.is_derived_from(inner_to, inner_from) {
        return ConversionCategory::ReferenceDowncast { target: inner_to };
    }

    for key in [CastKey::new(from, to), CastKey::new(inner_from, inner_to)] {
        if let Some(custom) = registry.custom_conversion(key) {
            return ConversionCategory::CustomOperator {
                key,
                checked_variant: custom.distinguishes_checked(),
            };
        }
    }

    ConversionCategory::Invalid
}

/// Traits of the wrapped type, or of the type itself if not a wrapper.
fn lift(registry: &TypeRegistry, traits: &TypeTraits, inner: TypeHash) -> TypeTraits {
    match traits.nullable_inner {
        Some(_) => TypeTraits::lookup(registry, inner),
        None => *traits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyncast_core::{ClassEntry, Dynamic, EnumEntry, InterfaceEntry, primitives};

    fn h(name: &str) -> TypeHash {
        TypeHash::from_name(name)
    }

    fn registry() -> TypeRegistry {
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
        registry.register_type(ClassEntry::reference("Item")).unwrap();
        registry
            .register_type(EnumEntry::new("Status", PrimitiveKind::Uint8))
            .unwrap();
        registry
            .register_type(EnumEntry::new("Mode", PrimitiveKind::Int32))
            .unwrap();
        registry
            .register_conversion(h("Item"), primitives::INT32, |_| Ok(Dynamic::Null))
            .unwrap();
        registry
    }

    #[test]
    fn identity_for_any_type() {
        let registry = registry();
        for hash in [primitives::BOOL, primitives::INT32, h("Player"), h("Unknown")] {
            assert_eq!(
                classify(&registry, hash, hash).category,
                ConversionCategory::Identity
            );
        }
    }

    #[test]
    fn numeric_widening_and_narrowing() {
        let registry = registry();
        let conv = classify(&registry, primitives::UINT8, primitives::INT32);
        assert_eq!(
            conv.category,
            ConversionCategory::WideningNumeric {
                from: PrimitiveKind::Uint8,
                to: PrimitiveKind::Int32
            }
        );
        assert!(!conv.has_overflow_distinction());

        let conv = classify(&registry, primitives::INT32, primitives::UINT8);
        assert!(matches!(conv.category, ConversionCategory::NarrowingNumeric { .. }));
        assert!(conv.has_overflow_distinction());

        let conv = classify(&registry, primitives::INT64, primitives::DOUBLE);
        assert!(matches!(conv.category, ConversionCategory::NarrowingNumeric { .. }));
        let conv = classify(&registry, primitives::INT32, primitives::DOUBLE);
        assert!(matches!(conv.category, ConversionCategory::WideningNumeric { .. }));
    }

    #[test]
    fn bool_only_identity() {
        let registry = registry();
        assert!(!is_valid_cast(&registry, primitives::BOOL, primitives::INT32));
        assert!(!is_valid_cast(&registry, primitives::UINT8, primitives::BOOL));
    }

    #[test]
    fn enum_numeric_conversions() {
        let registry = registry();
        let conv = classify(&registry, h("Status"), primitives::INT64);
        assert_eq!(
            conv.category,
            ConversionCategory::EnumToNumeric {
                enum_type: h("Status"),
                underlying: PrimitiveKind::Uint8,
                to: PrimitiveKind::Int64
            }
        );
        assert!(conv.has_overflow_distinction());

        let conv = classify(&registry, primitives::INT32, h("Status"));
        assert!(matches!(conv.category, ConversionCategory::NumericToEnum { .. }));

        assert!(!is_valid_cast(&registry, h("Status"), h("Mode")));
        assert!(!is_valid_cast(&registry, h("Status"), primitives::BOOL));
    }

    #[test]
    fn reference_up_and_downcast() {
        let registry = registry();
        assert_eq!(
            classify(&registry, h("Player"), h("Entity")).category,
            ConversionCategory::ReferenceUpcast { target: h("Entity") }
        );
        assert_eq!(
            classify(&registry, h("Player"), h("IDrawable")).category,
            ConversionCategory::ReferenceUpcast { target: h("IDrawable") }
        );
        assert_eq!(
            classify(&registry, h("Entity"), h("Player")).category,
            ConversionCategory::ReferenceDowncast { target: h("Player") }
        );
        assert!(!is_valid_cast(&registry, h("Entity"), h("Item")));
    }

    #[test]
    fn custom_operator_lookup() {
        let registry = registry();
        let conv = classify(&registry, h("Item"), primitives::INT32);
        assert_eq!(
            conv.category,
            ConversionCategory::CustomOperator {
                key: CastKey::new(h("Item"), primitives::INT32),
                checked_variant: false
            }
        );
        assert!(!conv.has_overflow_distinction());
        assert!(!is_valid_cast(&registry, primitives::INT32, h("Item")));
    }

    #[test]
    fn nullable_wrappers_are_lifted() {
        let registry = registry();
        let int_opt = TypeHash::nullable_of(primitives::INT32);
        let byte_opt = TypeHash::nullable_of(primitives::UINT8);

        let conv = classify(&registry, primitives::INT32, int_opt);
        assert_eq!(conv.category, ConversionCategory::Identity);
        assert!(conv.target_nullable);

        let conv = classify(&registry, int_opt, byte_opt);
        assert!(matches!(conv.category, ConversionCategory::NarrowingNumeric { .. }));

        let conv = classify(&registry, int_opt, primitives::INT64);
        assert!(matches!(conv.category, ConversionCategory::WideningNumeric { .. }));
        assert!(!conv.target_nullable);
    }

    #[test]
    fn source_strips_nullable_wrapper() {
        let registry = registry();
        let int_opt = TypeHash::nullable_of(primitives::INT32);

        assert_eq!(classify(&registry, int_opt, primitives::INT64).source, primitives::INT32);
        assert_eq!(classify(&registry, int_opt, int_opt).source, primitives::INT32);
        assert_eq!(classify(&registry, h("Player"), h("Entity")).source, h("Player"));
    }

    #[test]
    fn target_nullability() {
        let registry = registry();
        assert!(classify(&registry, h("Player"), h("Entity")).target_nullable);
        assert!(!classify(&registry, primitives::INT32, primitives::UINT8).target_nullable);
        assert!(!classify(&registry, primitives::INT32, h("Status")).target_nullable);
    }

    #[test]
    fn unknown_types_are_invalid() {
        let registry = registry();
        assert!(!is_valid_cast(&registry, h("Ghost"), primitives::INT32));
        assert!(!is_valid_cast(&registry, primitives::INT32, h("Ghost")));
        assert!(!is_valid_cast(&registry, h("Ghost"), h("Entity")));
    }
}
