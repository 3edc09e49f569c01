//! Conversion builder.
//!
//! Turns a classified [`Conversion`] into a [`Caster`]. Each category has one
//! handler; every handler is wrapped in the same null policy:
//!
//! - `Null` into a destination that can represent absence yields `Null`
//! - `Null` into any other destination fails with `NullNotAllowed`
//!
//! A non-null input must be an instance of the conversion's source type;
//! anything else fails with `InvalidCast` naming the destination.
//!
//! Building is pure. Two builds for the same pair and mode produce casters
//! with identical behaviour.

use std::sync::Arc;

use dyncast_core::{
    BuildError, CastError, Caster, Dynamic, EnumValue, PrimitiveKind, Scalar, TypeHash,
};
use dyncast_registry::TypeRegistry;
use tracing::trace;

use crate::numeric::{convert_checked, convert_unchecked};
use crate::{Conversion, ConversionCategory, classify};

/// Classify and build the conversion from `from` to `to`.
pub fn build(
    registry: &Arc<TypeRegistry>,
    from: TypeHash,
    to: TypeHash,
    checked: bool,
) -> Result<Caster, BuildError> {
    let conversion = classify(registry, from, to);
    build_conversion(registry, &conversion, checked)
}

/// Build the caster for an already classified conversion.
///
/// Fails with a `BuildError` wrapping `InvalidCast` if the conversion is
/// [`ConversionCategory::Invalid`].
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn build_conversion(
    registry: &Arc<TypeRegistry>,
    conversion: &Conversion,
    checked: bool,
) -> Result<Caster, BuildError> {
    let target_name = registry.type_name(conversion.to).into_owned();

    trace!(
        from = %registry.type_name(conversion.from),
        to = %target_name,
        category = conversion.category.name(),
        checked,
        "building caster"
    );

    let caster = match conversion.category {
        ConversionCategory::Identity => {
            let registry = Arc::clone(registry);
            let source = conversion.source;
            let target = target_name.clone();
            Caster::new(move |value| match value.type_hash() {
                Some(actual) if registry.is_instance_of(actual, source) => Ok(value),
                _ => Err(CastError::invalid_cast(
                    describe_runtime(&registry, &value),
                    &target,
                )),
            })
        }

        ConversionCategory::WideningNumeric { from, to } => numeric(from, to, false),

        ConversionCategory::NarrowingNumeric { from, to } => numeric(from, to, checked),

        ConversionCategory::EnumToNumeric {
            enum_type,
            underlying,
            to,
        } => {
            let convert = kernel(checked);
            Caster::new(move |value| match value {
                Dynamic::Enum(e) if e.type_hash == enum_type && e.raw.kind() == underlying => {
                    convert(e.raw, to).map(Dynamic::Scalar)
                }
                other => Err(CastError::invalid_cast(other.describe(), to)),
            })
        }

        ConversionCategory::NumericToEnum {
            from,
            enum_type,
            underlying,
        } => {
            let convert = kernel(checked);
            let target = target_name.clone();
            Caster::new(move |value| match value {
                Dynamic::Scalar(s) if s.kind() == from => convert(s, underlying)
                    .map(|raw| Dynamic::Enum(EnumValue::new(enum_type, raw)))
                    .map_err(|e| rename_target(e, &target)),
                other => Err(CastError::invalid_cast(other.describe(), &target)),
            })
        }

        ConversionCategory::ReferenceUpcast { .. } => {
            let registry = Arc::clone(registry);
            let source = conversion.source;
            let name = target_name.clone();
            Caster::new(move |value| {
                let actual = value.as_object().map(|obj| obj.type_hash());
                match actual {
                    Some(actual) if registry.is_instance_of(actual, source) => Ok(value),
                    _ => Err(CastError::invalid_cast(
                        describe_runtime(&registry, &value),
                        &name,
                    )),
                }
            })
        }

        ConversionCategory::ReferenceDowncast { target } => {
            let registry = Arc::clone(registry);
            let name = target_name.clone();
            Caster::new(move |value| {
                let actual = value.as_object().map(|obj| obj.type_hash());
                match actual {
                    Some(actual) if registry.is_instance_of(actual, target) => Ok(value),
                    _ => Err(CastError::invalid_cast(
                        describe_runtime(&registry, &value),
                        &name,
                    )),
                }
            })
        }

        ConversionCategory::CustomOperator { key, .. } => {
            let custom = registry
                .custom_conversion(key)
                .ok_or_else(|| BuildError::new(CastError::invalid_cast(key.from, key.to)))?;
            custom.for_mode(checked).clone()
        }

        ConversionCategory::Invalid => {
            return Err(BuildError::new(CastError::invalid_cast(
                registry.type_name(conversion.from),
                target_name,
            )));
        }
    };

    Ok(with_null_policy(caster, conversion.target_nullable, target_name))
}

type Kernel = fn(Scalar, PrimitiveKind) -> Result<Scalar, CastError>;

fn kernel(checked: bool) -> Kernel {
    if checked { convert_checked } else { convert_unchecked }
}

/// Caster between two numeric primitives.
fn numeric(from: PrimitiveKind, to: PrimitiveKind, checked: bool) -> Caster {
    let convert = kernel(checked);
    Caster::new(move |value| match value {
        Dynamic::Scalar(s) if s.kind() == from => convert(s, to).map(Dynamic::Scalar),
        other => Err(CastError::invalid_cast(other.describe(), to)),
    })
}

/// Report overflow against the enum rather than its underlying type.
fn rename_target(err: CastError, target: &str) -> CastError {
    match err {
        CastError::Overflow { value, .. } => CastError::Overflow {
            value,
            target: target.to_string(),
        },
        other => other,
    }
}

fn describe_runtime(registry: &TypeRegistry, value: &Dynamic) -> String {
    match value.type_hash() {
        Some(hash) => registry.type_name(hash).into_owned(),
        None => value.describe(),
    }
}

fn with_null_policy(caster: Caster, target_nullable: bool, target_name: String) -> Caster {
    Caster::new(move |value| {
        if value.is_null() {
            return if target_nullable {
                Ok(Dynamic::Null)
            } else {
                Err(CastError::null_not_allowed(&target_name))
            };
        }
        caster.call(value)
    })
}
