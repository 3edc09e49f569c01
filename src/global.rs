//! Process-wide default context.
//!
//! The global context is created once and lives for the rest of the
//! process. Install a populated registry with [`install`] before the first
//! cast; otherwise the first use creates a context with only the built-in
//! primitives.

use std::sync::OnceLock;

use dyncast_core::{CastError, CastType, Caster, Dynamic, FromDynamic, IntoDynamic, TypeHash};
use dyncast_registry::TypeRegistry;
use tracing::debug;

use crate::{CastContext, ContextError};

static GLOBAL: OnceLock<CastContext> = OnceLock::new();

/// Install `registry` as the process-wide registry.
///
/// Fails if the global context already exists, including when a cast
/// already created the default one.
pub fn install(registry: TypeRegistry) -> Result<&'static CastContext, ContextError> {
    GLOBAL
        .set(CastContext::new(registry))
        .map_err(|_| ContextError::AlreadyInitialized)?;
    debug!("installed global cast context");
    Ok(context())
}

/// The process-wide context.
pub fn context() -> &'static CastContext {
    GLOBAL.get_or_init(CastContext::with_primitives)
}

/// See [`CastContext::is_valid_cast`].
pub fn is_valid_cast(from: TypeHash, to: TypeHash) -> bool {
    context().is_valid_cast(from, to)
}

/// See [`CastContext::cast`].
pub fn cast<F, T>(value: F) -> Result<T, CastError>
where
    F: CastType + IntoDynamic,
    T: CastType + FromDynamic,
{
    context().cast(value)
}

/// See [`CastContext::checked_cast`].
pub fn checked_cast<F, T>(value: F) -> Result<T, CastError>
where
    F: CastType + IntoDynamic,
    T: CastType + FromDynamic,
{
    context().checked_cast(value)
}

/// See [`CastContext::dynamic_cast`].
pub fn dynamic_cast(value: Dynamic, to: TypeHash) -> Result<Dynamic, CastError> {
    context().dynamic_cast(value, to)
}

/// See [`CastContext::dynamic_checked_cast`].
pub fn dynamic_checked_cast(value: Dynamic, to: TypeHash) -> Result<Dynamic, CastError> {
    context().dynamic_checked_cast(value, to)
}

/// See [`CastContext::get_caster`].
pub fn get_caster(from: TypeHash, to: TypeHash) -> Result<Caster, CastError> {
    context().get_caster(from, to)
}

/// See [`CastContext::get_checked_caster`].
pub fn get_checked_caster(from: TypeHash, to: TypeHash) -> Result<Caster, CastError> {
    context().get_checked_caster(from, to)
}
