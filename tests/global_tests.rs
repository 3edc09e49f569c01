//! Tests for the process-wide context.
//!
//! Kept in their own test binary: installing a registry must happen before
//! anything else touches the global context.

use dyncast::{ClassEntry, ContextError, Dynamic, ObjectRef, TypeHash, TypeRegistry, global, primitives};

#[test]
fn test_install_then_use_global_context() {
    let mut registry = TypeRegistry::with_primitives();
    registry.register_type(ClassEntry::reference("Entity")).unwrap();
    registry
        .register_type(ClassEntry::reference("Player").with_base(TypeHash::from_name("Entity")))
        .unwrap();

    let ctx = global::install(registry).unwrap();
    assert!(std::ptr::eq(ctx, global::context()));

    assert!(dyncast::is_valid_cast(
        TypeHash::from_name("Player"),
        TypeHash::from_name("Entity")
    ));
    let player = Dynamic::Object(ObjectRef::with_type(TypeHash::from_name("Player"), ()));
    assert!(dyncast::dynamic_cast(player, TypeHash::from_name("Entity")).is_ok());

    assert_eq!(dyncast::cast::<u8, i32>(200), Ok(200));
    let caster = dyncast::get_caster(primitives::INT32, primitives::UINT8).unwrap();
    let checked = dyncast::get_checked_caster(primitives::INT32, primitives::UINT8).unwrap();
    assert!(!caster.ptr_eq(&checked));

    let err = global::install(TypeRegistry::with_primitives()).unwrap_err();
    assert_eq!(err, ContextError::AlreadyInitialized);
}
