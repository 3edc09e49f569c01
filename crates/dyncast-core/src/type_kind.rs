//! Value vs reference semantics.

/// Type kind determines how a type's values behave under casts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Value type: copied on assignment, cannot be null unless wrapped.
    Value,
    /// Reference type: handle semantics, null is a valid value.
    Reference,
}

impl TypeKind {
    pub fn is_value(self) -> bool {
        matches!(self, TypeKind::Value)
    }

    pub fn is_reference(self) -> bool {
        matches!(self, TypeKind::Reference)
    }
}
