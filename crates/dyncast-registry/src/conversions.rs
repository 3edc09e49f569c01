//! User-registered conversion functions.
//!
//! The classifier only knows the built-in conversion categories. Anything
//! else between two specific types must be registered here before use.

use dyncast_core::Caster;

/// A registered conversion for one ordered type pair.
#[derive(Debug, Clone)]
pub struct CustomConversion {
    unchecked: Caster,
    checked: Option<Caster>,
}

impl CustomConversion {
    /// A conversion that behaves the same in checked and unchecked mode.
    pub fn new(caster: Caster) -> Self {
        Self {
            unchecked: caster,
            checked: None,
        }
    }

    /// A conversion with a distinct overflow-checking variant.
    pub fn with_checked(unchecked: Caster, checked: Caster) -> Self {
        Self {
            unchecked,
            checked: Some(checked),
        }
    }

    /// Whether the registration distinguishes checked from unchecked.
    pub fn distinguishes_checked(&self) -> bool {
        self.checked.is_some()
    }

    /// The function to use for the given mode.
    pub fn for_mode(&self, checked: bool) -> &Caster {
        match (&self.checked, checked) {
            (Some(c), true) => c,
            _ => &self.unchecked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyncast_core::Dynamic;

    #[test]
    fn single_variant_ignores_mode() {
        let conv = CustomConversion::new(Caster::identity());
        assert!(!conv.distinguishes_checked());
        assert!(conv.for_mode(true).ptr_eq(conv.for_mode(false)));
    }

    #[test]
    fn checked_variant_selected_by_mode() {
        let unchecked = Caster::identity();
        let checked = Caster::new(|_| Ok(Dynamic::Null));
        let conv = CustomConversion::with_checked(unchecked.clone(), checked.clone());

        assert!(conv.distinguishes_checked());
        assert!(conv.for_mode(false).ptr_eq(&unchecked));
        assert!(conv.for_mode(true).ptr_eq(&checked));
    }
}
