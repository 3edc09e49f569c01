//! Host type system for run-time cast resolution.
//!
//! - [`TypeRegistry`]: type entries, inheritance graph, custom conversions
//! - [`TypeHierarchy`]: the derives/implements graph
//! - [`TypeTraits`]: per-type trait lookup used by the classifier

mod conversions;
mod hierarchy;
mod registry;
mod traits;

pub use conversions::CustomConversion;
pub use hierarchy::TypeHierarchy;
pub use registry::TypeRegistry;
pub use traits::{TraitFlags, TypeTraits};
