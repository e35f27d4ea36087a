//! Reflect trait
//!
//! Implemented by `#[derive(Reflect)]`. It exposes a type's property table
//! as a [`TypeInfo`] and registers the type, plus every type its fields
//! reference, into a [`TypeRegistry`].

use crate::registry::TypeRegistry;
use crate::types::TypeInfo;

/// Types that can describe their own property table
pub trait Reflect {
    /// Name the type is registered under
    const TYPE_NAME: &'static str;

    /// Build the type's descriptor
    fn type_info() -> TypeInfo;

    /// Register this type and the types it references
    ///
    /// Must be idempotent: a type that is already registered is left
    /// untouched, which also terminates mutually referencing types.
    fn register(registry: &mut TypeRegistry) {
        if !registry.contains(Self::TYPE_NAME) {
            registry.insert(Self::type_info());
        }
    }
}
