//! typeschema model - Type Table Definitions
//!
//! This crate contains the plain data that describes a typed object model:
//! types, their fields, their public accessor methods and the attribute
//! metadata attached to them. It replaces runtime reflection with explicit
//! tables, either generated by `#[derive(Reflect)]` or loaded from a model
//! file.
//!
//! # Modules
//!
//! - [`attributes`] - Constraint metadata declared on types and fields
//! - [`types`] - Type, field and method descriptors
//! - [`builtins`] - The universal root type and built-in collection types
//! - [`registry`] - Name-indexed store of type descriptors
//! - [`reflect`] - Trait implemented by the derive macro

pub mod attributes;
pub mod builtins;
pub mod reflect;
pub mod registry;
pub mod types;

pub use attributes::AttributeSpec;
pub use builtins::{is_builtin, BUILTIN_TYPE_NAMES, ROOT_TYPE_NAME};
pub use reflect::Reflect;
pub use registry::{DeclaredMethod, ModelFile, RegistryError, TypeRegistry};
pub use types::{EnumConstant, EnumHolder, FieldInfo, FieldType, MethodInfo, TypeInfo};
