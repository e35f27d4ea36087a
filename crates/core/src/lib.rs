//! typeschema - JSON Schema generation from typed object models
//!
//! This crate assembles draft-04 JSON Schema documents from the type tables
//! described in [`model`]. Types reach the registry either through
//! `#[derive(Reflect)]` or from a model file.
//!
//! # Example
//!
//! ```ignore
//! use typeschema_core::{Reflect, SchemaGenerator, TypeRegistry};
//!
//! #[derive(Reflect)]
//! struct Person {
//!     #[schema(minimum = 0)]
//!     age: i32,
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Person>();
//! let schema = SchemaGenerator::new(&registry).generate("Person")?;
//! ```

// Allow the crate to refer to itself as `typeschema_core` for proc macro compatibility
extern crate self as typeschema_core;

// Re-export the model crate
pub use typeschema_model as model;

pub mod config;
pub mod error;
pub mod generator;
pub mod schema;

// The derive macro and the trait share a name
pub use typeschema_macros::Reflect;
pub use typeschema_model::Reflect;

// Re-export commonly used items
pub use config::{ConfigError, ConfigResult, GeneratorConfig};
pub use error::{SchemaError, SchemaResult};
pub use generator::{SchemaGenerator, DRAFT_04_SCHEMA_URI};
pub use schema::{
    CustomSchema, DefaultPropertyRenderer, ExpansionContext, ManagedReference, PropertyDescriptor,
    PropertyFragment, PropertyRenderer, RelativeId,
};
pub use typeschema_model::{AttributeSpec, FieldInfo, FieldType, MethodInfo, TypeInfo, TypeRegistry};
