//! Schema Assembly - JSON Schema documents from type tables
//!
//! This module compiles a registered type into a draft-04 JSON Schema
//! object node: its own constraints, its properties in accessor-name order,
//! and the names of its required properties.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 CustomSchema::build (assembler)             │
//! │   type + attributes::apply_attributes → node                │
//! └─────────────────────────────┬───────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  discovery::discover_properties                             │
//! │    - public methods sorted by name                          │
//! │    - getter ↔ field pairing, read-only detection            │
//! │  enums::extract_enums (per field)                           │
//! └─────────────────────────────┬───────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  PropertyRenderer::render (per property)                    │
//! │    - nested types: pull → CustomSchema::build → push        │
//! │    - already expanding: {"$ref": <relative id>}             │
//! └─────────────────────────────┬───────────────────────────────┘
//!                               │
//!                               ▼
//!             CustomSchema::add_property → properties / required
//! ```
//!
//! The [`ExpansionContext`] is shared by every assembler of one document
//! build and is passed down explicitly; it is never global.

pub mod attributes;
pub mod custom;
pub mod discovery;
pub mod enums;
pub mod keywords;
pub mod property;
pub mod references;
pub mod relative_id;

// Re-export primary types
pub use attributes::apply_attributes;
pub use custom::{CustomSchema, Property, PropertyDescriptor, PropertyFragment};
pub use discovery::{
    discover_properties, is_getter, mutator_name, name_from_getter, Capabilities,
    DiscoveredProperty, DiscoveryOptions,
};
pub use enums::extract_enums;
pub use property::{DefaultPropertyRenderer, PropertyRenderer};
pub use references::{ExpansionContext, ManagedReference};
pub use relative_id::RelativeId;
