//! typeschema Proc Macros
//!
//! This crate provides `#[derive(Reflect)]`, which turns a Rust struct into
//! an explicit property table: its fields, the accessor and mutator names
//! the schema engine pairs with them, and the constraint metadata declared
//! in `#[schema(...)]` attributes.
//!
//! # Example
//!
//! ```ignore
//! use typeschema_core::Reflect;
//!
//! #[derive(Reflect)]
//! #[schema(title = "Person", description = "A registered user")]
//! pub struct Person {
//!     #[schema(required, pattern = "^[a-z]+$")]
//!     user_name: String,
//!
//!     #[schema(readonly, minimum = 0)]
//!     age: u32,
//!
//!     #[schema(enums("active", "banned"))]
//!     status: String,
//!
//!     address: Option<Address>,
//! }
//!
//! // Generated table:
//! // - fields userName, age, status, address
//! // - accessors getUserName, getAge, getStatus, getAddress
//! // - mutators setUserName, setStatus, setAddress (age is readonly)
//! // - register() also registers Address
//! ```
//!
//! # Attributes
//!
//! ## Struct Attributes
//!
//! - `#[schema(name = "Name")]` - Registered type name (default: struct name).
//! - `#[schema(extends = "Base")]` - Base type name.
//! - `#[schema(collection)]` - The type is collection-like.
//! - `#[schema(nullable)]` - Emit `"type": ["object", "null"]`.
//! - `#[schema(accessors("getFullName"))]` - Extra accessors without a backing field.
//! - Constraint keywords (see below).
//!
//! ## Field Attributes
//!
//! - `#[schema(rename = "name")]` - Property name override (default: camelCase field name).
//! - `#[schema(skip)]` - Leave the field out of the table.
//! - `#[schema(ignore)]` - Keep the field but omit the property from output.
//! - `#[schema(readonly)]` - Don't declare a mutator.
//! - `#[schema(enums("a", "b"))]` - Allowed literal values.
//! - Constraint keywords (see below).
//!
//! ## Constraint Keywords
//!
//! `id`, `title`, `description`, `pattern`, `maximum`, `minimum`,
//! `exclusive_maximum`, `exclusive_minimum`, `enums(...)`, `unique_items`,
//! `min_items`, `max_items`, `multiple_of`, `min_length`, `max_length`,
//! `required`, `readonly`.

mod parse;
mod reflect;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive macro for property tables
///
/// # Generated Code
///
/// An implementation of `typeschema_core::model::Reflect`:
///
/// - `TYPE_NAME` - the registered type name
/// - `type_info()` - fields in declaration order, one accessor per field
///   (`is` prefix for `bool`, `get` otherwise) and a `set` mutator unless
///   the field is `readonly`
/// - `register()` - inserts the type, then registers every type its fields
///   reference, stopping at types that are already registered
///
/// Every non-primitive field type (looking through `Option`, `Box`, `Rc`,
/// `Arc` and sequences) must itself implement `Reflect`.
#[proc_macro_derive(Reflect, attributes(schema))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    reflect::derive_reflect(input).into()
}
