//! Attribute metadata
//!
//! An [`AttributeSpec`] is the resolved form of the constraint metadata a
//! type or field declares. Unset values carry sentinel defaults (empty
//! strings, `-1` upper bounds, `0` lower bounds, `false` flags) so a spec
//! can be written with struct update syntax and only the set values spelled
//! out.

use serde::{Deserialize, Serialize};

/// Constraint values declared on a type or a field
///
/// # Example
///
/// ```
/// use typeschema_model::AttributeSpec;
///
/// let spec = AttributeSpec {
///     title: "Person".to_string(),
///     minimum: 5,
///     ..Default::default()
/// };
/// assert_eq!(spec.maximum, -1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeSpec {
    /// Schema `id`
    pub id: String,
    /// Human readable title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Regular expression the value must match
    pub pattern: String,
    /// Inclusive upper bound (`-1` = unset)
    pub maximum: i64,
    /// Treat `maximum` as exclusive
    pub exclusive_maximum: bool,
    /// Inclusive lower bound (`-1` = unset)
    pub minimum: i64,
    /// Treat `minimum` as exclusive
    pub exclusive_minimum: bool,
    /// Allowed literal values
    pub enums: Vec<String>,
    /// Array items must be unique
    pub unique_items: bool,
    /// Minimum item count (`0` = unset)
    pub min_items: i64,
    /// Maximum item count (`-1` = unset)
    pub max_items: i64,
    /// Value must be a multiple of this (`0` = unset)
    pub multiple_of: i64,
    /// Minimum string length (`0` = unset)
    pub min_length: i64,
    /// Maximum string length (`-1` = unset)
    pub max_length: i64,
    /// Presence is required in the parent object
    pub required: bool,
    /// Value cannot be written
    pub readonly: bool,
}

impl Default for AttributeSpec {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            pattern: String::new(),
            maximum: -1,
            exclusive_maximum: false,
            minimum: -1,
            exclusive_minimum: false,
            enums: Vec::new(),
            unique_items: false,
            min_items: 0,
            max_items: -1,
            multiple_of: 0,
            min_length: 0,
            max_length: -1,
            required: false,
            readonly: false,
        }
    }
}
