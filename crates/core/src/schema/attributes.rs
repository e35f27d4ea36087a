//! Attribute application
//!
//! Copies the present values of an [`AttributeSpec`] into a schema node
//! under their draft-04 keywords. A value is present when:
//!
//! | keyword | present when |
//! |---|---|
//! | `id`, `description`, `pattern`, `title` | non-empty |
//! | `maximum`, `minimum`, `maxItems` | `> -1` |
//! | `minItems`, `multipleOf` | `> 0` |
//! | `exclusiveMaximum`, `exclusiveMinimum`, `uniqueItems`, `readonly` | `true` |
//! | `enum` | non-empty |
//! | `minLength` | `min_length > 0`, written from `min_items` |
//! | `maxLength` | `max_length > -1`, written from `max_items` |
//!
//! The length keywords take their values from the item-count bounds. This
//! mirrors the established output of the generator and is kept as is until
//! the intended mapping is confirmed.

use serde_json::{Map, Value};
use typeschema_model::AttributeSpec;

use super::keywords::*;

/// Apply attribute constraints to a schema node
///
/// Returns the `required` flag of the attributes. It describes whether the
/// annotated element must be present in its parent and is never written to
/// `node` itself. `None` leaves the node untouched and returns `false`.
pub fn apply_attributes(node: &mut Map<String, Value>, attributes: Option<&AttributeSpec>) -> bool {
    let Some(attributes) = attributes else {
        return false;
    };

    for (keyword, value) in [
        (ID, &attributes.id),
        (DESCRIPTION, &attributes.description),
        (PATTERN, &attributes.pattern),
        (TITLE, &attributes.title),
    ] {
        if !value.is_empty() {
            node.insert(keyword.to_string(), Value::from(value.as_str()));
        }
    }

    if attributes.maximum > -1 {
        node.insert(MAXIMUM.to_string(), Value::from(attributes.maximum));
    }
    if attributes.exclusive_maximum {
        node.insert(EXCLUSIVE_MAXIMUM.to_string(), Value::Bool(true));
    }
    if attributes.minimum > -1 {
        node.insert(MINIMUM.to_string(), Value::from(attributes.minimum));
    }
    if attributes.exclusive_minimum {
        node.insert(EXCLUSIVE_MINIMUM.to_string(), Value::Bool(true));
    }
    if !attributes.enums.is_empty() {
        node.insert(ENUM.to_string(), Value::from(attributes.enums.clone()));
    }
    if attributes.unique_items {
        node.insert(UNIQUE_ITEMS.to_string(), Value::Bool(true));
    }
    if attributes.min_items > 0 {
        node.insert(MIN_ITEMS.to_string(), Value::from(attributes.min_items));
    }
    if attributes.max_items > -1 {
        node.insert(MAX_ITEMS.to_string(), Value::from(attributes.max_items));
    }
    if attributes.multiple_of > 0 {
        node.insert(MULTIPLE_OF.to_string(), Value::from(attributes.multiple_of));
    }
    if attributes.min_length > 0 {
        node.insert(MIN_LENGTH.to_string(), Value::from(attributes.min_items));
    }
    if attributes.max_length > -1 {
        node.insert(MAX_LENGTH.to_string(), Value::from(attributes.max_items));
    }
    if attributes.readonly {
        node.insert(READONLY.to_string(), Value::Bool(true));
    }

    attributes.required
}
