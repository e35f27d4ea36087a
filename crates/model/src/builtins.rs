//! Built-in types
//!
//! Every type implicitly derives from the universal root type, whose
//! methods are never user-modelled properties. The collection types are
//! likewise excluded: any method declared by a collection-like type is
//! skipped during property discovery.

use crate::types::{FieldType, MethodInfo, TypeInfo};

/// Name of the universal root type
pub const ROOT_TYPE_NAME: &str = "Object";

/// Names of all types pre-installed in every registry
pub const BUILTIN_TYPE_NAMES: &[&str] = &[ROOT_TYPE_NAME, "Collection", "List", "Set", "Queue", "Deque"];

/// Check if a type name is a built-in type
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TYPE_NAMES.contains(&name)
}

/// The universal root type
pub fn root_type() -> TypeInfo {
    TypeInfo::new(ROOT_TYPE_NAME)
        .with_method(MethodInfo::returning("getClass", FieldType::String))
        .with_method(MethodInfo::returning("hashCode", FieldType::Integer))
        .with_method(MethodInfo::returning("toString", FieldType::String))
        .with_method(MethodInfo::returning("equals", FieldType::Boolean))
}

fn collection_type(name: &str, extends: Option<&str>, ends: bool) -> TypeInfo {
    let mut ty = TypeInfo::new(name)
        .with_method(MethodInfo::returning("isEmpty", FieldType::Boolean))
        .with_method(MethodInfo::returning("size", FieldType::Integer))
        .with_method(MethodInfo::new("iterator"));
    if ends {
        ty = ty
            .with_method(MethodInfo::new("getFirst"))
            .with_method(MethodInfo::new("getLast"));
    }
    ty.extends = extends.map(str::to_string);
    ty.collection = true;
    ty
}

/// All built-in types
pub fn builtin_types() -> Vec<TypeInfo> {
    vec![
        root_type(),
        collection_type("Collection", None, false),
        collection_type("List", Some("Collection"), true),
        collection_type("Set", Some("Collection"), false),
        collection_type("Queue", Some("Collection"), false),
        collection_type("Deque", Some("Queue"), true),
    ]
}
