//! End-to-end tests for `#[derive(Reflect)]`

#![allow(dead_code)]

use pretty_assertions::assert_eq;
use serde_json::json;
use typeschema_core::model::FieldType;
use typeschema_core::{GeneratorConfig, Reflect, SchemaGenerator, TypeRegistry};

#[derive(Reflect)]
struct Address {
    city: String,
    #[schema(rename = "zip", pattern = "^[0-9]{5}$")]
    postal_code: String,
}

#[derive(Reflect)]
#[schema(title = "Person")]
struct Person {
    #[schema(required, pattern = "^[a-z]+$")]
    user_name: String,

    #[schema(readonly, minimum = 0)]
    age: u32,

    #[schema(enums("active", "banned"))]
    status: String,

    active: bool,

    address: Option<Address>,

    tags: Vec<String>,

    #[schema(ignore)]
    secret: String,

    #[schema(skip)]
    cache: Vec<u8>,
}

#[derive(Reflect)]
#[schema(name = "TreeNode", nullable)]
struct Node {
    label: String,
    children: Vec<Node>,
}

#[derive(Reflect)]
#[schema(required, description = "Billing details")]
struct Billing {
    #[schema(multiple_of = 5)]
    amount: i64,
}

#[derive(Reflect)]
struct Invoice {
    billing: Billing,
    #[schema(readonly)]
    total: f64,
}

fn generate<T: Reflect>(config: GeneratorConfig) -> serde_json::Value {
    let mut registry = TypeRegistry::new();
    registry.register::<T>();
    let schema = SchemaGenerator::new(&registry)
        .with_config(config)
        .generate(T::TYPE_NAME)
        .unwrap();
    schema
}

#[test]
fn test_type_info_table() {
    let info = Person::type_info();
    assert_eq!(info.name, "Person");

    let fields: Vec<_> = info.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        fields,
        vec!["userName", "age", "status", "active", "address", "tags", "secret"]
    );
    assert_eq!(info.fields[4].ty, FieldType::Object("Address".into()));
    assert_eq!(
        info.fields[5].ty,
        FieldType::Array(Box::new(FieldType::String))
    );
    assert!(info.fields[6].ignored);

    assert!(info.declares_method("getUserName"));
    assert!(info.declares_method("setUserName"));
    assert!(info.declares_method("getAge"));
    assert!(!info.declares_method("setAge"));
    assert!(info.declares_method("isActive"));
    assert!(!info.declares_method("getCache"));
}

#[test]
fn test_register_pulls_in_nested_types() {
    let mut registry = TypeRegistry::new();
    registry.register::<Person>();

    assert!(registry.contains("Person"));
    assert!(registry.contains("Address"));
    assert_eq!(registry.user_types().count(), 2);
}

#[test]
fn test_person_schema() {
    let schema = generate::<Person>(GeneratorConfig::default());

    assert_eq!(
        schema,
        json!({
            "type": "object",
            "title": "Person",
            "properties": {
                "address": {
                    "type": "object",
                    "properties": {
                        "city": { "type": "string" },
                        "zip": { "type": "string", "pattern": "^[0-9]{5}$" }
                    }
                },
                "age": { "type": "integer", "minimum": 0, "readonly": true },
                "status": { "type": "string", "enum": ["active", "banned"] },
                "tags": { "type": "array", "items": { "type": "string" } },
                "userName": { "type": "string", "pattern": "^[a-z]+$" },
                "active": { "type": "boolean", "readonly": true }
            },
            "required": ["userName"]
        })
    );
}

#[test]
fn test_is_accessor_mutators_switch() {
    let config = GeneratorConfig {
        is_accessor_mutators: true,
        ..Default::default()
    };
    let schema = generate::<Person>(config);
    assert_eq!(schema["properties"]["active"], json!({ "type": "boolean" }));
}

#[test]
fn test_recursive_nullable_type() {
    let schema = generate::<Node>(GeneratorConfig::default());

    assert_eq!(
        schema,
        json!({
            "type": ["object", "null"],
            "properties": {
                "children": { "type": "array", "items": { "$ref": "#" } },
                "label": { "type": "string" }
            }
        })
    );
}

#[test]
fn test_required_nested_type() {
    let schema = generate::<Invoice>(GeneratorConfig::default());

    assert_eq!(
        schema,
        json!({
            "type": "object",
            "properties": {
                "billing": {
                    "type": "object",
                    "description": "Billing details",
                    "properties": {
                        "amount": { "type": "integer", "multipleOf": 5 }
                    }
                },
                "total": { "type": "number", "readonly": true }
            },
            "required": ["billing"]
        })
    );
}
