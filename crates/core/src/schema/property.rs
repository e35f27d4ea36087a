//! Property rendering
//!
//! The assembler hands every discovered property to a [`PropertyRenderer`],
//! which turns it into a schema fragment or decides to omit it. The
//! [`DefaultPropertyRenderer`] maps field types onto draft-04 types and
//! expands nested object types through the shared [`ExpansionContext`].

use serde_json::{Map, Value};
use tracing::trace;
use typeschema_model::{FieldInfo, FieldType};

use super::attributes::apply_attributes;
use super::custom::{CustomSchema, PropertyDescriptor, PropertyFragment};
use super::keywords::{ENUM, ITEMS, PROPERTIES, READONLY, REF, TYPE};
use super::references::{ExpansionContext, ManagedReference};
use super::relative_id::RelativeId;
use crate::error::SchemaResult;
use crate::generator::SchemaGenerator;

/// Turns one discovered property into a schema fragment
pub trait PropertyRenderer {
    /// Render a property of `owner`
    ///
    /// Returns `Ok(None)` to omit the property. Implementations that expand
    /// nested types must bracket each expansion with
    /// [`ExpansionContext::pull`] and [`ExpansionContext::push`].
    fn render(
        &self,
        generator: &SchemaGenerator<'_>,
        owner: &CustomSchema,
        references: &mut ExpansionContext,
        property: &PropertyDescriptor,
        field: Option<&FieldInfo>,
    ) -> SchemaResult<Option<PropertyFragment>>;
}

/// Renderer used unless the generator is given another one
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPropertyRenderer;

impl DefaultPropertyRenderer {
    /// Write the type of `ty` into `node`
    ///
    /// Returns whether the rendered type is itself marked required.
    fn render_type(
        &self,
        generator: &SchemaGenerator<'_>,
        references: &mut ExpansionContext,
        ty: &FieldType,
        relative_id: &RelativeId,
        node: &mut Map<String, Value>,
    ) -> SchemaResult<bool> {
        let primitive = match ty {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Array(inner) => {
                let mut items = Map::new();
                self.render_type(generator, references, inner, &relative_id.child(ITEMS), &mut items)?;
                node.insert(TYPE.to_string(), Value::from("array"));
                node.insert(ITEMS.to_string(), Value::Object(items));
                return Ok(false);
            }
            FieldType::Object(name) => {
                return self.render_object(generator, references, name, relative_id, node);
            }
        };
        node.insert(TYPE.to_string(), Value::from(primitive));
        Ok(false)
    }

    fn render_object(
        &self,
        generator: &SchemaGenerator<'_>,
        references: &mut ExpansionContext,
        type_name: &str,
        relative_id: &RelativeId,
        node: &mut Map<String, Value>,
    ) -> SchemaResult<bool> {
        let target = generator.registry().get(type_name)?;
        let reference = ManagedReference::for_type(target);

        if !references.pull(&reference, relative_id.as_str()) {
            let anchor = references.anchor(&reference).unwrap_or(RelativeId::ROOT);
            trace!("Breaking cycle on {} with $ref {}", type_name, anchor);
            node.insert(REF.to_string(), Value::from(anchor));
            return Ok(target.attributes.as_ref().is_some_and(|a| a.required));
        }

        let nested = CustomSchema::build(generator, target, references, Some(relative_id.as_str()));
        references.push(&reference);
        let nested = nested?;

        let required = nested.is_required();
        if let Value::Object(map) = nested.into_json() {
            node.extend(map);
        }
        Ok(required)
    }
}

impl PropertyRenderer for DefaultPropertyRenderer {
    fn render(
        &self,
        generator: &SchemaGenerator<'_>,
        owner: &CustomSchema,
        references: &mut ExpansionContext,
        property: &PropertyDescriptor,
        field: Option<&FieldInfo>,
    ) -> SchemaResult<Option<PropertyFragment>> {
        if field.is_some_and(|f| f.ignored) {
            return Ok(None);
        }

        let mut node = Map::new();
        let mut required = false;

        if let Some(ty) = &property.field_type {
            let mut relative_id = RelativeId::root();
            relative_id.add_token(owner.relative_id());
            relative_id.add_token(PROPERTIES);
            relative_id.add_token(&property.name);
            required |= self.render_type(generator, references, ty, &relative_id, &mut node)?;
        }

        required |= apply_attributes(&mut node, field.and_then(|f| f.attributes.as_ref()));

        if !property.enums.is_empty() {
            node.insert(ENUM.to_string(), Value::from(property.enums.clone()));
        }
        if property.readonly {
            node.insert(READONLY.to_string(), Value::Bool(true));
        }

        Ok(Some(PropertyFragment {
            name: property.name.clone(),
            schema: Value::Object(node),
            required,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::discovery::Capabilities;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use typeschema_model::{AttributeSpec, MethodInfo, TypeInfo, TypeRegistry};

    fn render(
        registry: &TypeRegistry,
        property: &PropertyDescriptor,
        field: Option<&FieldInfo>,
    ) -> Option<PropertyFragment> {
        let generator = SchemaGenerator::new(registry);
        let mut references = ExpansionContext::new();
        let owner = CustomSchema::build(
            &generator,
            registry.get("Owner").unwrap(),
            &mut references,
            None,
        )
        .unwrap();
        DefaultPropertyRenderer
            .render(&generator, &owner, &mut references, property, field)
            .unwrap()
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.insert(TypeInfo::new("Owner"));
        registry.insert(
            TypeInfo::new("Address")
                .with_attributes(AttributeSpec {
                    required: true,
                    ..Default::default()
                })
                .with_field(FieldInfo::new("city", FieldType::String))
                .with_method(MethodInfo::new("getCity")),
        );
        registry
    }

    fn descriptor(name: &str, ty: Option<FieldType>) -> PropertyDescriptor {
        PropertyDescriptor {
            name: name.to_string(),
            accessor: String::new(),
            readonly: false,
            enums: Vec::new(),
            field_type: ty,
            capabilities: Capabilities::ACCESSOR,
        }
    }

    #[test]
    fn test_primitive_with_field_attributes() {
        let mut field = FieldInfo::new("code", FieldType::String);
        field.attributes = Some(AttributeSpec {
            pattern: "^[A-Z]{2}$".into(),
            required: true,
            ..Default::default()
        });
        let mut property = descriptor("code", Some(FieldType::String));
        property.enums = vec!["DE".into(), "FR".into()];
        property.readonly = true;

        let fragment = render(&registry(), &property, Some(&field)).unwrap();
        assert!(fragment.required);
        assert_eq!(
            fragment.schema,
            json!({
                "type": "string",
                "pattern": "^[A-Z]{2}$",
                "enum": ["DE", "FR"],
                "readonly": true
            })
        );
    }

    #[test]
    fn test_ignored_field_is_omitted() {
        let mut field = FieldInfo::new("secret", FieldType::String);
        field.ignored = true;
        let property = descriptor("secret", Some(FieldType::String));

        assert!(render(&registry(), &property, Some(&field)).is_none());
    }

    #[test]
    fn test_untyped_accessor() {
        let fragment = render(&registry(), &descriptor("fullName", None), None).unwrap();
        assert_eq!(fragment.schema, json!({}));
        assert!(!fragment.required);
    }

    #[test]
    fn test_array_of_numbers() {
        let ty = FieldType::Array(Box::new(FieldType::Number));
        let fragment = render(&registry(), &descriptor("scores", Some(ty)), None).unwrap();
        assert_eq!(
            fragment.schema,
            json!({ "type": "array", "items": { "type": "number" } })
        );
    }

    #[test]
    fn test_nested_object_is_expanded_and_required() {
        let ty = FieldType::Object("Address".into());
        let fragment = render(&registry(), &descriptor("home", Some(ty)), None).unwrap();
        assert!(fragment.required);
        assert_eq!(
            fragment.schema,
            json!({
                "type": "object",
                "properties": { "city": { "type": "string", "readonly": true } }
            })
        );
    }

    #[test]
    fn test_expanding_type_becomes_ref() {
        let registry = registry();
        let generator = SchemaGenerator::new(&registry);
        let mut references = ExpansionContext::new();
        let owner =
            CustomSchema::build(&generator, registry.get("Owner").unwrap(), &mut references, None)
                .unwrap();

        let address = ManagedReference::new("Address");
        assert!(references.pull(&address, "#/properties/first"));

        let property = descriptor("second", Some(FieldType::Object("Address".into())));
        let fragment = DefaultPropertyRenderer
            .render(&generator, &owner, &mut references, &property, None)
            .unwrap()
            .unwrap();

        assert_eq!(fragment.schema, json!({ "$ref": "#/properties/first" }));
        assert!(fragment.required);
        // The refused pull leaves the outer expansion in place
        assert!(references.contains(&address));
    }

    #[test]
    fn test_expansion_releases_reference() {
        let registry = registry();
        let generator = SchemaGenerator::new(&registry);
        let mut references = ExpansionContext::new();
        let owner =
            CustomSchema::build(&generator, registry.get("Owner").unwrap(), &mut references, None)
                .unwrap();

        let property = descriptor("home", Some(FieldType::Object("Address".into())));
        DefaultPropertyRenderer
            .render(&generator, &owner, &mut references, &property, None)
            .unwrap();
        assert_eq!(references.depth(), 0);
    }

    #[test]
    fn test_unknown_object_type_propagates() {
        let registry = registry();
        let generator = SchemaGenerator::new(&registry);
        let mut references = ExpansionContext::new();
        let owner =
            CustomSchema::build(&generator, registry.get("Owner").unwrap(), &mut references, None)
                .unwrap();

        let property = descriptor("ghost", Some(FieldType::Object("Ghost".into())));
        let result =
            DefaultPropertyRenderer.render(&generator, &owner, &mut references, &property, None);
        assert!(result.is_err());
        assert_eq!(references.depth(), 0);
    }
}
