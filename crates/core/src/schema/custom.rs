//! Schema assembler
//!
//! A [`CustomSchema`] is the JSON Schema document of one object type. It is
//! built eagerly: construction sets the node type, applies the type's
//! attributes, discovers its properties and renders each one through the
//! generator's [`PropertyRenderer`](super::PropertyRenderer). Once built it
//! is read-only apart from [`CustomSchema::add_property`].

use serde_json::{Map, Value};
use tracing::{debug, trace};
use typeschema_model::{FieldType, TypeInfo};

use super::attributes::apply_attributes;
use super::discovery::{discover_properties, Capabilities, DiscoveryOptions};
use super::enums::extract_enums;
use super::keywords::{NULL_TYPE, OBJECT_TYPE, PROPERTIES, REQUIRED, TYPE};
use super::references::ExpansionContext;
use super::relative_id::RelativeId;
use crate::error::SchemaResult;
use crate::generator::SchemaGenerator;

/// What discovery found for one property
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    /// Semantic property name
    pub name: String,
    /// Getter the property was discovered through
    pub accessor: String,
    /// True iff no mutator exists
    pub readonly: bool,
    /// Declared enum literals, possibly empty
    pub enums: Vec<String>,
    /// Storage type of the field, or the getter's return type without one
    pub field_type: Option<FieldType>,
    pub capabilities: Capabilities,
}

/// A rendered property schema
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyFragment {
    /// Key in the `properties` map
    pub name: String,
    pub schema: Value,
    /// Append `name` to the parent's `required` list
    pub required: bool,
}

/// A property of an assembled schema
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub descriptor: PropertyDescriptor,
    pub fragment: PropertyFragment,
}

impl Property {
    pub fn name(&self) -> &str {
        &self.fragment.name
    }

    pub fn is_required(&self) -> bool {
        self.fragment.required
    }

    pub fn is_readonly(&self) -> bool {
        self.descriptor.readonly
    }

    pub fn schema(&self) -> &Value {
        &self.fragment.schema
    }
}

/// JSON Schema document of one object type
#[derive(Debug, Clone)]
pub struct CustomSchema {
    type_name: String,
    node: Map<String, Value>,
    properties: Vec<Property>,
    required: bool,
    relative_id: RelativeId,
}

impl CustomSchema {
    /// Assemble the schema of `ty`
    ///
    /// `references` is the expansion context of the whole document build.
    /// `relative_id` is composed into the root id `#` when given.
    pub fn build(
        generator: &SchemaGenerator<'_>,
        ty: &TypeInfo,
        references: &mut ExpansionContext,
        relative_id: Option<&str>,
    ) -> SchemaResult<Self> {
        let mut schema = Self {
            type_name: ty.name.clone(),
            node: Map::new(),
            properties: Vec::with_capacity(ty.fields.len()),
            required: false,
            relative_id: RelativeId::root(),
        };

        schema.set_type(ty.nullable);
        let required = apply_attributes(&mut schema.node, ty.attributes.as_ref());
        schema.set_required(required);
        if let Some(token) = relative_id {
            schema.add_token_to_relative_id(token);
        }

        schema.process_properties(generator, ty, references)?;

        debug!(
            "Assembled {} at {} with {} properties",
            schema.type_name,
            schema.relative_id,
            schema.properties.len()
        );
        Ok(schema)
    }

    fn set_type(&mut self, nullable: bool) {
        let ty = if nullable {
            Value::from(vec![OBJECT_TYPE, NULL_TYPE])
        } else {
            Value::from(OBJECT_TYPE)
        };
        self.node.insert(TYPE.to_string(), ty);
    }

    fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    fn add_token_to_relative_id(&mut self, token: &str) {
        self.relative_id.add_token(token);
    }

    fn process_properties(
        &mut self,
        generator: &SchemaGenerator<'_>,
        ty: &TypeInfo,
        references: &mut ExpansionContext,
    ) -> SchemaResult<()> {
        let options = DiscoveryOptions::from(generator.config());
        let discovered = discover_properties(generator.registry(), ty, &options)?;

        for property in discovered {
            let field_type = property
                .field
                .map(|f| f.ty.clone())
                .or_else(|| property.accessor.returns.clone());

            let descriptor = PropertyDescriptor {
                name: property.name.clone(),
                accessor: property.accessor.name.clone(),
                readonly: property.is_readonly(),
                enums: extract_enums(property.field),
                field_type,
                capabilities: property.capabilities,
            };

            let fragment = generator.renderer().render(
                generator,
                self,
                references,
                &descriptor,
                property.field,
            )?;

            match fragment {
                Some(fragment) => self.add_property(descriptor, fragment),
                None => trace!("Omitting empty property {}.{}", self.type_name, descriptor.name),
            }
        }
        Ok(())
    }

    /// Add a rendered property
    ///
    /// The fragment is stored under its name in `properties`, replacing any
    /// previous property of that name, and the name is appended to
    /// `required` when the fragment is required.
    pub fn add_property(&mut self, descriptor: PropertyDescriptor, fragment: PropertyFragment) {
        let properties = self
            .node
            .entry(PROPERTIES)
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(properties) = properties {
            properties.insert(fragment.name.clone(), fragment.schema.clone());
        }

        if fragment.required {
            self.add_required(&fragment.name);
        }

        let property = Property {
            descriptor,
            fragment,
        };
        match self.properties.iter_mut().find(|p| p.name() == property.name()) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    /// Append a name to `required`, at most once
    fn add_required(&mut self, name: &str) {
        let required = self
            .node
            .entry(REQUIRED)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(names) = required {
            if !names.iter().any(|n| n == name) {
                names.push(Value::from(name));
            }
        }
    }

    /// Name of the type this schema describes
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The schema tree
    pub fn node(&self) -> &Map<String, Value> {
        &self.node
    }

    /// The schema tree as a JSON value
    pub fn as_json(&self) -> Value {
        Value::Object(self.node.clone())
    }

    /// Consume the schema, returning its tree
    pub fn into_json(self) -> Value {
        Value::Object(self.node)
    }

    pub fn relative_id(&self) -> &str {
        self.relative_id.as_str()
    }

    /// Whether the type itself is required where it appears as a property
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Properties in insertion order
    pub fn properties(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    /// Look up a property by name
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }
}

impl<'a> IntoIterator for &'a CustomSchema {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties()
    }
}
