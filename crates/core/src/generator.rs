//! Schema generator - entry point for document builds
//!
//! A [`SchemaGenerator`] ties a [`TypeRegistry`], a [`PropertyRenderer`] and
//! a [`GeneratorConfig`] together. Every call to [`SchemaGenerator::assemble`]
//! is one document build with its own [`ExpansionContext`]; the root type is
//! pulled for the duration of the build so that a nested re-encounter of it
//! becomes `{"$ref": "#"}`.

use serde_json::Value;
use tracing::{debug, info};
use typeschema_model::TypeRegistry;

use crate::config::GeneratorConfig;
use crate::error::SchemaResult;
use crate::schema::keywords::SCHEMA;
use crate::schema::{
    CustomSchema, DefaultPropertyRenderer, ExpansionContext, ManagedReference, PropertyRenderer,
    RelativeId,
};

/// Draft-04 meta-schema URI
pub const DRAFT_04_SCHEMA_URI: &str = "http://json-schema.org/draft-04/schema#";

/// Builds schema documents for registered types
pub struct SchemaGenerator<'a> {
    registry: &'a TypeRegistry,
    renderer: Box<dyn PropertyRenderer + 'a>,
    config: GeneratorConfig,
}

impl<'a> SchemaGenerator<'a> {
    /// Create a generator with the default renderer and config
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self {
            registry,
            renderer: Box::new(DefaultPropertyRenderer),
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_renderer(mut self, renderer: impl PropertyRenderer + 'a) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    pub fn renderer(&self) -> &dyn PropertyRenderer {
        self.renderer.as_ref()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Assemble the schema of a registered type
    pub fn assemble(&self, type_name: &str) -> SchemaResult<CustomSchema> {
        let ty = self.registry.get(type_name)?;
        let mut references = ExpansionContext::new();
        let root = ManagedReference::for_type(ty);

        references.pull(&root, RelativeId::ROOT);
        let schema = CustomSchema::build(self, ty, &mut references, None);
        references.push(&root);

        let schema = schema?;
        debug_assert_eq!(references.depth(), 0, "unbalanced reference expansion");
        Ok(schema)
    }

    /// Generate the schema document of a registered type
    pub fn generate(&self, type_name: &str) -> SchemaResult<Value> {
        let schema = self.assemble(type_name)?;
        let mut node = schema.node().clone();

        if self.config.include_schema_uri {
            // $schema leads the document
            let mut document = serde_json::Map::new();
            document.insert(SCHEMA.to_string(), Value::from(DRAFT_04_SCHEMA_URI));
            document.extend(node);
            node = document;
        }

        debug!("Generated schema for {}", type_name);
        Ok(Value::Object(node))
    }

    /// Generate the schema documents of every non-built-in type
    pub fn generate_all(&self) -> SchemaResult<Vec<(String, Value)>> {
        let schemas = self
            .registry
            .user_types()
            .map(|ty| Ok((ty.name.clone(), self.generate(&ty.name)?)))
            .collect::<SchemaResult<Vec<_>>>()?;
        info!("Generated {} schemas", schemas.len());
        Ok(schemas)
    }

    /// Serialize a schema document per the `pretty` setting
    pub fn to_json_string(&self, schema: &Value) -> SchemaResult<String> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(schema)?
        } else {
            serde_json::to_string(schema)?
        };
        Ok(json)
    }
}
