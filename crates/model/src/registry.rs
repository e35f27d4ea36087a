//! Type registry - name-indexed storage for type descriptors
//!
//! The registry is the lookup table for everything the schema engine needs
//! to know about a type: its descriptor, its inherited public methods and
//! whether it is collection-like. It is pre-populated with the
//! [built-in types](crate::builtins).

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builtins::{builtin_types, is_builtin, ROOT_TYPE_NAME};
use crate::reflect::Reflect;
use crate::types::{MethodInfo, TypeInfo};

/// Error type for registry operations
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Type not found: {0}")]
    TypeNotFound(String),

    #[error("Inheritance cycle through type: {0}")]
    InheritanceCycle(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse TOML model: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Failed to parse JSON model: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// On-disk form of an object model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelFile {
    #[serde(default)]
    pub types: Vec<TypeInfo>,
}

/// A public method together with the type that declares it
#[derive(Debug, Clone, Copy)]
pub struct DeclaredMethod<'a> {
    pub method: &'a MethodInfo,
    pub declared_by: &'a TypeInfo,
}

impl DeclaredMethod<'_> {
    /// Method name
    pub fn name(&self) -> &str {
        &self.method.name
    }
}

/// Store of type descriptors keyed by type name
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeInfo>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a registry holding only the built-in types
    pub fn new() -> Self {
        let types = builtin_types()
            .into_iter()
            .map(|ty| (ty.name.clone(), ty))
            .collect();
        Self { types }
    }

    /// Load a model file (`.json`, anything else is parsed as TOML)
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        let model: ModelFile = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => toml::from_str(&content)?,
        };
        debug!("Loaded {} types from {:?}", model.types.len(), path);
        Ok(Self::from_model(model))
    }

    /// Build a registry from an in-memory model
    pub fn from_model(model: ModelFile) -> Self {
        let mut registry = Self::new();
        for ty in model.types {
            registry.insert(ty);
        }
        registry
    }

    /// Insert a type, returning the descriptor it replaced
    pub fn insert(&mut self, ty: TypeInfo) -> Option<TypeInfo> {
        self.types.insert(ty.name.clone(), ty)
    }

    /// Register a derived type and everything it references
    pub fn register<T: Reflect>(&mut self) -> &mut Self {
        T::register(self);
        self
    }

    /// Check if a type is registered
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Get a type descriptor
    pub fn get(&self, name: &str) -> Result<&TypeInfo, RegistryError> {
        self.types
            .get(name)
            .ok_or_else(|| RegistryError::TypeNotFound(name.to_string()))
    }

    /// All non-built-in types, in name order
    pub fn user_types(&self) -> impl Iterator<Item = &TypeInfo> {
        self.types.values().filter(|ty| !is_builtin(&ty.name))
    }

    /// Number of registered types, built-ins included
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The type followed by each of its ancestors, ending with the root type
    pub fn ancestry<'a>(&'a self, ty: &'a TypeInfo) -> Result<Vec<&'a TypeInfo>, RegistryError> {
        let mut chain = vec![ty];
        let mut seen = HashSet::from([ty.name.as_str()]);
        let mut current = ty;

        while let Some(base) = current.extends.as_deref() {
            if !seen.insert(base) {
                return Err(RegistryError::InheritanceCycle(base.to_string()));
            }
            current = self.get(base)?;
            chain.push(current);
        }

        if !seen.contains(ROOT_TYPE_NAME) {
            chain.push(self.get(ROOT_TYPE_NAME)?);
        }
        Ok(chain)
    }

    /// All public methods of a type, own methods first
    ///
    /// An inherited method is shadowed by a same-named method of a more
    /// derived type.
    pub fn public_methods<'a>(
        &'a self,
        ty: &'a TypeInfo,
    ) -> Result<Vec<DeclaredMethod<'a>>, RegistryError> {
        let mut seen = HashSet::new();
        let mut methods = Vec::new();

        for declared_by in self.ancestry(ty)? {
            for method in &declared_by.methods {
                if seen.insert(method.name.as_str()) {
                    methods.push(DeclaredMethod {
                        method,
                        declared_by,
                    });
                }
            }
        }
        Ok(methods)
    }

    /// Check if a type or any of its ancestors is a collection type
    pub fn is_collection_like(&self, ty: &TypeInfo) -> Result<bool, RegistryError> {
        Ok(self.ancestry(ty)?.iter().any(|t| t.collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldInfo, FieldType};

    #[test]
    fn test_new_registry_has_builtins_only() {
        let registry = TypeRegistry::new();
        assert!(registry.contains(ROOT_TYPE_NAME));
        assert!(registry.contains("List"));
        assert_eq!(registry.user_types().count(), 0);
    }

    #[test]
    fn test_public_methods_include_root_and_shadowing() {
        let mut registry = TypeRegistry::new();
        registry.insert(
            TypeInfo::new("Base")
                .with_method(MethodInfo::new("getId"))
                .with_method(MethodInfo::new("toString")),
        );
        registry.insert(
            TypeInfo::new("Child")
                .extending("Base")
                .with_method(MethodInfo::new("getId")),
        );

        let child = registry.get("Child").unwrap();
        let methods = registry.public_methods(child).unwrap();
        let declared: Vec<_> = methods
            .iter()
            .map(|m| (m.name(), m.declared_by.name.as_str()))
            .collect();

        assert_eq!(
            declared,
            vec![
                ("getId", "Child"),
                ("toString", "Base"),
                ("getClass", "Object"),
                ("hashCode", "Object"),
                ("equals", "Object"),
            ]
        );
    }

    #[test]
    fn test_collection_like_through_ancestry() {
        let mut registry = TypeRegistry::new();
        registry.insert(TypeInfo::new("Tags").extending("List"));
        registry.insert(TypeInfo::new("Plain"));

        assert!(registry.is_collection_like(registry.get("Tags").unwrap()).unwrap());
        assert!(!registry.is_collection_like(registry.get("Plain").unwrap()).unwrap());
    }

    #[test]
    fn test_inheritance_cycle_is_an_error() {
        let mut registry = TypeRegistry::new();
        registry.insert(TypeInfo::new("A").extending("B"));
        registry.insert(TypeInfo::new("B").extending("A"));

        let a = registry.get("A").unwrap();
        assert!(matches!(
            registry.ancestry(a),
            Err(RegistryError::InheritanceCycle(name)) if name == "A"
        ));
    }

    #[test]
    fn test_missing_base_propagates() {
        let mut registry = TypeRegistry::new();
        registry.insert(TypeInfo::new("Orphan").extending("Missing"));

        let orphan = registry.get("Orphan").unwrap();
        assert!(matches!(
            registry.public_methods(orphan),
            Err(RegistryError::TypeNotFound(name)) if name == "Missing"
        ));
    }

    #[test]
    fn test_load_toml_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.toml");
        std::fs::write(
            &path,
            r#"
            [[types]]
            name = "Person"
            methods = [{ name = "getName", returns = "string" }]

            [[types.fields]]
            name = "name"
            type = "string"
            "#,
        )
        .unwrap();

        let registry = TypeRegistry::load(&path).unwrap();
        let person = registry.get("Person").unwrap();
        assert_eq!(person.fields, vec![FieldInfo::new("name", FieldType::String)]);
        assert_eq!(person.methods[0].returns, Some(FieldType::String));
    }

    #[test]
    fn test_load_json_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(
            &path,
            r#"{"types": [{"name": "Empty", "nullable": true}]}"#,
        )
        .unwrap();

        let registry = TypeRegistry::load(&path).unwrap();
        assert!(registry.get("Empty").unwrap().nullable);
        assert_eq!(registry.user_types().count(), 1);
    }
}
