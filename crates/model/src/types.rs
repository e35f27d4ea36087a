//! Type, field and method descriptors
//!
//! These are the explicit property tables that stand in for runtime
//! reflection. A [`TypeInfo`] lists a type's fields in declaration order and
//! its own public zero-argument methods; inherited methods are resolved
//! through the [`TypeRegistry`](crate::TypeRegistry) by following `extends`.

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeSpec;

/// Declared storage type of a field (or return type of an accessor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    /// Homogeneous sequence of the inner type
    Array(Box<FieldType>),
    /// Reference to another registered type, by name
    Object(String),
}

impl FieldType {
    /// Name of the referenced type, looking through arrays
    pub fn object_name(&self) -> Option<&str> {
        match self {
            FieldType::Object(name) => Some(name),
            FieldType::Array(inner) => inner.object_name(),
            _ => None,
        }
    }
}

/// A named constant of an enumeration holder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumConstant {
    pub name: String,
    /// Constant value; only string values are valid enum literals
    pub value: serde_json::Value,
}

/// Explicit enumeration list attached to a field
///
/// Constants are kept in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumHolder {
    /// Holder name, conventionally `<Type>$<field>Enum`
    pub name: String,
    #[serde(default)]
    pub constants: Vec<EnumConstant>,
}

impl EnumHolder {
    /// Conventional holder name for a field of a type
    pub fn conventional_name(type_name: &str, field_name: &str) -> String {
        format!("{}${}Enum", type_name, field_name)
    }

    /// Build a holder whose constants are the given string literals
    pub fn from_literals(name: impl Into<String>, literals: &[&str]) -> Self {
        Self {
            name: name.into(),
            constants: literals
                .iter()
                .map(|lit| EnumConstant {
                    name: lit.to_uppercase(),
                    value: serde_json::Value::String((*lit).to_string()),
                })
                .collect(),
        }
    }
}

/// A declared field (backing storage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(default)]
    pub attributes: Option<AttributeSpec>,
    #[serde(default)]
    pub enum_holder: Option<EnumHolder>,
    /// Field is excluded from schema output
    #[serde(default)]
    pub ignored: bool,
}

impl FieldInfo {
    /// Create a plain field with no metadata
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            attributes: None,
            enum_holder: None,
            ignored: false,
        }
    }

    /// Whether the field's own attributes mark it required
    pub fn is_required(&self) -> bool {
        self.attributes.as_ref().is_some_and(|a| a.required)
    }
}

/// A public zero-argument method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    /// Return type, absent for mutators and unknown accessors
    #[serde(default)]
    pub returns: Option<FieldType>,
}

impl MethodInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            returns: None,
        }
    }

    pub fn returning(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            returns: Some(ty),
        }
    }
}

/// Descriptor of one type in the object model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub name: String,
    /// Direct base type; every type implicitly derives from the root type
    #[serde(default)]
    pub extends: Option<String>,
    /// Type is collection-like (its methods are never properties)
    #[serde(default)]
    pub collection: bool,
    /// Instances may be null
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub attributes: Option<AttributeSpec>,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldInfo>,
    /// Public methods declared by this type itself
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

impl TypeInfo {
    /// Create an empty type descriptor
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            collection: false,
            nullable: false,
            attributes: None,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: AttributeSpec) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    pub fn extending(mut self, base: impl Into<String>) -> Self {
        self.extends = Some(base.into());
        self
    }

    /// Whether this type declares a method with exactly this name
    pub fn declares_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }
}
