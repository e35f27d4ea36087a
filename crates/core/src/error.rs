//! Error types for schema assembly

use typeschema_model::RegistryError;

/// Error type for schema operations
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Type lookup or inheritance resolution failed
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// An enumeration holder could not be read
    #[error("Invalid enum holder {holder}: {reason}")]
    Enum { holder: String, reason: String },

    /// Failed to serialize the schema tree
    #[error("Failed to serialize schema: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
