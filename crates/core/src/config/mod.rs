//! Generator configuration
//!
//! Settings are read from a TOML file; every key is optional and falls back
//! to its default.
//!
//! # Example
//!
//! ```toml
//! version = 1
//! pretty = false
//! include_schema_uri = true
//! ```
//!
//! ```ignore
//! use typeschema_core::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::load(None).unwrap_or_default();
//! println!("Pretty output: {}", config.pretty);
//! ```

mod loader;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use loader::{default_config_path, resolve_config_path, DEFAULT_CONFIG_FILE};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Schema generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging
    pub debug: bool,

    /// Pretty-print generated documents
    pub pretty: bool,

    /// Lead every document with the draft-04 `$schema` URI
    pub include_schema_uri: bool,

    /// Keep accessors that have no backing field, typed by their return type
    pub include_fieldless_accessors: bool,

    /// Treat `setX` as the mutator of an `isX` accessor
    pub is_accessor_mutators: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            pretty: true,
            include_schema_uri: false,
            include_fieldless_accessors: false,
            is_accessor_mutators: false,
        }
    }
}

impl GeneratorConfig {
    /// Load config from `explicit`, or from `typeschema.toml` in the
    /// working directory.
    ///
    /// A missing default file yields the defaults. A missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        let (path, explicit) = resolve_config_path(explicit)?;

        if !explicit && !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save config to file.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reload config from file.
    pub fn reload(&mut self, path: &Path) -> ConfigResult<()> {
        *self = Self::load_from(path)?;
        tracing::debug!("Reloaded config from {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GeneratorConfig::default();
        assert_eq!(config.version, 1);
        assert!(!config.debug);
        assert!(config.pretty);
        assert!(!config.include_schema_uri);
        assert!(!config.include_fieldless_accessors);
        assert!(!config.is_accessor_mutators);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: GeneratorConfig = toml::from_str("pretty = false").unwrap();
        assert!(!config.pretty);
        assert_eq!(config.version, 1);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(DEFAULT_CONFIG_FILE);

        let config = GeneratorConfig {
            include_schema_uri: true,
            debug: true,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("include_schema_uri = true"));

        let mut reloaded = GeneratorConfig::default();
        reloaded.reload(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            GeneratorConfig::load(Some(&path)),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "pretty = \"yes\"").unwrap();
        assert!(matches!(
            GeneratorConfig::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }
}
