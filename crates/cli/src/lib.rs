//! typeschema CLI - subcommand handlers
//!
//! Each subcommand has an `Args` struct parsed by clap and a `run_*`
//! function that does the work and reports failures through `anyhow`.

pub mod generate;
pub mod init_config;
pub mod list;

use std::path::Path;

use anyhow::{Context, Result};
use typeschema_core::TypeRegistry;

/// Load a model file into a registry
pub fn load_registry(model: &Path) -> Result<TypeRegistry> {
    let registry = TypeRegistry::load(model)
        .with_context(|| format!("failed to load model file {}", model.display()))?;
    tracing::debug!(
        types = registry.user_types().count(),
        "loaded model {}",
        model.display()
    );
    Ok(registry)
}
