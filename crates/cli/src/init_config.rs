//! `typeschema init-config`

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use typeschema_core::config::DEFAULT_CONFIG_FILE;
use typeschema_core::GeneratorConfig;

/// Arguments for `typeschema init-config`.
#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the config. Defaults to `typeschema.toml`.
    pub path: Option<PathBuf>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Execute `typeschema init-config`.
pub fn run_init_config(args: &InitConfigArgs) -> Result<PathBuf> {
    let path = args
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if path.exists() && !args.force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    GeneratorConfig::default()
        .save_to(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Created default config at {}", path.display());
    Ok(path)
}
