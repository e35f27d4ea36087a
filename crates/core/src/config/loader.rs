//! Config path resolution
//!
//! An explicit path always wins. Otherwise the generator looks for
//! `typeschema.toml` in the current working directory.

use std::path::{Path, PathBuf};

use super::ConfigResult;

/// File name looked up when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "typeschema.toml";

/// Returns `typeschema.toml` in the current working directory.
pub fn default_config_path() -> ConfigResult<PathBuf> {
    Ok(std::env::current_dir()?.join(DEFAULT_CONFIG_FILE))
}

/// Returns the config path to read and whether it was requested explicitly.
pub fn resolve_config_path(explicit: Option<&Path>) -> ConfigResult<(PathBuf, bool)> {
    match explicit {
        Some(path) => Ok((path.to_path_buf(), true)),
        None => Ok((default_config_path()?, false)),
    }
}
