use crate::domain::Priority;
use crate::persistence::read_file;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User-level configuration loaded from `<config dir>/dolist/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Override for the data directory
    pub data_dir: Option<PathBuf>,
    /// Priority preselected in the new-task input bar
    pub default_priority: Priority,
    /// Log filter used when RUST_LOG is not set (e.g. "debug", "dolist=trace")
    pub log_level: Option<String>,
}

/// Load config from `path`, or from the default location when `None`.
/// A missing or empty file yields the defaults.
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_from_path(path),
        None => match default_path() {
            Some(path) => load_from_path(path),
            None => Ok(Config::default()),
        },
    }
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let contents = read_file(path)?;
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    toml::from_str(&contents)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Platform config location, if the platform has one
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("dolist").join("config.toml"))
}
