//! Configuration loading and discovery for `goban.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::GobanConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up during discovery
pub const CONFIG_FILE: &str = "goban.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse goban.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override scale factor
    pub scale: Option<u32>,
}

/// Find goban.toml for an input living in `start`.
///
/// Search order:
/// 1. Walk up from `start` looking for goban.toml
/// 2. Check XDG_CONFIG_HOME/goban/goban.toml (or ~/.config/goban/goban.toml)
pub fn find_config(start: &Path) -> Option<PathBuf> {
    find_config_from(start.to_path_buf()).or_else(find_xdg_config)
}

/// Find goban.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("goban").join(CONFIG_FILE);
    config_path.exists().then_some(config_path)
}

/// Find goban.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration for inputs in `start`.
///
/// An explicit `path` is loaded as is; otherwise the file is discovered
/// with [`find_config`]. With no file at all the defaults are returned.
pub fn load_config(path: Option<&Path>, start: &Path) -> Result<GobanConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(start),
    };

    match config_path {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => Ok(GobanConfig::default()),
    }
}

/// Load and validate a specific config file.
pub fn load_config_file(path: &Path) -> Result<GobanConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: GobanConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut GobanConfig, overrides: &CliOverrides) {
    if let Some(scale) = overrides.scale {
        config.output.scale = scale;
    }
}
