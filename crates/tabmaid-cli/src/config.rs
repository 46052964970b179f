//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).
//!
//! ```toml
//! [defaults]
//! direction = "lr"
//! swimlanes = true
//! theme = "forest"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use tabmaid::{Direction, Theme};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("missing configuration file: {0}")]
    MissingFile(PathBuf),
}

/// Application configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Default compilation options applied when neither the command line
    /// nor the row document sets them.
    #[serde(default)]
    defaults: Defaults,
}

/// The `[defaults]` configuration section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    direction: Option<Direction>,

    #[serde(default)]
    swimlanes: Option<bool>,

    #[serde(default)]
    theme: Option<Theme>,
}

impl AppConfig {
    /// Returns the configured option defaults.
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }
}

impl Defaults {
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn swimlanes(&self) -> Option<bool> {
        self.swimlanes
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (tabmaid/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("tabmaid/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "tabmaid", "tabmaid") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file doesn't exist, cannot be read, or fails to
/// parse as TOML.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)
        .map_err(|err| ConfigError::Parse(format!("{}: {err}", path.display())))?;

    toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
}
