use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::{Settings, SettingsError};

/// Errors raised while loading the settings file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("file IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("validation error: {0}")]
    Validation(#[from] SettingsError),
}

/// Default location of the user's settings file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("swipetile").join("config.toml"))
}

/// Loads and validates the TOML settings file.
///
/// Every key is optional; missing sections fall back to the built-in
/// defaults, so an empty or absent file yields a fully usable configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from an explicit path. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Settings, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load settings from `path` when given, otherwise from the default
    /// location; a missing default file yields the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Settings, ConfigError> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        match default_config_path() {
            Some(default) if default.exists() => {
                debug!(path = %default.display(), "Loading settings file");
                Self::load_from_path(&default)
            }
            _ => Ok(Settings::default()),
        }
    }

    /// Parse and validate settings TOML.
    pub fn parse(content: &str) -> Result<Settings, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Render settings back to TOML, used by `config show`.
    pub fn render(settings: &Settings) -> String {
        toml::to_string_pretty(settings).unwrap_or_default()
    }
}
