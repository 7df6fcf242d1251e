use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::ConfigError;
use crate::theme::Theme;

/// Settings for the demo application, read from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiet period before an edit is committed to history
    pub debounce_ms: u64,
    /// Minimum gap between status-line refreshes
    pub throttle_ms: u64,
    pub storage_path: Option<PathBuf>,
    pub title: String,
    /// Built-in theme name or a path to a theme TOML file
    pub theme: String,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: 30,
            throttle_ms: 30,
            storage_path: None,
            title: "tui-hooks".to_string(),
            theme: "light".to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// Unknown levels fall back to INFO
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    /// Resolve `theme` as a built-in name first, then as a file path
    pub fn load_theme(&self) -> Result<Theme, ConfigError> {
        if let Some(theme) = Theme::by_name(&self.theme) {
            return Ok(theme);
        }
        let path = Path::new(&self.theme);
        if path.exists() {
            Theme::from_file(path)
        } else {
            Err(ConfigError::UnknownTheme(self.theme.clone()))
        }
    }
}
