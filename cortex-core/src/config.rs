//! TOML configuration shared by the TUI and CLI front ends.
//!
//! Every field has a default, so an empty or partial file is valid.
//! Lookup order: `$CORTEX_CONFIG`, then `<config_dir>/cortex/config.toml`,
//! then built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ExampleKey;
use crate::page::Page;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "CORTEX_CONFIG";

const APP_DIR: &str = "cortex";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub ui: UiConfig,
    pub copy: CopyConfig,
    pub start: StartConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll timeout in milliseconds.
    pub tick_rate_ms: u64,
    /// Terminals narrower than this many columns use the compact layout.
    pub compact_width: u16,
    pub mouse: bool,
    /// Show the welcome overlay on first launch.
    pub welcome: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            compact_width: 100,
            mouse: true,
            welcome: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// How long the "copied" indicator stays on.
    pub feedback_ms: u64,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self { feedback_ms: 2000 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    pub page: Page,
    pub tab: ExampleKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Relative paths resolve under the cache directory.
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: PathBuf::from("cortex.log"),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load and validate the file at `path`. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if it exists, otherwise return defaults.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from an explicit path, or from the default lookup chain.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::resolve_path() {
                Some(path) => Self::load_optional(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// `$CORTEX_CONFIG` if set, else `<config_dir>/cortex/config.toml`.
    pub fn resolve_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("ui.tick_rate_ms must be positive".into()));
        }
        if self.ui.compact_width == 0 {
            return Err(ConfigError::Invalid("ui.compact_width must be positive".into()));
        }
        if self.copy.feedback_ms == 0 {
            return Err(ConfigError::Invalid("copy.feedback_ms must be positive".into()));
        }
        let level = self.log.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "log.level '{}' is not one of {}",
                self.log.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if self.log.file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("log.file must not be empty".into()));
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy.feedback_ms)
    }

    /// Absolute log file path. Relative paths resolve under
    /// `<cache_dir>/cortex`, falling back to the working directory.
    pub fn log_path(&self) -> PathBuf {
        if self.log.file.is_absolute() {
            return self.log.file.clone();
        }
        match dirs::cache_dir() {
            Some(dir) => dir.join(APP_DIR).join(&self.log.file),
            None => self.log.file.clone(),
        }
    }
}

/// Directory holding config and persisted UI state.
pub fn app_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR))
}
