use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Upper bound on `page.scroll_step`, in offset units per row.
pub const MAX_SCROLL_STEP: u32 = 10_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/escape-epic/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("escape-epic").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `reveal_ratio` lies in (0, 1]
    /// - `scroll_step` is in `1..=MAX_SCROLL_STEP`
    /// - Every hero override slide has a title and an image
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratio = self.page.reveal_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::ValidationError {
                message: format!("page.reveal_ratio must be in (0, 1], got {}", ratio),
            });
        }

        if self.page.scroll_step == 0 || self.page.scroll_step > MAX_SCROLL_STEP {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "page.scroll_step must be in 1..={}, got {}",
                    MAX_SCROLL_STEP, self.page.scroll_step
                ),
            });
        }

        for (idx, slide) in self.hero.iter().enumerate() {
            if slide.title.trim().is_empty() || slide.image.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("hero slide {} needs both a title and an image", idx + 1),
                });
            }
        }

        Ok(())
    }
}
