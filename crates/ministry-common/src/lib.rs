//! Common types and configuration shared across Ministry crates

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "ministry.toml";

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl Language {
    /// Cycle to the next language
    pub fn next(self) -> Self {
        match self {
            Language::English => Language::German,
            Language::German => Language::English,
        }
    }

    /// Short display code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::German => "DE",
        }
    }
}

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default tracing filter directive (RUST_LOG still wins)
    pub log_level: String,
    /// Language for engine-drawn UI text
    pub language: Language,
    /// Window size multiplier over the 640×480 framebuffer
    pub window_scale: u32,
    /// Target frame rate of the game loop
    pub fps: u32,
    /// How many frames an acknowledgment notice stays on screen
    pub notice_frames: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            language: Language::English,
            window_scale: 2,
            fps: 30,
            notice_frames: 75,
        }
    }
}

impl AppConfig {
    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Locate and load configuration. Priority:
    /// 1. Explicit path (must exist)
    /// 2. `ministry.toml` in the working directory
    /// 3. Built-in defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load(&local);
        }
        tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=4).contains(&self.window_scale) {
            return Err(ConfigError::Invalid {
                field: "window_scale",
                reason: format!("expected 1..=4, got {}", self.window_scale),
            });
        }
        if self.fps == 0 || self.fps > 240 {
            return Err(ConfigError::Invalid {
                field: "fps",
                reason: format!("expected 1..=240, got {}", self.fps),
            });
        }
        if self.notice_frames == 0 {
            return Err(ConfigError::Invalid {
                field: "notice_frames",
                reason: "must be at least one frame".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.language, Language::English);
        assert_eq!(config.fps, 30);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = AppConfig::from_toml_str(
            "language = \"de\"\nwindow_scale = 3\n",
            Path::new("inline"),
        )
        .unwrap();
        assert_eq!(config.language, Language::German);
        assert_eq!(config.window_scale, 3);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.notice_frames, 75);
    }

    #[test]
    fn rejects_bad_scale() {
        let err = AppConfig::from_toml_str("window_scale = 0", Path::new("inline")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "window_scale", .. }));
    }

    #[test]
    fn rejects_zero_fps() {
        let err = AppConfig::from_toml_str("fps = 0", Path::new("inline")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "fps", .. }));
    }

    #[test]
    fn parse_error_names_origin() {
        let err = AppConfig::from_toml_str("fps = \"fast\"", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn missing_explicit_file_is_io_error() {
        let err = AppConfig::discover(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn language_cycle() {
        assert_eq!(Language::English.next(), Language::German);
        assert_eq!(Language::German.next(), Language::English);
        assert_eq!(Language::German.code(), "DE");
    }
}
