//! TOML configuration
//!
//! Every key is optional. The default location is
//! `<config dir>/brainrot-studio/config.toml`; a missing default file simply
//! yields [`Config::default`], while a missing file passed with `--config` is
//! an error.
//!
//! ```toml
//! theme = "light"
//! handoff_dir = "/tmp/brainrot-requests"
//!
//! [layout]
//! left = 30.0
//! middle = 35.0
//! min_panel = 20.0
//! max_left = 60.0
//!
//! [form]
//! width = "720"
//! height = "1280"
//! audio_model = "OpenAI TTS-1"
//!
//! [log]
//! level = "debug"
//! file = "/tmp/brainrot.log"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::form::FormModel;
use crate::layout::{LayoutLimits, LayoutState};
use crate::ui::theme::ThemeMode;

const APP_DIR: &str = "brainrot-studio";

/// Initial widths plus the limits every resize is held to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub left: f32,
    pub middle: f32,
    #[serde(flatten)]
    pub limits: LayoutLimits,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let initial = LayoutState::default();
        LayoutConfig {
            left: initial.left(),
            middle: initial.middle(),
            limits: LayoutLimits::default(),
        }
    }
}

impl LayoutConfig {
    /// Starting layout, pulled inside the limits
    pub fn initial_state(&self) -> LayoutState {
        LayoutState::clamped(self.left, self.middle, &self.limits)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
    /// Log file; defaults to `brainrot.log` in the cache directory
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .map(|dir| dir.join(APP_DIR))
                .unwrap_or_else(std::env::temp_dir)
                .join("brainrot.log")
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeMode,
    pub layout: LayoutConfig,
    pub form: FormModel,
    pub log: LogConfig,
    /// Directory that receives one JSON file per generate request
    pub handoff_dir: Option<PathBuf>,
}

impl Config {
    /// `<config dir>/brainrot-studio/config.toml`, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Config::default(),
            },
        };
        config.layout.limits.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(text)
    }
}
