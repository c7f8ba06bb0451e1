//! TOML configuration file.
//!
//! ```toml
//! [history]
//! enabled = true
//! directory = "/home/me/.local/share/calcpad"
//! key = "calc.history"
//!
//! [display]
//! show_keypad = true
//! show_history = true
//! ```
//!
//! Every field is optional. A missing file means all defaults.

use crate::shell::RenderOptions;
use crate::store::DEFAULT_HISTORY_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub history: HistoryConfig,
    pub display: RenderOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Persist history between sessions. When off, history is kept in memory.
    pub enabled: bool,
    /// Directory for history files. Defaults to the platform data directory.
    pub directory: Option<PathBuf>,
    pub key: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            directory: None,
            key: DEFAULT_HISTORY_KEY.to_string(),
        }
    }
}

impl Config {
    /// `<config dir>/calcpad/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calcpad")
            .join("config.toml")
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.history.enabled);
        assert_eq!(config.history.key, "calc.history");
        assert!(config.display.show_keypad);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config = Config::from_toml("[display]\nshow_keypad = false\n").unwrap();
        assert!(!config.display.show_keypad);
        assert!(config.display.show_history);
        assert!(config.history.enabled);
    }

    #[test]
    fn history_section_is_read() {
        let config = Config::from_toml(
            "[history]\nenabled = false\ndirectory = \"/tmp/calc\"\nkey = \"work\"\n",
        )
        .unwrap();
        assert!(!config.history.enabled);
        assert_eq!(config.history.directory, Some(PathBuf::from("/tmp/calc")));
        assert_eq!(config.history.key, "work");
    }

    #[test]
    fn invalid_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "history = [").unwrap();

        let result = Config::load(Some(path.as_path()));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn load_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[history]\nkey = \"saved\"\n\n[display]\nshow_history = false\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.history.key, "saved");
        assert!(!config.display.show_history);
        assert!(config.display.show_keypad);
    }
}
