//! Configuration management for openbible.
//!
//! Configuration is read from `~/.config/openbible/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_BASE_URL;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub reader: ReaderConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

/// Scripture API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Translation id passed as `?translation=`; the API default when unset.
    pub translation: Option<String>,
    /// Request timeout. Unset leaves the HTTP client's own defaults.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            translation: None,
            timeout_secs: None,
        }
    }
}

/// Where the reader opens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub default_book: String,
    pub default_chapter: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            default_book: "john".to_string(),
            default_chapter: 1,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            tracing::info!("Writing default config to {}", config_path.display());
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(io_error(config_path))?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    /// `~/.config/openbible/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("openbible").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        fs::write(path, Self::default_config_content()).map_err(io_error(path))
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# openbible configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"
#
# Keybindings can be specified as:
# - Single characters: "a", "A", "1"
# - Special keys: Enter, Tab, BackTab, Backspace, Delete, Home, End,
#   PageUp, PageDown, Up, Down, Left, Right, Esc, Space, F1-F12
# - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter"

[api]
base_url = "https://bible-api.com"
# translation = "kjv"
# timeout_secs = 15

[reader]
default_book = "john"
default_chapter = 1

[colors]
active_border = "Cyan"
inactive_border = "DarkGray"
selection_bg = "Cyan"
selection_fg = "Black"
favorite_marker = "LightRed"
verse_number = "Yellow"
featured_fg = "White"
featured_bg = "#3B2F63"
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
next_chapter = ["l", "Right"]
prev_chapter = ["h", "Left"]
next_book = ["L", "PageDown"]
prev_book = ["H", "PageUp"]
next_view = ["Tab"]
prev_view = ["BackTab", "Shift+Tab"]
select = ["Enter"]
toggle_favorite = ["f", "Space"]
copy = ["y"]
search = ["/"]
refresh = ["R"]
"##
        .to_string()
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Cannot access config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.api.base_url, "https://bible-api.com");
        assert_eq!(config.api.translation, None);
        assert_eq!(config.reader.default_book, "john");
        assert_eq!(config.colors.active_border, Color::Cyan);
        assert_eq!(config.colors.featured_bg, Color::Rgb(0x3B, 0x2F, 0x63));
        assert_eq!(config.keybindings.quit, vec!["q", "Ctrl+c"]);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[api]
translation = "kjv"

[colors]
favorite_marker = "#FF0000"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.api.translation.as_deref(), Some("kjv"));
        assert_eq!(config.api.base_url, "https://bible-api.com");
        assert_eq!(config.colors.favorite_marker, Color::Rgb(255, 0, 0));
        assert_eq!(config.colors.inactive_border, Color::DarkGray);
        assert_eq!(config.reader.default_chapter, 1);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");

        assert_eq!(config.api.base_url, "https://bible-api.com");
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.keybindings.toggle_favorite, vec!["f", "Space"]);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let content = r##"
[colors]
active_border = "chartreuse-ish"
"##;
        assert!(toml::from_str::<Config>(content).is_err());
    }

    #[test]
    fn test_load_from_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.reader.default_book, "john");

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.api.base_url, config.api.base_url);
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[reader\ndefault_book = ").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
