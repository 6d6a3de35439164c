//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_BOTTOM_MARGIN, DEFAULT_POPUP_HEIGHT, DEFAULT_POPUP_WIDTH,
    MIN_POPUP_HEIGHT, MIN_POPUP_WIDTH,
};
use crate::error::KeyboardError;
use crate::layouts::LayoutRegistry;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Keyboard popup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// Layout shown on startup; the registry default when unset
    #[serde(default)]
    pub default_layout: Option<String>,
    /// Popup width in cells
    #[serde(default = "default_popup_width")]
    pub popup_width: u16,
    /// Popup height in cells
    #[serde(default = "default_popup_height")]
    pub popup_height: u16,
    /// Rows between the popup and the bottom edge of the screen
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: u16,
}

fn default_popup_width() -> u16 {
    DEFAULT_POPUP_WIDTH
}

fn default_popup_height() -> u16 {
    DEFAULT_POPUP_HEIGHT
}

fn default_bottom_margin() -> u16 {
    DEFAULT_BOTTOM_MARGIN
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            default_layout: None,
            popup_width: default_popup_width(),
            popup_height: default_popup_height(),
            bottom_margin: default_bottom_margin(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LazyOSK/config.toml`
/// - macOS: `~/Library/Application Support/LazyOSK/config.toml`
/// - Windows: `%APPDATA%\LazyOSK\config.toml`
///
/// # Validation
///
/// - `default_layout`, when set, must name a built-in layout
/// - popup must be at least 20x8 cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Keyboard popup settings
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/LazyOSK/`
    /// - macOS: `~/Library/Application Support/LazyOSK/`
    /// - Windows: `%APPDATA%\LazyOSK\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads and validates configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.keyboard.default_layout {
            if !LayoutRegistry::builtin().contains(name) {
                return Err(KeyboardError::LayoutNotFound(name.clone()).into());
            }
        }

        if self.keyboard.popup_width < MIN_POPUP_WIDTH
            || self.keyboard.popup_height < MIN_POPUP_HEIGHT
        {
            return Err(KeyboardError::Config(format!(
                "popup must be at least {MIN_POPUP_WIDTH}x{MIN_POPUP_HEIGHT} cells (got {}x{})",
                self.keyboard.popup_width, self.keyboard.popup_height
            ))
            .into());
        }

        Ok(())
    }

    /// Layout to open on startup.
    #[must_use]
    pub fn start_layout(&self) -> &str {
        self.keyboard
            .default_layout
            .as_deref()
            .unwrap_or_else(|| LayoutRegistry::builtin().default_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.keyboard.popup_width, 88);
        assert_eq!(config.keyboard.popup_height, 21);
        assert_eq!(config.keyboard.bottom_margin, 2);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.start_layout(), "English (QWERTY)");
    }

    #[test]
    fn test_config_validate_layout() {
        let mut config = Config::new();
        config.keyboard.default_layout = Some("Français (AZERTY)".to_string());
        assert!(config.validate().is_ok());
        assert_eq!(config.start_layout(), "Français (AZERTY)");

        config.keyboard.default_layout = Some("Dvorak".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Layout not found: Dvorak"));
    }

    #[test]
    fn test_config_validate_popup_size() {
        let mut config = Config::new();
        config.keyboard.popup_width = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.keyboard.default_layout = Some("Українська (ЙЦУКЕН)".to_string());
        config.logging.level = "debug".to_string();

        config.save_to(&path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ui]\ntheme_mode = \"Dark\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.keyboard, KeyboardConfig::default());
    }

    #[test]
    fn test_config_rejects_unknown_layout_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[keyboard]\ndefault_layout = \"Colemak\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
