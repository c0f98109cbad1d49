//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, CONFIG_DIR_ENV};
use crate::models::Size;

/// Reference display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Portrait width of the display in points
    pub width: f64,
    /// Portrait height of the display in points
    pub height: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 375.0,
            height: 667.0,
        }
    }
}

impl DisplayConfig {
    /// The configured extent as a portrait [`Size`].
    #[must_use]
    pub const fn portrait_bounds(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Persisted drawer settings (defaults to `<config_dir>/settings.toml`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_file: Option<PathBuf>,
    /// Directory of installed toggles (defaults to `<config_dir>/toggles`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggles_dir: Option<PathBuf>,
}

/// Telephony information shown in the drawer header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TelephonyConfig {
    /// Carrier name reported to the drawer
    #[serde(default)]
    pub carrier_name: String,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Nougat/config.toml`
/// - macOS: `~/Library/Application Support/Nougat/config.toml`
/// - Windows: `%APPDATA%\Nougat\config.toml`
///
/// The `NOUGAT_CONFIG_DIR` environment variable overrides the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Reference display extent
    #[serde(default)]
    pub display: DisplayConfig,
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Telephony passthrough values
    #[serde(default)]
    pub telephony: TelephonyConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Honors `NOUGAT_CONFIG_DIR`, otherwise the platform config directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

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

    /// Loads configuration from `path`, returning defaults when it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
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
    ///
    /// Display dimensions must be finite and positive.
    pub fn validate(&self) -> Result<()> {
        let DisplayConfig { width, height } = self.display;
        if !(width.is_finite() && width > 0.0) {
            anyhow::bail!("Display width must be a positive number, got {width}");
        }
        if !(height.is_finite() && height > 0.0) {
            anyhow::bail!("Display height must be a positive number, got {height}");
        }
        Ok(())
    }

    /// Resolved path of the persisted drawer settings.
    pub fn settings_file(&self) -> Result<PathBuf> {
        match &self.paths.settings_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("settings.toml")),
        }
    }

    /// Resolved directory of installed toggles.
    pub fn toggles_dir(&self) -> Result<PathBuf> {
        match &self.paths.toggles_dir {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("toggles")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.paths.settings_file, None);
        assert_eq!(config.paths.toggles_dir, None);
        assert!(config.telephony.carrier_name.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_display() {
        let mut config = Config::new();
        config.display.width = 0.0;
        assert!(config.validate().is_err());

        config.display.width = 320.0;
        config.display.height = f64::NAN;
        assert!(config.validate().is_err());

        config.display.height = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.display = DisplayConfig {
            width: 320.0,
            height: 480.0,
        };
        config.paths.toggles_dir = Some(temp_dir.path().join("toggles"));
        config.telephony.carrier_name = "Carrier".to_string();

        config.save_to(&config_file).unwrap();
        assert!(!config_file.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[telephony]\ncarrier_name = \"Example\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.telephony.carrier_name, "Example");
        assert_eq!(loaded.display, DisplayConfig::default());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[display\nwidth = ").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }

    #[test]
    fn test_explicit_paths_win() {
        let mut config = Config::new();
        config.paths.settings_file = Some(PathBuf::from("/tmp/settings.toml"));
        config.paths.toggles_dir = Some(PathBuf::from("/tmp/toggles"));
        assert_eq!(
            config.settings_file().unwrap(),
            PathBuf::from("/tmp/settings.toml")
        );
        assert_eq!(config.toggles_dir().unwrap(), PathBuf::from("/tmp/toggles"));
    }

    #[test]
    fn test_display_portrait_bounds() {
        let display = DisplayConfig {
            width: 320.0,
            height: 480.0,
        };
        assert_eq!(display.portrait_bounds(), Size::new(320.0, 480.0));
    }
}
