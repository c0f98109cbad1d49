//! Shared test fixtures for integration and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use nougat::config::{Config, DisplayConfig, PathConfig, TelephonyConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Portrait bounds used throughout the tests.
pub const TEST_WIDTH: f64 = 320.0;
/// Portrait bounds used throughout the tests.
pub const TEST_HEIGHT: f64 = 480.0;

/// Writes a toggle bundle directory with a `toggle.toml` manifest.
pub fn write_toggle(toggles_dir: &Path, dir_name: &str, display_name: &str) {
    let toggle_dir = toggles_dir.join(dir_name);
    fs::create_dir_all(&toggle_dir).expect("Failed to create toggle dir");
    fs::write(
        toggle_dir.join("toggle.toml"),
        format!("display_name = \"{display_name}\"\n"),
    )
    .expect("Failed to write toggle manifest");
}

/// Removes a toggle bundle directory.
pub fn remove_toggle(toggles_dir: &Path, dir_name: &str) {
    fs::remove_dir_all(toggles_dir.join(dir_name)).expect("Failed to remove toggle dir");
}

/// An isolated config directory with settings, toggles and config file.
pub struct TestEnv {
    /// Keeps the directory alive for the duration of the test
    pub temp_dir: TempDir,
    /// Path to `config.toml`
    pub config_file: PathBuf,
    /// Path to `settings.toml`
    pub settings_file: PathBuf,
    /// Directory of toggle bundles
    pub toggles_dir: PathBuf,
}

impl TestEnv {
    /// Creates the environment and writes a config pointing at it.
    pub fn new(carrier: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_file = temp_dir.path().join("config.toml");
        let settings_file = temp_dir.path().join("settings.toml");
        let toggles_dir = temp_dir.path().join("toggles");
        fs::create_dir_all(&toggles_dir).expect("Failed to create toggles dir");

        let config = Config {
            display: DisplayConfig {
                width: TEST_WIDTH,
                height: TEST_HEIGHT,
            },
            paths: PathConfig {
                settings_file: Some(settings_file.clone()),
                toggles_dir: Some(toggles_dir.clone()),
            },
            telephony: TelephonyConfig {
                carrier_name: carrier.to_string(),
            },
        };
        config
            .save_to(&config_file)
            .expect("Failed to write config");

        Self {
            temp_dir,
            config_file,
            settings_file,
            toggles_dir,
        }
    }

    /// Loads the config written by [`TestEnv::new`].
    pub fn config(&self) -> Config {
        Config::load_from(&self.config_file).expect("Failed to load config")
    }

    /// Overwrites the persisted settings file.
    pub fn write_settings(&self, content: &str) {
        fs::write(&self.settings_file, content).expect("Failed to write settings");
    }
}
