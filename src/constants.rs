//! Application-wide constants.
//!
//! This module defines the application name, directory names and the
//! persisted settings keys. The settings key names are shared with the
//! preference editor that writes them and must not change.

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "nougat";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "Nougat";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "NOUGAT_CONFIG_DIR";

/// Settings key: whether the drawer replacement is enabled.
pub const PREFERENCES_ENABLED_KEY: &str = "enabled";

/// Settings key: ordered list of enabled toggle identifiers.
pub const PREFERENCES_TOGGLES_LIST_KEY: &str = "togglesList";

/// Settings key: current theme ordinal.
pub const PREFERENCES_CURRENT_THEME_KEY: &str = "darkVariant";

/// File inside each toggle directory describing the toggle.
pub const TOGGLE_MANIFEST_FILE: &str = "toggle.toml";
