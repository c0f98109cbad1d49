//! Toggle and theme preferences for the drawer.
//!
//! [`PreferenceManager`] is a read-mostly context object built once at startup
//! and shared by handle. It derives everything the drawer renders from three
//! settings keys and the toggle registry:
//!
//! - `enabled`: whether the drawer replacement is active
//! - `togglesList`: enabled toggles, in display order
//! - `darkVariant`: theme ordinal
//!
//! Missing or malformed settings never fail; each degrades to its default
//! (disabled, no toggles, [`DrawerTheme::Nexus`]) and logs a warning.

use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::Config;
use crate::constants::{
    PREFERENCES_CURRENT_THEME_KEY, PREFERENCES_ENABLED_KEY, PREFERENCES_TOGGLES_LIST_KEY,
};
use crate::models::{Color, DrawerTheme, ThemePalette, ToggleInfo, ToggleMetadata};
use crate::services::registry::{DirectoryToggleRegistry, ToggleRegistry};
use crate::services::settings::{FileSettingsStore, SettingsStore};
use crate::services::telephony::{CarrierInfo, StaticCarrier};

/// Snapshot of the persisted drawer preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferenceState {
    /// Whether the drawer replacement is enabled
    pub enabled: bool,
    /// Enabled toggle identifiers, in display order (may contain stale entries)
    pub toggle_order: Vec<String>,
    /// Selected theme
    pub current_theme: DrawerTheme,
}

impl PreferenceState {
    /// Reads the three preference keys from `store`, substituting defaults for
    /// anything missing or malformed.
    pub fn from_store(store: &dyn SettingsStore) -> Self {
        Self {
            enabled: read_enabled(store),
            toggle_order: read_toggle_order(store),
            current_theme: read_theme(store),
        }
    }
}

fn read_enabled(store: &dyn SettingsStore) -> bool {
    match store.value(PREFERENCES_ENABLED_KEY) {
        None => false,
        Some(toml::Value::Boolean(enabled)) => enabled,
        Some(other) => {
            tracing::warn!(
                "Setting '{PREFERENCES_ENABLED_KEY}' should be a boolean, got {}; treating as disabled",
                other.type_str()
            );
            false
        }
    }
}

fn read_toggle_order(store: &dyn SettingsStore) -> Vec<String> {
    match store.value(PREFERENCES_TOGGLES_LIST_KEY) {
        None => Vec::new(),
        Some(toml::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                toml::Value::String(identifier) => Some(identifier),
                other => {
                    tracing::warn!(
                        "Ignoring non-string entry ({}) in '{PREFERENCES_TOGGLES_LIST_KEY}'",
                        other.type_str()
                    );
                    None
                }
            })
            .collect(),
        Some(other) => {
            tracing::warn!(
                "Setting '{PREFERENCES_TOGGLES_LIST_KEY}' should be an array, got {}; no toggles enabled",
                other.type_str()
            );
            Vec::new()
        }
    }
}

fn read_theme(store: &dyn SettingsStore) -> DrawerTheme {
    match store.value(PREFERENCES_CURRENT_THEME_KEY) {
        None => DrawerTheme::default(),
        Some(toml::Value::Integer(ordinal)) => DrawerTheme::from_ordinal(ordinal).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown theme ordinal {ordinal} in '{PREFERENCES_CURRENT_THEME_KEY}'; using default theme"
            );
            DrawerTheme::default()
        }),
        // Older settings stored a plain dark/light switch
        Some(toml::Value::Boolean(dark)) => {
            if dark {
                DrawerTheme::Pixel
            } else {
                DrawerTheme::Nexus
            }
        }
        Some(other) => {
            tracing::warn!(
                "Setting '{PREFERENCES_CURRENT_THEME_KEY}' should be an integer, got {}; using default theme",
                other.type_str()
            );
            DrawerTheme::default()
        }
    }
}

/// Read-mostly view over drawer preferences and installed toggles.
///
/// Safe to share between threads. Reads take read locks; [`Self::reload_settings`]
/// and [`Self::refresh_toggle_info`] take write locks and are serialized
/// against readers.
pub struct PreferenceManager {
    settings: Arc<dyn SettingsStore>,
    registry: Arc<dyn ToggleRegistry>,
    carrier: Arc<dyn CarrierInfo>,
    state: RwLock<PreferenceState>,
    toggle_cache: RwLock<HashMap<String, ToggleMetadata>>,
}

impl PreferenceManager {
    /// Creates a manager, reading settings and filling the toggle cache once.
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        registry: Arc<dyn ToggleRegistry>,
        carrier: Arc<dyn CarrierInfo>,
    ) -> Self {
        let state = PreferenceState::from_store(settings.as_ref());
        let manager = Self {
            settings,
            registry,
            carrier,
            state: RwLock::new(state),
            toggle_cache: RwLock::new(HashMap::new()),
        };
        manager.refresh_toggle_info();
        manager
    }

    /// Creates a manager backed by the files and values named in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings_file = config.settings_file()?;
        let toggles_dir = config.toggles_dir()?;
        tracing::debug!(
            "Loading preferences from {} with toggles in {}",
            settings_file.display(),
            toggles_dir.display()
        );

        Ok(Self::new(
            Arc::new(FileSettingsStore::open(settings_file)),
            Arc::new(DirectoryToggleRegistry::new(toggles_dir)),
            Arc::new(StaticCarrier::new(config.telephony.carrier_name.clone())),
        ))
    }

    fn read_state(&self) -> RwLockReadGuard<'_, PreferenceState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, HashMap<String, ToggleMetadata>> {
        self.toggle_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, HashMap<String, ToggleMetadata>> {
        self.toggle_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Handles an external settings-change notification.
    ///
    /// Re-reads the backing store and replaces the preference snapshot. If the
    /// store cannot be re-read, the previous values stay in effect.
    pub fn reload_settings(&self) {
        if let Err(err) = self.settings.reload() {
            tracing::warn!("{err:#}; keeping previous settings");
        }

        let fresh = PreferenceState::from_store(self.settings.as_ref());
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if *state != fresh {
            tracing::info!(
                "Preferences changed: enabled={}, theme={}, {} toggle(s) in order",
                fresh.enabled,
                fresh.current_theme.name(),
                fresh.toggle_order.len()
            );
        }
        *state = fresh;
    }

    /// Copy of the current preference snapshot.
    pub fn state(&self) -> PreferenceState {
        self.read_state().clone()
    }

    /// Whether the drawer replacement is enabled.
    pub fn enabled(&self) -> bool {
        self.read_state().enabled
    }

    /// Currently selected theme.
    pub fn current_theme(&self) -> DrawerTheme {
        self.read_state().current_theme
    }

    /// True for every theme except the default light one.
    pub fn is_using_dark(&self) -> bool {
        self.current_theme().is_dark()
    }

    /// Color table of the current theme.
    pub fn palette(&self) -> ThemePalette {
        self.current_theme().palette()
    }

    /// Drawer background color.
    pub fn background_color(&self) -> Color {
        self.palette().background
    }

    /// Highlight color for active toggles and sliders.
    pub fn highlight_color(&self) -> Color {
        self.palette().highlight
    }

    /// Label color.
    pub fn text_color(&self) -> Color {
        self.palette().text
    }

    /// Identifiers of every installed toggle, in registry order.
    ///
    /// Order is defined by the registry and may differ between calls.
    pub fn installed_toggle_identifiers(&self) -> Vec<String> {
        self.registry.installed_identifiers()
    }

    /// Looks up an installed toggle. Returns `None` when it is not installed.
    ///
    /// Installation is checked against the registry on every call, the same
    /// source [`Self::partition_toggles`] uses, so both always agree. Cached
    /// metadata of a toggle that has since been uninstalled is evicted.
    pub fn toggle_info_for_identifier(&self, identifier: &str) -> Option<ToggleInfo> {
        let installed = self
            .registry
            .installed_identifiers()
            .iter()
            .any(|id| id == identifier);
        if !installed {
            if self.read_cache().contains_key(identifier) {
                self.write_cache().remove(identifier);
                tracing::debug!("Evicted cached metadata for uninstalled toggle '{identifier}'");
            }
            return None;
        }

        let cached = self.read_cache().get(identifier).cloned();
        let metadata = match cached {
            Some(metadata) => metadata,
            None => {
                let fetched = self.registry.metadata_for(identifier)?;
                // A refresh may have filled the entry since the read above
                self.write_cache()
                    .entry(identifier.to_string())
                    .or_insert(fetched)
                    .clone()
            }
        };

        let enabled = self
            .read_state()
            .toggle_order
            .iter()
            .any(|id| id == identifier);
        Some(ToggleInfo::from_metadata(metadata, enabled))
    }

    /// Splits the installed toggles into `(enabled, disabled)`.
    ///
    /// Enabled toggles keep the stored order, disabled toggles keep registry
    /// order. Stored identifiers that are no longer installed are dropped, as
    /// are repeats. Both lists come from a single registry query.
    pub fn partition_toggles(&self) -> (Vec<String>, Vec<String>) {
        let installed = self.registry.installed_identifiers();
        let installed_set: HashSet<&str> = installed.iter().map(String::as_str).collect();

        let state = self.read_state();
        let mut enabled_set: HashSet<&str> = HashSet::new();
        let mut enabled = Vec::new();
        for identifier in &state.toggle_order {
            if installed_set.contains(identifier.as_str()) && enabled_set.insert(identifier.as_str())
            {
                enabled.push(identifier.clone());
            }
        }

        let disabled = installed
            .iter()
            .filter(|identifier| !enabled_set.contains(identifier.as_str()))
            .cloned()
            .collect();

        (enabled, disabled)
    }

    /// Enabled toggle identifiers in display order.
    pub fn enabled_toggles(&self) -> Vec<String> {
        self.partition_toggles().0
    }

    /// Installed toggle identifiers the user has not enabled, in registry order.
    pub fn disabled_toggles(&self) -> Vec<String> {
        self.partition_toggles().1
    }

    /// Rebuilds the toggle metadata cache from the registry.
    ///
    /// Safe to call repeatedly. Only metadata is refreshed; which toggles are
    /// enabled is decided by the settings store.
    pub fn refresh_toggle_info(&self) {
        let fresh: HashMap<String, ToggleMetadata> = self
            .registry
            .installed_toggles()
            .into_iter()
            .map(|metadata| (metadata.identifier.clone(), metadata))
            .collect();

        tracing::debug!("Refreshed metadata for {} toggle(s)", fresh.len());
        *self.write_cache() = fresh;
    }

    /// Number of toggles with cached metadata.
    pub fn cached_toggle_count(&self) -> usize {
        self.read_cache().len()
    }

    /// Current carrier name.
    pub fn carrier_name(&self) -> String {
        self.carrier.current_carrier_name()
    }
}

static SHARED: OnceLock<Arc<PreferenceManager>> = OnceLock::new();

/// Registers `manager` as the process-wide instance.
///
/// Only the first registration is retained; every call returns the retained
/// instance.
pub fn install_shared(manager: Arc<PreferenceManager>) -> Arc<PreferenceManager> {
    Arc::clone(SHARED.get_or_init(|| manager))
}

/// The process-wide instance, if one was installed.
pub fn shared() -> Option<Arc<PreferenceManager>> {
    SHARED.get().cloned()
}
