//! Toggle registries: where installed toggles are discovered.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::constants::TOGGLE_MANIFEST_FILE;
use crate::models::ToggleMetadata;

/// External registry of installed toggles.
pub trait ToggleRegistry: Send + Sync {
    /// Identifiers of every installed toggle, in registry order.
    fn installed_identifiers(&self) -> Vec<String>;

    /// Metadata for `identifier`, or `None` when it is not installed.
    fn metadata_for(&self, identifier: &str) -> Option<ToggleMetadata>;

    /// Metadata of every installed toggle, in registry order.
    ///
    /// Registries that can list everything in one pass should override this so
    /// the result is a single consistent snapshot.
    fn installed_toggles(&self) -> Vec<ToggleMetadata> {
        self.installed_identifiers()
            .iter()
            .filter_map(|identifier| self.metadata_for(identifier))
            .collect()
    }
}

/// On-disk manifest of a toggle directory.
#[derive(Debug, Deserialize)]
struct ToggleManifest {
    #[serde(default)]
    identifier: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    icon: Option<String>,
}

/// Registry backed by a directory of toggle bundles.
///
/// Each subdirectory containing a `toggle.toml` is an installed toggle. The
/// manifest's `identifier` defaults to the directory name and `display_name`
/// defaults to the identifier. The directory is scanned on every query, so
/// installs and removals show up without restarting.
#[derive(Debug, Clone)]
pub struct DirectoryToggleRegistry {
    root: PathBuf,
}

impl DirectoryToggleRegistry {
    /// Creates a registry rooted at `root`. The directory need not exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scans the root directory for installed toggles, sorted by directory name.
    ///
    /// Returns an empty list if the directory doesn't exist.
    pub fn scan(&self) -> Result<Vec<ToggleMetadata>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).context(format!(
            "Failed to read toggles directory: {}",
            self.root.display()
        ))?;

        let mut bundles = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if !path.is_dir() {
                continue;
            }

            let manifest_path = path.join(TOGGLE_MANIFEST_FILE);
            if !manifest_path.exists() {
                continue;
            }

            let Some(dir_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };

            match read_manifest(&manifest_path) {
                Ok(manifest) => bundles.push((dir_name.to_string(), manifest)),
                Err(err) => tracing::warn!("Skipping toggle: {err:#}"),
            }
        }

        bundles.sort_by(|a, b| a.0.cmp(&b.0));

        let mut toggles: Vec<ToggleMetadata> = Vec::with_capacity(bundles.len());
        for (dir_name, manifest) in bundles {
            let identifier = manifest.identifier.unwrap_or(dir_name);
            if toggles.iter().any(|t| t.identifier == identifier) {
                tracing::warn!("Duplicate toggle identifier '{identifier}', keeping the first");
                continue;
            }
            let display_name = manifest.display_name.unwrap_or_else(|| identifier.clone());
            toggles.push(ToggleMetadata {
                identifier,
                display_name,
                icon: manifest.icon,
            });
        }

        Ok(toggles)
    }

    fn scan_or_empty(&self) -> Vec<ToggleMetadata> {
        self.scan().unwrap_or_else(|err| {
            tracing::warn!("{err:#}; treating as no toggles installed");
            Vec::new()
        })
    }
}

fn read_manifest(path: &Path) -> Result<ToggleManifest> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read toggle manifest: {}", path.display()))?;
    toml::from_str(&content).context(format!("Failed to parse toggle manifest: {}", path.display()))
}

impl ToggleRegistry for DirectoryToggleRegistry {
    fn installed_identifiers(&self) -> Vec<String> {
        self.scan_or_empty()
            .into_iter()
            .map(|toggle| toggle.identifier)
            .collect()
    }

    fn metadata_for(&self, identifier: &str) -> Option<ToggleMetadata> {
        self.scan_or_empty()
            .into_iter()
            .find(|toggle| toggle.identifier == identifier)
    }

    fn installed_toggles(&self) -> Vec<ToggleMetadata> {
        self.scan_or_empty()
    }
}

/// Registry holding a fixed list of toggles, for embedding hosts and tests.
#[derive(Debug, Default)]
pub struct StaticToggleRegistry {
    toggles: RwLock<Vec<ToggleMetadata>>,
}

impl StaticToggleRegistry {
    /// Creates a registry with `toggles` installed, in the given order.
    #[must_use]
    pub fn new(toggles: Vec<ToggleMetadata>) -> Self {
        Self {
            toggles: RwLock::new(toggles),
        }
    }

    /// Installs a toggle, replacing one with the same identifier.
    pub fn install(&self, metadata: ToggleMetadata) {
        let mut toggles = self
            .toggles
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(existing) = toggles
            .iter_mut()
            .find(|t| t.identifier == metadata.identifier)
        {
            *existing = metadata;
        } else {
            toggles.push(metadata);
        }
    }

    /// Uninstalls `identifier`. Returns true if it was installed.
    pub fn uninstall(&self, identifier: &str) -> bool {
        let mut toggles = self
            .toggles
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let before = toggles.len();
        toggles.retain(|t| t.identifier != identifier);
        toggles.len() != before
    }
}

impl ToggleRegistry for StaticToggleRegistry {
    fn installed_identifiers(&self) -> Vec<String> {
        let toggles = self
            .toggles
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        toggles.iter().map(|t| t.identifier.clone()).collect()
    }

    fn metadata_for(&self, identifier: &str) -> Option<ToggleMetadata> {
        let toggles = self
            .toggles
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        toggles.iter().find(|t| t.identifier == identifier).cloned()
    }

    fn installed_toggles(&self) -> Vec<ToggleMetadata> {
        self.toggles
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}
