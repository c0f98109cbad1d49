//! Toggle metadata types.

use serde::{Deserialize, Serialize};

/// Display metadata a toggle registry publishes for one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleMetadata {
    /// Stable identifier (e.g., "com.example.wifi")
    pub identifier: String,
    /// Human-readable name shown under the toggle
    pub display_name: String,
    /// Icon reference, resolved by the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ToggleMetadata {
    /// Creates metadata without an icon.
    #[must_use]
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            icon: None,
        }
    }

    /// Sets the icon reference.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// An installed toggle together with its enabled state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleInfo {
    /// Stable identifier, unique across installed toggles
    pub identifier: String,
    /// Whether the user placed this toggle in the drawer
    pub enabled: bool,
    /// Human-readable name
    pub display_name: String,
    /// Icon reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ToggleInfo {
    /// Builds toggle info from registry metadata.
    #[must_use]
    pub fn from_metadata(metadata: ToggleMetadata, enabled: bool) -> Self {
        Self {
            identifier: metadata.identifier,
            enabled,
            display_name: metadata.display_name,
            icon: metadata.icon,
        }
    }
}
