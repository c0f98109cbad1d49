//! Service layer.
//!
//! Geometry is a set of pure functions. The preference manager combines the
//! settings store, toggle registry and telephony collaborators into the views
//! the drawer renders from.

pub mod geometry;
pub mod preferences;
pub mod registry;
pub mod settings;
pub mod telephony;

// Re-export commonly used types and functions
pub use geometry::{convert_point, screen_bounds_for_orientation, DisplayMetrics, FixedDisplay};
pub use preferences::{PreferenceManager, PreferenceState};
pub use registry::{DirectoryToggleRegistry, StaticToggleRegistry, ToggleRegistry};
pub use settings::{FileSettingsStore, MemorySettingsStore, SettingsStore};
pub use telephony::{CarrierInfo, StaticCarrier};
