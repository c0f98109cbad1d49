//! CLI command handlers.
//!
//! Scriptable access to the geometry helpers and the preference views, mainly
//! for inspecting a device's settings and checking conversions by hand.

pub mod geometry;
pub mod prefs;

// Re-export types used by main.rs and tests
pub use geometry::{BoundsArgs, ConvertArgs};
pub use prefs::{PrefsArgs, TogglesArgs};
