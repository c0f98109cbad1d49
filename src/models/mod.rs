//! Data models for orientation geometry, themes and toggles.
//!
//! Models are plain values, independent of where settings are stored or how
//! toggles are discovered.

pub mod color;
pub mod geometry;
pub mod theme;
pub mod toggle;

// Re-export all model types
pub use color::Color;
pub use geometry::{Orientation, Point, Rect, Size};
pub use theme::{DrawerTheme, ThemePalette};
pub use toggle::{ToggleInfo, ToggleMetadata};
