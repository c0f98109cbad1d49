//! Orientation and 2D geometry primitives.
//!
//! A [`Point`] never carries the orientation it was captured in; callers track
//! the frame themselves. A [`Size`] passed as "bounds" is always the portrait
//! extent of the display.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interface orientation of the device.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Orientation could not be determined. Treated as portrait.
    #[default]
    Unknown,
    /// Home button at the bottom
    Portrait,
    /// Rotated 180 degrees from portrait
    PortraitUpsideDown,
    /// Rotated 90 degrees, home button on the left
    LandscapeLeft,
    /// Rotated 90 degrees, home button on the right
    LandscapeRight,
}

impl Orientation {
    /// Every orientation, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Unknown,
        Self::Portrait,
        Self::PortraitUpsideDown,
        Self::LandscapeLeft,
        Self::LandscapeRight,
    ];

    /// Returns true for the two landscape orientations.
    #[must_use]
    pub const fn is_landscape(self) -> bool {
        match self {
            Self::LandscapeLeft | Self::LandscapeRight => true,
            Self::Unknown | Self::Portrait | Self::PortraitUpsideDown => false,
        }
    }

    /// Returns true for portrait and upside-down portrait.
    ///
    /// `Unknown` is neither portrait nor landscape.
    #[must_use]
    pub const fn is_portrait(self) -> bool {
        match self {
            Self::Portrait | Self::PortraitUpsideDown => true,
            Self::Unknown | Self::LandscapeLeft | Self::LandscapeRight => false,
        }
    }

    /// Kebab-case name used by the CLI and serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Portrait => "portrait",
            Self::PortraitUpsideDown => "portrait-upside-down",
            Self::LandscapeLeft => "landscape-left",
            Self::LandscapeRight => "landscape-right",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 2D location in the coordinate frame of some orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the size with width and height exchanged.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Returns `width * height`.
    #[must_use]
    pub fn area(self) -> f64 {
        self.width * self.height
    }
}

/// A rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: Point,
    /// Extent
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle anchored at `(0, 0)`.
    #[must_use]
    pub const fn with_size(size: Size) -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            size,
        }
    }

    /// Width of the rectangle.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.size.width
    }

    /// Height of the rectangle.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.size.height
    }
}
