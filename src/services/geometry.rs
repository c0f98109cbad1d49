//! Orientation-aware point conversion and screen bounds.
//!
//! Every conversion pivots through the portrait frame: the source point is first
//! normalized to portrait coordinates, then projected into the destination
//! orientation. Each stage is a five-case table, and stage two is the inverse of
//! stage one for the same orientation.
//!
//! All functions here are pure and may be called from any thread.

use crate::models::{Orientation, Point, Rect, Size};

/// Source of the display's canonical portrait extent.
pub trait DisplayMetrics: Send + Sync {
    /// Width and height of the display in the portrait frame.
    fn reference_portrait_bounds(&self) -> Size;
}

/// Display metrics with a fixed, configured extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDisplay {
    bounds: Size,
}

impl FixedDisplay {
    /// Creates a display reporting `bounds` as its portrait extent.
    #[must_use]
    pub const fn new(bounds: Size) -> Self {
        Self { bounds }
    }
}

impl DisplayMetrics for FixedDisplay {
    fn reference_portrait_bounds(&self) -> Size {
        self.bounds
    }
}

/// Converts `location` from the frame of `from` to the frame of `to`.
///
/// `bounds` must be the portrait extent of the containing rect regardless of
/// `from` and `to`. Passing an already-rotated size silently gives wrong
/// results. `Unknown` behaves as `Portrait`.
///
/// # Examples
///
/// ```
/// use nougat::models::{Orientation, Point, Size};
/// use nougat::services::geometry::convert_point;
///
/// let bounds = Size::new(320.0, 480.0);
/// let converted = convert_point(
///     Point::new(10.0, 20.0),
///     bounds,
///     Orientation::Portrait,
///     Orientation::LandscapeRight,
/// );
/// assert_eq!(converted, Point::new(20.0, 310.0));
/// ```
#[must_use]
pub fn convert_point(location: Point, bounds: Size, from: Orientation, to: Orientation) -> Point {
    if from == to {
        return location;
    }

    let portrait = to_portrait(location, bounds, from);
    from_portrait(portrait, bounds, to)
}

/// Normalizes a point expressed in `orientation`'s frame to the portrait frame.
fn to_portrait(location: Point, bounds: Size, orientation: Orientation) -> Point {
    let Point { x, y } = location;
    match orientation {
        Orientation::Unknown | Orientation::Portrait => location,
        Orientation::PortraitUpsideDown => Point::new(bounds.width - x, bounds.height - y),
        Orientation::LandscapeLeft => Point::new(y, bounds.height - x),
        Orientation::LandscapeRight => Point::new(bounds.width - y, x),
    }
}

/// Projects a portrait-frame point into `orientation`'s frame.
fn from_portrait(portrait: Point, bounds: Size, orientation: Orientation) -> Point {
    let Point { x, y } = portrait;
    match orientation {
        Orientation::Unknown | Orientation::Portrait => portrait,
        Orientation::PortraitUpsideDown => Point::new(bounds.width - x, bounds.height - y),
        Orientation::LandscapeLeft => Point::new(bounds.height - y, x),
        Orientation::LandscapeRight => Point::new(y, bounds.width - x),
    }
}

/// Returns the screen extent as seen in `orientation`.
///
/// The portrait reference bounds are queried once and swapped for landscape.
///
/// Some hosts (a system shell that never rotates itself) get stale,
/// orientation-independent bounds from the platform's orientation-aware
/// accessor, so the swap is derived here instead of trusted from the platform.
/// This was observed on one platform generation only and should be revisited.
#[must_use]
pub fn screen_bounds_for_orientation(display: &dyn DisplayMetrics, orientation: Orientation) -> Size {
    let reference = display.reference_portrait_bounds();
    if orientation.is_landscape() {
        reference.swapped()
    } else {
        reference
    }
}

/// Same as [`screen_bounds_for_orientation`], as a rect anchored at the origin.
#[must_use]
pub fn screen_rect_for_orientation(display: &dyn DisplayMetrics, orientation: Orientation) -> Rect {
    Rect::with_size(screen_bounds_for_orientation(display, orientation))
}

/// Screen width as seen in `orientation`.
#[must_use]
pub fn screen_width(display: &dyn DisplayMetrics, orientation: Orientation) -> f64 {
    screen_bounds_for_orientation(display, orientation).width
}

/// Screen height as seen in `orientation`.
#[must_use]
pub fn screen_height(display: &dyn DisplayMetrics, orientation: Orientation) -> f64 {
    screen_bounds_for_orientation(display, orientation).height
}
