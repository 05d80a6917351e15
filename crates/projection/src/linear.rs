//! Linear rescaling between map and image coordinates.
//!
//! A location on one interval is carried to the matching location on another
//! interval by preserving its relative distance from the far endpoint:
//!
//! ```text
//!     a-------b-------c
//!     x---------------y---------z
//!
//!     (z - y) / (z - x) = (c - b) / (c - a)
//! ```
//!
//! Solving for `b` gives [`map_to_scale`]. The relation is affine and exact in
//! both directions, so mapping map → image → map returns the original point
//! up to floating-point rounding. Neither interval may have equal endpoints;
//! that precondition is left to the caller and a violation yields a
//! non-finite result.

use biomap_common::{BoundingBox, Interval, MapPoint};
use num_traits::Float;

/// Solve for `b` on the interval `a..c` given `y` on the interval `x..z`.
///
/// Endpoints may be ascending or descending on either interval.
#[inline]
pub fn map_to_scale<T: Float>(a: T, c: T, x: T, y: T, z: T) -> T {
    c - (z - y) / (z - x) * (c - a)
}

/// Map a single value from `from` onto `to`.
#[inline]
pub fn rescale(value: f64, from: Interval, to: Interval) -> f64 {
    map_to_scale(to.low, to.high, from.low, value, from.high)
}

/// A rectangular coordinate frame given as one interval per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x: Interval,
    pub y: Interval,
}

impl Extent {
    pub fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    /// Build from the flat `(x0, x1, y0, y1)` layout.
    pub fn from_bounds(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self {
            x: Interval::new(x0, x1),
            y: Interval::new(y0, y1),
        }
    }

    /// Geographic frame of a bounding box: longitude on x, latitude on y.
    pub fn from_bbox(bbox: &BoundingBox) -> Self {
        Self {
            x: bbox.longitude_range(),
            y: bbox.latitude_range(),
        }
    }

    /// Pixel-centre frame of a `width` × `height` image with row 0 at the top.
    ///
    /// The y interval runs from the bottom row up to row 0 so that a north-up
    /// map frame lands with its northern edge on the first row.
    pub fn image(width: usize, height: usize) -> Self {
        Self {
            x: Interval::new(0.0, width.saturating_sub(1) as f64),
            y: Interval::new(height.saturating_sub(1) as f64, 0.0),
        }
    }

    /// True when either axis has equal endpoints.
    pub fn is_degenerate(&self) -> bool {
        self.x.is_degenerate() || self.y.is_degenerate()
    }
}

impl From<(f64, f64, f64, f64)> for Extent {
    fn from((x0, x1, y0, y1): (f64, f64, f64, f64)) -> Self {
        Self::from_bounds(x0, x1, y0, y1)
    }
}

/// Convert a location in the `from` frame to the matching location in `to`.
///
/// Each axis is mapped independently. Calling again with the frames swapped
/// recovers `location`.
pub fn scaled_location(location: MapPoint, from: &Extent, to: &Extent) -> MapPoint {
    MapPoint {
        x: rescale(location.x, from.x, to.x),
        y: rescale(location.y, from.y, to.y),
    }
}
