//! One-dimensional intervals and geographic points.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered pair of endpoints along one axis.
///
/// `low` and `high` name the first and second endpoint, not their magnitude:
/// an image row axis runs top to bottom while latitude runs bottom to top, so
/// `high < low` is allowed. Consumers that divide by the span require
/// `low != high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Signed distance from `low` to `high`.
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// True when both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    /// Same endpoints, opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            low: self.high,
            high: self.low,
        }
    }

    /// Check whether `value` lies between the endpoints, whatever their order.
    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = if self.low <= self.high {
            (self.low, self.high)
        } else {
            (self.high, self.low)
        };
        value >= lo && value <= hi
    }
}

impl From<(f64, f64)> for Interval {
    fn from((low, high): (f64, f64)) -> Self {
        Self { low, high }
    }
}

impl From<[f64; 2]> for Interval {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

/// A location in map coordinates: `x` is longitude, `y` is latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn longitude(&self) -> f64 {
        self.x
    }

    pub fn latitude(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for MapPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
