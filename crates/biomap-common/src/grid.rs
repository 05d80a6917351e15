//! Regular lat/lon sampling grids.

use serde::{Deserialize, Serialize};

use crate::error::{BiomapError, BiomapResult};
use crate::interval::{Interval, MapPoint};

/// Evenly spaced values from `start` to `stop`, both included.
///
/// Matches numpy's `linspace` with `endpoint=True`: a count of one yields
/// just `start`, zero yields nothing, and the last value is exactly `stop`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| i as f64 * step + start).collect();
            values[num - 1] = stop;
            values
        }
    }
}

/// Number of sample points along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Points along longitude
    pub nx: usize,
    /// Points along latitude
    pub ny: usize,
}

impl Resolution {
    /// Both counts must be positive and their product must fit in `usize`.
    pub fn new(nx: usize, ny: usize) -> BiomapResult<Self> {
        if nx == 0 || ny == 0 || nx.checked_mul(ny).is_none() {
            return Err(BiomapError::InvalidResolution { nx, ny });
        }
        Ok(Self { nx, ny })
    }

    /// Same count on both axes.
    pub fn square(n: usize) -> BiomapResult<Self> {
        Self::new(n, n)
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.nx.saturating_mul(self.ny)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self { nx: 200, ny: 200 }
    }
}

/// Specification of a regular lat/lon sampling grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub longitudes: Interval,
    pub latitudes: Interval,
    pub resolution: Resolution,
}

impl GridSpec {
    pub fn new(latitudes: Interval, longitudes: Interval, resolution: Resolution) -> Self {
        Self {
            longitudes,
            latitudes,
            resolution,
        }
    }

    /// Longitude of every column, west to east as given.
    pub fn longitude_values(&self) -> Vec<f64> {
        linspace(self.longitudes.low, self.longitudes.high, self.resolution.nx)
    }

    /// Latitude of every row.
    pub fn latitude_values(&self) -> Vec<f64> {
        linspace(self.latitudes.low, self.latitudes.high, self.resolution.ny)
    }

    /// Cross product of the axes in row-major order: longitude varies fastest.
    pub fn points(&self) -> Vec<MapPoint> {
        let xs = self.longitude_values();
        let ys = self.latitude_values();

        let mut points = Vec::with_capacity(xs.len() * ys.len());
        for &y in &ys {
            for &x in &xs {
                points.push(MapPoint::new(x, y));
            }
        }
        points
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.resolution.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolution.is_empty()
    }
}
