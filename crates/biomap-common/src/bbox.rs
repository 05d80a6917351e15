//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::error::{BiomapError, BiomapResult};
use crate::interval::Interval;

/// Location string used when none is given: mainland Australia.
pub const DEFAULT_LOCATION: &str = "110,155,-45,-10";

/// A geographic bounding box in degrees.
///
/// Field order follows the command-line location string
/// (`minLon,maxLon,minLat,maxLat`), not the WMS `minx,miny,maxx,maxy` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        }
    }

    /// Parse a location string: "minLon,maxLon,minLat,maxLat"
    ///
    /// Surrounding whitespace around each number is ignored. Equal endpoints
    /// on either axis are rejected since every later stage divides by the
    /// span; reversed endpoints are kept as given.
    pub fn from_location_string(s: &str) -> BiomapResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(BiomapError::InvalidBbox(s.to_string()));
        }

        let mut values = [0.0f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| BiomapError::InvalidNumber(part.to_string()))?;
        }

        let [min_lon, max_lon, min_lat, max_lat] = values;
        let bbox = Self::new(min_lon, max_lon, min_lat, max_lat);
        bbox.validate()?;
        Ok(bbox)
    }

    /// Reject boxes with a zero-width axis.
    pub fn validate(&self) -> BiomapResult<()> {
        if self.min_lon == self.max_lon {
            return Err(BiomapError::DegenerateRange {
                axis: "longitude",
                value: self.min_lon,
            });
        }
        if self.min_lat == self.max_lat {
            return Err(BiomapError::DegenerateRange {
                axis: "latitude",
                value: self.min_lat,
            });
        }
        Ok(())
    }

    pub fn longitude_range(&self) -> Interval {
        Interval::new(self.min_lon, self.max_lon)
    }

    pub fn latitude_range(&self) -> Interval {
        Interval::new(self.min_lat, self.max_lat)
    }

    /// Width of the bounding box in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height of the bounding box in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Check if a point is contained within this bbox.
    pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
        self.longitude_range().contains(lon) && self.latitude_range().contains(lat)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(110.0, 155.0, -45.0, -10.0)
    }
}

impl std::str::FromStr for BoundingBox {
    type Err = BiomapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_location_string(s)
    }
}
