//! Sample records and the clipped environment grid.

use geo::Point;

/// One grid point with its sampled environmental value.
///
/// `variable` is whatever the raster returned, including a no-data sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub variable: f64,
}

impl SampleRecord {
    pub fn new(latitude: f64, longitude: f64, variable: f64) -> Self {
        Self {
            latitude,
            longitude,
            variable,
        }
    }

    /// Geometry at (longitude, latitude).
    pub fn location(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// A sample record tagged with its point geometry, ready for clipping.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoSample {
    pub record: SampleRecord,
    pub geometry: Point<f64>,
}

impl From<SampleRecord> for GeoSample {
    fn from(record: SampleRecord) -> Self {
        Self {
            geometry: record.location(),
            record,
        }
    }
}

/// Clipped, sampled representation of one environmental variable.
///
/// Built once per run and not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvironmentGrid {
    samples: Vec<GeoSample>,
}

impl EnvironmentGrid {
    pub fn new(samples: Vec<GeoSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[GeoSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoSample> {
        self.samples.iter()
    }

    /// The (lat, long, variable) triples in grid order.
    pub fn records(&self) -> impl Iterator<Item = &SampleRecord> + '_ {
        self.samples.iter().map(|s| &s.record)
    }

    /// Smallest and largest finite variable value, `None` if there are none.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.records()
            .map(|r| r.variable)
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

impl<'a> IntoIterator for &'a EnvironmentGrid {
    type Item = &'a GeoSample;
    type IntoIter = std::slice::Iter<'a, GeoSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl FromIterator<GeoSample> for EnvironmentGrid {
    fn from_iter<I: IntoIterator<Item = GeoSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
