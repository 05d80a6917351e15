//! Boundary geometry and point clipping.

use geo::{BoundingRect, Intersects, MultiPolygon, Point, Polygon, Rect};

use crate::types::GeoSample;

/// Keeps the samples whose point falls inside (or on the edge of) an area.
///
/// Implementations preserve the relative order of the samples they keep.
pub trait BoundaryClipper {
    fn clip(&self, samples: Vec<GeoSample>) -> Vec<GeoSample>;
}

impl<T: BoundaryClipper + ?Sized> BoundaryClipper for &T {
    fn clip(&self, samples: Vec<GeoSample>) -> Vec<GeoSample> {
        (**self).clip(samples)
    }
}

impl BoundaryClipper for Polygon<f64> {
    fn clip(&self, samples: Vec<GeoSample>) -> Vec<GeoSample> {
        samples
            .into_iter()
            .filter(|s| s.geometry.intersects(self))
            .collect()
    }
}

impl BoundaryClipper for MultiPolygon<f64> {
    fn clip(&self, samples: Vec<GeoSample>) -> Vec<GeoSample> {
        samples
            .into_iter()
            .filter(|s| self.iter().any(|p| s.geometry.intersects(p)))
            .collect()
    }
}

/// A multi-part boundary with a per-part envelope for fast rejection.
///
/// Country and coastline shapefiles have thousands of parts, most of them
/// tiny islands, so the envelope check skips nearly all exact tests.
#[derive(Debug, Clone)]
pub struct BoundaryShape {
    polygons: MultiPolygon<f64>,
    envelopes: Vec<Option<Rect<f64>>>,
}

impl BoundaryShape {
    pub fn from_polygons(polygons: Vec<Polygon<f64>>) -> Self {
        let envelopes = polygons.iter().map(|p| p.bounding_rect()).collect();
        Self {
            polygons: MultiPolygon::new(polygons),
            envelopes,
        }
    }

    pub fn polygons(&self) -> &MultiPolygon<f64> {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.0.is_empty()
    }

    /// Envelope of the whole boundary.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.polygons.bounding_rect()
    }

    /// True when the point lies inside any part or on its boundary.
    pub fn contains_location(&self, point: &Point<f64>) -> bool {
        self.polygons
            .iter()
            .zip(&self.envelopes)
            .any(|(polygon, envelope)| match envelope {
                Some(rect) if !in_rect(rect, point) => false,
                Some(_) => point.intersects(polygon),
                None => false,
            })
    }
}

impl From<MultiPolygon<f64>> for BoundaryShape {
    fn from(mp: MultiPolygon<f64>) -> Self {
        Self::from_polygons(mp.0)
    }
}

impl From<Polygon<f64>> for BoundaryShape {
    fn from(polygon: Polygon<f64>) -> Self {
        Self::from_polygons(vec![polygon])
    }
}

impl BoundaryClipper for BoundaryShape {
    fn clip(&self, samples: Vec<GeoSample>) -> Vec<GeoSample> {
        samples
            .into_iter()
            .filter(|s| self.contains_location(&s.geometry))
            .collect()
    }
}

fn in_rect(rect: &Rect<f64>, point: &Point<f64>) -> bool {
    let (min, max) = (rect.min(), rect.max());
    point.x() >= min.x && point.x() <= max.x && point.y() >= min.y && point.y() <= max.y
}
