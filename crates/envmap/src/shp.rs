//! Shapefile boundary loading.
//!
//! Every polygon record (plain, M or Z) becomes one or more geo polygons;
//! other record types are skipped with a warning. Attributes are not read.

use std::path::Path;

use geo::{Coord, Intersects, LineString, Point, Polygon};
use shapefile::record::polygon::PolygonRing;
use shapefile::{Shape, ShapeReader};
use tracing::{debug, info, warn};

use crate::boundary::BoundaryShape;
use crate::error::{EnvmapError, Result};

impl BoundaryShape {
    /// Read every polygon in a shapefile into one boundary.
    pub fn from_shapefile(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader =
            ShapeReader::from_path(path).map_err(|e| EnvmapError::open_failed(path, e))?;

        let mut polygons = Vec::new();
        let mut skipped = 0usize;
        for (index, shape) in reader.iter_shapes().enumerate() {
            match shape? {
                Shape::Polygon(p) => polygons.extend(rings_to_polygons(p.rings(), |pt| {
                    Coord { x: pt.x, y: pt.y }
                })),
                Shape::PolygonM(p) => polygons.extend(rings_to_polygons(p.rings(), |pt| {
                    Coord { x: pt.x, y: pt.y }
                })),
                Shape::PolygonZ(p) => polygons.extend(rings_to_polygons(p.rings(), |pt| {
                    Coord { x: pt.x, y: pt.y }
                })),
                Shape::NullShape => debug!(index, "Skipping null shape"),
                other => {
                    skipped += 1;
                    debug!(index, shape_type = ?other.shapetype(), "Skipping non-polygon shape");
                }
            }
        }

        if skipped > 0 {
            warn!(path = %path.display(), skipped, "Ignored non-polygon shapes");
        }
        if polygons.is_empty() {
            return Err(EnvmapError::invalid_metadata(format!(
                "{} contains no polygons",
                path.display()
            )));
        }

        info!(path = %path.display(), polygons = polygons.len(), "Loaded boundary");
        Ok(Self::from_polygons(polygons))
    }
}

/// Convert the rings of one shapefile record into polygons.
///
/// Each outer ring starts a polygon. An inner ring becomes a hole of the
/// polygon whose exterior contains its first vertex, or of the most recent
/// polygon when none does.
pub fn rings_to_polygons<P, F>(rings: &[PolygonRing<P>], to_coord: F) -> Vec<Polygon<f64>>
where
    F: Fn(&P) -> Coord<f64>,
{
    let line = |points: &[P]| -> LineString<f64> { points.iter().map(&to_coord).collect() };

    let mut parts: Vec<(Polygon<f64>, Vec<LineString<f64>>)> = Vec::new();
    for ring in rings {
        match ring {
            PolygonRing::Outer(points) => {
                parts.push((Polygon::new(line(points), vec![]), Vec::new()));
            }
            PolygonRing::Inner(points) => {
                let hole = line(points);
                let Some(first) = hole.0.first().copied() else {
                    continue;
                };
                let probe = Point::from(first);
                let owner = parts
                    .iter()
                    .position(|(outer, _)| probe.intersects(outer))
                    .or_else(|| parts.len().checked_sub(1));
                match owner {
                    Some(i) => parts[i].1.push(hole),
                    None => {
                        warn!("Inner ring without an outer ring, treating it as outer");
                        parts.push((Polygon::new(hole, vec![]), Vec::new()));
                    }
                }
            }
        }
    }

    parts
        .into_iter()
        .map(|(outer, holes)| {
            let (exterior, _) = outer.into_inner();
            Polygon::new(exterior, holes)
        })
        .collect()
}
