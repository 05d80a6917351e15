//! Environment grid construction: generate, sample, clip.

use std::time::Instant;

use biomap_common::{GridSpec, Interval, Resolution};
use tracing::{debug, info};

use crate::boundary::BoundaryClipper;
use crate::error::{EnvmapError, Result};
use crate::raster::RasterSampler;
use crate::types::{EnvironmentGrid, GeoSample, SampleRecord};

/// Sample `raster` over a regular grid and keep the points inside `boundary`.
///
/// `resolution.nx` longitudes and `resolution.ny` latitudes are spaced evenly
/// over the given ranges, endpoints included. Points are generated row by row
/// with longitude varying fastest and sampled in a single batch. The returned
/// grid is whatever subset the clipper keeps, in the clipper's order; an empty
/// grid is a valid result.
pub fn make_environment_map<R, B>(
    latitude_range: Interval,
    longitude_range: Interval,
    raster: &R,
    boundary: &B,
    resolution: Resolution,
) -> Result<EnvironmentGrid>
where
    R: RasterSampler + ?Sized,
    B: BoundaryClipper + ?Sized,
{
    let spec = GridSpec::new(latitude_range, longitude_range, resolution);
    let coords = spec.points();
    debug!(
        nx = resolution.nx,
        ny = resolution.ny,
        points = coords.len(),
        "Generated sampling grid"
    );

    let start = Instant::now();
    let values = raster.sample(&coords)?;
    if values.len() != coords.len() {
        return Err(EnvmapError::SampleCountMismatch {
            requested: coords.len(),
            returned: values.len(),
        });
    }
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "Sampled raster");

    let samples: Vec<GeoSample> = coords
        .iter()
        .zip(values)
        .map(|(p, v)| GeoSample::from(SampleRecord::new(p.latitude(), p.longitude(), v)))
        .collect();

    let start = Instant::now();
    let kept = boundary.clip(samples);
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "Clipped to boundary");

    info!(
        generated = coords.len(),
        kept = kept.len(),
        "Built environment grid"
    );
    Ok(EnvironmentGrid::new(kept))
}
