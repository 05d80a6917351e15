//! One end-to-end run: load inputs, build the environment grid, draw both images.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use biomap_common::BoundingBox;
use envmap::{make_environment_map, BoundaryShape, EnvironmentGrid, GeoRaster};
use renderer::{render_scatter, write_png, Fill};
use tracing::{info, warn};

use crate::config::BiomapConfig;

/// What a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Grid points sampled before clipping.
    pub sampled: usize,
    /// Points left inside the boundary.
    pub kept: usize,
    pub outfile: PathBuf,
    pub land_outfile: PathBuf,
}

pub fn run(config: &BiomapConfig) -> Result<RunSummary> {
    let start = Instant::now();

    let raster = GeoRaster::from_geotiff(&config.bioclim_tiff).with_context(|| {
        format!("Failed to load bioclim raster {}", config.bioclim_tiff.display())
    })?;
    if !overlaps(&raster.bounds(), &config.bbox) {
        warn!(
            raster = ?raster.bounds(),
            bbox = ?config.bbox,
            "Location does not overlap the raster; every sample will be fill"
        );
    }

    let boundary = BoundaryShape::from_shapefile(&config.shapefile).with_context(|| {
        format!("Failed to load boundary {}", config.shapefile.display())
    })?;
    info!(polygons = boundary.len(), "Boundary loaded");

    let grid = make_environment_map(
        config.bbox.latitude_range(),
        config.bbox.longitude_range(),
        &raster,
        &boundary,
        config.resolution,
    )
    .context("Failed to build environment map")?;
    if grid.is_empty() {
        warn!("No grid points fall inside the boundary; images will be blank");
    }

    draw(config, &grid, Fill::ByValue, &config.outfile)?;
    draw(config, &grid, Fill::Uniform, &config.land_outfile)?;

    info!(
        kept = grid.len(),
        outfile = %config.outfile.display(),
        land_outfile = %config.land_outfile.display(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Map written"
    );

    Ok(RunSummary {
        sampled: config.resolution.len(),
        kept: grid.len(),
        outfile: config.outfile.clone(),
        land_outfile: config.land_outfile.clone(),
    })
}

fn draw(config: &BiomapConfig, grid: &EnvironmentGrid, fill: Fill, path: &Path) -> Result<()> {
    let image = render_scatter(grid, &config.bbox, config.resolution, &config.render, fill)
        .with_context(|| format!("Failed to render {}", path.display()))?;
    write_png(path, &image).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), ?fill, "Image written");
    Ok(())
}

/// Whether two boxes share any area; endpoints may be given in either order.
fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    let span = |lo: f64, hi: f64| (lo.min(hi), lo.max(hi));
    let (a_x0, a_x1) = span(a.min_lon, a.max_lon);
    let (a_y0, a_y1) = span(a.min_lat, a.max_lat);
    let (b_x0, b_x1) = span(b.min_lon, b.max_lon);
    let (b_y0, b_y1) = span(b.min_lat, b.max_lat);
    a_x0 <= b_x1 && b_x0 <= a_x1 && a_y0 <= b_y1 && b_y0 <= a_y1
}
