//! Scatter rasterization of a sampled environment grid.
//!
//! Each sample is drawn as a filled square marker at its (longitude,
//! latitude). The axes span exactly the bounding box with no margins, north
//! up, so the bbox corners land on the image corners.

use biomap_common::{BoundingBox, MapPoint, Resolution};
use envmap::EnvironmentGrid;
use projection::{scaled_location, Extent};
use tracing::debug;

use crate::canvas::RgbaImage;
use crate::error::RenderResult;
use crate::style::RenderConfig;

/// How markers are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Color by the sampled value, normalized over the grid's finite range.
    ByValue,
    /// Every marker gets the colormap's low end (black on the gray map).
    Uniform,
}

/// Marker edge lengths in pixels.
///
/// An explicit size is used for both axes. Otherwise a marker spans the
/// pixel distance between neighbouring grid points, rounded up, so adjacent
/// samples leave no gaps; a single point along an axis fills that axis.
pub fn marker_dimensions(config: &RenderConfig, resolution: Resolution) -> (u32, u32) {
    if let Some(size) = config.marker_size {
        return (size.max(1), size.max(1));
    }
    let per_cell = |pixels: u32, points: usize| -> u32 {
        if points <= 1 {
            return pixels.max(1);
        }
        let span = pixels.saturating_sub(1) as u64;
        let gaps = (points - 1) as u64;
        ((span + gaps - 1) / gaps).max(1) as u32
    };
    (
        per_cell(config.width, resolution.nx),
        per_cell(config.height, resolution.ny),
    )
}

/// Map a value into [0, 1] over `(min, max)`; a flat range maps to 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range == 0.0 || !range.is_finite() {
        return 0.0;
    }
    ((value - min) / range).clamp(0.0, 1.0)
}

/// Render `grid` as a scatter image over `bbox`.
///
/// Samples with a non-finite value are skipped under [`Fill::ByValue`]. An
/// empty grid yields a background-only image.
pub fn render_scatter(
    grid: &EnvironmentGrid,
    bbox: &BoundingBox,
    resolution: Resolution,
    config: &RenderConfig,
    fill: Fill,
) -> RenderResult<RgbaImage> {
    config.validate()?;

    let (width, height) = (config.width as usize, config.height as usize);
    let mut image = RgbaImage::new(width, height, config.background);

    let from = Extent::from_bbox(bbox);
    let to = Extent::image(width, height);
    let (marker_w, marker_h) = marker_dimensions(config, resolution);
    let (min, max) = grid.value_range().unwrap_or((0.0, 0.0));
    let uniform = config.colormap.color_at(0.0);

    let mut drawn = 0usize;
    for record in grid.records() {
        let color = match fill {
            Fill::Uniform => uniform,
            Fill::ByValue if record.variable.is_finite() => {
                config.colormap.color_at(normalize(record.variable, min, max))
            }
            Fill::ByValue => continue,
        };

        let p = scaled_location(MapPoint::new(record.longitude, record.latitude), &from, &to);
        if !(p.x.is_finite() && p.y.is_finite()) {
            continue;
        }
        // Far-off points saturate at the i64 bounds and are clipped away.
        let x0 = (p.x.round() as i64).saturating_sub((marker_w / 2) as i64);
        let y0 = (p.y.round() as i64).saturating_sub((marker_h / 2) as i64);
        image.fill_rect(x0, y0, marker_w, marker_h, color);
        drawn += 1;
    }

    debug!(
        samples = grid.len(),
        drawn,
        marker_w,
        marker_h,
        ?fill,
        "Rendered scatter"
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
        assert_eq!(normalize(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(normalize(3.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_auto_marker_tiles_cells() {
        let config = RenderConfig::default();
        let res = Resolution::new(200, 300).unwrap();
        assert_eq!(marker_dimensions(&config, res), (11, 7));
    }

    #[test]
    fn test_explicit_marker_size() {
        let config = RenderConfig {
            marker_size: Some(4),
            ..RenderConfig::default()
        };
        assert_eq!(marker_dimensions(&config, Resolution::default()), (4, 4));
    }

    #[test]
    fn test_tiny_image_marker_is_at_least_one() {
        let config = RenderConfig {
            width: 10,
            height: 10,
            ..RenderConfig::default()
        };
        assert_eq!(marker_dimensions(&config, Resolution::square(400).unwrap()), (1, 1));
    }
}
