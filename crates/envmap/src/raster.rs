//! In-memory georeferenced rasters and the sampling capability.

use biomap_common::{BoundingBox, MapPoint};

use crate::error::{EnvmapError, Result};

/// Answers "what is the value at this coordinate?" for a batch of points.
///
/// Implementations must return exactly one value per input coordinate, in the
/// same order. Coordinates outside the raster's coverage yield its no-data
/// value rather than an error.
pub trait RasterSampler {
    fn sample(&self, coords: &[MapPoint]) -> Result<Vec<f64>>;
}

impl<T: RasterSampler + ?Sized> RasterSampler for &T {
    fn sample(&self, coords: &[MapPoint]) -> Result<Vec<f64>> {
        (**self).sample(coords)
    }
}

/// North-up affine transform from pixel (col, row) to map (x, y).
///
/// ```text
/// x = origin_x + col * pixel_width
/// y = origin_y + row * pixel_height
/// ```
///
/// `pixel_height` is negative for the usual north-up layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform {
    /// X coordinate of the upper-left corner
    pub origin_x: f64,
    /// Y coordinate of the upper-left corner
    pub origin_y: f64,
    pub pixel_width: f64,
    pub pixel_height: f64,
}

impl GeoTransform {
    pub fn new(origin_x: f64, origin_y: f64, pixel_width: f64, pixel_height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            pixel_width,
            pixel_height,
        }
    }

    /// Build from GeoTIFF ModelPixelScale + ModelTiepoint values.
    ///
    /// tiepoint: `[I, J, K, X, Y, Z]`, scale: `[ScaleX, ScaleY, ScaleZ]`.
    pub fn from_tiepoint(tiepoint: &[f64], scale: &[f64]) -> Option<Self> {
        if tiepoint.len() < 6 || scale.len() < 2 {
            return None;
        }
        if scale[0] == 0.0 || scale[1] == 0.0 {
            return None;
        }
        Some(Self {
            origin_x: tiepoint[3] - tiepoint[0] * scale[0],
            origin_y: tiepoint[4] + tiepoint[1] * scale[1],
            pixel_width: scale[0],
            pixel_height: -scale[1],
        })
    }

    /// Fractional (col, row) of a map coordinate.
    pub fn geo_to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.origin_x) / self.pixel_width,
            (y - self.origin_y) / self.pixel_height,
        )
    }
}

/// A single-band raster held in memory, row-major from the top-left pixel.
#[derive(Debug, Clone)]
pub struct GeoRaster {
    width: usize,
    height: usize,
    transform: GeoTransform,
    data: Vec<f64>,
    nodata: Option<f64>,
}

impl GeoRaster {
    pub fn new(width: usize, height: usize, transform: GeoTransform, data: Vec<f64>) -> Result<Self> {
        if data.len() != width * height {
            return Err(EnvmapError::invalid_metadata(format!(
                "raster of {}x{} needs {} values, got {}",
                width,
                height,
                width * height,
                data.len()
            )));
        }
        if transform.pixel_width == 0.0 || transform.pixel_height == 0.0 {
            return Err(EnvmapError::invalid_metadata("pixel size must be non-zero"));
        }

        Ok(Self {
            width,
            height,
            transform,
            data,
            nodata: None,
        })
    }

    /// Declare the value that marks missing data.
    pub fn with_nodata(mut self, nodata: Option<f64>) -> Self {
        self.nodata = nodata;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn transform(&self) -> &GeoTransform {
        &self.transform
    }

    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    /// Value returned for coordinates outside the raster.
    ///
    /// Falls back to 0 when the raster declares no no-data value, the same
    /// fill rasterio uses for boundless reads.
    pub fn fill_value(&self) -> f64 {
        self.nodata.unwrap_or(0.0)
    }

    /// Map extent covered by the raster.
    pub fn bounds(&self) -> BoundingBox {
        let t = &self.transform;
        let x0 = t.origin_x;
        let x1 = t.origin_x + self.width as f64 * t.pixel_width;
        let y0 = t.origin_y;
        let y1 = t.origin_y + self.height as f64 * t.pixel_height;
        BoundingBox::new(x0.min(x1), x0.max(x1), y0.min(y1), y0.max(y1))
    }

    /// Value of the pixel containing (x, y).
    ///
    /// The pixel is found by flooring the inverse transform, so a point on a
    /// shared edge belongs to the pixel to its east / south.
    pub fn value_at(&self, x: f64, y: f64) -> f64 {
        match self.pixel_index(x, y) {
            Some(idx) => self.data[idx],
            None => self.fill_value(),
        }
    }

    fn pixel_index(&self, x: f64, y: f64) -> Option<usize> {
        let (col, row) = self.transform.geo_to_pixel(x, y);
        let (col, row) = (col.floor(), row.floor());
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(row * self.width + col)
    }
}

impl RasterSampler for GeoRaster {
    fn sample(&self, coords: &[MapPoint]) -> Result<Vec<f64>> {
        Ok(coords.iter().map(|p| self.value_at(p.x, p.y)).collect())
    }
}
