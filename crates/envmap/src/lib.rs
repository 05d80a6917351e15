//! Environment map construction.
//!
//! Builds a regular lat/lon grid over a bounding box, samples an environmental
//! raster at every grid point and clips the result to a boundary geometry.
//!
//! The raster and the boundary are capabilities ([`RasterSampler`] and
//! [`BoundaryClipper`]) so the grid logic can run against in-memory fakes.
//! [`GeoRaster`] (GeoTIFF) and [`BoundaryShape`] (shapefile) are the file-backed
//! implementations used by the CLI.

pub mod boundary;
pub mod builder;
pub mod error;
pub mod geotiff;
pub mod raster;
pub mod shp;
pub mod types;

pub use boundary::{BoundaryClipper, BoundaryShape};
pub use builder::make_environment_map;
pub use error::{EnvmapError, Result};
pub use raster::{GeoRaster, GeoTransform, RasterSampler};
pub use types::{EnvironmentGrid, GeoSample, SampleRecord};
