//! Bioclim map plotting.
//!
//! Samples a bioclim GeoTIFF over a lat/lon grid, clips the samples to a
//! shapefile boundary and writes two images: the variable in grayscale and a
//! flat land mask of the clipped area.

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod pipeline;

pub use cli::Args;
pub use config::BiomapConfig;
pub use output::land_mask_path;
pub use pipeline::{run, RunSummary};
