//! Run configuration resolved from command-line arguments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use biomap_common::{BoundingBox, Resolution};
use renderer::RenderConfig;

use crate::cli::Args;
use crate::output::land_mask_path;

/// Everything a run needs, validated.
#[derive(Debug, Clone)]
pub struct BiomapConfig {
    pub bioclim_tiff: PathBuf,
    pub shapefile: PathBuf,
    pub resolution: Resolution,
    pub bbox: BoundingBox,
    pub outfile: PathBuf,
    pub land_outfile: PathBuf,
    pub render: RenderConfig,
}

impl BiomapConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let bbox = BoundingBox::from_location_string(&args.location_string)
            .with_context(|| format!("Invalid location string '{}'", args.location_string))?;

        let resolution = Resolution::square(args.resolution)
            .with_context(|| format!("Invalid resolution {}", args.resolution))?;

        let render = match &args.style {
            Some(path) => RenderConfig::from_file(path)
                .with_context(|| format!("Failed to load style from {}", path.display()))?,
            None => RenderConfig::default(),
        }
        .with_overrides(args.width, args.height, args.marker_size);
        render.validate().context("Invalid render settings")?;

        Ok(Self {
            bioclim_tiff: args.bioclim_tiff.clone(),
            shapefile: args.shapefile.clone(),
            resolution,
            bbox,
            outfile: PathBuf::from(&args.outfile),
            land_outfile: PathBuf::from(land_mask_path(&args.outfile)),
            render,
        })
    }
}
