//! Command-line arguments.

use std::path::PathBuf;

use biomap_common::bbox::DEFAULT_LOCATION;
use clap::Parser;

/// Plot a bioclim variable onto a shapefile
#[derive(Parser, Debug, Clone)]
#[command(name = "biomap")]
#[command(about = "Plot a bioclim variable onto a shapefile boundary")]
pub struct Args {
    /// GeoTIFF file with the desired bioclim variable
    #[arg(long, alias = "bioclim_tiff", env = "BIOMAP_BIOCLIM_TIFF")]
    pub bioclim_tiff: PathBuf,

    /// Shapefile of the region to plot; should fall within the location string
    #[arg(long, env = "BIOMAP_SHAPEFILE")]
    pub shapefile: PathBuf,

    /// Points per axis: 200 gives a 200 x 200 grid over the area
    #[arg(short, long, default_value_t = 200, env = "BIOMAP_RESOLUTION")]
    pub resolution: usize,

    /// Area to map as "minLon,maxLon,minLat,maxLat"
    #[arg(
        short,
        long,
        alias = "location_string",
        default_value = DEFAULT_LOCATION,
        env = "BIOMAP_LOCATION",
        allow_hyphen_values = true
    )]
    pub location_string: String,

    /// Output image; the land mask is written next to it
    #[arg(long, env = "BIOMAP_OUTFILE")]
    pub outfile: String,

    /// YAML render style
    #[arg(long, env = "BIOMAP_STYLE")]
    pub style: Option<PathBuf>,

    /// Image width in pixels (overrides the style)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels (overrides the style)
    #[arg(long)]
    pub height: Option<u32>,

    /// Marker edge in pixels (overrides the style)
    #[arg(long)]
    pub marker_size: Option<u32>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Emit JSON logs
    #[arg(long)]
    pub json_logs: bool,
}
