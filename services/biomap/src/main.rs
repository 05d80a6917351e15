//! biomap: plot a bioclim variable over a shapefile boundary.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use biomap::{logging, pipeline, Args, BiomapConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    logging::init(&args.log_level, args.json_logs);

    info!(
        bioclim_tiff = %args.bioclim_tiff.display(),
        shapefile = %args.shapefile.display(),
        resolution = args.resolution,
        location = %args.location_string,
        "Starting biomap"
    );

    let config = BiomapConfig::from_args(&args)?;
    let summary = pipeline::run(&config)?;

    info!(
        sampled = summary.sampled,
        kept = summary.kept,
        "Done"
    );
    Ok(())
}
