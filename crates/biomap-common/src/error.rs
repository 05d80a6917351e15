//! Error types for biomap input handling.

use thiserror::Error;

/// Result type alias using BiomapError.
pub type BiomapResult<T> = Result<T, BiomapError>;

/// Errors raised while interpreting user-supplied coordinates and grid sizes.
#[derive(Debug, Error)]
pub enum BiomapError {
    #[error("Invalid location string: {0}. Expected 'minLon,maxLon,minLat,maxLat'")]
    InvalidBbox(String),

    #[error("Invalid number in location string: {0}")]
    InvalidNumber(String),

    #[error("Degenerate {axis} range: both ends are {value}")]
    DegenerateRange { axis: &'static str, value: f64 },

    #[error("Invalid resolution {nx}x{ny}: each axis needs at least one point and the total must fit in usize")]
    InvalidResolution { nx: usize, ny: usize },
}
