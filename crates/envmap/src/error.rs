//! Error types for environment map construction.

use thiserror::Error;

/// Errors that can occur while loading inputs or sampling the grid.
#[derive(Error, Debug)]
pub enum EnvmapError {
    /// Failed to open an input file.
    #[error("failed to open {path}: {message}")]
    OpenFailed { path: String, message: String },

    /// Failed to read data from an input file.
    #[error("failed to read data: {0}")]
    ReadFailed(String),

    /// Georeferencing or geometry metadata is missing or unusable.
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),

    /// The raster uses a pixel format we cannot decode.
    #[error("unsupported data type: {0}")]
    UnsupportedDataType(String),

    /// A sampler returned a different number of values than it was asked for.
    #[error("raster returned {returned} values for {requested} coordinates")]
    SampleCountMismatch { requested: usize, returned: usize },

    /// Error reported by the shapefile reader.
    #[error("shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),
}

impl EnvmapError {
    /// Create an OpenFailed error.
    pub fn open_failed(path: impl AsRef<std::path::Path>, msg: impl ToString) -> Self {
        Self::OpenFailed {
            path: path.as_ref().display().to_string(),
            message: msg.to_string(),
        }
    }

    /// Create a ReadFailed error.
    pub fn read_failed(msg: impl Into<String>) -> Self {
        Self::ReadFailed(msg.into())
    }

    /// Create an InvalidMetadata error.
    pub fn invalid_metadata(msg: impl Into<String>) -> Self {
        Self::InvalidMetadata(msg.into())
    }
}

impl From<std::io::Error> for EnvmapError {
    fn from(err: std::io::Error) -> Self {
        Self::ReadFailed(err.to_string())
    }
}

impl From<tiff::TiffError> for EnvmapError {
    fn from(err: tiff::TiffError) -> Self {
        Self::ReadFailed(format!("TIFF decode error: {}", err))
    }
}

/// Result type for environment map operations.
pub type Result<T> = std::result::Result<T, EnvmapError>;
