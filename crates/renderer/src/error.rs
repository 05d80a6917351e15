//! Error types for rendering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid render style: {0}")]
    Style(String),
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Style(err.to_string())
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
