//! Render configuration.
//!
//! A style file is optional YAML; every field falls back to its default:
//!
//! ```yaml
//! width: 2000
//! height: 2000
//! marker_size: 10      # omit for automatic sizing
//! colormap: gray       # gray | viridis
//! background: "#FFFFFF"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};
use crate::gradient::{Color, Colormap};

/// Default image edge in pixels: a 20 inch figure at 100 dpi.
pub const DEFAULT_IMAGE_SIZE: u32 = 2000;

/// Everything the scatter renderer needs besides the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Square marker edge in pixels; `None` sizes markers so cells tile.
    pub marker_size: Option<u32>,
    pub colormap: Colormap,
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_IMAGE_SIZE,
            height: DEFAULT_IMAGE_SIZE,
            marker_size: None,
            colormap: Colormap::Gray,
            background: Color::WHITE,
        }
    }
}

impl RenderConfig {
    /// Parse a YAML style document.
    pub fn from_yaml(yaml: &str) -> RenderResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML style file.
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RenderError::Style(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Apply command-line overrides on top of the file or default values.
    pub fn with_overrides(
        mut self,
        width: Option<u32>,
        height: Option<u32>,
        marker_size: Option<u32>,
    ) -> Self {
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }
        if marker_size.is_some() {
            self.marker_size = marker_size;
        }
        self
    }

    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.marker_size == Some(0) {
            return Err(RenderError::Style("marker_size must be at least 1".into()));
        }
        Ok(())
    }
}
