//! Image rendering for sampled environment grids.
//!
//! Implements:
//! - Scatter rasterization with square markers
//! - Gray and viridis colormaps
//! - Indexed/RGBA PNG encoding
//! - YAML render configuration

pub mod canvas;
pub mod error;
pub mod gradient;
pub mod png;
pub mod scatter;
pub mod style;

pub use canvas::RgbaImage;
pub use error::{RenderError, RenderResult};
pub use gradient::{Color, Colormap};
pub use png::{encode_png, write_png};
pub use scatter::{render_scatter, Fill};
pub use style::RenderConfig;
