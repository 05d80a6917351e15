//! Common types shared across the biomap crates.

pub mod bbox;
pub mod error;
pub mod grid;
pub mod interval;

pub use bbox::BoundingBox;
pub use error::{BiomapError, BiomapResult};
pub use grid::{linspace, GridSpec, Resolution};
pub use interval::{Interval, MapPoint};
