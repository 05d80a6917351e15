//! Coordinate transformations between map and image space.
//!
//! Implements the linear interval mapping from scratch without external
//! projection libraries. Inputs are assumed to share a geographic CRS.

pub mod linear;

pub use linear::{map_to_scale, rescale, scaled_location, Extent};
