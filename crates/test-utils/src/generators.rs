//! Synthetic raster value generators.
//!
//! These produce predictable, verifiable grids for in-memory rasters, so a
//! sampled value tells you exactly which pixel was read.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// # Returns
///
/// A `Vec<f64>` in row-major order (row 0 first, then row 1, etc.)
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50);
/// assert_eq!(grid[0], 0.0);    // col=0, row=0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0
/// assert_eq!(grid[10], 1.0);   // col=0, row=1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f64);
        }
    }
    data
}

/// Creates a grid where every cell holds `value`.
pub fn create_constant_grid(width: usize, height: usize, value: f64) -> Vec<f64> {
    vec![value; width * height]
}

/// Replaces every cell in column `col` with `nodata`, simulating an ocean
/// strip in a bioclim layer.
pub fn with_nodata_column(mut data: Vec<f64>, width: usize, col: usize, nodata: f64) -> Vec<f64> {
    for cell in data.iter_mut().skip(col).step_by(width.max(1)) {
        *cell = nodata;
    }
    data
}
