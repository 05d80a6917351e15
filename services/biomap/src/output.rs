//! Output file naming.

/// Path of the land-mask image for `outfile`.
///
/// Everything from the first `.` is dropped, then everything from the first
/// `_`, and `_land.png` is appended. Directory names containing either
/// character are cut as well: `./out/map.png` becomes `_land.png`.
pub fn land_mask_path(outfile: &str) -> String {
    let stem = outfile.split('.').next().unwrap_or_default();
    let stem = stem.split('_').next().unwrap_or_default();
    format!("{}_land.png", stem)
}
