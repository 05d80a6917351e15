//! GeoTIFF loading tests.
//!
//! Small georeferenced files are written with the `tiff` encoder into a
//! temporary directory and read back through `GeoRaster::from_geotiff`.

use std::fs::File;
use std::path::{Path, PathBuf};

use biomap_common::MapPoint;
use envmap::{EnvmapError, GeoRaster, GeoTransform, RasterSampler};
use test_utils::{assert_approx_eq, create_test_grid, require_test_file, with_nodata_column};
use tiff::encoder::colortype::{Gray16, Gray32Float};
use tiff::encoder::TiffEncoder;
use tiff::tags::Tag;

fn write_f32_geotiff(
    path: &Path,
    width: u32,
    height: u32,
    gt: GeoTransform,
    data: &[f64],
    nodata: Option<&str>,
) {
    let file = File::create(path).unwrap();
    let mut encoder = TiffEncoder::new(file).unwrap();
    let mut image = encoder.new_image::<Gray32Float>(width, height).unwrap();

    let scale = [gt.pixel_width, gt.pixel_height.abs(), 0.0];
    let tiepoint = [0.0, 0.0, 0.0, gt.origin_x, gt.origin_y, 0.0];
    image
        .encoder()
        .write_tag(Tag::from_u16_exhaustive(33550), &scale[..])
        .unwrap();
    image
        .encoder()
        .write_tag(Tag::from_u16_exhaustive(33922), &tiepoint[..])
        .unwrap();
    if let Some(nodata) = nodata {
        image
            .encoder()
            .write_tag(Tag::from_u16_exhaustive(42113), nodata)
            .unwrap();
    }

    let pixels: Vec<f32> = data.iter().map(|&v| v as f32).collect();
    image.write_data(&pixels).unwrap();
}

fn temp_tif(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_reads_dimensions_and_transform() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_tif(&dir, "grid.tif");
    let gt = GeoTransform::new(110.0, -10.0, 0.5, -0.5);
    write_f32_geotiff(&path, 8, 6, gt, &create_test_grid(8, 6), None);

    let raster = GeoRaster::from_geotiff(&path).unwrap();
    assert_eq!(raster.width(), 8);
    assert_eq!(raster.height(), 6);
    assert_eq!(*raster.transform(), gt);
    assert_eq!(raster.nodata(), None);

    let b = raster.bounds();
    assert_eq!((b.min_lon, b.max_lon, b.min_lat, b.max_lat), (110.0, 114.0, -13.0, -10.0));
}

#[test]
fn test_samples_expected_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_tif(&dir, "grid.tif");
    write_f32_geotiff(
        &path,
        8,
        6,
        GeoTransform::new(110.0, -10.0, 0.5, -0.5),
        &create_test_grid(8, 6),
        None,
    );
    let raster = GeoRaster::from_geotiff(&path).unwrap();

    let coords = [
        MapPoint::new(110.25, -10.25), // col 0, row 0
        MapPoint::new(113.75, -10.25), // col 7, row 0
        MapPoint::new(111.1, -12.9),   // col 2, row 5
    ];
    let values = raster.sample(&coords).unwrap();
    assert_eq!(values, vec![0.0, 7000.0, 2005.0]);
}

#[test]
fn test_out_of_coverage_returns_zero_without_nodata() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_tif(&dir, "grid.tif");
    write_f32_geotiff(
        &path,
        4,
        4,
        GeoTransform::new(0.0, 4.0, 1.0, -1.0),
        &vec![5.0; 16],
        None,
    );
    let raster = GeoRaster::from_geotiff(&path).unwrap();

    let values = raster
        .sample(&[MapPoint::new(-1.0, 2.0), MapPoint::new(2.0, 2.0)])
        .unwrap();
    assert_eq!(values, vec![0.0, 5.0]);
}

#[test]
fn test_declared_nodata_is_used_outside_and_inside() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_tif(&dir, "ocean.tif");
    let data = with_nodata_column(vec![12.5; 16], 4, 0, -3.4e38);
    write_f32_geotiff(
        &path,
        4,
        4,
        GeoTransform::new(0.0, 4.0, 1.0, -1.0),
        &data,
        Some("-3.4e+38"),
    );
    let raster = GeoRaster::from_geotiff(&path).unwrap();
    let nodata = raster.nodata().unwrap();

    let values = raster
        .sample(&[
            MapPoint::new(0.5, 0.5),  // ocean column
            MapPoint::new(9.0, 9.0),  // outside
            MapPoint::new(2.5, 0.5),  // land
        ])
        .unwrap();
    assert_eq!(values[0], nodata);
    assert_eq!(values[1], nodata);
    assert_eq!(values[2], 12.5);
}

#[test]
fn test_integer_pixels_are_widened() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_tif(&dir, "u16.tif");
    {
        let file = File::create(&path).unwrap();
        let mut encoder = TiffEncoder::new(file).unwrap();
        let mut image = encoder.new_image::<Gray16>(2, 2).unwrap();
        image
            .encoder()
            .write_tag(Tag::from_u16_exhaustive(33550), &[1.0f64, 1.0, 0.0][..])
            .unwrap();
        image
            .encoder()
            .write_tag(
                Tag::from_u16_exhaustive(33922),
                &[0.0f64, 0.0, 0.0, 0.0, 2.0, 0.0][..],
            )
            .unwrap();
        image.write_data(&[1u16, 2, 3, 400]).unwrap();
    }

    let raster = GeoRaster::from_geotiff(&path).unwrap();
    assert_eq!(raster.value_at(1.5, 0.5), 400.0);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_file_names_path() {
    let err = GeoRaster::from_geotiff("/definitely/not/here.tif").unwrap_err();
    match err {
        EnvmapError::OpenFailed { path, .. } => assert!(path.contains("here.tif")),
        other => panic!("expected OpenFailed, got {:?}", other),
    }
}

#[test]
fn test_not_a_tiff() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_tif(&dir, "junk.tif");
    std::fs::write(&path, b"this is not a tiff").unwrap();
    assert!(GeoRaster::from_geotiff(&path).is_err());
}

#[test]
fn test_missing_georeferencing() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_tif(&dir, "plain.tif");
    {
        let file = File::create(&path).unwrap();
        let mut encoder = TiffEncoder::new(file).unwrap();
        encoder
            .write_image::<Gray32Float>(2, 2, &[0.0f32, 1.0, 2.0, 3.0])
            .unwrap();
    }

    let err = GeoRaster::from_geotiff(&path).unwrap_err();
    assert!(matches!(err, EnvmapError::InvalidMetadata(_)));
}

// ============================================================================
// Real data
// ============================================================================

#[test]
fn test_real_bioclim_annual_mean_temperature() {
    let path = require_test_file!("wc2.1_10m_bio_1.tif");
    let raster = GeoRaster::from_geotiff(&path).unwrap();

    // Alice Springs is warm all year round.
    let values = raster.sample(&[MapPoint::new(133.88, -23.70)]).unwrap();
    assert_approx_eq!(values[0], 21.0, 3.0);
}
