//! Tests for map/image coordinate rescaling.

use biomap_common::{BoundingBox, Interval, MapPoint};
use projection::{map_to_scale, rescale, scaled_location, Extent};
use test_utils::{assert_approx_eq, assert_coords_approx_eq};

const MAP_DIMS: (f64, f64, f64, f64) = (110.0, 155.0, -45.0, -10.0);
const IMAGE_DIMS: (f64, f64, f64, f64) = (0.0, 1999.0, 0.0, 1999.0);

// ============================================================================
// map_to_scale
// ============================================================================

#[test]
fn test_map_to_scale_reference_value() {
    // 147 sits 37/45 of the way from 110 to 155
    let b = map_to_scale(0.0, 1999.0, 110.0, 147.0, 155.0);
    assert_approx_eq!(b, 1999.0 * 37.0 / 45.0, 1e-9);
    assert_approx_eq!(b, 1643.6222, 1e-3);
}

#[test]
fn test_map_to_scale_descending_target() {
    // Latitude (ascending) onto image rows (descending)
    let row = map_to_scale(1999.0, 0.0, -45.0, -10.0, -10.0);
    assert_approx_eq!(row, 0.0, 1e-12);
    let row = map_to_scale(1999.0, 0.0, -45.0, -45.0, -10.0);
    assert_approx_eq!(row, 1999.0, 1e-12);
}

#[test]
fn test_map_to_scale_descending_source() {
    let up = map_to_scale(0.0, 100.0, 0.0, 30.0, 60.0);
    let down = map_to_scale(100.0, 0.0, 60.0, 30.0, 0.0);
    assert_approx_eq!(up, 50.0, 1e-12);
    assert_approx_eq!(down, 50.0, 1e-12);
}

#[test]
fn test_map_to_scale_extrapolates() {
    // Points outside the source interval land outside the target interval
    let b = map_to_scale(0.0, 10.0, 0.0, 20.0, 10.0);
    assert_approx_eq!(b, 20.0, 1e-12);
}

// ============================================================================
// scaled_location
// ============================================================================

#[test]
fn test_scaled_location_exact_round_trip() {
    let location = MapPoint::new(147.0, -19.0);
    let map_dims = Extent::from(MAP_DIMS);
    let image_dims = Extent::from(IMAGE_DIMS);

    let to_image = scaled_location(location, &map_dims, &image_dims);
    let to_map = scaled_location(to_image, &image_dims, &map_dims);

    assert_eq!(location, to_map);
}

#[test]
fn test_scaled_location_axes_independent() {
    let map_dims = Extent::from(MAP_DIMS);
    let image_dims = Extent::from(IMAGE_DIMS);

    let a = scaled_location(MapPoint::new(147.0, -19.0), &map_dims, &image_dims);
    let b = scaled_location(MapPoint::new(147.0, -40.0), &map_dims, &image_dims);
    assert_eq!(a.x, b.x);
    assert!(a.y != b.y);
}

#[test]
fn test_scaled_location_corners() {
    let bbox = BoundingBox::default();
    let map = Extent::from_bbox(&bbox);
    let image = Extent::image(2000, 1000);

    let nw = scaled_location(MapPoint::new(110.0, -10.0), &map, &image);
    assert_coords_approx_eq!((nw.x, nw.y), (0.0, 0.0), 1e-9);

    let se = scaled_location(MapPoint::new(155.0, -45.0), &map, &image);
    assert_coords_approx_eq!((se.x, se.y), (1999.0, 999.0), 1e-9);
}

#[test]
fn test_round_trip_law_over_grid() {
    let frames = [
        (Extent::from(MAP_DIMS), Extent::from(IMAGE_DIMS)),
        (Extent::from(MAP_DIMS), Extent::image(640, 480)),
        (
            Extent::from_bounds(-180.0, 180.0, -90.0, 90.0),
            Extent::from_bounds(1.0, -1.0, 3.5, 7.25),
        ),
        (
            Extent::new(Interval::new(10.0, -10.0), Interval::new(0.001, 0.002)),
            Extent::from_bounds(0.0, 255.0, 255.0, 0.0),
        ),
    ];

    for (a, b) in frames.iter() {
        for i in 0..=10 {
            for j in 0..=10 {
                let p = MapPoint::new(
                    rescale(i as f64, Interval::new(0.0, 10.0), a.x),
                    rescale(j as f64, Interval::new(0.0, 10.0), a.y),
                );
                let there = scaled_location(p, a, b);
                let back = scaled_location(there, b, a);

                let tol_x = 1e-9 * a.x.span().abs().max(1.0);
                let tol_y = 1e-9 * a.y.span().abs().max(1.0);
                assert_approx_eq!(back.x, p.x, tol_x);
                assert_approx_eq!(back.y, p.y, tol_y);
            }
        }
    }
}

#[test]
fn test_degenerate_extent_produces_non_finite() {
    let degenerate = Extent::from_bounds(5.0, 5.0, 0.0, 1.0);
    let image = Extent::from(IMAGE_DIMS);
    let p = scaled_location(MapPoint::new(5.0, 0.5), &degenerate, &image);
    assert!(!p.x.is_finite());
    assert!(p.y.is_finite());
}
