//! Tests for BoundingBox parsing and queries.

use biomap_common::bbox::{BoundingBox, DEFAULT_LOCATION};
use biomap_common::BiomapError;
use test_utils::assert_approx_eq;

// ============================================================================
// from_location_string tests
// ============================================================================

#[test]
fn test_parse_location_integer() {
    let bbox = BoundingBox::from_location_string("110,155,-45,-10").unwrap();
    assert_eq!(bbox.min_lon, 110.0);
    assert_eq!(bbox.max_lon, 155.0);
    assert_eq!(bbox.min_lat, -45.0);
    assert_eq!(bbox.max_lat, -10.0);
}

#[test]
fn test_parse_location_floating() {
    let bbox = BoundingBox::from_location_string("-125.5,-66.25,24.75,50.125").unwrap();
    assert_approx_eq!(bbox.min_lon, -125.5, 1e-9);
    assert_approx_eq!(bbox.max_lon, -66.25, 1e-9);
    assert_approx_eq!(bbox.min_lat, 24.75, 1e-9);
    assert_approx_eq!(bbox.max_lat, 50.125, 1e-9);
}

#[test]
fn test_parse_location_whitespace() {
    let bbox = BoundingBox::from_location_string(" 110, 155 ,-45 , -10 ").unwrap();
    assert_eq!(bbox, BoundingBox::default());
}

#[test]
fn test_parse_location_via_from_str() {
    let bbox: BoundingBox = DEFAULT_LOCATION.parse().unwrap();
    assert_eq!(bbox, BoundingBox::default());
}

#[test]
fn test_parse_location_too_few() {
    let result = BoundingBox::from_location_string("110,155,-45");
    assert!(matches!(result, Err(BiomapError::InvalidBbox(_))));
}

#[test]
fn test_parse_location_too_many() {
    let result = BoundingBox::from_location_string("110,155,-45,-10,0");
    assert!(matches!(result, Err(BiomapError::InvalidBbox(_))));
}

#[test]
fn test_parse_location_empty_string() {
    let result = BoundingBox::from_location_string("");
    assert!(matches!(result, Err(BiomapError::InvalidBbox(_))));
}

#[test]
fn test_parse_location_non_numeric() {
    let result = BoundingBox::from_location_string("110,east,-45,-10");
    match result {
        Err(BiomapError::InvalidNumber(part)) => assert_eq!(part, "east"),
        other => panic!("expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn test_parse_location_missing_minus_separator() {
    // "-45-10" is a typo for "-45,-10"; it must not silently parse
    let result = BoundingBox::from_location_string("110,155,-45-10");
    assert!(result.is_err());
}

#[test]
fn test_parse_location_degenerate_axis() {
    let result = BoundingBox::from_location_string("110,110,-45,-10");
    assert!(matches!(
        result,
        Err(BiomapError::DegenerateRange { axis: "longitude", .. })
    ));

    let result = BoundingBox::from_location_string("110,155,-10,-10");
    assert!(matches!(
        result,
        Err(BiomapError::DegenerateRange { axis: "latitude", .. })
    ));
}

#[test]
fn test_parse_location_reversed_is_kept() {
    let bbox = BoundingBox::from_location_string("155,110,-10,-45").unwrap();
    assert_eq!(bbox.width(), -45.0);
    assert_eq!(bbox.height(), -35.0);
}

// ============================================================================
// Query tests
// ============================================================================

#[test]
fn test_contains_point_inclusive() {
    let bbox = BoundingBox::default();
    assert!(bbox.contains_point(147.0, -19.0));
    assert!(bbox.contains_point(110.0, -45.0));
    assert!(bbox.contains_point(155.0, -10.0));
    assert!(!bbox.contains_point(109.9, -19.0));
    assert!(!bbox.contains_point(147.0, -9.9));
}

#[test]
fn test_contains_point_reversed_box() {
    let bbox = BoundingBox::new(155.0, 110.0, -10.0, -45.0);
    assert!(bbox.contains_point(147.0, -19.0));
}

#[test]
fn test_bbox_copy_eq() {
    let a = BoundingBox::new(0.0, 10.0, 0.0, 10.0);
    let b = a;
    assert_eq!(a, b);
}
