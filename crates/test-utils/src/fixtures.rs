//! Common test fixtures for biomap tests.
//!
//! Boundary polygons are small, hand-checkable shapes; bounding boxes are
//! given in the command-line order `(min_lon, max_lon, min_lat, max_lat)`.

use geo::{LineString, MultiPolygon, Polygon};

/// Common bounding box definitions for testing.
pub mod bbox {
    /// Mainland Australia
    pub const AUSTRALIA: (f64, f64, f64, f64) = (110.0, 155.0, -45.0, -10.0);

    /// Tasmania only
    pub const TASMANIA: (f64, f64, f64, f64) = (144.0, 149.0, -44.0, -40.0);

    /// Open ocean west of Australia
    pub const INDIAN_OCEAN: (f64, f64, f64, f64) = (60.0, 80.0, -40.0, -20.0);

    /// Simple symmetric test box
    pub const UNIT_10: (f64, f64, f64, f64) = (-10.0, 10.0, -10.0, 10.0);
}

/// Axis-aligned rectangle as a closed polygon.
pub fn rectangle(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![
            (min_x, min_y),
            (max_x, min_y),
            (max_x, max_y),
            (min_x, max_y),
            (min_x, min_y),
        ]),
        vec![],
    )
}

/// Rectangle with a rectangular hole.
pub fn rectangle_with_hole(
    outer: (f64, f64, f64, f64),
    hole: (f64, f64, f64, f64),
) -> Polygon<f64> {
    let (hx0, hy0, hx1, hy1) = hole;
    let mut polygon = rectangle(outer.0, outer.1, outer.2, outer.3);
    polygon.interiors_push(LineString::from(vec![
        (hx0, hy0),
        (hx0, hy1),
        (hx1, hy1),
        (hx1, hy0),
        (hx0, hy0),
    ]));
    polygon
}

/// Coarse outline of mainland Australia plus Tasmania.
///
/// Far too rough for real maps; good enough that inland points fall inside
/// and open-ocean points fall outside.
pub fn australia_outline() -> MultiPolygon<f64> {
    let mainland = Polygon::new(
        LineString::from(vec![
            (114.0, -22.0),
            (122.0, -18.0),
            (130.0, -12.0),
            (136.0, -12.0),
            (142.0, -11.0),
            (146.0, -19.0),
            (153.0, -25.0),
            (150.0, -37.0),
            (141.0, -38.0),
            (135.0, -35.0),
            (129.0, -32.0),
            (118.0, -35.0),
            (115.0, -34.0),
            (114.0, -22.0),
        ]),
        vec![],
    );
    let tasmania = rectangle(144.5, -43.5, 148.3, -40.7);
    MultiPolygon::new(vec![mainland, tasmania])
}
