//! Tests for corner transformation

use crate::coordinate::bbox::BoundingRectangle;
use crate::coordinate::crs::CoordinateReferenceSystem;
use crate::coordinate::point::Point2D;
use crate::coordinate::transform::{transform, CornerTransformer};
use crate::grid::errors::GridError;

fn crs(identifier: &str) -> CoordinateReferenceSystem {
    CoordinateReferenceSystem::resolve(identifier).unwrap()
}

#[test]
fn test_geographic_to_utm_corners() {
    let transformer = CornerTransformer::new(&crs("EPSG:4326"), &crs("EPSG:26915")).unwrap();
    let rect = BoundingRectangle::new(-91.0, 29.0, -89.0, 31.0).unwrap();

    let (sw, ne) = transformer.transform_corners(&rect).unwrap();

    assert!(sw.x > 650_000.0 && sw.x < 750_000.0, "SW easting {}", sw.x);
    assert!(sw.y > 3_150_000.0 && sw.y < 3_260_000.0, "SW northing {}", sw.y);
    assert!(ne.x > 830_000.0 && ne.x < 930_000.0, "NE easting {}", ne.x);
    assert!(ne.y > 3_380_000.0 && ne.y < 3_480_000.0, "NE northing {}", ne.y);
    assert!(sw.x < ne.x && sw.y < ne.y);
}

#[test]
fn test_axis_order_is_x_then_y() {
    // Longitude goes in first whatever the CRS's own axis order
    let point = transform(Point2D::new(-93.0, 30.0), &crs("EPSG:4326"), &crs("EPSG:26915")).unwrap();

    // On the central meridian of zone 15 the easting is the false easting
    assert!((point.x - 500_000.0).abs() < 0.01, "easting {}", point.x);
    assert!(point.y > 3_300_000.0 && point.y < 3_330_000.0, "northing {}", point.y);
}

#[test]
fn test_web_mercator() {
    let point = transform(Point2D::new(10.0, 0.0), &crs("4326"), &crs("3857")).unwrap();

    assert!((point.x - 1_113_194.907_932_7).abs() < 0.01, "x {}", point.x);
    assert!(point.y.abs() < 0.01, "y {}", point.y);
}

#[test]
fn test_round_trip_through_utm() {
    let geographic = crs("EPSG:4326");
    let utm = crs("EPSG:26915");
    let original = Point2D::new(-89.0, 31.0);

    let projected = transform(original, &geographic, &utm).unwrap();
    let back = transform(projected, &utm, &geographic).unwrap();

    assert!((back.x - original.x).abs() < 1e-6, "lon {}", back.x);
    assert!((back.y - original.y).abs() < 1e-6, "lat {}", back.y);
}

#[test]
fn test_identity_transform_is_exact() {
    let utm = crs("EPSG:26915");
    let transformer = CornerTransformer::new(&utm, &utm).unwrap();
    let point = Point2D::new(694_743.123_456_7, 3_210_987.654_321);

    assert_eq!(transformer.transform(point).unwrap(), point);
    assert_eq!(transformer.source(), transformer.target());
}

#[test]
fn test_missing_grid_shift_is_unsupported() {
    // NAD27 is defined through optional grid files that are not available
    let result = CornerTransformer::new(&crs("EPSG:4326"), &crs("EPSG:4267"))
        .and_then(|transformer| transformer.transform(Point2D::new(-90.0, 30.0)));

    assert!(matches!(result, Err(GridError::TransformationUnsupported { .. })), "{:?}", result);
}
