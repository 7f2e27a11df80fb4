//! Tests for bounding rectangles and extent reduction

use geo::{line_string, point, polygon, Geometry, GeometryCollection, LineString, Polygon};

use crate::coordinate::bbox::BoundingRectangle;
use crate::coordinate::extent::extent;
use crate::coordinate::point::Point2D;
use crate::grid::errors::GridError;

#[test]
fn test_polygon_extent() {
    let square = polygon![
        (x: -91.0, y: 29.0),
        (x: -89.0, y: 29.0),
        (x: -89.0, y: 31.0),
        (x: -91.0, y: 31.0),
    ];

    let bounds = extent(&GeometryCollection(vec![Geometry::Polygon(square)])).unwrap();

    assert_eq!(bounds, BoundingRectangle::new(-91.0, 29.0, -89.0, 31.0).unwrap());
    assert_eq!(bounds.south_west(), Point2D::new(-91.0, 29.0));
    assert_eq!(bounds.north_east(), Point2D::new(-89.0, 31.0));
}

#[test]
fn test_extent_covers_all_geometries() {
    let geometries = GeometryCollection(vec![
        Geometry::Point(point!(x: 5.0, y: -2.0)),
        Geometry::LineString(line_string![(x: -1.0, y: 0.0), (x: 2.0, y: 8.0)]),
        Geometry::Polygon(polygon![(x: 0.0, y: 0.0), (x: 3.0, y: 0.0), (x: 3.0, y: 3.0)]),
    ]);

    let bounds = extent(&geometries).unwrap();

    assert_eq!(bounds.min_x(), -1.0);
    assert_eq!(bounds.min_y(), -2.0);
    assert_eq!(bounds.max_x(), 5.0);
    assert_eq!(bounds.max_y(), 8.0);
}

#[test]
fn test_single_point_extent_is_degenerate() {
    let bounds = extent(&GeometryCollection(vec![Geometry::Point(point!(x: 1.5, y: 2.5))])).unwrap();

    assert_eq!(bounds.width(), 0.0);
    assert_eq!(bounds.height(), 0.0);
    assert_eq!(bounds.south_west(), bounds.north_east());
}

#[test]
fn test_empty_collection_is_rejected() {
    let result = extent(&GeometryCollection(Vec::new()));
    assert!(matches!(result, Err(GridError::EmptyInput(_))));
}

#[test]
fn test_geometries_without_vertices_are_rejected() {
    let empty = GeometryCollection(vec![
        Geometry::Polygon(Polygon::new(LineString::new(Vec::new()), Vec::new())),
        Geometry::LineString(LineString::new(Vec::new())),
    ]);

    assert!(matches!(extent(&empty), Err(GridError::EmptyInput(_))));
}

#[test]
fn test_rectangle_invariants() {
    assert!(matches!(BoundingRectangle::new(1.0, 0.0, 0.0, 1.0), Err(GridError::InvalidInput(_))));
    assert!(matches!(BoundingRectangle::new(0.0, 1.0, 1.0, 0.0), Err(GridError::InvalidInput(_))));
    assert!(matches!(BoundingRectangle::new(f64::NAN, 0.0, 1.0, 1.0), Err(GridError::InvalidInput(_))));
    assert!(BoundingRectangle::new(0.0, 0.0, 0.0, 0.0).is_ok());
}

#[test]
fn test_rectangle_from_string() {
    let rect = BoundingRectangle::from_string("-91, 29, -89, 31").unwrap();

    assert_eq!(rect.width(), 2.0);
    assert_eq!(rect.height(), 2.0);
    assert_eq!(rect.center(), Point2D::new(-90.0, 30.0));
    assert!(rect.contains(&Point2D::new(-89.0, 31.0)));
    assert!(!rect.contains(&Point2D::new(-88.9, 30.0)));

    assert!(matches!(BoundingRectangle::from_string("1,2,3"), Err(GridError::InvalidInput(_))));
    assert!(matches!(BoundingRectangle::from_string("1,2,x,4"), Err(GridError::InvalidInput(_))));
}
