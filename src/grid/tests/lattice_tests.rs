//! Tests for the lattice generator

extern crate std;

use crate::coordinate::Point2D;
use crate::grid::lattice::{expected_len, generate, LatticeIter};
use crate::grid::spacing::GridSpacing;

fn spacing(value: i64) -> GridSpacing {
    GridSpacing::new(value).unwrap()
}

#[test]
fn test_first_point_is_south_west_corner() {
    let sw = Point2D::new(694_743.123_456_7, 3_210_987.654_321);
    let ne = Point2D::new(883_412.0, 3_434_001.0);

    let lattice = generate(sw, ne, spacing(100_000));

    let first = lattice.first().unwrap();
    std::assert_eq!(first.x.to_bits(), sw.x.to_bits());
    std::assert_eq!(first.y.to_bits(), sw.y.to_bits());
}

#[test]
fn test_point_count_for_exact_multiple() {
    let lattice = generate(Point2D::new(0.0, 0.0), Point2D::new(1000.0, 250.0), spacing(100));

    // 10 columns (0..900) by 3 rows (0, 100, 200)
    std::assert_eq!(lattice.len(), 30);
    std::assert_eq!(expected_len(Point2D::new(0.0, 0.0), Point2D::new(1000.0, 250.0), spacing(100)), 30);
}

#[test]
fn test_point_count_for_partial_cells() {
    let sw = Point2D::new(0.5, 0.5);
    let ne = Point2D::new(1000.5, 1000.2);

    let lattice = generate(sw, ne, spacing(250));

    std::assert_eq!(lattice.len(), 16);
    std::assert_eq!(lattice.len(), expected_len(sw, ne, spacing(250)));
}

#[test]
fn test_north_and_east_edges_are_excluded() {
    let lattice = generate(Point2D::new(0.0, 0.0), Point2D::new(300.0, 300.0), spacing(100));

    std::assert_eq!(lattice.len(), 9);
    std::assert!(lattice.iter().all(|p| p.x < 300.0 && p.y < 300.0));
    std::assert_eq!(lattice.points().last(), Some(&Point2D::new(200.0, 200.0)));
}

#[test]
fn test_points_stay_inside_half_open_extent() {
    let sw = Point2D::new(-1234.5, 987.25);
    let ne = Point2D::new(8765.5, 5000.75);

    let lattice = generate(sw, ne, spacing(333));

    std::assert!(!lattice.is_empty());
    for p in &lattice {
        std::assert!(p.x >= sw.x && p.x < ne.x, "x out of range: {}", p.x);
        std::assert!(p.y >= sw.y && p.y < ne.y, "y out of range: {}", p.y);
    }
}

#[test]
fn test_column_major_order() {
    let lattice = generate(Point2D::new(0.0, 0.0), Point2D::new(200.0, 300.0), spacing(100));

    let expected = vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(0.0, 100.0),
        Point2D::new(0.0, 200.0),
        Point2D::new(100.0, 0.0),
        Point2D::new(100.0, 100.0),
        Point2D::new(100.0, 200.0),
    ];
    std::assert_eq!(lattice.points(), expected.as_slice());
}

#[test]
fn test_equal_corners_yield_no_points() {
    let corner = Point2D::new(500_000.0, 3_300_000.0);

    let lattice = generate(corner, corner, spacing(500));

    std::assert!(lattice.is_empty());
    std::assert_eq!(expected_len(corner, corner, spacing(500)), 0);
}

#[test]
fn test_inverted_or_flat_extents_yield_no_points() {
    let flipped_x = generate(Point2D::new(10.0, 0.0), Point2D::new(0.0, 10.0), spacing(1));
    let flipped_y = generate(Point2D::new(0.0, 10.0), Point2D::new(10.0, 0.0), spacing(1));
    let flat = generate(Point2D::new(0.0, 5.0), Point2D::new(10.0, 5.0), spacing(1));

    std::assert!(flipped_x.is_empty());
    std::assert!(flipped_y.is_empty());
    std::assert!(flat.is_empty());
}

#[test]
fn test_spacing_larger_than_extent_yields_single_point() {
    let sw = Point2D::new(12.0, 34.0);

    let lattice = generate(sw, Point2D::new(13.0, 35.0), spacing(1_000_000));

    std::assert_eq!(lattice.points(), &[sw]);
}

#[test]
fn test_generation_is_bit_identical_across_calls() {
    let sw = Point2D::new(694_743.1, 3_210_987.3);
    let ne = Point2D::new(883_412.7, 3_434_001.9);

    let first = generate(sw, ne, spacing(7_919));
    let second = generate(sw, ne, spacing(7_919));

    std::assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        std::assert_eq!(a.x.to_bits(), b.x.to_bits());
        std::assert_eq!(a.y.to_bits(), b.y.to_bits());
    }
}

#[test]
fn test_iterator_matches_generate() {
    let sw = Point2D::new(-50.0, -75.0);
    let ne = Point2D::new(1000.0, 640.0);

    let collected: Vec<Point2D> = LatticeIter::new(sw, ne, spacing(90)).collect();

    std::assert_eq!(collected, generate(sw, ne, spacing(90)).into_points());
}

#[test]
fn test_steps_accumulate_by_addition() {
    // x must follow the additive sequence, not sw.x + i * spacing
    let sw = Point2D::new(0.1, 0.1);
    let lattice = generate(sw, Point2D::new(10.0, 0.2), spacing(3));

    let mut x = 0.1_f64;
    let mut expected = Vec::new();
    while x < 10.0 {
        expected.push(x);
        x += 3.0;
    }
    let xs: Vec<f64> = lattice.iter().map(|p| p.x).collect();
    std::assert_eq!(xs, expected);
}

#[test]
fn test_generation_terminates_when_step_is_below_precision() {
    // At 1e17 adding 1 no longer changes the value
    let sw = Point2D::new(1e17, 0.0);
    let ne = Point2D::new(1e17 + 64.0, 10.0);

    let lattice = generate(sw, ne, spacing(1));

    std::assert_eq!(lattice.len(), 10);
    std::assert!(lattice.iter().all(|p| p.x == 1e17));
}
