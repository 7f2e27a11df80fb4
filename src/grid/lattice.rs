//! Regular point lattice generation
//!
//! The lattice starts at the south-west corner and advances by the grid
//! spacing along y (inner loop) and then x (outer loop). Both bounds are
//! exclusive, so points landing exactly on the north or east edge are
//! dropped. Coordinates are accumulated by repeated addition, which decides
//! how the boundary falls when the extent is not a multiple of the spacing.

use log::debug;
use crate::coordinate::Point2D;
use super::spacing::GridSpacing;

/// Ordered lattice points, column-major (ascending y within ascending x)
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    points: Vec<Point2D>,
}

impl Lattice {
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point2D> {
        self.points.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point2D> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Lattice {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Lazy lattice enumeration
///
/// Yields the same sequence as [`generate`] without holding it in memory.
/// Enumeration is a pure function of the corners and spacing, so a new
/// iterator always replays the same points.
#[derive(Debug, Clone)]
pub struct LatticeIter {
    sw: Point2D,
    ne: Point2D,
    step: f64,
    x: f64,
    y: f64,
}

impl LatticeIter {
    pub fn new(sw: Point2D, ne: Point2D, spacing: GridSpacing) -> Self {
        LatticeIter {
            sw,
            ne,
            step: spacing.step(),
            x: sw.x,
            y: sw.y,
        }
    }
}

impl Iterator for LatticeIter {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        // An empty column means the extent has no height; nothing is ever emitted
        if !(self.sw.y < self.ne.y) {
            return None;
        }

        while self.x < self.ne.x {
            if self.y < self.ne.y {
                let point = Point2D::new(self.x, self.y);
                self.y = advance(self.y, self.step, self.ne.y);
                return Some(point);
            }
            self.x = advance(self.x, self.step, self.ne.x);
            self.y = self.sw.y;
        }

        None
    }
}

// Coordinates far larger than the step stop changing when it is added;
// jump to the bound so the loop still terminates.
fn advance(value: f64, step: f64, bound: f64) -> f64 {
    let next = value + step;
    if next == value { bound } else { next }
}

/// Points reserved up front; larger lattices grow as they are generated
const MAX_PREALLOCATED_POINTS: usize = 1 << 22;

/// Generate the lattice between two transformed corners
///
/// Returns an empty lattice when `sw.x >= ne.x` or `sw.y >= ne.y`.
pub fn generate(sw: Point2D, ne: Point2D, spacing: GridSpacing) -> Lattice {
    let mut points = Vec::with_capacity(expected_len(sw, ne, spacing).min(MAX_PREALLOCATED_POINTS));
    points.extend(LatticeIter::new(sw, ne, spacing));

    debug!("Generated {} lattice points from {} to {} at spacing {}",
           points.len(), sw, ne, spacing);

    Lattice { points }
}

/// Number of points the lattice is expected to hold
///
/// Computed as `ceil(dx / spacing) * ceil(dy / spacing)`; zero for
/// degenerate extents. Accumulated rounding may move a point across a
/// boundary, so treat this as a capacity hint rather than a guarantee.
pub fn expected_len(sw: Point2D, ne: Point2D, spacing: GridSpacing) -> usize {
    if !(sw.x < ne.x && sw.y < ne.y) {
        return 0;
    }

    let step = spacing.step();
    let columns = ((ne.x - sw.x) / step).ceil();
    let rows = ((ne.y - sw.y) / step).ceil();
    let total = columns * rows;

    if total.is_finite() && total < usize::MAX as f64 {
        total as usize
    } else {
        usize::MAX
    }
}
