//! Grid spacing validation

use std::fmt;
use super::errors::{GridError, GridResult};

/// Distance between neighbouring lattice points, in the target CRS linear unit
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSpacing(u64);

impl GridSpacing {
    /// Validate a spacing value
    ///
    /// Zero and negative values fail with `InvalidSpacing`.
    pub fn new(value: i64) -> GridResult<Self> {
        if value <= 0 {
            return Err(GridError::InvalidSpacing(value));
        }
        Ok(GridSpacing(value as u64))
    }

    /// The step added to a coordinate when advancing along an axis
    pub fn step(&self) -> f64 {
        self.0 as f64
    }
}

impl TryFrom<i64> for GridSpacing {
    type Error = GridError;

    fn try_from(value: i64) -> GridResult<Self> {
        GridSpacing::new(value)
    }
}

impl fmt::Display for GridSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
