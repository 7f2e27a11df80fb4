//! Bounding rectangle structure for defining extents

use super::point::Point2D;
use crate::grid::errors::{GridError, GridResult};

/// An axis-aligned rectangle in a single coordinate system
///
/// Always satisfies `min_x <= max_x` and `min_y <= max_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRectangle {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl BoundingRectangle {
    /// Create a new bounding rectangle
    ///
    /// Fails with `InvalidInput` when a coordinate is not finite or a
    /// minimum exceeds its maximum.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> GridResult<Self> {
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return Err(GridError::InvalidInput(format!(
                "Bounding rectangle has non-finite coordinates: ({}, {}, {}, {})",
                min_x, min_y, max_x, max_y
            )));
        }
        if min_x > max_x || min_y > max_y {
            return Err(GridError::InvalidInput(format!(
                "Bounding rectangle minimum exceeds maximum: ({}, {}, {}, {})",
                min_x, min_y, max_x, max_y
            )));
        }

        Ok(BoundingRectangle { min_x, min_y, max_x, max_y })
    }

    /// Parse a bounding rectangle from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> GridResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(GridError::InvalidInput(
                "Bounding box must have 4 comma-separated values".to_string()));
        }

        let parse = |name: &str, raw: &str| {
            raw.trim().parse::<f64>()
                .map_err(|_| GridError::InvalidInput(format!("Invalid {} value: {}", name, raw.trim())))
        };

        let min_x = parse("min_x", parts[0])?;
        let min_y = parse("min_y", parts[1])?;
        let max_x = parse("max_x", parts[2])?;
        let max_y = parse("max_y", parts[3])?;

        BoundingRectangle::new(min_x, min_y, max_x, max_y)
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Get the width of the rectangle
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the rectangle
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Get the center point of the rectangle
    pub fn center(&self) -> Point2D {
        Point2D::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Lower-left corner
    pub fn south_west(&self) -> Point2D {
        Point2D::new(self.min_x, self.min_y)
    }

    /// Upper-right corner
    pub fn north_east(&self) -> Point2D {
        Point2D::new(self.max_x, self.max_y)
    }

    /// Check if this rectangle contains a point (edges included)
    pub fn contains(&self, point: &Point2D) -> bool {
        point.x >= self.min_x && point.x <= self.max_x &&
            point.y >= self.min_y && point.y <= self.max_y
    }
}

impl From<geo::Rect<f64>> for BoundingRectangle {
    fn from(rect: geo::Rect<f64>) -> Self {
        // geo::Rect normalises its corners on construction
        BoundingRectangle {
            min_x: rect.min().x,
            min_y: rect.min().y,
            max_x: rect.max().x,
            max_y: rect.max().y,
        }
    }
}
