//! Reduction of input geometries to their bounding rectangle

use geo::{BoundingRect, GeometryCollection};
use log::debug;
use super::bbox::BoundingRectangle;
use crate::grid::errors::{GridError, GridResult};

/// Compute the axis-aligned rectangle enclosing every vertex of a collection
///
/// Works in whatever CRS the geometries are expressed in; nothing is reprojected.
///
/// # Returns
/// The enclosing rectangle, or `EmptyInput` if there is no geometry or no vertex
pub fn extent(geometries: &GeometryCollection<f64>) -> GridResult<BoundingRectangle> {
    if geometries.0.is_empty() {
        return Err(GridError::EmptyInput("no geometry found in input".to_string()));
    }

    let rect = geometries.bounding_rect()
        .ok_or_else(|| GridError::EmptyInput(format!(
            "{} geometries found but none has vertices", geometries.0.len())))?;

    let bounds = BoundingRectangle::from(rect);
    debug!("Extent of {} geometries: min=({}, {}) max=({}, {})",
           geometries.0.len(), bounds.min_x(), bounds.min_y(), bounds.max_x(), bounds.max_y());

    Ok(bounds)
}
