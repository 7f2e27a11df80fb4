//! Coordinate transformation functionality
//!
//! Transformations run through `proj4rs`. Input and output points are always
//! x-then-y; geographic ends are converted between degrees and the radians
//! the projection engine works in.

use std::fmt;
use log::debug;
use proj4rs::proj::Proj;
use super::point::Point2D;
use super::bbox::BoundingRectangle;
use super::crs::CoordinateReferenceSystem;
use crate::grid::errors::{GridError, GridResult};

/// Transformer for converting points between two coordinate systems
pub struct CornerTransformer {
    source: CoordinateReferenceSystem,
    target: CoordinateReferenceSystem,
    // None when source and target are the same system
    projections: Option<(Proj, Proj)>,
}

impl fmt::Debug for CornerTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CornerTransformer")
            .field("source", &self.source.epsg_code())
            .field("target", &self.target.epsg_code())
            .field("identity", &self.projections.is_none())
            .finish_non_exhaustive()
    }
}

impl CornerTransformer {
    /// Build a transformer between two coordinate systems
    ///
    /// Fails with `TransformationUnsupported` if either definition cannot be
    /// turned into a projection.
    pub fn new(source: &CoordinateReferenceSystem, target: &CoordinateReferenceSystem) -> GridResult<Self> {
        if source == target {
            debug!("Source and target are both {}, using identity transform", source);
            return Ok(CornerTransformer {
                source: source.clone(),
                target: target.clone(),
                projections: None,
            });
        }

        let source_proj = Proj::from_proj_string(&source.normalized_proj4())
            .map_err(|e| unsupported(source, target, format!("invalid source definition: {:?}", e)))?;
        let target_proj = Proj::from_proj_string(&target.normalized_proj4())
            .map_err(|e| unsupported(source, target, format!("invalid target definition: {:?}", e)))?;

        debug!("Built transformer from {} to {}", source, target);

        Ok(CornerTransformer {
            source: source.clone(),
            target: target.clone(),
            projections: Some((source_proj, target_proj)),
        })
    }

    pub fn source(&self) -> &CoordinateReferenceSystem {
        &self.source
    }

    pub fn target(&self) -> &CoordinateReferenceSystem {
        &self.target
    }

    /// Transform a point from the source to the target system
    pub fn transform(&self, point: Point2D) -> GridResult<Point2D> {
        let Some((source_proj, target_proj)) = &self.projections else {
            return Ok(point);
        };

        let (x_in, y_in) = if self.source.is_geographic() {
            (point.x.to_radians(), point.y.to_radians())
        } else {
            (point.x, point.y)
        };

        let mut coords = (x_in, y_in, 0.0);
        proj4rs::transform::transform(source_proj, target_proj, &mut coords)
            .map_err(|e| unsupported(&self.source, &self.target, format!("{:?}", e)))?;

        let transformed = if self.target.is_geographic() {
            Point2D::new(coords.0.to_degrees(), coords.1.to_degrees())
        } else {
            Point2D::new(coords.0, coords.1)
        };

        if !transformed.is_finite() {
            return Err(unsupported(&self.source, &self.target,
                                   format!("point {} has no finite image", point)));
        }

        debug!("Transformed {} in EPSG:{} to {} in EPSG:{}",
               point, self.source.epsg_code(), transformed, self.target.epsg_code());

        Ok(transformed)
    }

    /// Transform the south-west and north-east corners of a rectangle
    ///
    /// The corners are returned as transformed, without reordering.
    pub fn transform_corners(&self, rect: &BoundingRectangle) -> GridResult<(Point2D, Point2D)> {
        let sw = self.transform(rect.south_west())?;
        let ne = self.transform(rect.north_east())?;
        Ok((sw, ne))
    }
}

/// Transform a single point between two coordinate systems
pub fn transform(point: Point2D, source: &CoordinateReferenceSystem, target: &CoordinateReferenceSystem) -> GridResult<Point2D> {
    CornerTransformer::new(source, target)?.transform(point)
}

fn unsupported(source: &CoordinateReferenceSystem, target: &CoordinateReferenceSystem, reason: String) -> GridError {
    GridError::TransformationUnsupported {
        source_crs: source.to_string(),
        target_crs: target.to_string(),
        reason,
    }
}
