//! Coordinate handling for geospatial data
//!
//! This module provides structures and functionality for resolving
//! coordinate systems, transforming points between them and reducing
//! geometries to their extent.

mod bbox;
mod point;
mod transform;
mod crs;
mod extent;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingRectangle;
pub use self::point::Point2D;
pub use self::transform::{transform, CornerTransformer};
pub use self::crs::{parse_identifier, strip_axis_override, CoordinateReferenceSystem, CrsAliasRegistry, CrsKind};
pub use self::extent::extent;
