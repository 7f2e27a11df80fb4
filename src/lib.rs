pub mod io;
pub mod utils;
pub mod grid;
pub mod coordinate;
pub mod config;
pub mod commands;
pub mod api;

pub use crate::api::{generate_grid, generate_grid_for_extent, generate_grid_with, GridKit, GridRun};

pub use config::GridParameters;
pub use grid::{GridError, GridResult, GridSpacing, GridTable, Lattice};
pub use coordinate::{BoundingRectangle, Point2D, CornerTransformer, CoordinateReferenceSystem};
