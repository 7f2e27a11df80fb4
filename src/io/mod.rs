//! I/O utilities for file handling
//!
//! This module provides readers for the geometry formats accepted as input.

pub mod geojson;

pub use geojson::{parse_geojson, read_geojson, GeoJsonInput};
