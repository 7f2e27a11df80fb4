//! Extent inspection command
//!
//! Shows the extent of the input, its corners in the target CRS and the
//! size of the grid that would be generated, without writing anything.

use clap::ArgMatches;
use log::info;

use crate::commands::arguments;
use crate::commands::command_traits::Command;
use crate::config::GridParameters;
use crate::coordinate::{self, BoundingRectangle, CoordinateReferenceSystem, CornerTransformer, Point2D};
use crate::grid::{self, GridSpacing};
use crate::grid::errors::GridResult;
use crate::io::read_geojson;
use crate::utils::format_utils::format_coordinate;

/// Corner and size report for a prospective grid
#[derive(Debug, Clone)]
pub struct BoundsReport {
    pub source_crs: CoordinateReferenceSystem,
    pub target_crs: CoordinateReferenceSystem,
    pub extent: BoundingRectangle,
    pub transformed_sw: Point2D,
    pub transformed_ne: Point2D,
    pub expected_points: usize,
}

/// Command for inspecting the extent of an input
pub struct BoundsCommand {
    params: GridParameters,
    bbox: Option<BoundingRectangle>,
}

impl BoundsCommand {
    pub fn new(args: &ArgMatches) -> GridResult<Self> {
        Ok(BoundsCommand {
            params: arguments::resolve_parameters(args)?,
            bbox: arguments::bbox_argument(args)?,
        })
    }

    /// Compute the report without writing any output
    pub fn report(&self) -> GridResult<BoundsReport> {
        let spacing = GridSpacing::new(self.params.spacing)?;
        let source_crs = CoordinateReferenceSystem::resolve(&self.params.source_crs)?;
        let target_crs = CoordinateReferenceSystem::resolve(&self.params.target_crs)?;

        let extent = match self.bbox {
            Some(extent) => extent,
            None => coordinate::extent(&read_geojson(&self.params.source_path)?.geometries)?,
        };

        let transformer = CornerTransformer::new(&source_crs, &target_crs)?;
        let (transformed_sw, transformed_ne) = transformer.transform_corners(&extent)?;
        let expected_points = grid::expected_len(transformed_sw, transformed_ne, spacing);

        Ok(BoundsReport {
            source_crs,
            target_crs,
            extent,
            transformed_sw,
            transformed_ne,
            expected_points,
        })
    }
}

/// Render a bounds report
pub fn render(report: &BoundsReport) -> String {
    let source_decimals = if report.source_crs.is_geographic() { 6 } else { 3 };
    let target_decimals = if report.target_crs.is_geographic() { 6 } else { 3 };
    let src = |v: f64| format_coordinate(v, source_decimals);
    let dst = |v: f64| format_coordinate(v, target_decimals);

    let mut out = String::new();
    out.push_str(&format!("Extent in {}:\n", report.source_crs));
    out.push_str(&format!("  min_x: {}  min_y: {}\n", src(report.extent.min_x()), src(report.extent.min_y())));
    out.push_str(&format!("  max_x: {}  max_y: {}\n", src(report.extent.max_x()), src(report.extent.max_y())));
    out.push_str(&format!("Corners in {}:\n", report.target_crs));
    out.push_str(&format!("  SW: ({}, {})\n", dst(report.transformed_sw.x), dst(report.transformed_sw.y)));
    out.push_str(&format!("  NE: ({}, {})\n", dst(report.transformed_ne.x), dst(report.transformed_ne.y)));
    out.push_str(&format!("Expected grid points: {}\n", report.expected_points));
    out
}

impl Command for BoundsCommand {
    fn execute(&self) -> GridResult<()> {
        info!("Inspecting extent of {}", self.params.source_path.display());
        let report = self.report()?;
        print!("{}", render(&report));
        Ok(())
    }
}
