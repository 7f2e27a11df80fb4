//! Grid generation command
//!
//! Runs the full pipeline: read the input extent (or take it from `--bbox`),
//! transform its corners, generate the lattice and write it.

use clap::ArgMatches;
use log::info;

use crate::api::{GridKit, GridRun};
use crate::commands::arguments;
use crate::commands::command_traits::Command;
use crate::config::GridParameters;
use crate::coordinate::BoundingRectangle;
use crate::grid::errors::GridResult;

/// Command for generating a grid file
pub struct GenerateCommand {
    /// Resolved pipeline parameters
    params: GridParameters,
    /// Extent given on the command line, replacing the input file
    bbox: Option<BoundingRectangle>,
    /// Whether to draw a progress bar
    show_progress: bool,
}

impl GenerateCommand {
    /// Create a new generate command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new GenerateCommand instance or an error
    pub fn new(args: &ArgMatches) -> GridResult<Self> {
        let params = arguments::resolve_parameters(args)?;
        let bbox = arguments::bbox_argument(args)?;
        let show_progress = arguments::show_progress(args);

        Ok(GenerateCommand::from_parameters(params, bbox, show_progress))
    }

    /// Create a command from already resolved parameters
    pub fn from_parameters(params: GridParameters, bbox: Option<BoundingRectangle>, show_progress: bool) -> Self {
        GenerateCommand {
            params,
            bbox,
            show_progress,
        }
    }

    /// Run the pipeline and return its structured result
    pub fn run(&self) -> GridResult<GridRun> {
        let kit = GridKit::new().with_progress(self.show_progress);
        match self.bbox {
            Some(extent) => {
                info!("Using bounding box from the command line instead of {}",
                      self.params.source_path.display());
                kit.generate_for_extent(extent, &self.params)
            },
            None => kit.generate_with(&self.params),
        }
    }
}

/// Render the summary of a finished run
pub fn summarize(run: &GridRun) -> String {
    let mut summary = String::new();
    summary.push_str("Grid generation complete\n");
    summary.push_str(&format!("  Source CRS:   {}\n", run.source_crs.description()));
    summary.push_str(&format!("  Target CRS:   {}\n", run.target_crs.description()));
    summary.push_str(&format!("  Input extent: ({}, {}) - ({}, {})\n",
                              run.source_extent.min_x(), run.source_extent.min_y(),
                              run.source_extent.max_x(), run.source_extent.max_y()));
    summary.push_str(&format!("  SW corner:    {}\n", run.transformed_sw));
    summary.push_str(&format!("  NE corner:    {}\n", run.transformed_ne));
    summary.push_str(&format!("  Spacing:      {} {}\n", run.spacing, run.target_crs.unit()));
    summary.push_str(&format!("  Points:       {}\n", run.table.len()));
    summary.push_str(&format!("  Output:       {}\n", run.destination_path.display()));
    summary
}

impl Command for GenerateCommand {
    fn execute(&self) -> GridResult<()> {
        let run = self.run()?;
        print!("{}", summarize(&run));
        Ok(())
    }
}
