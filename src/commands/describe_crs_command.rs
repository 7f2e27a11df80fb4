//! CRS description command
//!
//! Prints what an identifier resolves to: name, kind, unit and the
//! PROJ.4 and WKT definitions.

use clap::ArgMatches;
use log::debug;

use crate::commands::command_traits::Command;
use crate::coordinate::CoordinateReferenceSystem;
use crate::grid::errors::{GridError, GridResult};
use crate::utils::format_utils::pretty_wkt;

/// Command for describing a coordinate reference system
pub struct DescribeCrsCommand {
    /// Identifier as given by the user
    identifier: String,
}

impl DescribeCrsCommand {
    pub fn new(args: &ArgMatches) -> GridResult<Self> {
        let identifier = args.get_one::<String>("describe-crs")
            .ok_or_else(|| GridError::Config("Missing CRS identifier".to_string()))?
            .clone();

        Ok(DescribeCrsCommand { identifier })
    }

    /// Render the description of a resolved CRS
    pub fn describe(crs: &CoordinateReferenceSystem) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", crs));
        out.push_str(&format!("  Kind:   {}\n", if crs.is_geographic() { "geographic" } else { "projected" }));
        out.push_str(&format!("  Unit:   {}\n", crs.unit()));
        out.push_str(&format!("  PROJ.4: {}\n", crs.proj4()));
        out.push_str("  WKT:\n");
        for line in pretty_wkt(crs.wkt()).lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl Command for DescribeCrsCommand {
    fn execute(&self) -> GridResult<()> {
        debug!("Describing CRS '{}'", self.identifier);
        let crs = CoordinateReferenceSystem::resolve(&self.identifier)?;
        print!("{}", Self::describe(&crs));
        Ok(())
    }
}
