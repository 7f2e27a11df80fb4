//! Command-line argument definitions and parameter resolution

use std::path::PathBuf;
use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::{debug, info};
use crate::config::{GridParameters, ParameterOverrides};
use crate::coordinate::BoundingRectangle;
use crate::grid::errors::{GridError, GridResult};

/// Build the clap command describing every option of the tool
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("GridKit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a regular point grid over a reprojected bounding box")
        .arg(
            Arg::new("input")
                .help("Input GeoJSON file holding the area to cover")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output text file (easting,northing rows)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("source-crs")
                .long("source-crs")
                .visible_alias("in-epsg")
                .help("CRS of the input geometry (e.g. 4326, EPSG:4326, WGS84)")
                .value_name("CRS")
                .required(false),
        )
        .arg(
            Arg::new("target-crs")
                .long("target-crs")
                .visible_alias("out-epsg")
                .help("CRS the grid is laid out in (e.g. EPSG:26915)")
                .value_name("CRS")
                .required(false),
        )
        .arg(
            Arg::new("spacing")
                .short('s')
                .long("spacing")
                .help("Grid spacing in target CRS units")
                .value_name("N")
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new("bbox")
                .long("bbox")
                .help("Bounding box in the source CRS instead of an input file (minx,miny,maxx,maxy)")
                .value_name("BBOX")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML file with a [grid] table of default parameters")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("describe-crs")
                .long("describe-crs")
                .help("Print the definition of a CRS and exit")
                .value_name("CRS")
                .required(false),
        )
        .arg(
            Arg::new("bounds")
                .long("bounds")
                .help("Print the input extent and its transformed corners without writing a grid")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Prompt for every parameter before generating")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Do not draw a progress bar while writing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log records to this file")
                .value_name("FILE")
                .required(false),
        )
}

/// Resolve grid parameters: defaults, then the config file, then the command line
pub fn resolve_parameters(args: &ArgMatches) -> GridResult<GridParameters> {
    let base = match args.get_one::<String>("config") {
        Some(path) => {
            info!("Using configuration file: {}", path);
            GridParameters::from_file(path)?
        },
        None => GridParameters::default(),
    };

    let spacing = args.get_one::<String>("spacing")
        .map(|raw| raw.trim().parse::<i64>()
            .map_err(|_| GridError::Config(format!("Grid spacing must be an integer, got '{}'", raw))))
        .transpose()?;

    let overrides = ParameterOverrides {
        source_path: args.get_one::<String>("input").map(PathBuf::from),
        destination_path: args.get_one::<String>("output").map(PathBuf::from),
        source_crs: args.get_one::<String>("source-crs").cloned(),
        target_crs: args.get_one::<String>("target-crs").cloned(),
        spacing,
    };

    let params = base.with_overrides(overrides);
    debug!("Resolved parameters: {:?}", params);
    Ok(params)
}

/// Bounding box given on the command line, if any
pub fn bbox_argument(args: &ArgMatches) -> GridResult<Option<BoundingRectangle>> {
    args.get_one::<String>("bbox")
        .map(|raw| BoundingRectangle::from_string(raw))
        .transpose()
}

/// Whether a progress bar should be drawn
pub fn show_progress(args: &ArgMatches) -> bool {
    !args.get_flag("no-progress")
}
