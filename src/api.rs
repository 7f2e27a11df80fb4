use std::path::{Path, PathBuf};
use log::{info, warn};
use crate::config::GridParameters;
use crate::coordinate::{self, BoundingRectangle, CoordinateReferenceSystem, CornerTransformer, Point2D};
use crate::grid::{self, GridResult, GridSpacing, GridTable};
use crate::io::read_geojson;

/// Everything one grid generation run produced
#[derive(Debug, Clone)]
pub struct GridRun {
    pub source_crs: CoordinateReferenceSystem,
    pub target_crs: CoordinateReferenceSystem,
    pub spacing: GridSpacing,
    /// Extent of the input, in the source CRS
    pub source_extent: BoundingRectangle,
    /// South-west corner in the target CRS
    pub transformed_sw: Point2D,
    /// North-east corner in the target CRS
    pub transformed_ne: Point2D,
    pub table: GridTable,
    pub destination_path: PathBuf,
}

/// Generate a lattice over the extent of a GeoJSON file and write it as text
///
/// # Arguments
/// * `source_path` - GeoJSON input, in the source CRS
/// * `destination_path` - Output text file
/// * `source_crs` - Identifier of the input CRS
/// * `target_crs` - Identifier of the CRS the lattice is laid out in
/// * `spacing` - Lattice spacing in target CRS units
///
/// # Returns
/// The numeric table, in the order it was written
pub fn generate_grid<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P,
                                                      destination_path: Q,
                                                      source_crs: &str,
                                                      target_crs: &str,
                                                      spacing: i64) -> GridResult<GridTable> {
    let params = GridParameters {
        source_path: source_path.as_ref().to_path_buf(),
        destination_path: destination_path.as_ref().to_path_buf(),
        source_crs: source_crs.to_string(),
        target_crs: target_crs.to_string(),
        spacing,
    };

    generate_grid_with(&params, false).map(|run| run.table)
}

/// Run the full pipeline from resolved parameters
pub fn generate_grid_with(params: &GridParameters, show_progress: bool) -> GridResult<GridRun> {
    let spacing = GridSpacing::new(params.spacing)?;
    let source_crs = CoordinateReferenceSystem::resolve(&params.source_crs)?;
    let target_crs = CoordinateReferenceSystem::resolve(&params.target_crs)?;

    let input = read_geojson(&params.source_path)?;
    if let Some(declared) = &input.declared_crs {
        match coordinate::parse_identifier(declared) {
            Ok(code) if code != source_crs.epsg_code() => {
                warn!("Input declares CRS '{}' but {} is configured; using {}",
                      declared, source_crs, source_crs);
            },
            Ok(_) => {},
            Err(_) => warn!("Input declares unrecognised CRS '{}', ignoring it", declared),
        }
    }

    let source_extent = coordinate::extent(&input.geometries)?;

    run_pipeline(source_crs, target_crs, spacing, source_extent, &params.destination_path, show_progress)
}

/// Run the pipeline on an extent given directly instead of read from a file
pub fn generate_grid_for_extent(extent: BoundingRectangle,
                                params: &GridParameters,
                                show_progress: bool) -> GridResult<GridRun> {
    let spacing = GridSpacing::new(params.spacing)?;
    let source_crs = CoordinateReferenceSystem::resolve(&params.source_crs)?;
    let target_crs = CoordinateReferenceSystem::resolve(&params.target_crs)?;

    run_pipeline(source_crs, target_crs, spacing, extent, &params.destination_path, show_progress)
}

fn run_pipeline(source_crs: CoordinateReferenceSystem,
                target_crs: CoordinateReferenceSystem,
                spacing: GridSpacing,
                source_extent: BoundingRectangle,
                destination_path: &Path,
                show_progress: bool) -> GridResult<GridRun> {
    info!("Generating grid from {} to {} at spacing {} {}",
          source_crs, target_crs, spacing, target_crs.unit());

    let transformer = CornerTransformer::new(&source_crs, &target_crs)?;
    let (transformed_sw, transformed_ne) = transformer.transform_corners(&source_extent)?;
    info!("Transformed corners: SW {} NE {}", transformed_sw, transformed_ne);

    if !(transformed_sw.x < transformed_ne.x && transformed_sw.y < transformed_ne.y) {
        warn!("Transformed south-west corner {} is not below and left of north-east corner {}; \
               the grid will be empty", transformed_sw, transformed_ne);
    }

    let lattice = grid::generate(transformed_sw, transformed_ne, spacing);
    let (table, rows) = grid::materialize(&lattice);
    grid::write_rows(destination_path, &rows, show_progress)?;

    info!("Wrote {} grid points to {}", table.len(), destination_path.display());

    Ok(GridRun {
        source_crs,
        target_crs,
        spacing,
        source_extent,
        transformed_sw,
        transformed_ne,
        table,
        destination_path: destination_path.to_path_buf(),
    })
}

/// Main interface to the GridKit library
///
/// Holds the parameters every run starts from and whether progress bars
/// are drawn.
pub struct GridKit {
    defaults: GridParameters,
    show_progress: bool,
}

impl GridKit {
    /// Create a new GridKit instance with the built-in defaults
    pub fn new() -> Self {
        GridKit {
            defaults: GridParameters::default(),
            show_progress: false,
        }
    }

    /// Create a GridKit instance whose defaults come from a TOML file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> GridResult<Self> {
        Ok(GridKit {
            defaults: GridParameters::from_file(path)?,
            show_progress: false,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn defaults(&self) -> &GridParameters {
        &self.defaults
    }

    /// Run the pipeline with the configured defaults
    pub fn generate(&self) -> GridResult<GridRun> {
        generate_grid_with(&self.defaults, self.show_progress)
    }

    /// Run the pipeline with explicit parameters
    pub fn generate_with(&self, params: &GridParameters) -> GridResult<GridRun> {
        generate_grid_with(params, self.show_progress)
    }

    /// Run the pipeline over an extent given directly
    pub fn generate_for_extent(&self, extent: BoundingRectangle, params: &GridParameters) -> GridResult<GridRun> {
        generate_grid_for_extent(extent, params, self.show_progress)
    }
}

impl Default for GridKit {
    fn default() -> Self {
        GridKit::new()
    }
}
