//! Grid generation parameters
//!
//! Parameters come from three layers: built-in defaults, an optional TOML
//! file and explicit overrides (the command line). They are resolved once,
//! before the pipeline runs.
//!
//! ```toml
//! [grid]
//! input = "boundingbox.geojson"
//! output = "grid.csv"
//! source_crs = "EPSG:4326"
//! target_crs = "EPSG:26915"
//! spacing = 500
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use crate::grid::errors::{GridError, GridResult};

/// Default input GeoJSON, relative to the working directory
pub const DEFAULT_INPUT: &str = "boundingbox.geojson";
/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "grid.csv";
/// WGS 84, degrees
pub const DEFAULT_SOURCE_CRS: &str = "EPSG:4326";
/// NAD83 / UTM zone 15N, metres
pub const DEFAULT_TARGET_CRS: &str = "EPSG:26915";
/// Default spacing in target CRS units
pub const DEFAULT_SPACING: i64 = 500;

/// The five parameters of a grid generation run
///
/// Spacing is kept as given so the pipeline can reject non-positive values
/// with a proper error.
#[derive(Debug, Clone, PartialEq)]
pub struct GridParameters {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub source_crs: String,
    pub target_crs: String,
    pub spacing: i64,
}

impl Default for GridParameters {
    fn default() -> Self {
        GridParameters {
            source_path: PathBuf::from(DEFAULT_INPUT),
            destination_path: PathBuf::from(DEFAULT_OUTPUT),
            source_crs: DEFAULT_SOURCE_CRS.to_string(),
            target_crs: DEFAULT_TARGET_CRS.to_string(),
            spacing: DEFAULT_SPACING,
        }
    }
}

/// Explicitly provided values that win over the other layers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterOverrides {
    pub source_path: Option<PathBuf>,
    pub destination_path: Option<PathBuf>,
    pub source_crs: Option<String>,
    pub target_crs: Option<String>,
    pub spacing: Option<i64>,
}

impl GridParameters {
    /// Parse parameters from a TOML string, starting from the defaults
    pub fn from_toml_str(content: &str) -> GridResult<Self> {
        Self::default().merge_toml(content)
    }

    /// Load parameters from a TOML file, starting from the defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> GridResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|e| GridError::Config(format!("Cannot read {}: {}", path.display(), e)))?;

        Self::from_toml_str(&content)
    }

    /// Apply the `[grid]` table of a TOML document on top of these parameters
    pub fn merge_toml(mut self, content: &str) -> GridResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| GridError::Config(format!("Failed to parse TOML: {}", e)))?;

        let Some(table) = toml_value.get("grid").and_then(|v| v.as_table()) else {
            warn!("Configuration has no [grid] table, using defaults");
            return Ok(self);
        };

        for (key, value) in table {
            match key.as_str() {
                "input" => self.source_path = PathBuf::from(expect_str(key, value)?),
                "output" => self.destination_path = PathBuf::from(expect_str(key, value)?),
                "source_crs" => self.source_crs = expect_identifier(key, value)?,
                "target_crs" => self.target_crs = expect_identifier(key, value)?,
                "spacing" => {
                    self.spacing = value.as_integer().ok_or_else(|| GridError::Config(
                        format!("'spacing' must be an integer, found {}", value)))?;
                },
                other => warn!("Ignoring unknown configuration key '{}'", other),
            }
        }

        Ok(self)
    }

    /// Apply explicit overrides
    pub fn with_overrides(self, overrides: ParameterOverrides) -> Self {
        GridParameters {
            source_path: overrides.source_path.unwrap_or(self.source_path),
            destination_path: overrides.destination_path.unwrap_or(self.destination_path),
            source_crs: overrides.source_crs.unwrap_or(self.source_crs),
            target_crs: overrides.target_crs.unwrap_or(self.target_crs),
            spacing: overrides.spacing.unwrap_or(self.spacing),
        }
    }
}

fn expect_str(key: &str, value: &toml::Value) -> GridResult<String> {
    value.as_str()
        .map(str::to_string)
        .ok_or_else(|| GridError::Config(format!("'{}' must be a string, found {}", key, value)))
}

// CRS identifiers may be written as bare integers
fn expect_identifier(key: &str, value: &toml::Value) -> GridResult<String> {
    match value {
        toml::Value::Integer(code) => Ok(code.to_string()),
        _ => expect_str(key, value),
    }
}
