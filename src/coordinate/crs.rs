//! Coordinate Reference System handling
//!
//! Identifiers are resolved against the EPSG database bundled by
//! `crs-definitions`. Besides bare codes, the usual authority, URN and URL
//! spellings are accepted, plus the named aliases listed in
//! `crs_aliases.toml`.

use std::collections::HashMap;
use std::fmt;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use crate::grid::errors::{GridError, GridResult};

lazy_static! {
    // Parse the alias registry at startup
    static ref CRS_ALIASES: CrsAliasRegistry = {
        let content = include_str!("../../crs_aliases.toml");
        CrsAliasRegistry::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse CRS alias registry: {}", e);
            CrsAliasRegistry::default()
        })
    };

    // 4326, EPSG:4326, EPSG::4326, urn:ogc:def:crs:EPSG:6.6:4326, http://www.opengis.net/def/crs/EPSG/0/4326
    static ref EPSG_IDENTIFIER: Regex = Regex::new(
        r"(?i)^(?:epsg::?|urn:ogc:def:crs:epsg:[0-9.]*:|https?://www\.opengis\.net/def/crs/epsg/[0-9.]+/)?([0-9]+)$"
    ).expect("EPSG identifier pattern is valid");

    // First quoted name of a WKT definition, e.g. PROJCS["NAD83 / UTM zone 15N", ...
    static ref WKT_NAME: Regex = Regex::new(r#"^\s*[A-Z_]+\s*\[\s*"([^"]+)""#)
        .expect("WKT name pattern is valid");
}

/// Aliases and display names loaded from TOML
#[derive(Debug, Default)]
pub struct CrsAliasRegistry {
    // Lower-cased alias -> EPSG code
    aliases: HashMap<String, u32>,
    // EPSG code -> display name
    names: HashMap<u32, String>,
}

impl CrsAliasRegistry {
    /// Parse the registry from a TOML string
    pub fn from_str(content: &str) -> GridResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| GridError::Config(format!("Failed to parse CRS aliases: {}", e)))?;

        let mut registry = CrsAliasRegistry::default();

        if let Some(table) = toml_value.get("aliases").and_then(|v| v.as_table()) {
            for (alias, code) in table {
                match code.as_integer().and_then(|c| u32::try_from(c).ok()) {
                    Some(code) => {
                        registry.aliases.insert(alias.to_lowercase(), code);
                    },
                    None => warn!("Ignoring CRS alias '{}' with non-numeric code", alias),
                }
            }
        }

        if let Some(table) = toml_value.get("names").and_then(|v| v.as_table()) {
            for (code, name) in table {
                if let (Ok(code), Some(name)) = (code.parse::<u32>(), name.as_str()) {
                    registry.names.insert(code, name.to_string());
                }
            }
        }

        Ok(registry)
    }

    /// Look up an alias, ignoring case
    pub fn code_for(&self, alias: &str) -> Option<u32> {
        self.aliases.get(&alias.to_lowercase()).copied()
    }

    /// Display name registered for a code
    pub fn name_for(&self, code: u32) -> Option<&str> {
        self.names.get(&code).map(String::as_str)
    }
}

/// Whether a CRS measures angles or lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrsKind {
    /// Longitude/latitude in degrees
    Geographic,
    /// Easting/northing in a linear unit
    Projected,
}

/// A resolved coordinate reference system
///
/// Immutable once constructed. Two systems compare equal when they share
/// an EPSG code.
#[derive(Debug, Clone)]
pub struct CoordinateReferenceSystem {
    epsg: u32,
    name: String,
    kind: CrsKind,
    unit: String,
    proj4: &'static str,
    wkt: &'static str,
}

impl CoordinateReferenceSystem {
    /// Resolve any supported identifier to a coordinate reference system
    ///
    /// # Arguments
    /// * `identifier` - An EPSG code in any accepted spelling, or a registered alias
    ///
    /// # Returns
    /// The resolved system, or `UnknownCrs` if the identifier cannot be resolved
    pub fn resolve(identifier: &str) -> GridResult<Self> {
        let code = parse_identifier(identifier)?;
        debug!("Identifier '{}' parsed as EPSG:{}", identifier.trim(), code);
        Self::from_epsg(code)
    }

    /// Create a coordinate reference system from an EPSG code
    pub fn from_epsg(epsg: u32) -> GridResult<Self> {
        let def = u16::try_from(epsg).ok()
            .and_then(crs_definitions::from_code)
            .ok_or_else(|| GridError::UnknownCrs(
                format!("EPSG:{} is not in the EPSG database", epsg)))?;

        let proj4: &'static str = def.proj4;
        let wkt: &'static str = def.wkt;

        let kind = if is_longlat_definition(proj4) {
            CrsKind::Geographic
        } else {
            CrsKind::Projected
        };

        let unit = match kind {
            CrsKind::Geographic => "degree".to_string(),
            CrsKind::Projected => linear_unit_name(proj4),
        };

        let name = CRS_ALIASES.name_for(epsg)
            .map(str::to_string)
            .or_else(|| WKT_NAME.captures(wkt).map(|caps| caps[1].to_string()))
            .unwrap_or_else(|| format!("EPSG:{}", epsg));

        Ok(CoordinateReferenceSystem {
            epsg,
            name,
            kind,
            unit,
            proj4,
            wkt,
        })
    }

    /// Get the EPSG code for this coordinate system
    pub fn epsg_code(&self) -> u32 {
        self.epsg
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CrsKind {
        self.kind
    }

    pub fn is_geographic(&self) -> bool {
        self.kind == CrsKind::Geographic
    }

    /// Name of the unit coordinates are expressed in
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// PROJ.4 definition as stored in the EPSG database
    pub fn proj4(&self) -> &'static str {
        self.proj4
    }

    /// WKT definition as stored in the EPSG database
    pub fn wkt(&self) -> &'static str {
        self.wkt
    }

    /// PROJ.4 definition with any axis-order override removed
    ///
    /// Coordinates are always handled x-then-y, so `+axis=` switches
    /// must not reach the projection engine.
    pub fn normalized_proj4(&self) -> String {
        strip_axis_override(self.proj4)
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        let kind = match self.kind {
            CrsKind::Geographic => "geographic",
            CrsKind::Projected => "projected",
        };
        format!("{} (EPSG:{}, {}, units: {})", self.name, self.epsg, kind, self.unit)
    }
}

impl PartialEq for CoordinateReferenceSystem {
    fn eq(&self, other: &Self) -> bool {
        self.epsg == other.epsg
    }
}

impl Eq for CoordinateReferenceSystem {}

impl fmt::Display for CoordinateReferenceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{} ({})", self.epsg, self.name)
    }
}

/// Parse an identifier into an EPSG code without consulting the database
pub fn parse_identifier(identifier: &str) -> GridResult<u32> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Err(GridError::UnknownCrs("empty CRS identifier".to_string()));
    }

    if let Some(code) = CRS_ALIASES.code_for(trimmed) {
        return Ok(code);
    }

    EPSG_IDENTIFIER.captures(trimmed)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .ok_or_else(|| GridError::UnknownCrs(format!("Unrecognised CRS identifier '{}'", trimmed)))
}

/// Remove `+axis=` switches from a PROJ.4 definition
pub fn strip_axis_override(proj4: &str) -> String {
    proj4.split_whitespace()
        .filter(|token| !token.starts_with("+axis="))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_longlat_definition(proj4: &str) -> bool {
    proj4.split_whitespace()
        .any(|token| token == "+proj=longlat" || token == "+proj=latlong")
}

fn linear_unit_name(proj4: &str) -> String {
    for token in proj4.split_whitespace() {
        if let Some(units) = token.strip_prefix("+units=") {
            return match units {
                "m" => "metre".to_string(),
                "km" => "kilometre".to_string(),
                "ft" => "foot".to_string(),
                "us-ft" => "US survey foot".to_string(),
                "link" => "link".to_string(),
                other => other.to_string(),
            };
        }
        if let Some(factor) = token.strip_prefix("+to_meter=") {
            return format!("{} metre", factor);
        }
    }

    "metre".to_string()
}
