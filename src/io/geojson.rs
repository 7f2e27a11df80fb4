//! GeoJSON input reading
//!
//! Accepts a `FeatureCollection`, a single `Feature`, a `GeometryCollection`
//! or any bare geometry object. Only vertices matter downstream, so
//! properties are ignored and features without geometry are skipped.

use std::fs;
use std::path::Path;
use geo::{Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use log::{debug, info};
use serde_json::Value;
use crate::grid::errors::{GridError, GridResult};

/// Geometries read from a GeoJSON document
#[derive(Debug, Clone)]
pub struct GeoJsonInput {
    /// All geometries found, in document order
    pub geometries: GeometryCollection<f64>,
    /// CRS named by the legacy top-level `crs` member, if any
    pub declared_crs: Option<String>,
}

/// Read and parse a GeoJSON file
pub fn read_geojson<P: AsRef<Path>>(path: P) -> GridResult<GeoJsonInput> {
    let path = path.as_ref();
    info!("Reading GeoJSON from {}", path.display());

    let content = fs::read_to_string(path)?;
    parse_geojson(&content)
}

/// Parse a GeoJSON document
pub fn parse_geojson(content: &str) -> GridResult<GeoJsonInput> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| GridError::InvalidInput(format!("Malformed GeoJSON: {}", e)))?;

    let mut geometries = Vec::new();
    collect_object(&document, &mut geometries)?;

    let declared_crs = document.get("crs")
        .and_then(|crs| crs.get("properties"))
        .and_then(|props| props.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string);

    debug!("Parsed {} geometries (declared CRS: {:?})", geometries.len(), declared_crs);

    Ok(GeoJsonInput {
        geometries: GeometryCollection(geometries),
        declared_crs,
    })
}

fn collect_object(object: &Value, out: &mut Vec<Geometry<f64>>) -> GridResult<()> {
    match object_type(object)? {
        "FeatureCollection" => {
            let features = object.get("features")
                .and_then(Value::as_array)
                .ok_or_else(|| invalid("FeatureCollection without a 'features' array"))?;
            for feature in features {
                collect_object(feature, out)?;
            }
        },
        "Feature" => {
            match object.get("geometry") {
                None | Some(Value::Null) => debug!("Skipping feature without geometry"),
                Some(geometry) => out.push(parse_geometry(geometry)?),
            }
        },
        _ => out.push(parse_geometry(object)?),
    }
    Ok(())
}

fn parse_geometry(object: &Value) -> GridResult<Geometry<f64>> {
    let geometry_type = object_type(object)?;

    if geometry_type == "GeometryCollection" {
        let members = object.get("geometries")
            .and_then(Value::as_array)
            .ok_or_else(|| invalid("GeometryCollection without a 'geometries' array"))?;
        let parsed = members.iter()
            .map(parse_geometry)
            .collect::<GridResult<Vec<_>>>()?;
        return Ok(Geometry::GeometryCollection(GeometryCollection(parsed)));
    }

    let coordinates = object.get("coordinates")
        .ok_or_else(|| invalid(&format!("{} without 'coordinates'", geometry_type)))?;

    let geometry = match geometry_type {
        "Point" => Geometry::Point(Point::from(parse_position(coordinates)?)),
        "MultiPoint" => Geometry::MultiPoint(MultiPoint::new(
            parse_positions(coordinates)?.into_iter().map(Point::from).collect())),
        "LineString" => Geometry::LineString(LineString::new(parse_positions(coordinates)?)),
        "MultiLineString" => Geometry::MultiLineString(MultiLineString::new(
            parse_array(coordinates, |c| Ok(LineString::new(parse_positions(c)?)))?)),
        "Polygon" => Geometry::Polygon(parse_polygon(coordinates)?),
        "MultiPolygon" => Geometry::MultiPolygon(MultiPolygon::new(
            parse_array(coordinates, parse_polygon)?)),
        other => return Err(invalid(&format!("Unsupported GeoJSON type '{}'", other))),
    };

    Ok(geometry)
}

fn parse_polygon(rings: &Value) -> GridResult<Polygon<f64>> {
    let mut rings = parse_array(rings, |ring| Ok(LineString::new(parse_positions(ring)?)))?;
    if rings.is_empty() {
        return Ok(Polygon::new(LineString::new(Vec::new()), Vec::new()));
    }
    let exterior = rings.remove(0);
    Ok(Polygon::new(exterior, rings))
}

fn parse_positions(positions: &Value) -> GridResult<Vec<Coord<f64>>> {
    parse_array(positions, parse_position)
}

// Extra ordinates (elevation, measures) are dropped
fn parse_position(position: &Value) -> GridResult<Coord<f64>> {
    let values = position.as_array()
        .ok_or_else(|| invalid("Position is not an array"))?;
    if values.len() < 2 {
        return Err(invalid(&format!("Position needs at least 2 numbers, found {}", values.len())));
    }

    let x = values[0].as_f64().ok_or_else(|| invalid("Position x is not a number"))?;
    let y = values[1].as_f64().ok_or_else(|| invalid("Position y is not a number"))?;

    Ok(Coord { x, y })
}

fn parse_array<T, F>(value: &Value, parse: F) -> GridResult<Vec<T>>
where
    F: Fn(&Value) -> GridResult<T>,
{
    value.as_array()
        .ok_or_else(|| invalid("Expected a coordinate array"))?
        .iter()
        .map(parse)
        .collect()
}

fn object_type(object: &Value) -> GridResult<&str> {
    object.get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("GeoJSON object without a 'type' member"))
}

fn invalid(message: &str) -> GridError {
    GridError::InvalidInput(message.to_string())
}
