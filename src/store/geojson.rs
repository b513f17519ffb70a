use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use log::warn;
use serde_json::{Map, Value};

/// A boundary feature as read from disk: its raw properties and shape.
#[derive(Debug, Clone)]
pub(crate) struct RawFeature {
    pub properties: Map<String, Value>,
    pub shape: MultiPolygon<f64>,
}

/// Read all polygonal features from a GeoJSON FeatureCollection file.
pub(crate) fn read_features(path: &Path) -> Result<Vec<RawFeature>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("[store::geojson] Failed to read GeoJSON file: {}", path.display()))?;
    parse_features(&bytes)
        .with_context(|| format!("[store::geojson] Failed to parse GeoJSON from {:?}", path))
}

/// Parse polygonal features from GeoJSON FeatureCollection bytes.
/// Features with other geometry types are skipped.
pub(crate) fn parse_features(bytes: &[u8]) -> Result<Vec<RawFeature>> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;
    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("GeoJSON has no \"features\" array"))?;

    let mut parsed = Vec::with_capacity(features.len());
    for (idx, feature) in features.iter().enumerate() {
        let properties = feature["properties"].as_object().cloned().unwrap_or_default();
        let geometry = &feature["geometry"];
        let coords = geometry["coordinates"].as_array();

        let shape = match (geometry["type"].as_str(), coords) {
            (Some("Polygon"), Some(coords)) => MultiPolygon(vec![parse_polygon_coords(coords)
                .with_context(|| format!("Invalid Polygon in feature {idx}"))?]),
            (Some("MultiPolygon"), Some(coords)) => parse_multipolygon_coords(coords)
                .with_context(|| format!("Invalid MultiPolygon in feature {idx}"))?,
            (ty, _) => {
                warn!("[store::geojson] skipping feature {idx} with geometry type {:?}", ty.unwrap_or("null"));
                continue;
            }
        };
        parsed.push(RawFeature { properties, shape });
    }
    Ok(parsed)
}

/// Parse GeoJSON MultiPolygon coordinates: `[polygon, polygon, ...]`.
fn parse_multipolygon_coords(coords: &[Value]) -> Result<MultiPolygon<f64>> {
    coords.iter()
        .map(|polygon| {
            let rings = polygon.as_array().ok_or_else(|| anyhow!("polygon is not an array"))?;
            parse_polygon_coords(rings)
        })
        .collect::<Result<Vec<_>>>()
        .map(MultiPolygon)
}

/// Parse GeoJSON Polygon coordinates: `[exterior, hole, hole, ...]`.
fn parse_polygon_coords(coords: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = coords.iter().map(|ring| {
        let points = ring.as_array().ok_or_else(|| anyhow!("ring is not an array"))?;
        parse_ring_coords(points)
    });
    let exterior = rings.next().ok_or_else(|| anyhow!("missing exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring of `[x, y]` (or `[x, y, z]`) positions, closing it if needed.
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len() + 1);

    for position in coords {
        let Some([x, y, ..]) = position.as_array().map(Vec::as_slice) else {
            bail!("position must have at least two coordinates");
        };
        let x = x.as_f64().ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
        let y = y.as_f64().ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
        points.push(Coord { x, y });
    }

    // Ensure ring is closed (first point == last point)
    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Ok(LineString(points))
}
