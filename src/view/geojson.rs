use geo::{Area, MultiPolygon};
use serde_json::{json, Map, Value};

use crate::boundary::{District, DistrictInfo, Year};

/// How a feature relates to the selected district.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    /// The selected district's own boundary.
    Selected,
    /// Part of the baseline district now in another district.
    Removed,
    /// Part of the comparison district that came from another district.
    Added,
    /// Baseline district matched by the scaled fallback.
    Predecessor,
    /// Comparison district matched by the scaled fallback.
    Successor,
}

impl Change {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Removed => "removed",
            Self::Added => "added",
            Self::Predecessor => "predecessor",
            Self::Successor => "successor",
        }
    }
}

/// A GeoJSON Feature for `shape`, carrying the district's year, label and
/// election attributes (null when unknown).
pub(super) fn feature(year: Year, label: &str, info: Option<&DistrictInfo>, shape: &MultiPolygon<f64>, change: Change) -> Value {
    let mut properties = Map::new();
    properties.insert("year".to_string(), json!(year.to_string()));
    properties.insert("ED_DESC".to_string(), json!(label));
    properties.insert("constituency_type".to_string(), json!(info.map(|i| &i.constituency_type)));
    properties.insert("pax_number".to_string(), json!(info.map(|i| i.pax_number)));
    properties.insert("result".to_string(), json!(info.map(|i| &i.result)));
    properties.insert("change".to_string(), json!(change.as_str()));
    properties.insert("area".to_string(), json!(shape.unsigned_area()));

    json!({
        "type": "Feature",
        "geometry": multipolygon_to_geojson(shape),
        "properties": properties,
    })
}

/// A feature for a whole district.
pub(super) fn district_feature(district: &District, change: Change) -> Value {
    feature(district.year(), district.label(), district.info(), district.shape(), change)
}

pub(super) fn feature_collection(features: Vec<Value>) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Convert a MultiPolygon to a GeoJSON Geometry object.
pub(super) fn multipolygon_to_geojson(shape: &MultiPolygon<f64>) -> Value {
    let polygons = shape.0.iter()
        .map(|polygon| {
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(|ring| ring.coords().map(|c| vec![c.x, c.y]).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    json!({
        "type": "MultiPolygon",
        "coordinates": polygons,
    })
}
