mod config;
mod description;
mod geojson;
mod results;

use std::{collections::BTreeMap, path::Path};

use anyhow::{bail, Context, Result};
use log::info;
use serde_json::Value;

use crate::boundary::{normalize_label, BoundaryYear, District, Year};
use crate::engine::{Comparison, IntersectionEngine, QueryError};

pub use config::{DatasetConfig, YearSource, DEFAULT_MIN_YEAR};
pub use results::ResultsTable;

use description::description_field;
use geojson::{read_features, RawFeature};

/// Property carrying the district name.
const LABEL_FIELD: &str = "ED_DESC";
/// Property holding the HTML attribute table in older boundary files.
const DESCRIPTION_FIELD: &str = "Description";

/// District boundaries for every loaded election year.
#[derive(Debug, Clone, Default)]
pub struct BoundaryStore {
    years: BTreeMap<Year, BoundaryYear>,
}

impl BoundaryStore {
    /// Build a store from already assembled years.
    pub fn new(years: impl IntoIterator<Item = BoundaryYear>) -> Result<Self> {
        let mut store = Self::default();
        for year in years {
            store.insert(year)?;
        }
        Ok(store)
    }

    /// Load every year listed in `config`, joining election results onto the
    /// districts when the config names a results file.
    pub fn load(config: &DatasetConfig) -> Result<Self> {
        let results = match (&config.constituency_info, &config.results) {
            (Some(path), _) => Some(ResultsTable::read_csv(path)?),
            (None, Some(path)) => Some(ResultsTable::from_candidates_csv(path, config.min_year)?),
            (None, None) => None,
        };

        let mut store = Self::default();
        for source in &config.years {
            store.insert(load_year(source.year, &source.path, results.as_ref())?)?;
        }
        Ok(store)
    }

    fn insert(&mut self, year: BoundaryYear) -> Result<()> {
        if self.years.contains_key(&year.year()) {
            bail!("[store::insert] Boundaries for year {} were loaded twice", year.year());
        }
        self.years.insert(year.year(), year);
        Ok(())
    }

    /// All districts of `year` in load order, or `None` if the year is unknown.
    #[inline]
    pub fn polygons_for_year(&self, year: Year) -> Option<&BoundaryYear> {
        self.years.get(&year)
    }

    /// Loaded years, ascending.
    pub fn years(&self) -> Vec<Year> {
        self.years.keys().copied().collect()
    }

    /// Every district label appearing in any year, sorted and deduplicated.
    pub fn districts(&self) -> Vec<&str> {
        let mut labels = self.years.values()
            .flat_map(|year| year.iter().map(District::label))
            .collect::<Vec<_>>();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// Run the boundary-change query for `label` between two loaded years.
    pub fn compare<'a>(&'a self,
        engine: &IntersectionEngine,
        baseline: Year,
        comparison: Year,
        label: &str,
    ) -> Result<Comparison<'a>, QueryError> {
        let baseline = self.polygons_for_year(baseline).ok_or(QueryError::UnknownYear(baseline))?;
        let comparison = self.polygons_for_year(comparison).ok_or(QueryError::UnknownYear(comparison))?;
        engine.compare(baseline, comparison, &normalize_label(label))
    }
}

/// Load one year's districts from a GeoJSON file.
pub fn load_year(year: Year, path: &Path, results: Option<&ResultsTable>) -> Result<BoundaryYear> {
    let features = read_features(path)?;
    let boundary = year_from_features(year, features, results)
        .with_context(|| format!("[store::load_year] Failed to load {year} boundaries from {}", path.display()))?;
    info!("[store::load_year] loaded {} districts for {year} from {}", boundary.len(), path.display());
    Ok(boundary)
}

fn year_from_features(year: Year, features: Vec<RawFeature>, results: Option<&ResultsTable>) -> Result<BoundaryYear> {
    let districts = features.into_iter().enumerate()
        .map(|(idx, feature)| -> Result<District> {
            let label = normalize_label(&feature_label(&feature)
                .with_context(|| format!("Feature {idx} has no {LABEL_FIELD} property or description entry"))?);
            let info = results.and_then(|table| table.get(year, &label)).cloned();
            Ok(District::new(year, label, feature.shape).with_info(info))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BoundaryYear::new(year, districts)?)
}

/// The district name of a feature: its `ED_DESC` property, or the `ED_DESC`
/// row of its HTML `Description`.
fn feature_label(feature: &RawFeature) -> Option<String> {
    if let Some(Value::String(label)) = feature.properties.get(LABEL_FIELD) {
        return Some(label.trim().to_string());
    }
    match feature.properties.get(DESCRIPTION_FIELD) {
        Some(Value::String(description)) => description_field(description, LABEL_FIELD),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use super::geojson::parse_features;

    fn collection(features: Value) -> Vec<RawFeature> {
        parse_features(json!({ "type": "FeatureCollection", "features": features }).to_string().as_bytes()).unwrap()
    }

    fn square_feature(properties: Value, x0: f64) -> Value {
        json!({
            "type": "Feature",
            "properties": properties,
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[x0, 0.0], [x0 + 1.0, 0.0], [x0 + 1.0, 1.0], [x0, 1.0], [x0, 0.0]]]
            }
        })
    }

    #[test]
    fn labels_come_from_property_or_description() {
        let features = collection(json!([
            square_feature(json!({ "ED_DESC": "Ang Mo Kio-Hougang" }), 0.0),
            square_feature(json!({ "Description": "<tr><th>ED_DESC</th> <td>bishan - toa payoh</td></tr>" }), 1.0),
        ]));
        let year = year_from_features(Year(2011), features, None).unwrap();
        let labels = year.iter().map(District::label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["ANG MO KIO - HOUGANG", "BISHAN - TOA PAYOH"]);
    }

    #[test]
    fn unlabeled_feature_is_an_error() {
        let features = collection(json!([square_feature(json!({ "NAME": "X" }), 0.0)]));
        assert!(year_from_features(Year(2011), features, None).is_err());
    }

    #[test]
    fn duplicate_years_are_rejected() {
        let a = BoundaryYear::new(Year(2015), vec![]).unwrap();
        let b = BoundaryYear::new(Year(2015), vec![]).unwrap();
        assert!(BoundaryStore::new([a, b]).is_err());
    }

    #[test]
    fn compare_reports_unknown_year() {
        let store = BoundaryStore::new([BoundaryYear::new(Year(2015), vec![]).unwrap()]).unwrap();
        let err = store.compare(&IntersectionEngine::default(), Year(2015), Year(2020), "A").unwrap_err();
        assert_eq!(err, QueryError::UnknownYear(Year(2020)));
    }
}
