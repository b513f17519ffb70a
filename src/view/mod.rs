//! Displayable output for a boundary-change query.
//!
//! A [`Comparison`] is turned into two panels of GeoJSON features with the
//! election attributes joined on, ready for a map front end to draw.

mod geojson;

use geo::{MultiPolygon, Point};
use serde::Serialize;
use serde_json::Value;

use crate::boundary::{BoundaryYear, District};
use crate::engine::{Comparison, Direction};
use crate::geom::{bounds, mean_centroid};

pub use geojson::Change;

use geojson::{district_feature, feature, feature_collection};

/// Which pair of panels to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The district as drawn in each year, side by side.
    #[default]
    Static,
    /// The baseline district next to the areas it lost and gained.
    Changes,
}

/// One map panel.
#[derive(Debug, Clone, Serialize)]
pub struct MapPanel {
    pub title: String,
    /// Shown instead of (or above) the map when the district is missing.
    pub message: Option<String>,
    /// Mean centroid of the drawn shapes, as `[lon, lat]`.
    pub center: Option<[f64; 2]>,
    /// `[min_lon, min_lat, max_lon, max_lat]` of the drawn shapes.
    pub bounds: Option<[f64; 4]>,
    /// GeoJSON FeatureCollection.
    pub features: Value,
}

/// Both panels of a boundary-change view.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub label: String,
    pub baseline: MapPanel,
    pub comparison: MapPanel,
}

impl<'a> Comparison<'a> {
    /// Build the panels for `mode`.
    pub fn view(&self, mode: ViewMode) -> ComparisonView {
        let baseline = self.baseline_panel();
        let comparison = match mode {
            ViewMode::Static => self.static_panel(),
            ViewMode::Changes => self.changes_panel(),
        };
        ComparisonView { label: self.label().to_string(), baseline, comparison }
    }

    /// The baseline year's district, or its predecessors when it is new.
    fn baseline_panel(&self) -> MapPanel {
        let year = self.baseline().year();
        match self.baseline_district() {
            Some(district) => district_panel(format!("Electoral Boundaries for Year {year}"), None, district),
            None => fallback_panel(
                format!("Electoral Boundaries for Year {year}"),
                format!("No such constituency in year {year}"),
                self.predecessors(),
                Change::Predecessor,
            ),
        }
    }

    /// The comparison year's district, or its successors when it was removed.
    fn static_panel(&self) -> MapPanel {
        let year = self.comparison().year();
        match self.comparison_district() {
            Some(district) => district_panel(format!("Electoral Boundaries for Year {year}"), None, district),
            None => fallback_panel(
                format!("Electoral Boundaries for Year {year}"),
                format!("No such constituency in year {year}"),
                self.successors(),
                Change::Successor,
            ),
        }
    }

    /// Removed and added areas on one map.
    fn changes_panel(&self) -> MapPanel {
        let (from, to) = (self.baseline().year(), self.comparison().year());
        let title = format!("Electoral Boundaries Changes from {from} to {to}");

        let missing = [(&self.removed, from), (&self.added, to)].into_iter()
            .find_map(|(direction, year)| direction.is_fallback().then_some(year));
        if let Some(year) = missing {
            let mut matches = self.predecessors().into_iter()
                .map(|d| (d, Change::Predecessor))
                .collect::<Vec<_>>();
            matches.extend(self.successors().into_iter().map(|d| (d, Change::Successor)));

            let shapes = matches.iter().map(|(d, _)| d.shape()).collect::<Vec<_>>();
            let features = matches.iter().map(|(d, change)| district_feature(d, *change)).collect();
            return panel(
                title,
                Some(format!("No such constituency in year {year}. Hence no change comparison.")),
                &shapes,
                features,
            );
        }

        let removed = overlap_features(&self.removed, self.comparison(), Change::Removed);
        let added = overlap_features(&self.added, self.baseline(), Change::Added);
        let shapes = removed.iter().chain(&added).map(|(shape, _)| shape).collect::<Vec<_>>();
        let features = removed.iter().chain(&added).map(|(_, value)| value.clone()).collect();
        panel(title, None, &shapes, features)
    }
}

/// Features for the clipped overlaps of one direction, attributed to the
/// district in `other` that each overlap belongs to.
fn overlap_features(direction: &Direction, other: &BoundaryYear, change: Change) -> Vec<(MultiPolygon<f64>, Value)> {
    let Direction::Overlaps { overlaps, .. } = direction else { return Vec::new() };
    overlaps.iter()
        .map(|overlap| {
            let info = other.get(overlap.index).and_then(District::info);
            let value = feature(other.year(), &overlap.label, info, &overlap.geometry, change);
            (overlap.geometry.clone(), value)
        })
        .collect()
}

fn district_panel(title: String, message: Option<String>, district: &District) -> MapPanel {
    panel(title, message, &[district.shape()], vec![district_feature(district, Change::Selected)])
}

fn fallback_panel(title: String, message: String, districts: Vec<&District>, change: Change) -> MapPanel {
    let shapes = districts.iter().map(|d| d.shape()).collect::<Vec<_>>();
    let features = districts.iter().map(|d| district_feature(d, change)).collect();
    panel(title, Some(message), &shapes, features)
}

fn panel(title: String, message: Option<String>, shapes: &[&MultiPolygon<f64>], features: Vec<Value>) -> MapPanel {
    MapPanel {
        title,
        message,
        center: mean_centroid(shapes.iter().copied()).map(|p: Point<f64>| [p.x(), p.y()]),
        bounds: bounds(shapes.iter().copied())
            .map(|r| [r.min().x, r.min().y, r.max().x, r.max().y]),
        features: feature_collection(features),
    }
}
