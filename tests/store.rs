// Integration tests for loading a dataset from disk and rendering a
// boundary-change view from it.

use std::path::Path;

use boundary_shift::{
    BoundaryStore, DatasetConfig, Direction, IntersectionEngine, ViewMode, Year,
};
use serde_json::{json, Value};

fn square_feature(properties: Value, x0: f64, y0: f64, w: f64, h: f64) -> Value {
    json!({
        "type": "Feature",
        "properties": properties,
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[x0, y0, 0.0], [x0 + w, y0, 0.0], [x0 + w, y0 + h, 0.0], [x0, y0 + h, 0.0], [x0, y0, 0.0]]]
        }
    })
}

fn description(label: &str) -> Value {
    json!({ "Name": "kml_1", "Description": format!(
        "<center><table><tr><th>ED_DESC</th> <td>{label}</td></tr><tr><th>INC_CRC</th> <td>F00D</td></tr></table></center>"
    )})
}

fn write_json(path: &Path, value: Value) {
    std::fs::write(path, serde_json::to_vec(&value).unwrap()).unwrap();
}

/// 2011: ALJUNIED covers [0,2]x[0,2], HOUGANG covers [2,4]x[0,2].
/// 2015: ALJUNIED shrinks to [0,2]x[1,2], the new SENGKANG takes [0,2]x[0,1].
fn dataset(dir: &Path) -> DatasetConfig {
    write_json(&dir.join("ElectoralBoundary2011.geojson"), json!({
        "type": "FeatureCollection",
        "features": [
            square_feature(description("ALJUNIED"), 0.0, 0.0, 2.0, 2.0),
            square_feature(description("HOUGANG"), 2.0, 0.0, 2.0, 2.0),
        ]
    }));
    write_json(&dir.join("ElectoralBoundary2015.geojson"), json!({
        "type": "FeatureCollection",
        "features": [
            square_feature(json!({ "ED_DESC": "Aljunied" }), 0.0, 1.0, 2.0, 1.0),
            square_feature(json!({ "ED_DESC": "Hougang" }), 2.0, 0.0, 2.0, 2.0),
            square_feature(json!({ "ED_DESC": "Sengkang" }), 0.0, 0.0, 2.0, 1.0),
        ]
    }));
    std::fs::write(dir.join("results.csv"), "\
year,constituency,constituency_type,candidates,party,vote_count,vote_percentage
2011,Aljunied,GRC,A|B|C|D|E,WP,72165,0.5472
2011,Aljunied,GRC,F|G|H|I|J,PAP,59732,0.4528
2011,Hougang,SMC,K,WP,14064,0.6474
2011,Hougang,SMC,L,PAP,7663,0.3526
2015,Hougang,SMC,K,WP,12224,0.5769
2015,Hougang,SMC,L,PAP,8964,0.4231
").unwrap();

    let config_path = dir.join("dataset.json");
    write_json(&config_path, json!({
        "years": [
            { "year": 2011, "path": "ElectoralBoundary2011.geojson" },
            { "year": 2015, "path": "ElectoralBoundary2015.geojson" },
        ],
        "results": "results.csv",
    }));
    DatasetConfig::from_path(&config_path).unwrap()
}

#[test]
fn loads_years_labels_and_results() {
    let dir = tempfile::tempdir().unwrap();
    let store = BoundaryStore::load(&dataset(dir.path())).unwrap();

    assert_eq!(store.years(), vec![Year(2011), Year(2015)]);
    assert_eq!(store.districts(), vec!["ALJUNIED", "HOUGANG", "SENGKANG"]);

    let y2011 = store.polygons_for_year(Year(2011)).unwrap();
    let aljunied = y2011.find("ALJUNIED").unwrap();
    assert_eq!(aljunied.info().unwrap().pax_number, 5);
    assert_eq!(aljunied.info().unwrap().result, "WP: 72165 (54.7%); PAP: 59732 (45.3%)");

    let y2015 = store.polygons_for_year(Year(2015)).unwrap();
    assert!(y2015.find("SENGKANG").unwrap().info().is_none());
    assert!(store.polygons_for_year(Year(2020)).is_none());
}

#[test]
fn compare_through_store_normalizes_the_label() {
    let dir = tempfile::tempdir().unwrap();
    let store = BoundaryStore::load(&dataset(dir.path())).unwrap();
    let engine = IntersectionEngine::default();

    let comparison = store.compare(&engine, Year(2011), Year(2015), "Sengkang").unwrap();
    assert_eq!(comparison.label(), "SENGKANG");
    assert_eq!(comparison.predecessors().iter().map(|d| d.label()).collect::<Vec<_>>(), vec!["ALJUNIED"]);
    assert!(matches!(comparison.added, Direction::Overlaps { .. }));
}

#[test]
fn static_view_shows_each_year() {
    let dir = tempfile::tempdir().unwrap();
    let store = BoundaryStore::load(&dataset(dir.path())).unwrap();
    let engine = IntersectionEngine::default();

    let view = store.compare(&engine, Year(2011), Year(2015), "ALJUNIED").unwrap().view(ViewMode::Static);
    assert_eq!(view.baseline.title, "Electoral Boundaries for Year 2011");
    assert!(view.baseline.message.is_none());
    let close = |a: Option<[f64; 2]>, b: [f64; 2]| a.is_some_and(|a| (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9);
    assert!(close(view.baseline.center, [1.0, 1.0]));
    assert!(close(view.comparison.center, [1.0, 1.5]));

    let features = view.comparison.features["features"].as_array().unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0]["properties"]["ED_DESC"], "ALJUNIED");
    assert_eq!(features[0]["properties"]["change"], "selected");
}

#[test]
fn changes_view_tags_removed_and_added_areas() {
    let dir = tempfile::tempdir().unwrap();
    let store = BoundaryStore::load(&dataset(dir.path())).unwrap();
    let engine = IntersectionEngine::default();

    let view = store.compare(&engine, Year(2011), Year(2015), "ALJUNIED").unwrap().view(ViewMode::Changes);
    assert_eq!(view.comparison.title, "Electoral Boundaries Changes from 2011 to 2015");
    assert!(view.comparison.message.is_none());

    let features = view.comparison.features["features"].as_array().unwrap();
    let tagged = features.iter()
        .map(|f| (f["properties"]["change"].as_str().unwrap(), f["properties"]["ED_DESC"].as_str().unwrap()))
        .collect::<Vec<_>>();
    // 2011 ALJUNIED lost its south half to SENGKANG and borders HOUGANG; 2015
    // ALJUNIED only borders 2011 HOUGANG.
    assert_eq!(tagged, vec![
        ("removed", "HOUGANG"),
        ("removed", "SENGKANG"),
        ("added", "HOUGANG"),
    ]);

    let sengkang = &features[1]["properties"];
    assert_eq!(sengkang["year"], "2015");
    assert!((sengkang["area"].as_f64().unwrap() - 2.0).abs() < 1e-9);
    assert_eq!(features[0]["properties"]["area"], 0.0);
    assert_eq!(features[2]["properties"]["result"], "WP: 14064 (64.7%); PAP: 7663 (35.3%)");
}

#[test]
fn changes_view_for_new_district_shows_predecessors() {
    let dir = tempfile::tempdir().unwrap();
    let store = BoundaryStore::load(&dataset(dir.path())).unwrap();
    let engine = IntersectionEngine::default();

    let view = store.compare(&engine, Year(2011), Year(2015), "SENGKANG").unwrap().view(ViewMode::Changes);
    assert_eq!(view.baseline.message.as_deref(), Some("No such constituency in year 2011"));
    assert_eq!(
        view.comparison.message.as_deref(),
        Some("No such constituency in year 2011. Hence no change comparison."),
    );

    let features = view.comparison.features["features"].as_array().unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0]["properties"]["ED_DESC"], "ALJUNIED");
    assert_eq!(features[0]["properties"]["change"], "predecessor");

    // The view serializes for a front end.
    let text = serde_json::to_string(&view).unwrap();
    assert!(text.contains("\"label\":\"SENGKANG\""));
}

#[test]
fn district_missing_from_later_year_shows_successors() {
    // Viewed from 2015 back to 2011, SENGKANG has no 2011 entry; its area was
    // part of ALJUNIED.
    let dir = tempfile::tempdir().unwrap();
    let store = BoundaryStore::load(&dataset(dir.path())).unwrap();
    let engine = IntersectionEngine::default();
    let comparison = store.compare(&engine, Year(2015), Year(2011), "SENGKANG").unwrap();

    let view = comparison.view(ViewMode::Static);
    assert!(view.baseline.message.is_none());
    assert_eq!(view.comparison.message.as_deref(), Some("No such constituency in year 2011"));
    let features = view.comparison.features["features"].as_array().unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0]["properties"]["ED_DESC"], "ALJUNIED");
    assert_eq!(features[0]["properties"]["year"], "2011");
    assert_eq!(features[0]["properties"]["change"], "successor");

    let view = comparison.view(ViewMode::Changes);
    assert_eq!(
        view.comparison.message.as_deref(),
        Some("No such constituency in year 2011. Hence no change comparison."),
    );
    let features = view.comparison.features["features"].as_array().unwrap();
    assert!(!features.is_empty());
    assert!(features.iter().all(|f| f["properties"]["change"] == "successor"));
    assert_eq!(features[0]["properties"]["result"], "WP: 72165 (54.7%); PAP: 59732 (45.3%)");
}
