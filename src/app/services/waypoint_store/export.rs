//! Waypoint export as sheet rows and GeoJSON
//!
//! Exports read the store without modifying it. Sheet rows reproduce the
//! strict import layout so an exported sheet re-imports losslessly;
//! GeoJSON carries the same fields as feature properties for map display.

use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, Value as JsonValue};

use super::WaypointStore;
use crate::Result;
use crate::app::models::{Cell, SheetRow, Waypoint};
use crate::config::ColumnLabels;
use crate::constants::round_coordinate;

/// Sheet rows for the stored waypoints: a header row, then one row per
/// waypoint in insertion order
///
/// Coordinates are rounded to the export precision and written as numeric
/// cells. Elevation becomes a numeric cell when its text parses as a
/// number, an empty cell when blank, and raw text otherwise.
pub fn waypoint_rows(store: &WaypointStore, labels: &ColumnLabels) -> Vec<SheetRow> {
    let mut rows = Vec::with_capacity(store.count() + 1);

    rows.push(vec![
        Cell::text(labels.point_id.as_str()),
        Cell::text(labels.location.as_str()),
        Cell::text(labels.latitude.as_str()),
        Cell::text(labels.longitude.as_str()),
        Cell::text(labels.elevation.as_str()),
        Cell::text(labels.remarks.as_str()),
    ]);

    for waypoint in &store.waypoints {
        rows.push(vec![
            Cell::text(waypoint.id.as_str()),
            Cell::text(waypoint.location.as_str()),
            Cell::Number(round_coordinate(waypoint.lat)),
            Cell::Number(round_coordinate(waypoint.lng)),
            elevation_cell(&waypoint.elevation),
            Cell::text(waypoint.remarks.as_str()),
        ]);
    }

    rows
}

/// GeoJSON FeatureCollection of the stored waypoints
///
/// Each waypoint becomes a Point feature with `(lng, lat)` coordinates
/// rounded to the export precision and its text fields as properties; the
/// category tag is included as `type` only when set.
pub fn waypoint_geojson(store: &WaypointStore) -> FeatureCollection {
    let features = store.waypoints.iter().map(waypoint_feature).collect();

    FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    }
}

/// GeoJSON document for the stored waypoints as a JSON string
pub fn waypoint_geojson_string(store: &WaypointStore) -> Result<String> {
    Ok(serde_json::to_string(&waypoint_geojson(store))?)
}

fn waypoint_feature(waypoint: &Waypoint) -> Feature {
    let geometry = Geometry::new(Value::Point(vec![
        round_coordinate(waypoint.lng),
        round_coordinate(waypoint.lat),
    ]));

    let mut properties = Map::new();
    properties.insert("id".to_string(), JsonValue::from(waypoint.id.clone()));
    properties.insert(
        "location".to_string(),
        JsonValue::from(waypoint.location.clone()),
    );
    properties.insert(
        "elevation".to_string(),
        JsonValue::from(waypoint.elevation.clone()),
    );
    properties.insert(
        "remarks".to_string(),
        JsonValue::from(waypoint.remarks.clone()),
    );
    if !waypoint.waypoint_type.is_empty() {
        properties.insert(
            "type".to_string(),
            JsonValue::from(waypoint.waypoint_type.clone()),
        );
    }

    Feature {
        geometry: Some(geometry),
        properties: Some(properties),
        id: None,
        bbox: None,
        foreign_members: None,
    }
}

/// Elevation as a cell: numeric when the text parses, raw text otherwise
fn elevation_cell(elevation: &str) -> Cell {
    if elevation.is_empty() {
        return Cell::Empty;
    }
    match elevation.parse::<f64>() {
        Ok(value) if value.is_finite() => Cell::Number(value),
        _ => Cell::Text(elevation.to_string()),
    }
}
