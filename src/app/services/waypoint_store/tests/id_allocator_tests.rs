//! Tests for generated waypoint ID allocation

use crate::app::models::NewWaypoint;
use crate::app::services::waypoint_store::WaypointStore;
use crate::app::services::waypoint_store::id_allocator::{
    format_generated_id, next_available_id,
};
use crate::config::IdGeneration;

#[test]
fn test_first_id_starts_at_one() {
    let id = next_available_id(std::iter::empty(), "仮");
    assert_eq!(id, "仮01");
}

#[test]
fn test_gap_is_filled_first() {
    let existing = ["仮01", "仮03", "仮04"];
    let id = next_available_id(existing.iter().copied(), "仮");
    assert_eq!(id, "仮02");
}

#[test]
fn test_sequence_continues_after_last() {
    let existing = ["仮01", "仮02"];
    assert_eq!(next_available_id(existing.iter().copied(), "仮"), "仮03");
}

#[test]
fn test_foreign_ids_reserve_nothing() {
    let existing = ["A-01", "仮A", "仮1X", "P3", "仮"];
    assert_eq!(next_available_id(existing.iter().copied(), "仮"), "仮01");
}

#[test]
fn test_unpadded_suffix_still_reserves() {
    let existing = ["仮1"];
    assert_eq!(next_available_id(existing.iter().copied(), "仮"), "仮02");
}

#[test]
fn test_padding_stops_at_two_digits() {
    assert_eq!(format_generated_id("仮", 7), "仮07");
    assert_eq!(format_generated_id("仮", 42), "仮42");
    assert_eq!(format_generated_id("仮", 100), "仮100");
}

#[test]
fn test_removal_frees_the_number() {
    let mut store = WaypointStore::new();
    store.add(NewWaypoint::at(35.0, 139.0)).unwrap();
    store.add(NewWaypoint::at(35.1, 139.1)).unwrap();
    store.remove("仮01");

    let id = store.add(NewWaypoint::at(35.2, 139.2)).unwrap().id.clone();
    assert_eq!(id, "仮01");
}

#[test]
fn test_type_prefix_table_selects_prefix() {
    let id_generation = IdGeneration::default().with_type_prefix("camera", "C");
    let mut store = WaypointStore::with_id_generation(id_generation);

    let camera = store
        .add(NewWaypoint::at(35.0, 139.0).with_waypoint_type("camera"))
        .unwrap()
        .id
        .clone();
    let untyped = store.add(NewWaypoint::at(35.1, 139.1)).unwrap().id.clone();

    assert_eq!(camera, "C01");
    assert_eq!(untyped, "仮01");
}

#[test]
fn test_prefixed_sequences_run_independently() {
    let id_generation = IdGeneration::default().with_type_prefix("camera", "C");
    let mut store = WaypointStore::with_id_generation(id_generation);

    store.add(NewWaypoint::at(35.0, 139.0)).unwrap();
    store
        .add(NewWaypoint::at(35.1, 139.1).with_waypoint_type("camera"))
        .unwrap();
    store.add(NewWaypoint::at(35.2, 139.2)).unwrap();
    store
        .add(NewWaypoint::at(35.3, 139.3).with_waypoint_type("camera"))
        .unwrap();

    assert_eq!(store.ids(), vec!["仮01", "C01", "仮02", "C02"]);
}
