//! Test utilities for waypoint store testing
//!
//! This module provides the shared waypoint fixtures used across the test
//! modules.

use crate::app::models::Waypoint;

mod id_allocator_tests;

/// Waypoint with the given ID and position, all text fields empty
pub fn create_test_waypoint(id: &str, lat: f64, lng: f64) -> Waypoint {
    Waypoint {
        id: id.to_string(),
        lat,
        lng,
        elevation: String::new(),
        location: String::new(),
        remarks: String::new(),
        waypoint_type: String::new(),
    }
}
