//! Test utilities for elevation enrichment testing
//!
//! This module provides provider doubles and store fixtures shared across
//! the test modules.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::app::models::Waypoint;
use crate::app::services::elevation_enricher::ElevationProvider;
use crate::app::services::waypoint_store::WaypointStore;

// Test modules
mod enricher_tests;
mod stats_tests;

/// Provider double returning a fixed response and counting lookups
pub struct FixedProvider {
    response: Option<f64>,
    calls: AtomicUsize,
}

impl FixedProvider {
    pub fn new(response: Option<f64>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ElevationProvider for FixedProvider {
    async fn fetch_elevation(&self, _lat: f64, _lng: f64) -> Option<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
    }
}

/// Provider double replaying scripted responses in call order
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<Option<f64>>>,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<Option<f64>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ElevationProvider for ScriptedProvider {
    async fn fetch_elevation(&self, _lat: f64, _lng: f64) -> Option<f64> {
        self.responses.lock().unwrap().pop_front().flatten()
    }
}

/// Store holding one waypoint per (id, elevation) pair
pub fn store_with_elevations(entries: &[(&str, &str)]) -> WaypointStore {
    let waypoints = entries
        .iter()
        .enumerate()
        .map(|(index, (id, elevation))| Waypoint {
            id: id.to_string(),
            lat: 35.0 + index as f64 * 0.1,
            lng: 139.0 + index as f64 * 0.1,
            elevation: elevation.to_string(),
            location: String::new(),
            remarks: String::new(),
            waypoint_type: String::new(),
        })
        .collect();

    let mut store = WaypointStore::new();
    store.replace_all(waypoints).unwrap();
    store
}
