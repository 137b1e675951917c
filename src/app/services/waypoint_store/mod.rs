//! In-memory waypoint store with insertion-order semantics
//!
//! This module provides the editing core of the waypoint sheet: an ordered
//! waypoint collection with ID lookups, patch-based updates, duplicate
//! rejection, and automatic ID generation for waypoints added without one.

use crate::app::models::{NewWaypoint, Waypoint, WaypointPatch};
use crate::app::services::sheet_parser::normalize_elevation;
use crate::config::IdGeneration;
use crate::{Error, Result};
use std::collections::HashSet;
use tracing::{debug, info};

pub mod export;
pub mod id_allocator;

#[cfg(test)]
pub mod tests;

// Re-export key functions for convenience
pub use export::{waypoint_geojson, waypoint_geojson_string, waypoint_rows};

/// Ordered waypoint collection with ID-based access
///
/// Waypoints keep their insertion order, which is the row order of the last
/// import plus any manual additions. Lookups scan the collection linearly;
/// a store holds at most a few hundred waypoints.
#[derive(Debug, Clone, Default)]
pub struct WaypointStore {
    /// Waypoints in insertion order
    pub(crate) waypoints: Vec<Waypoint>,

    /// Prefix table for generated waypoint IDs
    pub(crate) id_generation: IdGeneration,
}

impl WaypointStore {
    /// Create a new empty waypoint store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a custom ID generation prefix table
    pub fn with_id_generation(id_generation: IdGeneration) -> Self {
        Self {
            waypoints: Vec::new(),
            id_generation,
        }
    }

    /// Get a waypoint by ID
    pub fn get_by_id(&self, id: &str) -> Option<&Waypoint> {
        self.waypoints.iter().find(|waypoint| waypoint.id == id)
    }

    /// Check if a waypoint with the given ID exists
    pub fn contains(&self, id: &str) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Get all waypoints as an owned snapshot, in insertion order
    pub fn get_all(&self) -> Vec<Waypoint> {
        self.waypoints.clone()
    }

    /// Get all waypoint IDs in insertion order
    pub fn ids(&self) -> Vec<String> {
        self.waypoints
            .iter()
            .map(|waypoint| waypoint.id.clone())
            .collect()
    }

    /// Get the number of stored waypoints
    pub fn count(&self) -> usize {
        self.waypoints.len()
    }

    /// Check whether the store holds no waypoints
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Add a waypoint, generating an ID when the request carries none
    ///
    /// A missing or blank ID is replaced with the next free generated ID
    /// for the request's waypoint type. Elevation text is normalized the
    /// same way imported elevation is.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateId`] when the ID is already taken and
    /// [`Error::Validation`] when the coordinates are not finite.
    ///
    /// # Examples
    /// ```
    /// use waypoint_sheet::NewWaypoint;
    /// use waypoint_sheet::app::services::waypoint_store::WaypointStore;
    ///
    /// let mut store = WaypointStore::new();
    /// let waypoint = store.add(NewWaypoint::at(35.6812, 139.7671)).unwrap();
    /// assert_eq!(waypoint.id, "仮01");
    /// ```
    pub fn add(&mut self, request: NewWaypoint) -> Result<&Waypoint> {
        let waypoint_type = request.waypoint_type.unwrap_or_default();

        let id = match request.id.map(|id| id.trim().to_string()) {
            Some(id) if !id.is_empty() => id,
            _ => self.next_generated_id(&waypoint_type),
        };

        if self.contains(&id) {
            return Err(Error::duplicate_id(id));
        }

        let waypoint = Waypoint::new(
            id,
            request.lat,
            request.lng,
            normalize_elevation(&request.elevation.unwrap_or_default()),
            request.location.unwrap_or_default(),
            request.remarks.unwrap_or_default(),
            waypoint_type,
        )?;

        debug!("Added waypoint '{}'", waypoint.id);
        self.waypoints.push(waypoint);

        let index = self.waypoints.len() - 1;
        Ok(&self.waypoints[index])
    }

    /// Apply a partial update to a stored waypoint
    ///
    /// Returns the updated waypoint, or `Ok(None)` when no waypoint has the
    /// given ID. The patch is validated against a copy, so a rejected update
    /// leaves the stored waypoint untouched. A supplied elevation is
    /// re-normalized; a rename is checked against the other stored IDs.
    pub fn update(&mut self, id: &str, patch: WaypointPatch) -> Result<Option<Waypoint>> {
        let Some(index) = self.position_of(id) else {
            debug!("Update target '{}' not found", id);
            return Ok(None);
        };

        let mut updated = self.waypoints[index].clone();

        if let Some(new_id) = patch.id {
            let new_id = new_id.trim().to_string();
            if new_id != updated.id && self.contains(&new_id) {
                return Err(Error::duplicate_id(new_id));
            }
            updated.id = new_id;
        }
        if let Some(lat) = patch.lat {
            updated.lat = lat;
        }
        if let Some(lng) = patch.lng {
            updated.lng = lng;
        }
        if let Some(elevation) = patch.elevation {
            updated.elevation = normalize_elevation(&elevation);
        }
        if let Some(location) = patch.location {
            updated.location = location;
        }
        if let Some(remarks) = patch.remarks {
            updated.remarks = remarks;
        }
        if let Some(waypoint_type) = patch.waypoint_type {
            updated.waypoint_type = waypoint_type;
        }

        updated.validate()?;

        debug!("Updated waypoint '{}'", updated.id);
        self.waypoints[index] = updated.clone();
        Ok(Some(updated))
    }

    /// Remove a waypoint by ID, returning it when it existed
    pub fn remove(&mut self, id: &str) -> Option<Waypoint> {
        let index = self.position_of(id)?;
        let removed = self.waypoints.remove(index);
        debug!("Removed waypoint '{}'", removed.id);
        Some(removed)
    }

    /// Replace the entire collection, the commit path of a sheet import
    ///
    /// The replacement is validated as a whole before anything is swapped
    /// in; a duplicate ID or a non-finite coordinate rejects the batch and
    /// keeps the current collection.
    pub fn replace_all(&mut self, waypoints: Vec<Waypoint>) -> Result<usize> {
        let mut seen = HashSet::with_capacity(waypoints.len());
        for waypoint in &waypoints {
            waypoint.validate()?;
            if !seen.insert(waypoint.id.as_str()) {
                return Err(Error::duplicate_id(waypoint.id.clone()));
            }
        }

        let count = waypoints.len();
        self.waypoints = waypoints;
        info!("Store replaced with {} waypoints", count);
        Ok(count)
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.waypoints.iter().position(|waypoint| waypoint.id == id)
    }
}
