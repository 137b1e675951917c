//! Waypoint Sheet Library
//!
//! A Rust library implementing the core of a map-based waypoint editor:
//! importing waypoint tables from spreadsheet data, normalizing free-form
//! field input, and maintaining the edited waypoint collection.
//!
//! This library provides tools for:
//! - Resolving Japanese header labels to column roles (strict and loose)
//! - Parsing sheet rows into validated waypoint records with skip tracking
//! - Normalizing elevations, point IDs, and DMS/decimal coordinates
//! - Managing an ordered waypoint collection with gap-filling ID assignment
//! - Backfilling missing elevations from a pluggable lookup service
//! - Exporting waypoints as sheet rows or GeoJSON
//!
//! The interactive map, the binary workbook codec, and the elevation web
//! service live in the host application; this crate talks to them through
//! the [`WorkbookCodec`](app::services::workbook::WorkbookCodec) and
//! [`ElevationProvider`](app::services::elevation_enricher::ElevationProvider)
//! seams.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod elevation_enricher;
        pub mod sheet_parser;
        pub mod waypoint_store;
        pub mod workbook;
    }
    pub mod adapters {
        pub mod form;
    }
}

// Re-export commonly used types
pub use app::models::{Cell, NewWaypoint, SheetRow, Waypoint, WaypointPatch};
pub use config::{ParseOptions, ParsePolicy};

/// Result type alias for waypoint sheet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for waypoint sheet operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Required header labels could not be resolved to columns
    #[error("required columns not found in header row: {}", labels.join(", "))]
    MissingColumns { labels: Vec<String> },

    /// Field data rejected by validation
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Waypoint ID already present in the collection
    #[error("duplicate waypoint id: {id}")]
    DuplicateId { id: String },

    /// Imported sheet exceeds the row cap
    #[error("sheet has {row_count} data rows, exceeding the limit of {limit}")]
    RowLimitExceeded { row_count: usize, limit: usize },

    /// Workbook container could not be read or written
    #[error("workbook error: {message}")]
    Workbook {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a missing columns error from the unresolved labels
    pub fn missing_columns(labels: Vec<String>) -> Self {
        Self::MissingColumns { labels }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Create a row limit error
    pub fn row_limit_exceeded(row_count: usize, limit: usize) -> Self {
        Self::RowLimitExceeded { row_count, limit }
    }

    /// Create a workbook error with an underlying cause
    pub fn workbook(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Workbook {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a workbook error with a simple message
    pub fn workbook_error(message: impl Into<String>) -> Self {
        Self::Workbook {
            message: message.into(),
            source: None,
        }
    }
}

// Automatic conversions from common error types
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Workbook {
            message: "JSON serialization failed".to_string(),
            source: Some(Box::new(error)),
        }
    }
}
