//! Sheet parser for waypoint table imports
//!
//! This module turns raw sheet rows, as delivered by the workbook codec,
//! into validated waypoint records. Unusable rows are skipped and counted
//! rather than failing the import; only a header the resolver cannot use
//! aborts the whole operation.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and policy dispatch
//! - [`column_map`] - Header label resolution to column roles
//! - [`record_parser`] - Individual sheet row processing
//! - [`field_parsers`] - Utility functions for field normalization
//! - [`coordinates`] - Decimal degree and DMS notation conversion
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use waypoint_sheet::app::services::sheet_parser::SheetParser;
//! use waypoint_sheet::{Cell, ParseOptions};
//!
//! # fn example() -> waypoint_sheet::Result<()> {
//! let rows = vec![
//!     vec![
//!         Cell::from("ポイントID"),
//!         Cell::from("名称"),
//!         Cell::from("緯度"),
//!         Cell::from("経度"),
//!     ],
//!     vec![
//!         Cell::from("A-01"),
//!         Cell::from("本部"),
//!         Cell::from(35.6812),
//!         Cell::from(139.7671),
//!     ],
//! ];
//!
//! let parser = SheetParser::new(ParseOptions::default());
//! let result = parser.parse_rows(&rows)?;
//! assert_eq!(result.waypoints.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod column_map;
pub mod coordinates;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_map::ColumnMap;
pub use coordinates::{format_dms, parse_coordinate};
pub use field_parsers::{format_point_id, is_valid_point_id_format, normalize_elevation};
pub use parser::SheetParser;
pub use stats::{ParseResult, ParseStats};
