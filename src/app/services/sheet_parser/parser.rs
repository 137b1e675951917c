//! Core sheet parser implementation
//!
//! This module provides the main parser orchestration: header resolution,
//! per-row dispatch, and bookkeeping of skipped rows.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::column_map::ColumnMap;
use super::field_parsers::is_blank_row;
use super::record_parser::{AutoIdSequence, parse_waypoint_record};
use super::stats::{ParseResult, ParseStats};
use crate::config::{ParseOptions, ParsePolicy};
use crate::{Error, Result, SheetRow};

/// Parser for waypoint sheets
///
/// Row 0 is always treated as the header. Data rows that cannot produce a
/// valid waypoint are skipped and recorded in the statistics; a repeated
/// ID keeps its first row. Every call starts from an empty result, so
/// re-parsing a sheet replaces rather than appends.
#[derive(Debug, Clone)]
pub struct SheetParser {
    options: ParseOptions,
}

impl SheetParser {
    /// Create a new parser with the given import options
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Create a parser with the default strict options
    pub fn with_defaults() -> Self {
        Self::new(ParseOptions::default())
    }

    /// Options this parser was built with
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse sheet rows into waypoints with statistics
    ///
    /// Under the strict policy an unresolvable header aborts the import
    /// with [`Error::MissingColumns`]; under the loose policy it yields
    /// an empty result.
    pub fn parse_rows(&self, rows: &[SheetRow]) -> Result<ParseResult> {
        info!(
            "Parsing sheet: {} rows, {:?} policy",
            rows.len(),
            self.options.policy
        );

        let mut stats = ParseStats::new();
        let mut waypoints = Vec::new();

        let Some((header, data_rows)) = rows.split_first() else {
            warn!("Sheet contains no rows");
            return Ok(ParseResult { waypoints, stats });
        };

        let map = ColumnMap::resolve(header, &self.options);
        let missing = map.missing_required(&self.options);
        if !missing.is_empty() {
            match self.options.policy {
                ParsePolicy::Strict => {
                    return Err(Error::missing_columns(missing));
                }
                ParsePolicy::Loose => {
                    // Hand-assembled sheets without usable coordinate
                    // columns degrade to an empty import
                    warn!(
                        "Header resolution failed, nothing imported: missing {}",
                        missing.join(", ")
                    );
                    return Ok(ParseResult { waypoints, stats });
                }
            }
        }
        debug!("Resolved columns: {:?}", map);

        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut auto_ids = AutoIdSequence::new();

        for (offset, row) in data_rows.iter().enumerate() {
            // 1-based sheet position, counting the header
            let row_number = offset + 2;

            if is_blank_row(row) {
                continue;
            }
            stats.total_rows += 1;

            match parse_waypoint_record(row, &map, &self.options, &mut auto_ids) {
                Ok(waypoint) => {
                    if !seen_ids.insert(waypoint.id.clone()) {
                        let error = Error::duplicate_id(waypoint.id.clone());
                        stats.rows_skipped += 1;
                        stats.errors.push(format!("row {}: {}", row_number, error));
                        debug!("Skipped row {}: {}", row_number, error);
                        continue;
                    }

                    waypoints.push(waypoint);
                    stats.waypoints_parsed += 1;
                }
                Err(e) => {
                    stats.rows_skipped += 1;
                    stats.errors.push(format!("row {}: {}", row_number, e));
                    debug!("Skipped row {}: {}", row_number, e);
                }
            }
        }

        info!(
            "Parsed {} waypoints from {} data rows ({} skipped)",
            stats.waypoints_parsed, stats.total_rows, stats.rows_skipped
        );

        Ok(ParseResult { waypoints, stats })
    }
}
