//! Workbook container seam and import/export orchestration
//!
//! The editor reads and writes binary workbook files through a host-side
//! codec; this crate never touches the container format itself. This
//! module defines the codec seam and the two flows built on it: decode,
//! cap, and parse for imports; lay out and encode for exports.

use tracing::{debug, info};

use crate::app::models::SheetRow;
use crate::app::services::sheet_parser::{ParseResult, SheetParser};
use crate::app::services::waypoint_store::{WaypointStore, waypoint_rows};
use crate::config::{ColumnLabels, ParseOptions};
use crate::{Error, Result};

/// Binary workbook codec provided by the host application
///
/// Implementations decode the first worksheet of a workbook container
/// into rows of cells and encode rows back into a container.
pub trait WorkbookCodec {
    /// Decode the first worksheet of a workbook
    fn read_first_sheet(&self, bytes: &[u8]) -> Result<Vec<SheetRow>>;

    /// Encode rows as a single-worksheet workbook
    fn write_sheet(&self, rows: &[SheetRow]) -> Result<Vec<u8>>;
}

/// Reject sheets with more data rows than the configured cap
///
/// The first row is the header and does not count against the cap.
pub fn enforce_row_limit(rows: &[SheetRow], max_rows: usize) -> Result<()> {
    let data_rows = rows.len().saturating_sub(1);
    if data_rows > max_rows {
        return Err(Error::row_limit_exceeded(data_rows, max_rows));
    }
    Ok(())
}

/// Import a workbook: decode the first sheet, cap its size, and parse
pub fn import_workbook(
    codec: &dyn WorkbookCodec,
    bytes: &[u8],
    options: &ParseOptions,
) -> Result<ParseResult> {
    debug!("Importing workbook ({} bytes)", bytes.len());

    let rows = codec.read_first_sheet(bytes)?;
    enforce_row_limit(&rows, options.max_rows)?;

    SheetParser::new(options.clone()).parse_rows(&rows)
}

/// Export the stored waypoints as a workbook in the strict sheet layout
pub fn export_workbook(
    codec: &dyn WorkbookCodec,
    store: &WaypointStore,
    labels: &ColumnLabels,
) -> Result<Vec<u8>> {
    let rows = waypoint_rows(store, labels);
    let bytes = codec.write_sheet(&rows)?;

    info!("Exported {} waypoints as a workbook", store.count());
    Ok(bytes)
}
