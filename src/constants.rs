//! Application constants for the waypoint sheet editor
//!
//! This module contains the header label tables, ID formatting rules,
//! and default limits used throughout the waypoint sheet library.

// =============================================================================
// Header Labels
// =============================================================================

/// Header labels recognized by the strict importer (exact match)
pub mod labels {
    /// Point ID column (ポイントID)
    pub const POINT_ID: &str = "ポイントID";

    /// Location name column (名称)
    pub const LOCATION: &str = "名称";

    /// Latitude column (緯度)
    pub const LATITUDE: &str = "緯度";

    /// Longitude column (経度)
    pub const LONGITUDE: &str = "経度";

    /// Elevation column (標高)
    pub const ELEVATION: &str = "標高";

    /// Remarks column (備考)
    pub const REMARKS: &str = "備考";
}

/// Substring tokens accepted by the loose importer
pub mod loose_tokens {
    /// A header containing this token maps to the point ID role (ポイント)
    pub const POINT_ID: &str = "ポイント";

    /// Tokens that map a header to the location role (名称 / 地名 / 場所)
    pub const LOCATION: &[&str] = &["名称", "地名", "場所"];
}

// =============================================================================
// Point ID Constants
// =============================================================================

/// Prefix marking auto-assigned temporary IDs (仮 = provisional)
pub const TEMP_ID_PREFIX: &str = "仮";

/// Prefix for parser-assigned fallback IDs under the loose policy
pub const LOOSE_AUTO_ID_PREFIX: &str = "P";

/// Canonical point ID shape: one letter, a hyphen, two digits
pub const POINT_ID_PATTERN: &str = "^[A-Z]-[0-9]{2}$";

/// Zero-padded width of the numeric part of generated IDs
pub const GENERATED_ID_DIGITS: usize = 2;

// =============================================================================
// Character Width Normalization
// =============================================================================

/// Hyphen-like characters replaced with ASCII '-' during ID correction
pub const HYPHEN_VARIANTS: &[char] = &['－', 'ー', '―', '‐', '−'];

/// Ideographic space replaced with an ASCII space
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

// =============================================================================
// Import and Enrichment Defaults
// =============================================================================

/// Maximum number of data rows accepted by a single sheet import
pub const MAX_IMPORT_ROWS: usize = 1000;

/// Pause between consecutive elevation lookups, in milliseconds
pub const ELEVATION_REQUEST_DELAY_MS: u64 = 100;

// =============================================================================
// Export Configuration
// =============================================================================

/// Decimal places kept for exported coordinates
pub const COORDINATE_EXPORT_DECIMALS: i32 = 5;

// =============================================================================
// Helper Functions
// =============================================================================

/// Round a coordinate to the export precision
pub fn round_coordinate(value: f64) -> f64 {
    let factor = 10f64.powi(COORDINATE_EXPORT_DECIMALS);
    (value * factor).round() / factor
}
