//! Field normalization utilities for sheet records
//!
//! This module provides helper functions for reading cell values and for
//! normalizing the free-form field input the editor accepts: elevation
//! text, hand-typed point IDs, and mixed-width Japanese characters.

use std::sync::LazyLock;

use regex::Regex;

use crate::app::models::{Cell, SheetRow};
use crate::constants;
use crate::{Error, Result};

static POINT_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(constants::POINT_ID_PATTERN).expect("hard-coded pattern compiles")
});

static COMPACT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Z][0-9]{2}$").expect("hard-coded pattern compiles"));

// =============================================================================
// Cell Access
// =============================================================================

/// Render one cell as trimmed text
///
/// Numbers take their shortest display form ("123", "34.8"); non-finite
/// numbers render as empty text.
pub fn text_value(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(text) => text.trim().to_string(),
        Cell::Number(value) if value.is_finite() => format!("{}", value),
        Cell::Number(_) => String::new(),
    }
}

/// Trimmed text of the cell at `index`, or "" when the column is absent
/// or the row is too short
pub fn cell_text(row: &SheetRow, index: Option<usize>) -> String {
    index
        .and_then(|i| row.get(i))
        .map(text_value)
        .unwrap_or_default()
}

/// Trimmed text of a required cell; errors when the value is blank
pub fn required_text(row: &SheetRow, index: Option<usize>, label: &str) -> Result<String> {
    let text = cell_text(row, index);
    if text.is_empty() {
        return Err(Error::validation(format!(
            "empty value for required column '{}'",
            label
        )));
    }
    Ok(text)
}

/// True when every cell in the row is empty or whitespace-only text
pub fn is_blank_row(row: &SheetRow) -> bool {
    row.iter().all(Cell::is_blank)
}

// =============================================================================
// Elevation Normalization
// =============================================================================

/// Normalize raw elevation text to display form
///
/// Numeric input is rounded to one decimal place, with a ".0" tail
/// collapsed to the integer form. Non-numeric input passes through
/// trimmed so the user can see and fix it.
pub fn normalize_elevation(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => normalize_elevation_value(value),
        _ => trimmed.to_string(),
    }
}

/// Normalize a numeric elevation to display form
pub fn normalize_elevation_value(value: f64) -> String {
    let rounded = format!("{:.1}", value);
    match rounded.strip_suffix(".0") {
        // "-0" would survive rounding of small negatives
        Some("-0") => "0".to_string(),
        Some(integer) => integer.to_string(),
        None => rounded,
    }
}

/// True when the elevation text is a finite number greater than zero
pub fn is_positive_elevation(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|v| v.is_finite() && v > 0.0)
        .unwrap_or(false)
}

/// True when a stored elevation should be backfilled from the lookup
/// service; any value that is not a positive number qualifies
pub fn needs_elevation_lookup(value: &str) -> bool {
    !is_positive_elevation(value)
}

// =============================================================================
// Point ID Handling
// =============================================================================

/// Replace full-width alphanumerics, hyphen variants, and ideographic
/// spaces with their ASCII counterparts
pub fn to_half_width(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            constants::IDEOGRAPHIC_SPACE => ' ',
            c if constants::HYPHEN_VARIANTS.contains(&c) => '-',
            c @ '\u{FF01}'..='\u{FF5E}' => {
                char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
            }
            c => c,
        })
        .collect()
}

/// Heuristically correct hand-typed point ID input toward "A-01" form
///
/// Full-width characters are narrowed, letters uppercased, and whitespace
/// dropped. A lone trailing digit is zero-padded ("A1" -> "A01",
/// "A-1" -> "A-01"), and the compact form that padding produces gains its
/// hyphen ("A01" -> "A-01"). Input carrying any other characters is
/// returned after the character cleanup only, so IDs like "仮01" survive.
pub fn format_point_id(raw: &str) -> String {
    let cleaned: String = to_half_width(raw)
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if cleaned.is_empty()
        || cleaned
            .chars()
            .any(|c| !c.is_ascii_alphanumeric() && c != '-')
    {
        return cleaned;
    }

    // Pad a lone trailing digit; a two-digit tail is already padded
    let chars: Vec<char> = cleaned.chars().collect();
    let len = chars.len();
    let pad_needed =
        chars[len - 1].is_ascii_digit() && (len == 1 || !chars[len - 2].is_ascii_digit());
    if !pad_needed {
        return cleaned;
    }

    let (head, last) = cleaned.split_at(len - 1);
    let padded = format!("{}0{}", head, last);

    // Only the compact shape the padding just created gains a hyphen;
    // IDs typed as "A01" or "AB01" are left alone
    if !padded.contains('-') && COMPACT_ID_RE.is_match(&padded) {
        return format!("{}-{}", &padded[..1], &padded[1..]);
    }

    padded
}

/// Check whether a point ID is in the canonical "A-01" form
///
/// Blank IDs pass; one is generated at insert time.
pub fn is_valid_point_id_format(id: &str) -> bool {
    let trimmed = id.trim();
    trimmed.is_empty() || POINT_ID_RE.is_match(trimmed)
}
