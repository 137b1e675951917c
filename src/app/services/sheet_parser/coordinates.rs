//! Coordinate conversion between decimal degrees and DMS notation
//!
//! Sheet data mixes plain decimal coordinates with degree-minute-second
//! text in both symbol (35°40'53.0"N) and kanji (35度40分53.0秒) notation.
//! Parsing never fails; unusable input yields the `f64::NAN` sentinel,
//! which callers must check before treating the value as a position.

use std::sync::LazyLock;

use regex::Regex;

use crate::app::models::Cell;

static DMS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^([+-]?\d+(?:\.\d+)?)[°度]\s*(\d+(?:\.\d+)?)['′分]\s*(\d+(?:\.\d+)?)["″秒]?\s*([NSEWnsew])?$"#,
    )
    .expect("hard-coded pattern compiles")
});

/// Parse a coordinate cell into decimal degrees
///
/// Numeric cells pass through unchanged. Text cells accept plain decimal
/// notation or DMS notation with an optional direction suffix. Anything
/// else yields `f64::NAN`.
pub fn parse_coordinate(cell: &Cell) -> f64 {
    match cell {
        Cell::Number(value) => *value,
        Cell::Text(text) => parse_coordinate_text(text),
        Cell::Empty => f64::NAN,
    }
}

/// Parse coordinate text into decimal degrees
pub fn parse_coordinate_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }

    if let Some(caps) = DMS_RE.captures(trimmed) {
        return dms_to_decimal(&caps);
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Format decimal degrees as DMS notation with a direction suffix
///
/// Seconds are rounded to two decimals, with carry into minutes and
/// degrees so 59.995" renders as the next full minute rather than 60.00".
pub fn format_dms(decimal: f64, is_longitude: bool) -> String {
    if !decimal.is_finite() {
        return String::new();
    }

    let direction = match (is_longitude, decimal < 0.0) {
        (false, false) => "N",
        (false, true) => "S",
        (true, false) => "E",
        (true, true) => "W",
    };

    // Work in centiseconds so rounding carries cleanly across units
    let total_centiseconds = (decimal.abs() * 360_000.0).round() as u64;
    let centiseconds = total_centiseconds % 6_000;
    let total_minutes = total_centiseconds / 6_000;
    let minutes = total_minutes % 60;
    let degrees = total_minutes / 60;

    format!(
        "{}°{}'{:.2}\"{}",
        degrees,
        minutes,
        centiseconds as f64 / 100.0,
        direction
    )
}

fn dms_to_decimal(caps: &regex::Captures<'_>) -> f64 {
    let degrees_text = &caps[1];
    let degrees: f64 = degrees_text.parse().unwrap_or(f64::NAN);
    let minutes: f64 = caps[2].parse().unwrap_or(f64::NAN);
    let seconds: f64 = caps[3].parse().unwrap_or(f64::NAN);

    let magnitude = degrees.abs() + minutes / 60.0 + seconds / 3600.0;

    // A direction letter fixes the sign; otherwise the degrees sign applies
    let negative = match caps.get(4) {
        Some(direction) => matches!(
            direction.as_str().to_ascii_uppercase().as_str(),
            "S" | "W"
        ),
        None => degrees_text.starts_with('-'),
    };

    if negative { -magnitude } else { magnitude }
}
