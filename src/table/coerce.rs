//! Lenient scalar coercion with safe fallback defaults.
//!
//! Chart data arrives from CSV uploads and ad-hoc queries; cells are often
//! missing, mistyped, or literal `"null"` strings. Coercers never fail:
//! they fall back to `0`, `"Unknown"`, or `None`.

use chrono::{DateTime, NaiveDate, Utc};

use super::CellValue;
use crate::config::ScaleType;
use crate::shape::AxisValue;

/// Date formats tried in order when coercing text cells.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Coerce a cell to a finite number, falling back to `0.0`.
///
/// Finite numbers pass through. Text is trimmed and parsed; empty strings
/// and the literals `"null"` / `"undefined"` are rejected. Anything else
/// (missing cells, dates, NaN, infinities) yields `0.0`. Never panics.
#[must_use]
pub fn to_number(value: Option<&CellValue>) -> f64 {
    match value {
        Some(CellValue::Number(n)) if n.is_finite() => *n,
        Some(CellValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty()
                || trimmed.eq_ignore_ascii_case("null")
                || trimmed.eq_ignore_ascii_case("undefined")
            {
                return 0.0;
            }
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

/// Coerce a cell to a trimmed, non-empty string.
///
/// Missing/null cells and whitespace-only text become the literal
/// `"Unknown"` so category labels are always renderable.
#[must_use]
pub fn clean_string(value: Option<&CellValue>) -> String {
    let text = match value {
        None | Some(CellValue::Null) => String::new(),
        Some(cell) => cell.to_string(),
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "Unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Coerce a cell to a calendar date, or `None` when unparseable.
///
/// Dates pass through. Text is tried against `%Y-%m-%d`, `%m/%d/%Y`,
/// `%d/%m/%Y` (in that order), then RFC 3339. Numbers are read as epoch
/// milliseconds.
#[must_use]
pub fn to_date(value: Option<&CellValue>) -> Option<NaiveDate> {
    match value {
        Some(CellValue::Date(d)) => Some(*d),
        Some(CellValue::Text(s)) => parse_date_str(s),
        Some(CellValue::Number(n)) if n.is_finite() => {
            DateTime::from_timestamp_millis(*n as i64).map(|dt| dt.date_naive())
        }
        _ => None,
    }
}

/// Parse a date out of raw text, trying the known formats in order.
#[must_use]
pub fn parse_date_str(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(d);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Coerce an x cell per the declared axis scale.
///
/// `Time` falls back to today, `Linear` to `0.0`, `Point` to `"Unknown"`;
/// an x value always exists, even for a garbage cell.
#[must_use]
pub fn process_x_value(value: Option<&CellValue>, scale: ScaleType) -> AxisValue {
    match scale {
        ScaleType::Time => {
            AxisValue::Date(to_date(value).unwrap_or_else(|| Utc::now().date_naive()))
        }
        ScaleType::Linear => AxisValue::Number(to_number(value)),
        ScaleType::Point => AxisValue::Text(clean_string(value)),
    }
}
