//! Best-effort parsing of heterogeneous date and amount text.
//!
//! These helpers never fail loudly: an unparseable date is `None`, an
//! unparseable amount is `0.0`. Dropping or defaulting happens at the
//! normalization layer, not here.

use chrono::NaiveDate;

/// Formats tried when neither the day-first slash form nor the ISO
/// hyphen form matches. A fixed, unambiguous list — stand-in for a
/// locale-dependent generic parse, which a library cannot reproduce.
const FALLBACK_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%B %d, %Y", // January 2, 2024
    "%b %d, %Y", // Jan 2, 2024
    "%d %B %Y",  // 2 January 2024
    "%d %b %Y",  // 2 Jan 2024
];

/// Normalize heterogeneous date text into a calendar date.
///
/// Recognized formats, in priority order:
/// 1. `D/M/YYYY` / `DD/MM/YYYY` — slash form is *always* day-first,
///    regardless of locale.
/// 2. `YYYY-M-D` / `YYYY-MM-DD` — ISO-like hyphen form.
/// 3. A small set of unambiguous fallback formats.
///
/// Empty or blank input short-circuits to `None` without trying any
/// format. Never panics, never yields an out-of-range date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains('/') {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
            return Some(date);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Parse a monetary amount, substituting `0.0` on failure.
///
/// Thousands separators are tolerated ("1,234.5"); anything else that
/// does not read as a decimal number becomes zero. A bad numeric field
/// never rejects a row.
pub fn parse_amount(input: &str) -> f64 {
    let cleaned = input.trim().replace(',', "");
    cleaned.parse::<f64>().unwrap_or(0.0)
}
