//! Common utilities for output formatters

use chrono::{DateTime, TimeZone, Utc};

/// Pattern used for timestamps in table and CSV rows
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The zero instant (0001-01-01T00:00:00Z), used when the API omits a timestamp
pub fn zero_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Render a timestamp for table and CSV rows
///
/// The zero instant is rendered literally ("0001-01-01 00:00:00"), never blanked.
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r')
    {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Join values into one CSV record (without line terminator)
pub fn csv_record<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|v| escape_csv(v.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
