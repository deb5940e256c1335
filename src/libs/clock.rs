//! Time-of-day parsing and Clockify timestamp formatting.

use super::error::{DclError, Result};
use chrono::{DateTime, NaiveTime, TimeZone, Utc};

const ACCEPTED_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Parses a `HH:MM` (or `HH:MM:SS`) value as a time of day.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| DclError::InvalidTimeFormat(value.to_string()))
}

/// Resolves a `--since` value to a moment on the same local day as `now`.
///
/// # Errors
///
/// - [`DclError::InvalidTimeFormat`] when the value is not a valid time of
///   day or does not exist on that day (skipped by a DST transition)
/// - [`DclError::SinceInFuture`] when the resolved moment is later than `now`
pub fn resolve_since<Tz: TimeZone>(value: &str, now: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let time = parse_time_of_day(value)?;
    let naive = now.date_naive().and_time(time);
    let since = now
        .timezone()
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| DclError::InvalidTimeFormat(value.to_string()))?;

    if since > *now {
        return Err(DclError::SinceInFuture(value.trim().to_string()));
    }
    Ok(since)
}

/// Formats a moment as UTC in the form Clockify expects,
/// e.g. `2022-01-01T00:00:00Z`.
pub fn zulu<Tz: TimeZone>(moment: &DateTime<Tz>) -> String {
    moment.with_timezone(&Utc).format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
