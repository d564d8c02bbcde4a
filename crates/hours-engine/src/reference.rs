//! Turning caller input into the wall-clock reference instant the evaluator
//! expects.
//!
//! The evaluator works on local time with no timezone attached. These helpers
//! take an absolute instant plus an IANA zone and produce that local time, so
//! the conversion happens once at the edge.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{HoursError, Result};

/// Resolve a datetime string to wall-clock time in `timezone`.
///
/// An RFC 3339 instant (`"2026-10-19T20:30:00Z"`) is converted into the zone.
/// A naive `YYYY-MM-DDTHH:MM[:SS]` string is taken as already local and the
/// zone is only validated.
///
/// # Errors
///
/// Returns [`HoursError::InvalidTimezone`] if the zone is not a valid IANA
/// name, or [`HoursError::InvalidDatetime`] if the string matches neither form.
///
/// ```
/// use hours_engine::reference::resolve_reference;
///
/// let local = resolve_reference("2026-10-19T20:30:00Z", "America/New_York").unwrap();
/// assert_eq!(local.to_string(), "2026-10-19 16:30:00");
/// ```
pub fn resolve_reference(datetime: &str, timezone: &str) -> Result<NaiveDateTime> {
    let tz = parse_timezone(timezone)?;
    let datetime = datetime.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime) {
        return Ok(dt.with_timezone(&tz).naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(datetime, format).ok())
        .ok_or_else(|| HoursError::InvalidDatetime(format!("'{datetime}'")))
}

/// Wall-clock time in `timezone` at the instant `anchor`.
///
/// # Errors
///
/// Returns [`HoursError::InvalidTimezone`] if the zone is not a valid IANA name.
pub fn reference_from_utc(anchor: DateTime<Utc>, timezone: &str) -> Result<NaiveDateTime> {
    let tz = parse_timezone(timezone)?;
    Ok(anchor.with_timezone(&tz).naive_local())
}

/// Parse an IANA timezone string into `Tz`.
fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| HoursError::InvalidTimezone(format!("'{s}'")))
}
