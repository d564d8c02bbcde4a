//! Split a day's raw hours text into shifts.
//!
//! A day reads as `"Closed"`, `"Open 24 hours"`, one range such as
//! `"9:00 AM – 5:00 PM"`, or several comma-joined ranges for split shifts.
//! Malformed shifts are dropped individually; the day only yields nothing when
//! no shift survives.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::time::{format_minutes_as_time, parse_time, TimeRole, MINUTES_PER_DAY};

const CLOSED: &str = "Closed";
const OPEN_24_HOURS: &str = "Open 24 hours";

/// Dash characters that separate a shift's open and close times.
const RANGE_SEPARATORS: [char; 3] = ['\u{2013}', '\u{2014}', '-'];

/// One contiguous open interval within a day, in minutes since midnight.
///
/// `end < start` marks a shift that closes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start: u32,
    pub end: u32,
    #[serde(rename = "is24h")]
    pub is_24h: bool,
}

impl TimeRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end,
            is_24h: false,
        }
    }

    /// The whole-day range.
    pub const fn all_day() -> Self {
        Self {
            start: 0,
            end: MINUTES_PER_DAY,
            is_24h: true,
        }
    }

    /// Whether the close time falls after midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Whether `minute` (minutes since midnight) falls inside this shift.
    ///
    /// Wrapping shifts cover both the evening tail and the early-morning head
    /// of the same calendar day.
    pub fn contains(&self, minute: u32) -> bool {
        if self.is_24h {
            true
        } else if self.wraps_midnight() {
            minute >= self.start || minute < self.end
        } else {
            self.start <= minute && minute < self.end
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_24h {
            return f.write_str(OPEN_24_HOURS);
        }
        write!(
            f,
            "{} \u{2013} {}",
            format_minutes_as_time(self.start),
            format_minutes_as_time(self.end)
        )
    }
}

/// Parse a day's raw hours text into its shifts, in textual order.
///
/// Returns `None` for empty text, for `"Closed"`, and when no shift parses;
/// "could not interpret" and "no data" are the same answer.
///
/// ```
/// use hours_engine::range::{parse_time_range, TimeRange};
///
/// let ranges = parse_time_range("11:00 AM – 3:00 PM, 5:00 – 10:00 PM").unwrap();
/// assert_eq!(ranges, vec![TimeRange::new(660, 900), TimeRange::new(1020, 1320)]);
///
/// assert_eq!(parse_time_range("Open 24 hours"), Some(vec![TimeRange::all_day()]));
/// assert_eq!(parse_time_range("Closed"), None);
/// ```
pub fn parse_time_range(raw: &str) -> Option<Vec<TimeRange>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == CLOSED {
        return None;
    }
    if raw.contains(OPEN_24_HOURS) {
        return Some(vec![TimeRange::all_day()]);
    }

    let ranges: Vec<TimeRange> = raw.split(',').filter_map(parse_period).collect();

    if ranges.is_empty() {
        debug!("no usable shifts in {raw:?}");
        None
    } else {
        Some(ranges)
    }
}

/// Parse one `start – end` shift.
fn parse_period(period: &str) -> Option<TimeRange> {
    let tokens: Vec<&str> = period.split(RANGE_SEPARATORS).map(str::trim).collect();
    let [start_text, end_text] = tokens.as_slice() else {
        debug!("discarding shift {:?}: expected one separator", period.trim());
        return None;
    };

    let start = parse_time(start_text, TimeRole::Start)?;
    let end = parse_time(end_text, TimeRole::End(Some(start)))?;
    Some(TimeRange::new(start, end))
}

// ── Tests ───────────────────────────────────────────────────────────────────
