//! Open/closed evaluation against a caller-supplied reference instant.
//!
//! The reference instant is wall-clock time already in the place's local
//! timezone. Nothing here reads the system clock except
//! [`get_open_status_now`], which exists for callers that want "now".
//!
//! Only today's entry decides the current state. A shift whose close time
//! falls after midnight (`end < start`) covers both the late evening and the
//! early morning of its own listed day.

use std::fmt;

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use log::trace;
use serde::Serialize;

use crate::range::TimeRange;
use crate::schedule::{day_name, get_day_hours, weekday_after, WEEKDAYS};
use crate::time::{format_minutes_as_time, MINUTES_PER_DAY};

/// Default length of the closing-soon window, in minutes.
pub const DEFAULT_CLOSING_SOON_MINUTES: u32 = 45;

/// The four outcomes of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Open,
    ClosingSoon,
    Closed,
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::ClosingSoon => "closing-soon",
            Status::Closed => "closed",
            Status::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`get_open_status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenStatus {
    pub is_open: bool,
    pub is_closing_soon: bool,
    pub status: Status,
    /// Minutes left in the current shift.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_until_close: Option<u32>,
    /// Close time of the current shift, e.g. `"5:00 PM"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closes_at: Option<String>,
    /// Next opening, e.g. `"tomorrow at 9:00 AM"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opens_at: Option<String>,
    /// Today's raw hours text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_hours: Option<String>,
}

impl OpenStatus {
    fn unknown() -> Self {
        Self {
            is_open: false,
            is_closing_soon: false,
            status: Status::Unknown,
            minutes_until_close: None,
            closes_at: None,
            opens_at: None,
            today_hours: None,
        }
    }

    /// One-line explanation for display.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use hours_engine::get_open_status;
    ///
    /// let week = ["Monday: 9:00 AM – 5:00 PM"];
    /// let at = NaiveDate::from_ymd_opt(2026, 10, 19)
    ///     .unwrap()
    ///     .and_hms_opt(16, 30, 0)
    ///     .unwrap();
    /// assert_eq!(get_open_status(&week, at).summary(), "Closes soon · 5:00 PM (30 min)");
    /// ```
    pub fn summary(&self) -> String {
        match (self.status, &self.closes_at, &self.opens_at) {
            (Status::Open, Some(closes_at), _) => format!("Open · Closes {closes_at}"),
            (Status::Open, None, _) => "Open 24 hours".to_string(),
            (Status::ClosingSoon, Some(closes_at), _) => match self.minutes_until_close {
                Some(minutes) => format!("Closes soon · {closes_at} ({minutes} min)"),
                None => format!("Closes soon · {closes_at}"),
            },
            (Status::ClosingSoon, None, _) => "Closes soon".to_string(),
            (Status::Closed, _, Some(opens_at)) => format!("Closed · Opens {opens_at}"),
            (Status::Closed, _, None) => "Closed".to_string(),
            (Status::Unknown, _, _) => "Hours unknown".to_string(),
        }
    }
}

/// Options for [`get_open_status_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOptions {
    /// A shift ending within this many minutes is "closing soon".
    pub closing_soon_minutes: u32,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            closing_soon_minutes: DEFAULT_CLOSING_SOON_MINUTES,
        }
    }
}

// ── get_open_status ─────────────────────────────────────────────────────────

/// Decide whether the place is open at `at`.
///
/// Uses a 45-minute closing-soon window. For a different window, use
/// [`get_open_status_with_options`].
///
/// ```
/// use chrono::NaiveDate;
/// use hours_engine::{get_open_status, Status};
///
/// let week = ["Monday: 9:00 AM – 5:00 PM"];
/// // 2026-10-19 is a Monday
/// let at = NaiveDate::from_ymd_opt(2026, 10, 19)
///     .unwrap()
///     .and_hms_opt(16, 30, 0)
///     .unwrap();
///
/// let status = get_open_status(&week, at);
/// assert_eq!(status.status, Status::ClosingSoon);
/// assert_eq!(status.minutes_until_close, Some(30));
/// assert_eq!(status.closes_at.as_deref(), Some("5:00 PM"));
/// ```
pub fn get_open_status<S: AsRef<str>>(weekly: &[S], at: NaiveDateTime) -> OpenStatus {
    get_open_status_with_options(weekly, at, &StatusOptions::default())
}

/// [`get_open_status`] evaluated at the local wall-clock time.
pub fn get_open_status_now<S: AsRef<str>>(weekly: &[S]) -> OpenStatus {
    get_open_status(weekly, Local::now().naive_local())
}

/// Decide whether the place is open at `at`, with options.
///
/// Today's shifts are checked in textual order and the first that contains
/// the current minute wins. With no match the place is closed and
/// [`find_next_open_time`] fills in `opens_at`. A day with no entry, or with
/// no interpretable shift (including `"Closed"`), is [`Status::Unknown`].
pub fn get_open_status_with_options<S: AsRef<str>>(
    weekly: &[S],
    at: NaiveDateTime,
    options: &StatusOptions,
) -> OpenStatus {
    let today = match get_day_hours(weekly, at.weekday()) {
        Some(day) if day.has_ranges() => day,
        _ => {
            trace!("{}: no usable hours, status unknown", day_name(at.weekday()));
            return OpenStatus::unknown();
        }
    };
    let current = minute_of_day(at);

    for range in today.shifts() {
        if range.is_24h {
            trace!("{}: open 24 hours", day_name(today.day));
            return OpenStatus {
                is_open: true,
                is_closing_soon: false,
                status: Status::Open,
                minutes_until_close: None,
                closes_at: None,
                opens_at: None,
                today_hours: Some(today.raw_text.clone()),
            };
        }
        if !range.contains(current) {
            continue;
        }

        let minutes_until_close = minutes_until_close(range, current);
        let is_closing_soon =
            minutes_until_close > 0 && minutes_until_close <= options.closing_soon_minutes;
        let status = if is_closing_soon {
            Status::ClosingSoon
        } else {
            Status::Open
        };
        trace!(
            "{}: {status} in {range}, {minutes_until_close} min to close",
            day_name(today.day)
        );
        return OpenStatus {
            is_open: true,
            is_closing_soon,
            status,
            minutes_until_close: Some(minutes_until_close),
            closes_at: Some(format_minutes_as_time(range.end % MINUTES_PER_DAY)),
            opens_at: None,
            today_hours: Some(today.raw_text.clone()),
        };
    }

    let opens_at = find_next_open_time(weekly, at);
    trace!("{}: closed, opens {opens_at:?}", day_name(today.day));
    OpenStatus {
        is_open: false,
        is_closing_soon: false,
        status: Status::Closed,
        minutes_until_close: None,
        closes_at: None,
        opens_at,
        today_hours: Some(today.raw_text),
    }
}

/// Minutes from `current` to the close of a shift that contains it.
fn minutes_until_close(range: &TimeRange, current: u32) -> u32 {
    if range.wraps_midnight() && current >= range.start {
        (MINUTES_PER_DAY - current) + range.end
    } else {
        range.end - current
    }
}

fn minute_of_day(at: NaiveDateTime) -> u32 {
    at.hour() * 60 + at.minute()
}

// ── find_next_open_time ─────────────────────────────────────────────────────

/// Find when the place next opens after `at`.
///
/// Checks the rest of today first (earliest shift starting after the current
/// minute), then the following seven days in order, labelling the first hit
/// `"today at …"`, `"tomorrow at …"`, or `"<Weekday> at …"`. Returns `None`
/// when no day in that horizon has hours.
///
/// ```
/// use chrono::NaiveDate;
/// use hours_engine::find_next_open_time;
///
/// let week = ["Monday: 9:00 AM – 5:00 PM", "Tuesday: 10:00 AM – 4:00 PM"];
/// let monday_evening = NaiveDate::from_ymd_opt(2026, 10, 19)
///     .unwrap()
///     .and_hms_opt(18, 0, 0)
///     .unwrap();
/// assert_eq!(
///     find_next_open_time(&week, monday_evening).as_deref(),
///     Some("tomorrow at 10:00 AM")
/// );
/// ```
pub fn find_next_open_time<S: AsRef<str>>(weekly: &[S], at: NaiveDateTime) -> Option<String> {
    let today = at.weekday();
    let current = minute_of_day(at);

    let later_today = get_day_hours(weekly, today).and_then(|day| {
        day.shifts()
            .iter()
            .map(|range| range.start)
            .filter(|&start| start > current)
            .min()
    });
    if let Some(start) = later_today {
        return Some(format!("today at {}", format_minutes_as_time(start)));
    }

    (1..=WEEKDAYS.len()).find_map(|offset| {
        let day = weekday_after(today, offset);
        let first = get_day_hours(weekly, day)?.shifts().first()?.start;
        let label = if offset == 1 { "tomorrow" } else { day_name(day) };
        Some(format!("{label} at {}", format_minutes_as_time(first)))
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────
