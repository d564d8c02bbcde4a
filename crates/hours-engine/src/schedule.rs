//! Per-day access into a week of `"<DayName>: <hours>"` entries.
//!
//! Weekdays are addressed through a fixed Sunday-first ring so the forward
//! search can step `(today + offset) mod 7` without calendar arithmetic.

use chrono::Weekday;
use serde::Serialize;

use crate::error::{HoursError, Result};
use crate::range::{parse_time_range, TimeRange};

/// The week as a ring, Sunday = 0 … Saturday = 6.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Which day leads a rendered week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WeekStartDay {
    #[default]
    Monday,
    Sunday,
}

/// One day's entry, with its prefix stripped and its shifts parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    #[serde(serialize_with = "serialize_day")]
    pub day: Weekday,
    /// Text after `"<DayName>: "`, echoed as-is.
    pub raw_text: String,
    /// `None` when the text is `"Closed"`, empty, or not interpretable.
    pub ranges: Option<Vec<TimeRange>>,
}

impl DayHours {
    /// Parsed shifts, empty when there are none.
    pub fn shifts(&self) -> &[TimeRange] {
        self.ranges.as_deref().unwrap_or(&[])
    }

    /// Whether the day has at least one shift.
    pub fn has_ranges(&self) -> bool {
        !self.shifts().is_empty()
    }
}

fn serialize_day<S: serde::Serializer>(day: &Weekday, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(day_name(*day))
}

/// Canonical English name used as the entry prefix.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The weekday `offset` days after `day`.
pub fn weekday_after(day: Weekday, offset: usize) -> Weekday {
    WEEKDAYS[(day.num_days_from_sunday() as usize + offset) % WEEKDAYS.len()]
}

/// Parse a weekday name (case-insensitive, full or abbreviated).
///
/// # Errors
///
/// Returns [`HoursError::InvalidWeekday`] for anything else.
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    match name.trim().to_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" | "thurs" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        "sunday" | "sun" => Ok(Weekday::Sun),
        _ => Err(HoursError::InvalidWeekday(format!("'{}'", name.trim()))),
    }
}

/// Find and parse the entry for `day`.
///
/// Returns `None` when no entry starts with `"<DayName>: "`. When several do,
/// the first wins.
///
/// ```
/// use chrono::Weekday;
/// use hours_engine::schedule::get_day_hours;
///
/// let week = ["Monday: 9:00 AM – 5:00 PM", "Tuesday: Closed"];
///
/// let monday = get_day_hours(&week, Weekday::Mon).unwrap();
/// assert_eq!(monday.raw_text, "9:00 AM – 5:00 PM");
/// assert!(monday.has_ranges());
///
/// let tuesday = get_day_hours(&week, Weekday::Tue).unwrap();
/// assert_eq!(tuesday.ranges, None);
///
/// assert!(get_day_hours(&week, Weekday::Wed).is_none());
/// ```
pub fn get_day_hours<S: AsRef<str>>(weekly: &[S], day: Weekday) -> Option<DayHours> {
    let name = day_name(day);
    weekly.iter().find_map(|entry| {
        let raw_text = entry
            .as_ref()
            .trim_start()
            .strip_prefix(name)?
            .strip_prefix(": ")?;
        Some(DayHours {
            day,
            raw_text: raw_text.to_string(),
            ranges: parse_time_range(raw_text),
        })
    })
}

/// All seven days in display order, each with its entry if one exists.
pub fn week_schedule<S: AsRef<str>>(
    weekly: &[S],
    week_start: WeekStartDay,
) -> Vec<(Weekday, Option<DayHours>)> {
    let first = match week_start {
        WeekStartDay::Monday => Weekday::Mon,
        WeekStartDay::Sunday => Weekday::Sun,
    };
    (0..WEEKDAYS.len())
        .map(|offset| {
            let day = weekday_after(first, offset);
            (day, get_day_hours(weekly, day))
        })
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
