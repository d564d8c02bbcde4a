//! # hours-engine
//!
//! Deterministic opening-hours evaluation.
//!
//! Takes a week of human-authored `"<Day>: <hours>"` strings and a reference
//! instant, and answers whether the place is open, how soon it closes, and
//! when it next opens. Input is tolerated rather than validated: missing
//! AM/PM markers are inferred, split shifts and overnight closes are
//! understood, and anything uninterpretable degrades to "unknown" instead of
//! an error.
//!
//! ## Modules
//!
//! - [`time`] - clock token → minutes since midnight, and back to `H:MM AM|PM`
//! - [`range`] - a day's raw text → shifts (`TimeRange`)
//! - [`schedule`] - per-day lookup in a week, weekday ring, full-week view
//! - [`status`] - open / closing-soon / closed / unknown, next opening
//! - [`reference`] - RFC 3339 + IANA zone → local reference instant
//! - [`error`] - Error types

pub mod error;
pub mod range;
pub mod reference;
pub mod schedule;
pub mod status;
pub mod time;

pub use error::HoursError;
pub use range::{parse_time_range, TimeRange};
pub use reference::{reference_from_utc, resolve_reference};
pub use schedule::{day_name, get_day_hours, parse_weekday, week_schedule, DayHours, WeekStartDay};
pub use status::{
    find_next_open_time, get_open_status, get_open_status_now, get_open_status_with_options,
    OpenStatus, Status, StatusOptions,
};
pub use time::{format_minutes_as_time, parse_time, TimeRole};
