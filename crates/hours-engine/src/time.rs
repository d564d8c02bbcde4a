//! Clock-time tokens: parsing `H:MM [AM|PM]` into minutes since midnight and
//! formatting minutes back into a 12-hour display string.
//!
//! Hours data is authored by hand and routinely drops the meridiem on values
//! a reader can infer ("5:00 – 10:00 PM"). [`parse_time`] resolves those
//! tokens with a fixed decision table keyed on the token's [`TimeRole`] and
//! hour; see [`infer_hour`] for the rules.

use log::debug;

use crate::error::{HoursError, Result};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Which end of a shift a token describes.
///
/// The end role carries the already-parsed start (minutes since midnight)
/// when one is known, which drives end-time inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRole {
    Start,
    End(Option<u32>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// A lexically valid clock token, before any AM/PM resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockToken {
    hour: u32,
    minute: u32,
    meridiem: Option<Meridiem>,
}

// ── parse_time ──────────────────────────────────────────────────────────────

/// Parse a single clock-time token into minutes since midnight.
///
/// Returns `None` when the token does not match `H{1,2}:MM` with an optional
/// `AM`/`PM` suffix. Callers treat that as "skip this entry".
///
/// # Examples
///
/// ```
/// use hours_engine::time::{parse_time, TimeRole};
///
/// assert_eq!(parse_time("9:00 PM", TimeRole::Start), Some(1260));
/// // "5:00" with no marker opens in the evening
/// assert_eq!(parse_time("5:00", TimeRole::Start), Some(1020));
/// // an unmarked close after a noon open is read as PM
/// assert_eq!(parse_time("9:00", TimeRole::End(Some(720))), Some(1260));
/// assert_eq!(parse_time("nine", TimeRole::Start), None);
/// ```
pub fn parse_time(text: &str, role: TimeRole) -> Option<u32> {
    match parse_time_strict(text, role) {
        Ok(minutes) => Some(minutes),
        Err(e) => {
            debug!("skipping time token: {e}");
            None
        }
    }
}

/// Like [`parse_time`], but reports why a token was rejected.
///
/// # Errors
///
/// Returns [`HoursError::InvalidTime`] if the token is not `H{1,2}:MM` with an
/// optional `AM`/`PM`, or if the hour or minute is out of range.
pub fn parse_time_strict(text: &str, role: TimeRole) -> Result<u32> {
    let token = scan_token(text)?;
    let hour = match token.meridiem {
        Some(meridiem) => to_24_hour(token.hour, meridiem),
        None => infer_hour(token.hour, token.minute, role),
    };
    Ok(hour * 60 + token.minute)
}

/// Standard 12-hour to 24-hour conversion.
fn to_24_hour(hour: u32, meridiem: Meridiem) -> u32 {
    match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    }
}

/// Resolve the hour of a token that carries no AM/PM marker.
///
/// | role              | hour            | result              |
/// |-------------------|-----------------|---------------------|
/// | start             | 1–6             | PM (+12)            |
/// | start             | 0, 7–12, 13–23  | literal             |
/// | end, no start     | any             | literal             |
/// | end, start ≥ noon | < 12            | PM (+12)            |
/// | end, start < noon | < 12, before it | PM (+12)            |
/// | end, start < noon | otherwise       | literal             |
///
/// The 12-hour shift is applied at most once.
fn infer_hour(hour: u32, minute: u32, role: TimeRole) -> u32 {
    match role {
        TimeRole::Start if (1..=6).contains(&hour) => hour + 12,
        TimeRole::Start | TimeRole::End(None) => hour,
        TimeRole::End(Some(start)) => {
            let start_is_pm = start / 60 >= 12;
            let before_start = hour * 60 + minute < start;
            if hour < 12 && (start_is_pm || before_start) {
                hour + 12
            } else {
                hour
            }
        }
    }
}

/// Lex `H{1,2}:MM` with an optional, case-insensitive `AM`/`PM` suffix.
fn scan_token(text: &str) -> Result<ClockToken> {
    let invalid = || HoursError::InvalidTime(format!("'{}'", text.trim()));

    let s = text.trim();
    let (clock, meridiem) = split_meridiem(s);
    let (h, m) = clock.trim_end().split_once(':').ok_or_else(invalid)?;

    if h.is_empty() || h.len() > 2 || !h.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if m.len() != 2 || !m.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour: u32 = h.parse().map_err(|_| invalid())?;
    let minute: u32 = m.parse().map_err(|_| invalid())?;

    let max_hour = if meridiem.is_some() { 12 } else { 23 };
    if hour > max_hour || minute > 59 {
        return Err(HoursError::InvalidTime(format!(
            "'{}' is out of range",
            text.trim()
        )));
    }

    Ok(ClockToken {
        hour,
        minute,
        meridiem,
    })
}

/// Split a trailing `AM`/`PM` off a trimmed token.
fn split_meridiem(s: &str) -> (&str, Option<Meridiem>) {
    if s.len() < 2 || !s.is_char_boundary(s.len() - 2) {
        return (s, None);
    }
    let (head, tail) = s.split_at(s.len() - 2);
    if tail.eq_ignore_ascii_case("am") {
        (head, Some(Meridiem::Am))
    } else if tail.eq_ignore_ascii_case("pm") {
        (head, Some(Meridiem::Pm))
    } else {
        (s, None)
    }
}

// ── format_minutes_as_time ──────────────────────────────────────────────────

/// Format minutes since midnight as `H:MM AM|PM`.
///
/// Values of a day or more wrap, so a close time stored past midnight
/// formats as its wall-clock time on the following day.
///
/// ```
/// use hours_engine::time::format_minutes_as_time;
///
/// assert_eq!(format_minutes_as_time(0), "12:00 AM");
/// assert_eq!(format_minutes_as_time(720), "12:00 PM");
/// assert_eq!(format_minutes_as_time(1020), "5:00 PM");
/// assert_eq!(format_minutes_as_time(1500), "1:00 AM");
/// ```
pub fn format_minutes_as_time(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    let hour = minutes / 60;
    let minute = minutes % 60;
    let (display_hour, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{display_hour}:{minute:02} {suffix}")
}

// ── Tests ───────────────────────────────────────────────────────────────────
