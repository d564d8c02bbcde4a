//! Error types for hours-engine operations.
//!
//! The evaluation path never fails: unparseable hours surface as `None` or
//! [`Status::Unknown`](crate::status::Status::Unknown). These errors belong to
//! the strict entry points that validate caller input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoursError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, HoursError>;
