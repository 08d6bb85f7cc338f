//! Minute-of-day time arithmetic and workday windows.
//!
//! All times of day are minutes since midnight (`0..1440`). Calendar
//! dates are `chrono::NaiveDate`; no timezone handling anywhere in the
//! crate.
//!
//! The host application exchanges times of day as `"HH:MM"` strings.
//! [`parse_hhmm`] and [`format_hhmm`] convert at that boundary, and the
//! [`hhmm`] serde module applies the same encoding to serialized fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Error parsing an `"HH:MM"` time-of-day string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// Not of the form `HH:MM`.
    #[error("expected HH:MM, got '{0}'")]
    Malformed(String),
    /// Parsed but outside 00:00..=23:59.
    #[error("time of day out of range: '{0}'")]
    OutOfRange(String),
}

/// Parses an `"HH:MM"` string into a minute-of-day.
pub fn parse_hhmm(s: &str) -> Result<i64, TimeParseError> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| TimeParseError::Malformed(s.to_string()))?;
    let hours: i64 = h
        .parse()
        .map_err(|_| TimeParseError::Malformed(s.to_string()))?;
    let minutes: i64 = m
        .parse()
        .map_err(|_| TimeParseError::Malformed(s.to_string()))?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(TimeParseError::OutOfRange(s.to_string()));
    }
    Ok(hours * 60 + minutes)
}

/// Formats a minute-of-day as zero-padded `"HH:MM"`.
pub fn format_hhmm(minute: i64) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Rounds a minute-of-day up to the next 30-minute boundary.
///
/// A minute already on a boundary is returned unchanged.
#[inline]
pub fn ceil_to_half_hour(minute: i64) -> i64 {
    (minute + 29) / 30 * 30
}

/// Serde adapter encoding a minute-of-day field as `"HH:MM"`.
pub mod hhmm {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(minute: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hhmm(*minute))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hhmm(&s).map_err(D::Error::custom)
    }
}

/// A daily availability interval `[start, end)`, in minutes-of-day.
///
/// Half-open: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdayWindow {
    /// Window start (inclusive).
    pub start_min: i64,
    /// Window end (exclusive).
    pub end_min: i64,
}

impl WorkdayWindow {
    /// Creates a new window. Invariant: `start_min < end_min`, both in `0..1440`.
    pub fn new(start_min: i64, end_min: i64) -> Self {
        Self { start_min, end_min }
    }

    /// Length of the window in minutes.
    #[inline]
    pub fn duration_min(&self) -> i64 {
        self.end_min - self.start_min
    }

    /// Whether a minute-of-day falls within this window.
    #[inline]
    pub fn contains(&self, minute: i64) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// Whether a span of `len` minutes starting at `minute` fits inside the window.
    #[inline]
    pub fn fits(&self, minute: i64, len: i64) -> bool {
        minute >= self.start_min && minute + len <= self.end_min
    }
}
