//! Clock time within a single day, stored as minutes since midnight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing an "HH:mm" time-of-day string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// The string is not shaped like `H:mm` or `HH:mm`.
    #[error("time must be in HH:mm format, got {input:?}")]
    Malformed { input: String },

    /// The hour component is 24 or more.
    #[error("hour must be between 0 and 23, got {hour}")]
    HourOutOfRange { hour: u16 },

    /// The minute component is 60 or more.
    #[error("minute must be between 0 and 59, got {minute}")]
    MinuteOutOfRange { minute: u16 },
}

/// A clock time within one day, as minutes since midnight.
///
/// Always in `[0, 1440)`. Values come from parsing an `"HH:mm"` string
/// (a one-digit hour like `"9:00"` is accepted) or from [`TimeOfDay::at`]
/// for compile-time-known times. Serializes as its `"HH:mm"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, the first minute of the day.
    pub const MIDNIGHT: Self = Self(0);

    /// Builds a time from components known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when `hour > 23` or `minute > 59`. Intended for constants
    /// and tests; parse user input with [`str::parse`] instead.
    #[must_use]
    pub const fn at(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60);
        Self(hour * 60 + minute)
    }

    /// Total minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// The hour component (0-23).
    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    /// The minute component (0-59).
    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeParseError::Malformed {
            input: s.to_string(),
        };

        let (h, m) = s.split_once(':').ok_or_else(malformed)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(malformed());
        }
        if !h.bytes().all(|b| b.is_ascii_digit()) || !m.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let hour: u16 = h.parse().map_err(|_| malformed())?;
        let minute: u16 = m.parse().map_err(|_| malformed())?;
        if hour >= 24 {
            return Err(TimeParseError::HourOutOfRange { hour });
        }
        if minute >= 60 {
            return Err(TimeParseError::MinuteOutOfRange { minute });
        }
        Ok(Self::at(hour, minute))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}
