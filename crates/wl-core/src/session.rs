//! Work-session records consumed by validation and reporting.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::overlap::TimeRange;
use crate::time::TimeOfDay;

/// A session identifier was empty.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("session ID cannot be empty")]
pub struct EmptySessionId;

/// A validated session identifier.
///
/// Non-empty; uniqueness is the store's concern, not this type's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    /// Creates an ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, EmptySessionId> {
        let id = id.into();
        if id.is_empty() {
            return Err(EmptySessionId);
        }
        Ok(Self(id))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SessionId {
    type Error = EmptySessionId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A logged work session on a single day.
///
/// An open session (still running) has no end time yet. It carries no
/// bounded range, so overlap checks and rollups skip it until it is
/// closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub date: NaiveDate,
    pub start: TimeOfDay,
    /// `None` while the session is running; stored as `""` on the wire.
    #[serde(with = "open_end", default)]
    pub end: Option<TimeOfDay>,
    /// Optional free-form label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Session {
    /// The bounded range of a finished session.
    ///
    /// `None` for open sessions, and for corrupt records whose end does
    /// not come after their start; both are skipped by overlap checks.
    #[must_use]
    pub fn range(&self) -> Option<TimeRange> {
        self.end.and_then(|end| TimeRange::new(self.start, end))
    }

    /// Minutes between start and end, `None` while the session runs.
    #[must_use]
    pub fn duration_minutes(&self) -> Option<u16> {
        self.range().map(TimeRange::duration_minutes)
    }

    /// Whether the session is still running.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// Wire format for the end time: open sessions serialize as `""`.
mod open_end {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::time::TimeOfDay;

    pub fn serialize<S>(value: &Option<TimeOfDay>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => time.serialize(serializer),
            None => "".serialize(serializer),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<TimeOfDay>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}
