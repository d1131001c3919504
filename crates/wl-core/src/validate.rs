//! The composite gate every proposed session time passes before storage.

use thiserror::Error;

use crate::overlap::TimeRange;
use crate::session::{Session, SessionId};
use crate::time::{TimeOfDay, TimeParseError};

/// Default minimum length of a session, in minutes.
pub const DEFAULT_MIN_DURATION: u16 = 1;

/// Why a proposed session time was rejected.
///
/// Variants mirror the validation stages; the first failing stage wins
/// and later stages are never evaluated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One of the endpoints is not a valid "HH:mm" time.
    #[error("invalid {field} time: {source}")]
    Format {
        field: &'static str,
        source: TimeParseError,
    },

    /// The end does not come strictly after the start.
    #[error("end time must be later than start time")]
    Order,

    /// The span is shorter than the configured minimum.
    #[error("session must be at least {minimum} minute(s) long")]
    TooShort { minimum: u16 },

    /// The span overlaps another session on the same day.
    #[error("time range overlaps with another session")]
    Overlap,
}

/// Inputs the validator checks a proposal against.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    /// Already-logged sessions for the same day.
    pub existing: &'a [Session],
    /// Overrides [`DEFAULT_MIN_DURATION`] when set.
    pub min_duration: Option<u16>,
    /// Session being edited, exempt from the overlap check against itself.
    pub exclude: Option<&'a SessionId>,
}

/// Validates a proposed session time range.
///
/// Stages run in a fixed order and stop at the first failure: both
/// endpoints must parse, the end must come strictly after the start, the
/// span must meet the minimum duration, and the span must not overlap any
/// other bounded session for the day. Open sessions have no bounded range
/// and never participate in the overlap stage.
///
/// On success the parsed range is returned so callers don't re-parse.
pub fn validate_session_time(
    start: &str,
    end: &str,
    ctx: &ValidationContext<'_>,
) -> Result<TimeRange, ValidationError> {
    let start: TimeOfDay = start.parse().map_err(|source| ValidationError::Format {
        field: "start",
        source,
    })?;
    let end: TimeOfDay = end.parse().map_err(|source| ValidationError::Format {
        field: "end",
        source,
    })?;

    let range = TimeRange::new(start, end).ok_or(ValidationError::Order)?;

    let minimum = ctx.min_duration.unwrap_or(DEFAULT_MIN_DURATION);
    if range.duration_minutes() < minimum {
        return Err(ValidationError::TooShort { minimum });
    }

    let conflict = ctx
        .existing
        .iter()
        .filter(|session| ctx.exclude.is_none_or(|id| session.id != *id))
        .filter_map(Session::range)
        .any(|other| range.overlaps(other));
    if conflict {
        return Err(ValidationError::Overlap);
    }

    Ok(range)
}
