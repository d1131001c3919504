//! Lunch-break intersection and net-duration accounting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::overlap::TimeRange;
use crate::time::TimeOfDay;

/// The lunch break's end did not come after its start.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("lunch break must end after it starts, got {start}..{end}")]
pub struct InvalidLunchBreak {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// The fixed daily lunch break, supplied by configuration.
///
/// Holds `start < end` by construction. Passed explicitly into every
/// computation that needs it; nothing in this crate caches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLunchBreak")]
pub struct LunchBreak {
    start: TimeOfDay,
    end: TimeOfDay,
}

/// Wire shape; validated into [`LunchBreak`] on deserialization.
#[derive(Debug, Deserialize)]
struct RawLunchBreak {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawLunchBreak> for LunchBreak {
    type Error = InvalidLunchBreak;

    fn try_from(raw: RawLunchBreak) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl Default for LunchBreak {
    /// The conventional noon hour, 12:00-13:00.
    fn default() -> Self {
        Self {
            start: TimeOfDay::at(12, 0),
            end: TimeOfDay::at(13, 0),
        }
    }
}

impl LunchBreak {
    /// Builds a lunch break, rejecting `end <= start`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, InvalidLunchBreak> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidLunchBreak { start, end })
        }
    }

    #[must_use]
    pub const fn start(self) -> TimeOfDay {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> TimeOfDay {
        self.end
    }

    /// The break as a half-open range.
    #[must_use]
    pub const fn range(self) -> TimeRange {
        TimeRange {
            start: self.start,
            end: self.end,
        }
    }

    /// Length of the break in minutes.
    #[must_use]
    pub const fn duration_minutes(self) -> u16 {
        self.range().duration_minutes()
    }

    /// Whether the session range eats into the break.
    #[must_use]
    pub fn overlaps(self, range: TimeRange) -> bool {
        self.range().overlaps(range)
    }

    /// The sub-range of `range` that falls inside the break, or `None`
    /// when the break is untouched.
    #[must_use]
    pub fn intersection(self, range: TimeRange) -> Option<TimeRange> {
        range.intersection(self.range())
    }

    /// Minutes of `range` remaining once the break is taken out.
    ///
    /// A session wholly inside the break counts zero; a session that only
    /// touches the break's boundary keeps its full duration.
    #[must_use]
    pub fn net_minutes(self, range: TimeRange) -> u16 {
        let excluded = self
            .intersection(range)
            .map_or(0, TimeRange::duration_minutes);
        range.duration_minutes() - excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: (u16, u16), end: (u16, u16)) -> TimeRange {
        TimeRange {
            start: TimeOfDay::at(start.0, start.1),
            end: TimeOfDay::at(end.0, end.1),
        }
    }

    fn noon_break() -> LunchBreak {
        LunchBreak::default()
    }

    #[test]
    fn new_rejects_unordered_bounds() {
        let noon = TimeOfDay::at(12, 0);
        let one = TimeOfDay::at(13, 0);
        assert!(LunchBreak::new(noon, one).is_ok());
        assert!(LunchBreak::new(noon, noon).is_err());
        assert!(LunchBreak::new(one, noon).is_err());
    }

    #[test]
    fn default_is_noon_hour() {
        let lunch = noon_break();
        assert_eq!(lunch.start(), TimeOfDay::at(12, 0));
        assert_eq!(lunch.end(), TimeOfDay::at(13, 0));
        assert_eq!(lunch.duration_minutes(), 60);
    }

    #[test]
    fn session_spanning_lunch_loses_the_break() {
        // 10:00-15:00 minus the 12:00-13:00 break.
        let lunch = noon_break();
        let session = range((10, 0), (15, 0));

        assert!(lunch.overlaps(session));
        assert_eq!(lunch.intersection(session), Some(range((12, 0), (13, 0))));
        assert_eq!(lunch.net_minutes(session), 240);
    }

    #[test]
    fn session_partially_into_lunch() {
        let lunch = noon_break();
        let session = range((11, 0), (12, 30));

        assert_eq!(lunch.intersection(session), Some(range((12, 0), (12, 30))));
        assert_eq!(lunch.net_minutes(session), 60);
    }

    #[test]
    fn session_inside_lunch_counts_zero() {
        let lunch = noon_break();
        let session = range((12, 10), (12, 50));

        assert_eq!(lunch.net_minutes(session), 0);
    }

    #[test]
    fn session_touching_lunch_start_keeps_full_duration() {
        // Ends exactly when lunch begins: half-open, no overlap.
        let lunch = noon_break();
        let session = range((10, 0), (12, 0));

        assert!(!lunch.overlaps(session));
        assert_eq!(lunch.intersection(session), None);
        assert_eq!(lunch.net_minutes(session), 120);
    }

    #[test]
    fn session_touching_lunch_end_keeps_full_duration() {
        let lunch = noon_break();
        let session = range((13, 0), (15, 0));

        assert!(!lunch.overlaps(session));
        assert_eq!(lunch.net_minutes(session), 120);
    }

    #[test]
    fn net_minutes_equals_gross_minus_intersection() {
        let lunch = noon_break();
        let sessions = [
            range((9, 0), (17, 0)),
            range((11, 30), (12, 30)),
            range((12, 0), (13, 0)),
            range((8, 0), (11, 0)),
        ];
        for session in sessions {
            let excluded = lunch
                .intersection(session)
                .map_or(0, TimeRange::duration_minutes);
            assert_eq!(
                lunch.net_minutes(session),
                session.duration_minutes() - excluded
            );
        }
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let lunch: LunchBreak =
            serde_json::from_str(r#"{"start":"11:30","end":"12:15"}"#).unwrap();
        assert_eq!(lunch.start(), TimeOfDay::at(11, 30));
        assert_eq!(lunch.duration_minutes(), 45);
    }

    #[test]
    fn deserialization_rejects_unordered_bounds() {
        let result: Result<LunchBreak, _> =
            serde_json::from_str(r#"{"start":"13:00","end":"12:00"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let lunch = noon_break();
        let json = serde_json::to_string(&lunch).unwrap();
        let parsed: LunchBreak = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lunch);
    }
}
