//! Half-open time ranges and overlap classification.

use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// How one range overlaps another.
///
/// "No overlap" is the absent case: [`TimeRange::classify_overlap`]
/// returns `Option<OverlapKind>` so disjoint ranges never carry a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapKind {
    /// This range fully covers the other, equal ranges included.
    Contains,
    /// The other range fully covers this one.
    Contained,
    /// This range's start falls inside the other.
    OverlapsStart,
    /// This range's end falls inside the other.
    OverlapsEnd,
}

/// A half-open range of clock time `[start, end)` within one day.
///
/// Invariant: `start < end`. Ranges are only built through paths that
/// already performed order validation ([`TimeRange::new`], the session
/// validator, store loading), so zero-width and inverted ranges never
/// reach the overlap logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    /// Builds a range, rejecting `end <= start`.
    #[must_use]
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Width of the range in minutes.
    #[must_use]
    pub const fn duration_minutes(self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether the two ranges share any time.
    ///
    /// Touching endpoints do not count: `[a, b)` and `[b, c)` are
    /// disjoint.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// Classifies how this range overlaps `other`, or `None` when disjoint.
    ///
    /// Checks run in a fixed precedence: containment in either direction
    /// first, then which of this range's endpoints intrudes into `other`.
    /// Equal ranges classify as [`OverlapKind::Contains`].
    #[must_use]
    pub fn classify_overlap(self, other: Self) -> Option<OverlapKind> {
        if !self.overlaps(other) {
            return None;
        }
        if self.start <= other.start && self.end >= other.end {
            return Some(OverlapKind::Contains);
        }
        if other.start <= self.start && other.end >= self.end {
            return Some(OverlapKind::Contained);
        }
        if self.start >= other.start && self.start < other.end {
            return Some(OverlapKind::OverlapsStart);
        }
        Some(OverlapKind::OverlapsEnd)
    }

    /// The shared sub-range, or `None` when the ranges are disjoint.
    #[must_use]
    pub fn intersection(self, other: Self) -> Option<Self> {
        self.overlaps(other).then(|| Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }
}
