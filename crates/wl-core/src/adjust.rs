//! Conflict adjustment for proposed session ranges.

use crate::overlap::{OverlapKind, TimeRange};

/// Upper bound on adjustment passes. Guards against inconsistent input
/// that keeps producing new conflicts instead of converging.
const MAX_PASSES: usize = 10;

/// A proposal that no longer conflicts with any existing range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    /// The conflict-free range.
    pub range: TimeRange,
    /// Whether either boundary moved from the original proposal.
    pub adjusted: bool,
}

/// Shrinks `candidate` until it overlaps nothing in `existing`.
///
/// Start-side conflicts push the start to the blocking range's end;
/// end-side conflicts pull the end to the blocking range's start. A
/// candidate that fully contains or is fully contained by an existing
/// range cannot be rescued by shrinking and is rejected outright.
///
/// Returns `None` when no conflict-free range remains: full containment,
/// a range that collapsed to zero width, or conflicts still unresolved
/// after the pass cap. A returned range never overlaps any input range.
#[must_use]
pub fn adjust_to_avoid_conflicts(
    candidate: TimeRange,
    existing: &[TimeRange],
) -> Option<Adjustment> {
    let mut start = candidate.start;
    let mut end = candidate.end;
    let mut adjusted = false;

    for _ in 0..MAX_PASSES {
        let mut conflicts = 0usize;
        for other in existing {
            // Boundaries can cross mid-pass once both sides have been
            // squeezed; nothing is left to salvage at that point.
            let current = TimeRange::new(start, end)?;
            match current.classify_overlap(*other) {
                None => {}
                Some(OverlapKind::Contains | OverlapKind::Contained) => return None,
                Some(OverlapKind::OverlapsStart) => {
                    start = other.end;
                    adjusted = true;
                    conflicts += 1;
                }
                Some(OverlapKind::OverlapsEnd) => {
                    end = other.start;
                    adjusted = true;
                    conflicts += 1;
                }
            }
        }
        if conflicts == 0 {
            break;
        }
    }

    let range = TimeRange::new(start, end)?;
    // The pass cap can stop iteration before convergence; a range that
    // still conflicts is never handed back.
    if existing.iter().any(|other| range.overlaps(*other)) {
        return None;
    }
    Some(Adjustment { range, adjusted })
}
