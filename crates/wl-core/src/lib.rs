//! Core engine for the worklog time tracker.
//!
//! This crate contains the pure domain logic:
//! - Time-of-day parsing and half-open time ranges
//! - Overlap classification between session ranges
//! - Conflict adjustment for proposed sessions
//! - Lunch-break exclusion for duration accounting
//! - The composite validation gate for session create/edit
//! - Daily and weekly rollups
//!
//! Everything here is synchronous and free of I/O; callers pass the
//! working set (sessions, lunch configuration) into each call.

mod adjust;
mod lunch;
mod overlap;
pub mod session;
pub mod summary;
mod time;
mod validate;

pub use adjust::{Adjustment, adjust_to_avoid_conflicts};
pub use lunch::{InvalidLunchBreak, LunchBreak};
pub use overlap::{OverlapKind, TimeRange};
pub use session::{EmptySessionId, Session, SessionId};
pub use time::{TimeOfDay, TimeParseError};
pub use validate::{
    DEFAULT_MIN_DURATION, ValidationContext, ValidationError, validate_session_time,
};
