//! Fit command: auto-adjust a proposed range around existing sessions.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use wl_core::{Session, TimeOfDay, TimeRange, adjust_to_avoid_conflicts};

use crate::config::Config;
use crate::store::SessionStore;

/// Shrinks the proposed range until it no longer conflicts and prints
/// the result as a preview; nothing is logged.
pub fn run(config: &Config, date: NaiveDate, start: &str, end: &str) -> Result<()> {
    let start: TimeOfDay = start
        .parse()
        .with_context(|| format!("invalid start time {start:?}"))?;
    let end: TimeOfDay = end
        .parse()
        .with_context(|| format!("invalid end time {end:?}"))?;
    let Some(candidate) = TimeRange::new(start, end) else {
        bail!("end time must be later than start time");
    };

    let store = SessionStore::new(&config.store_path);
    let existing: Vec<TimeRange> = store
        .sessions_on(date)?
        .iter()
        .filter_map(Session::range)
        .collect();

    match adjust_to_avoid_conflicts(candidate, &existing) {
        Some(result) if result.adjusted => {
            println!(
                "adjusted to {}-{} on {date}",
                result.range.start, result.range.end
            );
        }
        Some(result) => {
            println!(
                "{}-{} is free on {date} as proposed",
                result.range.start, result.range.end
            );
        }
        None => bail!("no conflict-free range remains within {start}-{end} on {date}"),
    }
    Ok(())
}
