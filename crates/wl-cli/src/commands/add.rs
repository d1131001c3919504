//! Add command: log a session once it passes the validation gate.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use uuid::Uuid;
use wl_core::{Session, SessionId, ValidationContext, validate_session_time};

use crate::config::Config;
use crate::store::SessionStore;

use super::report::format_minutes;

/// Validates the proposed range against the day's log and appends it.
pub fn run(
    config: &Config,
    date: NaiveDate,
    start: &str,
    end: &str,
    note: Option<String>,
) -> Result<()> {
    let store = SessionStore::new(&config.store_path);
    let existing = store.sessions_on(date)?;

    let ctx = ValidationContext {
        existing: &existing,
        min_duration: Some(config.min_session_minutes),
        exclude: None,
    };
    let range = match validate_session_time(start, end, &ctx) {
        Ok(range) => range,
        Err(e) => bail!("cannot log session: {e}"),
    };

    let session = Session {
        id: SessionId::new(Uuid::new_v4().to_string())?,
        date,
        start: range.start,
        end: Some(range.end),
        note,
    };
    store.append(&session)?;
    tracing::debug!(id = %session.id, "session appended");

    println!(
        "logged {date} {}-{} ({})",
        range.start,
        range.end,
        format_minutes(u32::from(range.duration_minutes()))
    );
    Ok(())
}
