//! Check command: dry-run validation of a proposed session time.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use wl_core::{SessionId, ValidationContext, validate_session_time};

use crate::config::Config;
use crate::store::SessionStore;

/// Runs the validation gate without touching the log.
///
/// `exclude` names the session being edited so its current slot does not
/// conflict with its own replacement.
pub fn run(
    config: &Config,
    date: NaiveDate,
    start: &str,
    end: &str,
    exclude: Option<&str>,
) -> Result<()> {
    let store = SessionStore::new(&config.store_path);
    let existing = store.sessions_on(date)?;

    let exclude_id = exclude.map(SessionId::new).transpose()?;
    let ctx = ValidationContext {
        existing: &existing,
        min_duration: Some(config.min_session_minutes),
        exclude: exclude_id.as_ref(),
    };

    match validate_session_time(start, end, &ctx) {
        Ok(range) => {
            println!("ok: {}-{} fits on {date}", range.start, range.end);
            Ok(())
        }
        Err(e) => bail!("rejected: {e}"),
    }
}
