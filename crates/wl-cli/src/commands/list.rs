//! List command: print the sessions logged for one day.

use anyhow::Result;
use chrono::NaiveDate;
use wl_core::Session;

use crate::config::Config;
use crate::store::SessionStore;

use super::report::format_minutes;

/// One rendered line per session, ordered by start time.
fn format_session(session: &Session) -> String {
    let note = session.note.as_deref().unwrap_or("");
    match session.duration_minutes() {
        Some(minutes) => format!(
            "{}-{}  {:>7}  {}",
            session.start,
            // Finished sessions always carry an end time.
            session.end.map(|t| t.to_string()).unwrap_or_default(),
            format_minutes(u32::from(minutes)),
            note,
        ),
        None => format!("{}-     (running)  {}", session.start, note),
    }
}

pub fn run(config: &Config, date: NaiveDate) -> Result<()> {
    let store = SessionStore::new(&config.store_path);
    let mut sessions = store.sessions_on(date)?;
    sessions.sort_by_key(|s| s.start);

    if sessions.is_empty() {
        println!("no sessions logged on {date}");
        return Ok(());
    }

    println!("sessions on {date}:");
    for session in &sessions {
        println!("  {}", format_session(session).trim_end());
    }
    Ok(())
}
