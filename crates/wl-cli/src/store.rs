//! JSONL-backed session log.
//!
//! One session per line, in the order they were logged. Malformed lines
//! are skipped with a warning so a damaged log never blocks the CLI.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use wl_core::Session;

/// Handle to the session log file.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads every well-formed session in the log.
    ///
    /// A missing log file is an empty log, not an error.
    pub fn load(&self) -> Result<Vec<Session>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.path)
            .with_context(|| format!("failed to open session log {}", self.path.display()))?;
        let reader = BufReader::new(file);

        let mut sessions = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.context("failed to read session log")?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Session>(&line) {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    tracing::warn!(line = index + 1, error = %e, "skipping malformed session record");
                }
            }
        }
        Ok(sessions)
    }

    /// Sessions logged on one day.
    pub fn sessions_on(&self, date: NaiveDate) -> Result<Vec<Session>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|s| s.date == date)
            .collect())
    }

    /// Appends one session to the log, creating parent directories as
    /// needed.
    pub fn append(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("failed to create session log directory")?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open session log {}", self.path.display()))?;

        let mut line = serde_json::to_string(session).context("failed to encode session")?;
        line.push('\n');
        file.write_all(line.as_bytes())
            .context("failed to write session log")?;
        Ok(())
    }
}
