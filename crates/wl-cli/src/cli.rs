//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Conflict-aware work session logger.
///
/// Validates proposed session times against the day's log, auto-fits
/// conflicting ranges, and summarizes net time with the lunch break
/// taken out.
#[derive(Debug, Parser)]
#[command(name = "wl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log a finished session for a day.
    Add {
        /// Start of the session (HH:mm).
        start: String,

        /// End of the session (HH:mm).
        end: String,

        /// Day the session belongs to (YYYY-MM-DD); today when omitted.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Free-form label for the session.
        #[arg(long)]
        note: Option<String>,
    },

    /// Check a proposed time range without logging it.
    Check {
        /// Start of the proposed session (HH:mm).
        start: String,

        /// End of the proposed session (HH:mm).
        end: String,

        /// Day to check against (YYYY-MM-DD); today when omitted.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Session ID to leave out of the overlap check (when editing).
        #[arg(long)]
        exclude: Option<String>,
    },

    /// Shrink a proposed range until it fits around existing sessions.
    Fit {
        /// Start of the proposed session (HH:mm).
        start: String,

        /// End of the proposed session (HH:mm).
        end: String,

        /// Day to fit into (YYYY-MM-DD); today when omitted.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List the sessions logged for a day.
    List {
        /// Day to list (YYYY-MM-DD); today when omitted.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Summarize net time per day.
    Report {
        /// Report on the current week (default).
        #[arg(long)]
        week: bool,

        /// Report on the previous week.
        #[arg(long)]
        last_week: bool,

        /// Report on today only.
        #[arg(long)]
        day: bool,

        /// Output JSON instead of the table.
        #[arg(long)]
        json: bool,
    },
}
