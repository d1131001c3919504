//! Report command: net time per day over a period.
//!
//! Implements `wl report` with period flags (`--week`, `--last-week`,
//! `--day`) and output formats (human-readable table, `--json`).

use std::fmt::Write;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use wl_core::Session;
use wl_core::summary::{DayTotal, WeekTotal, daily_totals, weekly_totals};

use crate::config::Config;
use crate::store::SessionStore;

/// Report period type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    LastWeek,
    Day,
}

/// JSON output shape.
#[derive(Debug, Serialize)]
struct ReportJson {
    period_start: NaiveDate,
    period_end: NaiveDate,
    weeks: Vec<WeekTotal>,
}

/// Half-open `[start, end)` date bounds for a period, relative to `today`.
///
/// Weeks run Monday to Monday.
fn period_bounds(period: Period, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_since_monday = today.weekday().num_days_from_monday();
    let monday = today - chrono::Duration::days(i64::from(days_since_monday));

    match period {
        Period::Week => (monday, monday + chrono::Duration::days(7)),
        Period::LastWeek => (monday - chrono::Duration::days(7), monday),
        Period::Day => (today, today + chrono::Duration::days(1)),
    }
}

/// Formats minutes as "Xh Ym" when at least an hour, "Ym" below.
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours >= 1 {
        format!("{hours}h {rest}m")
    } else {
        format!("{rest}m")
    }
}

/// Describes the period for the report header.
fn format_period_description(period: Period, start: NaiveDate) -> String {
    match period {
        Period::Week | Period::LastWeek => {
            let iso = start.iso_week();
            format!("Week {}, {}", iso.week(), iso.year())
        }
        Period::Day => start.format("%A, %b %-d, %Y").to_string(),
    }
}

/// Formats the human-readable report output.
fn format_report(description: &str, days: &[DayTotal]) -> String {
    let mut output = String::new();
    writeln!(output, "WORK REPORT: {description}").unwrap();

    if days.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "No sessions logged in this period.").unwrap();
        return output;
    }

    writeln!(output).unwrap();
    for day in days {
        writeln!(
            output,
            "  {}  {} session(s)  gross {}, net {}",
            day.date,
            day.sessions,
            format_minutes(day.gross_minutes),
            format_minutes(day.net_minutes),
        )
        .unwrap();
    }

    let net: u32 = days.iter().map(|d| d.net_minutes).sum();
    writeln!(output).unwrap();
    writeln!(output, "  Total net: {}", format_minutes(net)).unwrap();
    output
}

/// Sessions whose date falls inside the half-open bounds.
fn sessions_in_period(sessions: Vec<Session>, bounds: (NaiveDate, NaiveDate)) -> Vec<Session> {
    sessions
        .into_iter()
        .filter(|s| s.date >= bounds.0 && s.date < bounds.1)
        .collect()
}

pub fn run(config: &Config, period: Period, json: bool) -> Result<()> {
    let store = SessionStore::new(&config.store_path);
    let today = Local::now().date_naive();
    let bounds = period_bounds(period, today);
    let sessions = sessions_in_period(store.load()?, bounds);

    if json {
        let report = ReportJson {
            period_start: bounds.0,
            period_end: bounds.1,
            weeks: weekly_totals(&sessions, config.lunch),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let days = daily_totals(&sessions, config.lunch);
        let description = format_period_description(period, bounds.0);
        print!("{}", format_report(&description, &days));
    }

    Ok(())
}
