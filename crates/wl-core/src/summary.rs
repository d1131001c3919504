//! Daily and weekly rollups of logged time.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::lunch::LunchBreak;
use crate::session::Session;

/// Net and gross minutes logged on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    /// Wall-clock minutes across finished sessions.
    pub gross_minutes: u32,
    /// Gross minutes minus time eaten by the lunch break.
    pub net_minutes: u32,
    /// Finished sessions counted into the totals.
    pub sessions: usize,
}

/// One ISO week of day totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekTotal {
    pub year: i32,
    pub week: u32,
    pub days: Vec<DayTotal>,
    pub net_minutes: u32,
}

/// Rolls sessions up into per-day totals, ordered by date.
///
/// Open sessions have no bounded span yet and are left out of both the
/// totals and the session count.
#[must_use]
pub fn daily_totals(sessions: &[Session], lunch: LunchBreak) -> Vec<DayTotal> {
    let mut by_date: BTreeMap<NaiveDate, DayTotal> = BTreeMap::new();

    for session in sessions {
        let Some(range) = session.range() else {
            continue;
        };
        let entry = by_date.entry(session.date).or_insert_with(|| DayTotal {
            date: session.date,
            gross_minutes: 0,
            net_minutes: 0,
            sessions: 0,
        });
        entry.gross_minutes += u32::from(range.duration_minutes());
        entry.net_minutes += u32::from(lunch.net_minutes(range));
        entry.sessions += 1;
    }

    by_date.into_values().collect()
}

/// Groups day totals into ISO weeks, ordered chronologically.
#[must_use]
pub fn weekly_totals(sessions: &[Session], lunch: LunchBreak) -> Vec<WeekTotal> {
    let mut weeks: Vec<WeekTotal> = Vec::new();

    for day in daily_totals(sessions, lunch) {
        let iso = day.date.iso_week();
        match weeks.last_mut() {
            Some(week) if week.year == iso.year() && week.week == iso.week() => {
                week.net_minutes += day.net_minutes;
                week.days.push(day);
            }
            _ => weeks.push(WeekTotal {
                year: iso.year(),
                week: iso.week(),
                net_minutes: day.net_minutes,
                days: vec![day],
            }),
        }
    }

    weeks
}
