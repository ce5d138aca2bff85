//! Month grid generation for the calendar view

use crate::domain::{DiaryEntry, Mood};
use chrono::{Datelike, Month, NaiveDate};
use std::collections::HashMap;

/// One cell of a Sunday-start month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the 1st of the month
    Empty,
    Day {
        day: u32,
        date: NaiveDate,
        mood: Option<Mood>,
        is_today: bool,
    },
}

impl CalendarCell {
    pub fn has_entry(&self) -> bool {
        matches!(self, CalendarCell::Day { mood: Some(_), .. })
    }
}

/// Build the cells for `month` of `year`: leading padding up to the weekday
/// of the 1st (Sunday = 0), then one cell per day. Trailing cells are not
/// padded.
pub fn build_month_grid(
    year: i32,
    month: Month,
    entries: &[DiaryEntry],
    today: NaiveDate,
) -> Vec<CalendarCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1) else {
        return Vec::new();
    };
    let moods: HashMap<NaiveDate, Mood> = entries.iter().map(|e| (e.date, e.mood)).collect();

    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut cells = vec![CalendarCell::Empty; leading];

    cells.extend(first.iter_days().take_while(|d| d.month() == first.month()).map(|date| {
        CalendarCell::Day {
            day: date.day(),
            date,
            mood: moods.get(&date).copied(),
            is_today: date == today,
        }
    }));

    cells
}

/// The month currently shown by the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: Month,
}

impl MonthCursor {
    pub fn new(year: i32, month: Month) -> Self {
        MonthCursor { year, month }
    }

    pub fn containing(date: NaiveDate) -> Self {
        let month = Month::try_from(date.month() as u8).unwrap_or(Month::January);
        MonthCursor::new(date.year(), month)
    }

    /// Parse `YYYY-MM`
    pub fn parse(input: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d").ok()?;
        Some(Self::containing(date))
    }

    /// Move by `delta` months, rolling over year boundaries.
    /// `None` when the result falls outside the supported date range.
    pub fn shift(&self, delta: i64) -> Option<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month.number_from_month()) - 1;
        let index = index.checked_add(delta)?;
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = Month::try_from(index.rem_euclid(12) as u8 + 1).ok()?;
        NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)?;
        Some(MonthCursor::new(year, month))
    }

    /// e.g. "February 2024"
    pub fn label(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }

    pub fn grid(&self, entries: &[DiaryEntry], today: NaiveDate) -> Vec<CalendarCell> {
        build_month_grid(self.year, self.month, entries, today)
    }
}
