//! Date reference parsing and resolution

use crate::error::{Result, ValidationError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A user-supplied date that resolves to one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Previous occurrence of a weekday (strictly before today)
    LastWeekday(Weekday),
    SpecificDate(NaiveDate),
}

impl DateReference {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(DateReference::Weekday(weekday));
        }

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            _ if normalized.starts_with("last ") => parse_weekday(&normalized[5..])
                .map(DateReference::LastWeekday)
                .ok_or_else(|| invalid(input)),
            _ => NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .map(DateReference::SpecificDate)
                .map_err(|_| invalid(input)),
        }
    }

    /// Resolve this reference against `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::Weekday(target) => today - Duration::days(days_back(today, *target)),
            DateReference::LastWeekday(target) => {
                let back = match days_back(today, *target) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            DateReference::SpecificDate(date) => *date,
        }
    }
}

/// Parse `input` and resolve it in one step
pub fn resolve_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    Ok(DateReference::parse(input)?.resolve(today))
}

fn invalid(input: &str) -> crate::error::DiaryError {
    ValidationError::InvalidDate(input.to_string()).into()
}

fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    ((today.weekday().num_days_from_monday() + 7 - target.num_days_from_monday()) % 7) as i64
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
