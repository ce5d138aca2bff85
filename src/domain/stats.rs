//! Derived statistics over the entry collection
//!
//! Everything here is a pure function of the entries (and today's date);
//! callers recompute after each mutation instead of caching results.

use crate::domain::mood::PLACEHOLDER_COLOR;
use crate::domain::{DiaryEntry, Mood};
use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, HashSet};

/// Consecutive days with an entry, counting back from `today`.
///
/// When today has no entry yet the count starts from yesterday instead,
/// so an unwritten today does not break the streak.
pub fn compute_streak(entries: &[DiaryEntry], today: NaiveDate) -> usize {
    let dates: HashSet<NaiveDate> = entries.iter().map(|e| e.date).collect();

    let mut day = if dates.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0;
    while dates.contains(&day) {
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}

/// Entries per mood; moods without entries are absent
pub fn mood_counts(entries: &[DiaryEntry]) -> BTreeMap<Mood, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.mood).or_insert(0) += 1;
    }
    counts
}

pub fn total_entries(entries: &[DiaryEntry]) -> usize {
    entries.len()
}

/// Entries tagged Ecstatic, Happy or Content
pub fn happy_day_count(entries: &[DiaryEntry]) -> usize {
    entries.iter().filter(|e| e.mood.is_happy()).count()
}

/// Counters shown on the analytics screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analytics {
    pub total_entries: usize,
    pub happy_days: usize,
    pub current_streak: usize,
}

impl Analytics {
    pub fn compute(entries: &[DiaryEntry], today: NaiveDate) -> Self {
        Analytics {
            total_entries: total_entries(entries),
            happy_days: happy_day_count(entries),
            current_streak: compute_streak(entries, today),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSlice {
    pub label: String,
    pub count: usize,
    pub color: &'static str,
}

/// Mood distribution prepared for a chart renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    pub slices: Vec<ChartSlice>,
    /// True when `slices` holds only the "No Data" placeholder
    pub is_placeholder: bool,
}

impl ChartData {
    pub fn from_counts(counts: &BTreeMap<Mood, usize>) -> Self {
        if counts.is_empty() {
            return ChartData {
                slices: vec![ChartSlice {
                    label: "No Data".to_string(),
                    count: 1,
                    color: PLACEHOLDER_COLOR,
                }],
                is_placeholder: true,
            };
        }

        let slices = counts
            .iter()
            .map(|(mood, count)| ChartSlice {
                label: mood.name().to_string(),
                count: *count,
                color: mood.color(),
            })
            .collect();

        ChartData {
            slices,
            is_placeholder: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(date: NaiveDate, mood: Mood) -> DiaryEntry {
        DiaryEntry::new(date, mood, "words", Utc::now())
    }

    fn on_days(today: NaiveDate, days_ago: &[i64]) -> Vec<DiaryEntry> {
        days_ago
            .iter()
            .map(|n| entry(today - Duration::days(*n), Mood::Happy))
            .collect()
    }

    #[test]
    fn test_streak_empty() {
        assert_eq!(compute_streak(&[], day(2025, 1, 17)), 0);
    }

    #[test]
    fn test_streak_today_and_two_before() {
        let today = day(2025, 1, 17);
        assert_eq!(compute_streak(&on_days(today, &[0, 1, 2]), today), 3);
    }

    #[test]
    fn test_streak_stops_at_gap() {
        let today = day(2025, 1, 17);
        assert_eq!(compute_streak(&on_days(today, &[0, 1, 2, 4, 5]), today), 3);
    }

    #[test]
    fn test_streak_grace_day() {
        let today = day(2025, 1, 17);
        assert_eq!(compute_streak(&on_days(today, &[1]), today), 1);
        assert_eq!(compute_streak(&on_days(today, &[1, 2, 3]), today), 3);
    }

    #[test]
    fn test_streak_two_days_ago_only() {
        let today = day(2025, 1, 17);
        assert_eq!(compute_streak(&on_days(today, &[2]), today), 0);
    }

    #[test]
    fn test_streak_ignores_future_entries() {
        let today = day(2025, 1, 17);
        let mut entries = on_days(today, &[0]);
        entries.push(entry(day(2025, 1, 18), Mood::Sad));
        assert_eq!(compute_streak(&entries, today), 1);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let today = day(2024, 3, 1);
        let entries = vec![
            entry(day(2024, 3, 1), Mood::Happy),
            entry(day(2024, 2, 29), Mood::Happy),
            entry(day(2024, 2, 28), Mood::Happy),
        ];
        assert_eq!(compute_streak(&entries, today), 3);
    }

    #[test]
    fn test_mood_counts() {
        let d = day(2025, 1, 1);
        let entries = vec![
            entry(d, Mood::Happy),
            entry(d + Duration::days(1), Mood::Happy),
            entry(d + Duration::days(2), Mood::Sad),
        ];
        let counts = mood_counts(&entries);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&Mood::Happy], 2);
        assert_eq!(counts[&Mood::Sad], 1);
        assert!(!counts.contains_key(&Mood::Angry));
    }

    #[test]
    fn test_happy_day_count() {
        let d = day(2025, 1, 1);
        let entries: Vec<DiaryEntry> = [Mood::Ecstatic, Mood::Sad, Mood::Content, Mood::Angry]
            .into_iter()
            .enumerate()
            .map(|(i, mood)| entry(d + Duration::days(i as i64), mood))
            .collect();
        assert_eq!(happy_day_count(&entries), 2);
        assert_eq!(total_entries(&entries), 4);
    }

    #[test]
    fn test_analytics_compute() {
        let today = day(2025, 1, 17);
        let mut entries = on_days(today, &[0, 1]);
        entries.push(entry(today - Duration::days(5), Mood::Angry));
        let analytics = Analytics::compute(&entries, today);
        assert_eq!(
            analytics,
            Analytics {
                total_entries: 3,
                happy_days: 2,
                current_streak: 2,
            }
        );
    }

    #[test]
    fn test_chart_placeholder_when_empty() {
        let chart = ChartData::from_counts(&BTreeMap::new());
        assert!(chart.is_placeholder);
        assert_eq!(chart.slices.len(), 1);
        assert_eq!(chart.slices[0].label, "No Data");
        assert_eq!(chart.slices[0].count, 1);
        assert_eq!(chart.slices[0].color, PLACEHOLDER_COLOR);
    }

    #[test]
    fn test_chart_slices_follow_counts() {
        let mut counts = BTreeMap::new();
        counts.insert(Mood::Sad, 1);
        counts.insert(Mood::Happy, 2);
        let chart = ChartData::from_counts(&counts);
        assert!(!chart.is_placeholder);
        let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Happy", "Sad"]);
        assert_eq!(chart.slices[0].color, Mood::Happy.color());
    }
}
