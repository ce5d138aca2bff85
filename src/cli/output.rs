//! Output formatting utilities

use crate::application::{Notice, NoticeLevel};
use crate::domain::{Analytics, CalendarCell, ChartData, DiaryEntry, Draft, MonthCursor};

const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const BAR_WIDTH: usize = 20;

/// Format a notice the way the toast would show it
pub fn format_notice(notice: &Notice) -> String {
    let marker = match notice.level {
        NoticeLevel::Success => "✓",
        NoticeLevel::Error => "✗",
        NoticeLevel::Warning => "!",
    };
    format!("{} {}", marker, notice.message)
}

/// Full view of one entry
pub fn format_entry(entry: &DiaryEntry) -> String {
    format!(
        "{}\n{} {}\n\n{}\n\n({} words)\n",
        entry.date.format("%B %-d, %Y"),
        entry.mood.icon(),
        entry.mood,
        entry.content,
        entry.word_count
    )
}

/// One line per entry, newest first
pub fn format_entry_list(entries: &[DiaryEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut sorted: Vec<&DiaryEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut output = String::new();
    for entry in sorted {
        output.push_str(&format!(
            "{}  {} {:<8}  {} words\n",
            entry.date.format("%Y-%m-%d"),
            entry.mood.icon(),
            entry.mood.name(),
            entry.word_count
        ));
    }
    output
}

/// Month grid followed by the moods recorded that month.
/// Today is bracketed and recorded days carry a `*`.
pub fn format_calendar(cursor: &MonthCursor, cells: &[CalendarCell]) -> String {
    let mut output = format!("{}\n", cursor.label());
    let header: Vec<String> = WEEKDAY_HEADERS.iter().map(|h| format!(" {} ", h)).collect();
    output.push_str(header.join("").trim_end());
    output.push('\n');

    for week in cells.chunks(7) {
        let row: String = week.iter().map(format_cell).collect();
        output.push_str(row.trim_end());
        output.push('\n');
    }

    let recorded: Vec<String> = cells
        .iter()
        .filter_map(|cell| match cell {
            CalendarCell::Day {
                day,
                mood: Some(mood),
                ..
            } => Some(format!("  {:>2}  {} {}", day, mood.icon(), mood)),
            _ => None,
        })
        .collect();

    if !recorded.is_empty() {
        output.push('\n');
        output.push_str(&recorded.join("\n"));
        output.push('\n');
    }
    output
}

fn format_cell(cell: &CalendarCell) -> String {
    match cell {
        CalendarCell::Empty => "     ".to_string(),
        CalendarCell::Day {
            day,
            mood,
            is_today,
            ..
        } => {
            let (open, close) = if *is_today { ('[', ']') } else { (' ', ' ') };
            let mark = if mood.is_some() { '*' } else { ' ' };
            format!("{}{:>2}{}{}", open, day, mark, close)
        }
    }
}

/// Analytics counters plus a text rendition of the mood chart
pub fn format_stats(analytics: &Analytics, chart: &ChartData) -> String {
    let mut output = format!(
        "Total entries:  {}\nHappy days:     {}\nCurrent streak: {}\n\nMood distribution:\n",
        analytics.total_entries, analytics.happy_days, analytics.current_streak
    );

    if chart.is_placeholder {
        output.push_str("  No Data\n");
        return output;
    }

    let max = chart.slices.iter().map(|s| s.count).max().unwrap_or(1).max(1);
    for slice in &chart.slices {
        let width = (slice.count * BAR_WIDTH).div_ceil(max);
        output.push_str(&format!(
            "  {:<8} {:<bar$} {} ({})\n",
            slice.label,
            "█".repeat(width),
            slice.count,
            slice.color,
            bar = BAR_WIDTH
        ));
    }
    output
}

pub fn format_draft(draft: &Draft) -> String {
    format!(
        "Draft for {}\n{} {}\n\n{}\n",
        draft.date.format("%Y-%m-%d"),
        draft.mood.icon(),
        draft.mood,
        draft.content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{build_month_grid, mood_counts, Mood};
    use chrono::{Month, NaiveDate, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_notice_levels() {
        assert_eq!(format_notice(&Notice::success("Saved")), "✓ Saved");
        assert_eq!(format_notice(&Notice::error("Oops")), "✗ Oops");
        assert_eq!(format_notice(&Notice::warning("Hmm")), "! Hmm");
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_list_newest_first() {
        let entries = vec![
            DiaryEntry::new(date(2025, 1, 15), Mood::Sad, "a b", Utc::now()),
            DiaryEntry::new(date(2025, 1, 17), Mood::Happy, "c", Utc::now()),
        ];
        let output = format_entry_list(&entries);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2025-01-17"));
        assert!(lines[0].contains("Happy"));
        assert!(lines[1].ends_with("2 words"));
    }

    #[test]
    fn test_format_entry() {
        let entry = DiaryEntry::new(date(2025, 1, 7), Mood::Content, "tea and rain", Utc::now());
        let output = format_entry(&entry);
        assert!(output.starts_with("January 7, 2025\n"));
        assert!(output.contains("😌 Content"));
        assert!(output.contains("(3 words)"));
    }

    #[test]
    fn test_format_calendar_february_2024() {
        let entries = vec![DiaryEntry::new(date(2024, 2, 10), Mood::Sad, "x", Utc::now())];
        let cursor = MonthCursor::new(2024, Month::February);
        let cells = build_month_grid(2024, Month::February, &entries, date(2024, 2, 14));
        let output = format_calendar(&cursor, &cells);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "February 2024");
        assert!(lines[1].starts_with(" Sun  Mon"));
        // Thursday the 1st sits after four blank cells
        assert_eq!(lines[2], format!("{}1    2    3", " ".repeat(22)));
        assert!(lines[3].contains("10*"));
        assert!(lines[4].contains("[14 ]"));
        assert!(output.contains("  10  😢 Sad"));
    }

    #[test]
    fn test_format_stats_placeholder() {
        let analytics = Analytics::compute(&[], date(2025, 1, 1));
        let chart = ChartData::from_counts(&mood_counts(&[]));
        let output = format_stats(&analytics, &chart);
        assert!(output.contains("Total entries:  0"));
        assert!(output.contains("Current streak: 0"));
        assert!(output.contains("No Data"));
    }

    #[test]
    fn test_format_stats_bars() {
        let today = date(2025, 1, 17);
        let entries = vec![
            DiaryEntry::new(today, Mood::Happy, "x", Utc::now()),
            DiaryEntry::new(date(2025, 1, 16), Mood::Happy, "x", Utc::now()),
            DiaryEntry::new(date(2025, 1, 10), Mood::Angry, "x", Utc::now()),
        ];
        let output = format_stats(
            &Analytics::compute(&entries, today),
            &ChartData::from_counts(&mood_counts(&entries)),
        );
        assert!(output.contains("Happy days:     2"));
        assert!(output.contains("Current streak: 2"));
        assert!(output.contains(&format!("Happy    {} 2 (#4ecdc4)", "█".repeat(20))));
        assert!(output.contains("Angry    ██████████"));
    }
}
