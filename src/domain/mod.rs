//! Domain layer - Diary records and the rules derived from them

pub mod calendar;
pub mod draft;
pub mod entry;
pub mod mood;
pub mod stats;
pub mod theme;
pub mod time_ref;

pub use calendar::{build_month_grid, CalendarCell, MonthCursor};
pub use draft::{Debouncer, Draft};
pub use entry::{word_count, DiaryEntry};
pub use mood::Mood;
pub use stats::{compute_streak, happy_day_count, mood_counts, total_entries, Analytics, ChartData};
pub use theme::Theme;
pub use time_ref::{resolve_date, DateReference};
