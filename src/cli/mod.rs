//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{Cli, Commands};
pub use output::{
    format_calendar, format_draft, format_entry, format_entry_list, format_notice, format_stats,
};
pub use prompt::StdinConfirm;
