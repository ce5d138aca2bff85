//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodiary")]
#[command(about = "Mood-tagged personal diary, one entry per day", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write or replace the entry for a day (content is read from stdin when --content is absent)
    Write {
        /// Day of the entry (today, yesterday, monday, last friday, YYYY-MM-DD)
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Mood (ecstatic, happy, content, anxious, sad, angry)
        #[arg(short, long)]
        mood: Option<String>,

        /// Entry text
        #[arg(short, long)]
        content: Option<String>,

        /// Commit the recovered draft for this day
        #[arg(long, conflicts_with = "content")]
        from_draft: bool,
    },

    /// Show the entry for a day
    Show {
        #[arg(default_value = "today")]
        date: String,
    },

    /// List all entries, newest first
    List,

    /// Delete the entry for a day
    Delete {
        date: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every entry
    Reset {
        /// Skip both confirmation prompts
        #[arg(short, long)]
        yes: bool,
    },

    /// Show a month calendar with recorded days
    Calendar {
        /// Month to show (YYYY-MM, default: current month)
        #[arg(long)]
        month: Option<String>,

        /// Move back this many months
        #[arg(long, default_value_t = 0)]
        prev: u32,

        /// Move forward this many months
        #[arg(long, default_value_t = 0)]
        next: u32,
    },

    /// Show streak, totals and mood distribution
    Stats,

    /// Export all entries as JSON
    Export {
        /// Directory to write the export file into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Merge entries from an export file
    Import { file: PathBuf },

    /// Save, show or clear the unsaved draft
    Draft {
        #[arg(short, long, default_value = "today")]
        date: String,

        #[arg(short, long)]
        mood: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        /// Print the draft that would be recovered today
        #[arg(long, conflicts_with_all = ["clear", "mood", "content"])]
        show: bool,

        /// Remove the stored draft
        #[arg(long, conflicts_with_all = ["mood", "content"])]
        clear: bool,
    },

    /// Show or change the theme (light, dark, toggle)
    Theme { value: Option<String> },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
