//! Application layer - Use cases and orchestration

pub mod delete_entry;
pub mod draft;
pub mod entry_store;
pub mod init;
pub mod manage_config;
pub mod notice;
pub mod save_entry;
pub mod theme;
pub mod transfer;

pub use delete_entry::{delete_entry, reset_all};
pub use draft::DraftService;
pub use entry_store::EntryStore;
pub use manage_config::ConfigService;
pub use notice::{AssumeYes, Confirm, Notice, NoticeLevel};
pub use save_entry::save_entry;
pub use theme::ThemeService;
pub use transfer::{export_entries, import_entries};
