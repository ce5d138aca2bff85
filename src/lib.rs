//! moodiary - Mood-tagged personal diary
//!
//! Keeps one journal entry per calendar day in a local diary directory,
//! and derives the writing streak, mood distribution and month calendar
//! from the stored entries.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DiaryError;
