//! Infrastructure layer - Durable storage and configuration

pub mod config;
pub mod storage;

pub use config::Config;
pub use storage::{FileStorage, MemoryStorage, Storage};
