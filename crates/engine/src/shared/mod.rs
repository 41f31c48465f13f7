pub mod config;
pub mod error;
pub mod format;
pub mod search;
pub mod stats;
