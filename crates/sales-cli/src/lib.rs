//! CLI library components for the sales cleaner.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
