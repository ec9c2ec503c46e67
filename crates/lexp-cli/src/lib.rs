//! CLI library components for the life expectancy cleaner.

pub mod logging;
pub mod pipeline;
