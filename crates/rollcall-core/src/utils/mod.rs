//! Utility functions for formatting, percentages and clock-time serde.

pub mod clock;
pub mod format;
pub mod percent;

// Re-export commonly used functions at module level
pub use format::{format_date, format_percentage, format_phone};
pub use percent::{percent_of, round_to_tenth, whole_percent_of};
