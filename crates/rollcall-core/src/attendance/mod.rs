//! Per-subject attendance ledgers and the statistics derived from them.
//!
//! - `stats`: daily and overall figures for the student dashboard
//! - `ledger`: school-day calendars, generated day-by-day marks, and the
//!   ledger lookup for a student

pub mod ledger;
pub mod stats;

pub use ledger::{generate_attendance_pattern, get_attendance_for_student, school_days};
pub use stats::{compute_daily_statistics, overall_percentage};
