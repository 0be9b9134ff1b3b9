use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;
use tracing::debug;

use crate::fixtures;
use crate::models::{AttendanceMark, AttendanceStatus, SubjectAttendance};

/// Draws above this are on time.
const PRESENT_THRESHOLD: f64 = 0.15;

/// Draws above this (and not above `PRESENT_THRESHOLD`) are late.
const LATE_THRESHOLD: f64 = 0.05;

/// Monday through Friday of the given month, in order. Empty for an invalid
/// year/month.
pub fn school_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}

/// One mark per date: mostly present at 09:00, sometimes late at 09:15,
/// occasionally absent.
pub fn generate_attendance_pattern<R: Rng>(
    dates: &[NaiveDate],
    rng: &mut R,
) -> BTreeMap<NaiveDate, AttendanceMark> {
    dates
        .iter()
        .map(|date| {
            let draw: f64 = rng.gen();
            let mark = if draw > PRESENT_THRESHOLD {
                AttendanceMark::at(AttendanceStatus::Present, 9, 0)
            } else if draw > LATE_THRESHOLD {
                AttendanceMark::at(AttendanceStatus::Late, 9, 15)
            } else {
                AttendanceMark::new(AttendanceStatus::Absent)
            };
            (*date, mark)
        })
        .collect()
}

/// Subject ledger for a student.
///
/// Every student currently shares the same ledger; `student_id` is not used
/// to filter.
pub fn get_attendance_for_student(student_id: i64) -> Vec<SubjectAttendance> {
    let subjects = fixtures::subject_ledger();
    debug!(student_id, subjects = subjects.len(), "Loaded attendance ledger");
    subjects
}
