//! The per-class daily register teachers fill in.
//!
//! Marks are keyed by date and then by roster student id. A missing entry
//! means the day has not been marked for that student yet. Only today's
//! column is editable, and Sundays are holidays with no marks at all.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RegisterError;
use crate::models::RosterStudent;
use crate::utils::whole_percent_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterMark {
    Present,
    Absent,
}

impl std::fmt::Display for RegisterMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterMark::Present => write!(f, "Present"),
            RegisterMark::Absent => write!(f, "Absent"),
        }
    }
}

/// Where a register column sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Holiday,
    Past,
    Today,
    Future,
}

impl DayKind {
    pub fn of(date: NaiveDate, today: NaiveDate) -> Self {
        if is_holiday(date) {
            DayKind::Holiday
        } else if date < today {
            DayKind::Past
        } else if date == today {
            DayKind::Today
        } else {
            DayKind::Future
        }
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, DayKind::Today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterSummary {
    pub present: u32,
    pub total: u32,
    pub percentage: u32,
}

/// Every calendar day of the month, ascending. Empty for an invalid month.
pub fn month_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect()
}

pub fn is_holiday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceRegister {
    days: BTreeMap<NaiveDate, BTreeMap<i64, RegisterMark>>,
}

impl AttendanceRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, student_id: i64, date: NaiveDate) -> Option<RegisterMark> {
        self.days.get(&date)?.get(&student_id).copied()
    }

    pub fn set(&mut self, student_id: i64, date: NaiveDate, mark: RegisterMark) {
        self.days.entry(date).or_default().insert(student_id, mark);
    }

    /// Dates with at least one mark, ascending.
    pub fn marked_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days
            .iter()
            .filter(|(_, marks)| !marks.is_empty())
            .map(|(d, _)| *d)
    }

    /// Flip a student's mark for `date`. An unmarked day becomes Present.
    pub fn toggle(
        &mut self,
        student_id: i64,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<RegisterMark, RegisterError> {
        if is_holiday(date) {
            return Err(RegisterError::Holiday(date));
        }
        if date != today {
            return Err(RegisterError::NotToday(date));
        }

        let next = match self.status(student_id, date) {
            Some(RegisterMark::Present) => RegisterMark::Absent,
            _ => RegisterMark::Present,
        };
        self.set(student_id, date, next);
        debug!(student_id, %date, mark = %next, "Register mark toggled");
        Ok(next)
    }

    /// Mark every given student Present for today. Returns how many were marked.
    pub fn mark_all_present(
        &mut self,
        students: &[RosterStudent],
        today: NaiveDate,
    ) -> Result<usize, RegisterError> {
        if is_holiday(today) {
            return Err(RegisterError::Holiday(today));
        }
        for student in students {
            self.set(student.id, today, RegisterMark::Present);
        }
        debug!(count = students.len(), %today, "Marked all present");
        Ok(students.len())
    }

    /// Drop every mark for `date`.
    pub fn clear_day(&mut self, date: NaiveDate) -> bool {
        let cleared = self.days.remove(&date).is_some();
        if cleared {
            debug!(%date, "Register day cleared");
        }
        cleared
    }

    pub fn summary(&self, student_id: i64, dates: &[NaiveDate]) -> RegisterSummary {
        let mut present = 0;
        let mut total = 0;
        for date in dates {
            if let Some(mark) = self.status(student_id, *date) {
                total += 1;
                if mark == RegisterMark::Present {
                    present += 1;
                }
            }
        }
        RegisterSummary {
            present,
            total,
            percentage: whole_percent_of(present, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ============================================================================
    // Calendar
    // ============================================================================

    #[test]
    fn test_month_dates_every_day() {
        assert_eq!(month_dates(2025, 9).len(), 30);
        assert_eq!(month_dates(2024, 2).len(), 29);
        assert_eq!(month_dates(2025, 2).len(), 28);
        assert_eq!(month_dates(2025, 12).last(), Some(&date(2025, 12, 31)));
        assert!(month_dates(2025, 13).is_empty());
    }

    #[test]
    fn test_sundays_are_holidays() {
        assert!(is_holiday(date(2025, 9, 7)));
        assert!(!is_holiday(date(2025, 9, 6)));
        assert!(!is_holiday(date(2025, 9, 8)));
    }

    #[test]
    fn test_day_kind() {
        let today = date(2025, 9, 10);
        assert_eq!(DayKind::of(date(2025, 9, 9), today), DayKind::Past);
        assert_eq!(DayKind::of(today, today), DayKind::Today);
        assert_eq!(DayKind::of(date(2025, 9, 11), today), DayKind::Future);
        assert_eq!(DayKind::of(date(2025, 9, 14), today), DayKind::Holiday);
        assert!(DayKind::of(today, today).is_editable());
        assert!(!DayKind::Past.is_editable());
    }

    // ============================================================================
    // Toggling
    // ============================================================================

    #[test]
    fn test_toggle_cycles_today() {
        let today = date(2025, 9, 22);
        let mut register = AttendanceRegister::new();

        assert_eq!(register.toggle(1, today, today), Ok(RegisterMark::Present));
        assert_eq!(register.toggle(1, today, today), Ok(RegisterMark::Absent));
        assert_eq!(register.toggle(1, today, today), Ok(RegisterMark::Present));
        assert_eq!(register.status(1, today), Some(RegisterMark::Present));
    }

    #[test]
    fn test_toggle_rejected_outside_today() {
        let today = date(2025, 9, 22);
        let mut register = fixtures::register_marks();
        let past = date(2025, 9, 19);

        assert_eq!(
            register.toggle(1, past, today),
            Err(RegisterError::NotToday(past))
        );
        assert_eq!(register.status(1, past), Some(RegisterMark::Present));

        let future = date(2025, 9, 23);
        assert_eq!(
            register.toggle(1, future, today),
            Err(RegisterError::NotToday(future))
        );
        assert_eq!(register.status(1, future), None);
    }

    #[test]
    fn test_toggle_rejected_on_sunday() {
        let sunday = date(2025, 9, 21);
        let mut register = AttendanceRegister::new();
        assert_eq!(
            register.toggle(1, sunday, sunday),
            Err(RegisterError::Holiday(sunday))
        );
        assert_eq!(register.marked_days().count(), 0);
    }

    // ============================================================================
    // Bulk operations
    // ============================================================================

    #[test]
    fn test_mark_all_present_and_clear() {
        let today = date(2025, 9, 22);
        let mut register = AttendanceRegister::new();
        let students = fixtures::roster_students();

        assert_eq!(register.mark_all_present(&students, today), Ok(5));
        for s in &students {
            assert_eq!(register.status(s.id, today), Some(RegisterMark::Present));
        }

        assert!(register.clear_day(today));
        assert!(!register.clear_day(today));
        assert_eq!(register.status(1, today), None);
    }

    #[test]
    fn test_mark_all_present_on_holiday() {
        let sunday = date(2025, 9, 21);
        let mut register = AttendanceRegister::new();
        assert_eq!(
            register.mark_all_present(&fixtures::roster_students(), sunday),
            Err(RegisterError::Holiday(sunday))
        );
    }

    // ============================================================================
    // Summary
    // ============================================================================

    #[test]
    fn test_summary_counts_marked_days_only() {
        let register = fixtures::register_marks();
        let dates = month_dates(2025, 9);

        // Student 1 is absent on the 4th, 10th and 17th.
        let s = register.summary(1, &dates);
        assert_eq!(s.total, 14);
        assert_eq!(s.present, 11);
        assert_eq!(s.percentage, 79);
    }

    #[test]
    fn test_summary_empty() {
        let register = AttendanceRegister::new();
        let s = register.summary(1, &month_dates(2025, 9));
        assert_eq!(
            s,
            RegisterSummary {
                present: 0,
                total: 0,
                percentage: 0
            }
        );
    }

    #[test]
    fn test_register_serializes_by_date() {
        let mut register = AttendanceRegister::new();
        register.set(3, date(2025, 9, 2), RegisterMark::Absent);
        let json = serde_json::to_value(&register).unwrap();
        assert_eq!(json["2025-09-02"]["3"], "Absent");

        let back: AttendanceRegister = serde_json::from_value(json).unwrap();
        assert_eq!(back, register);
    }
}
