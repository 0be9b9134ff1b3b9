use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::attendance::{generate_attendance_pattern, school_days};
use crate::models::SubjectAttendance;

pub const LEDGER_YEAR: i32 = 2024;
pub const LEDGER_MONTH: u32 = 9;

/// Base seed for the generated day-by-day marks. Each subject offsets it by
/// its id so subjects differ but the ledger is stable across runs.
const LEDGER_SEED: u64 = 0x5c4001;

fn subject(
    subject_id: i64,
    subject_name: &str,
    teacher_name: &str,
    total_classes: u32,
    attended_classes: u32,
    attendance_percentage: f64,
) -> SubjectAttendance {
    let dates = school_days(LEDGER_YEAR, LEDGER_MONTH);
    let mut rng = StdRng::seed_from_u64(LEDGER_SEED + subject_id as u64);
    SubjectAttendance {
        subject_id,
        subject_name: subject_name.to_string(),
        teacher_name: teacher_name.to_string(),
        total_classes,
        attended_classes,
        attendance_percentage,
        date_attendance: generate_attendance_pattern(&dates, &mut rng),
    }
}

pub fn subject_ledger() -> Vec<SubjectAttendance> {
    vec![
        subject(1, "Mathematics", "Dr. Rajesh Kumar", 22, 20, 90.9),
        subject(2, "Physics", "Prof. Sunita Sharma", 20, 18, 90.0),
        subject(3, "Chemistry", "Ms. Priya Patel", 21, 19, 90.5),
        subject(4, "English", "Mr. David Wilson", 18, 17, 94.4),
        subject(5, "History", "Dr. Meera Singh", 16, 15, 93.8),
        subject(6, "Computer Science", "Mr. Ravi Agarwal", 19, 18, 94.7),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::{compute_daily_statistics, overall_percentage};
    use chrono::{Datelike, NaiveDate, Weekday};

    #[test]
    fn test_ledger_has_no_weekend_dates() {
        for subject in subject_ledger() {
            assert_eq!(subject.date_attendance.len(), 21);
            for date in subject.date_attendance.keys() {
                assert!(!matches!(date.weekday(), Weekday::Sat | Weekday::Sun));
            }
        }
    }

    #[test]
    fn test_ledger_is_stable() {
        assert_eq!(subject_ledger(), subject_ledger());
    }

    #[test]
    fn test_stored_percentages_match_counts() {
        for subject in subject_ledger() {
            assert!(subject.is_consistent(), "{} drifted", subject.subject_name);
        }
    }

    #[test]
    fn test_ledger_overall_percentage() {
        // 107 attended of 116 held
        assert_eq!(overall_percentage(&subject_ledger()), 92.2);
    }

    #[test]
    fn test_ledger_daily_statistics_on_school_day() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        let stats = compute_daily_statistics(&subject_ledger(), Some(date));
        assert_eq!(stats.total_classes_today, 6);
        assert!(stats.classes_attended_today <= 6);
    }

    #[test]
    fn test_ledger_daily_statistics_on_weekend() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 7).unwrap();
        let stats = compute_daily_statistics(&subject_ledger(), Some(date));
        assert_eq!(stats.total_classes_today, 0);
        assert_eq!(stats.overall_percentage, 92.2);
    }
}
