use chrono::{Local, NaiveDate};

use crate::models::{DailyStatistics, SubjectAttendance, TodayStatus};
use crate::utils::percent_of;

/// Attended classes over total classes across every subject, rounded to one
/// decimal. Zero when no classes have been held.
pub fn overall_percentage(subjects: &[SubjectAttendance]) -> f64 {
    let attended: u64 = subjects.iter().map(|s| u64::from(s.attended_classes)).sum();
    let total: u64 = subjects.iter().map(|s| u64::from(s.total_classes)).sum();
    percent_of(attended, total)
}

/// Today's figures for a student.
///
/// `target_date` defaults to the local calendar date. A subject counts toward
/// today's total when it has a mark on that date; Present and Late marks count
/// as attended. With no classes on the date the status is `Absent`.
pub fn compute_daily_statistics(
    subjects: &[SubjectAttendance],
    target_date: Option<NaiveDate>,
) -> DailyStatistics {
    let today = target_date.unwrap_or_else(|| Local::now().date_naive());

    let mut classes_attended_today = 0;
    let mut total_classes_today = 0;
    for mark in subjects.iter().filter_map(|s| s.mark_on(today)) {
        total_classes_today += 1;
        if mark.status.counts_as_attended() {
            classes_attended_today += 1;
        }
    }

    let today_status = if total_classes_today > 0 && classes_attended_today == total_classes_today {
        TodayStatus::Present
    } else if classes_attended_today > 0 {
        TodayStatus::Partial
    } else {
        TodayStatus::Absent
    };

    DailyStatistics {
        classes_attended_today,
        total_classes_today,
        overall_percentage: overall_percentage(subjects),
        today_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceMark, AttendanceStatus};
    use std::collections::BTreeMap;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    fn subject(id: i64, attended: u32, total: u32, marks: &[(u32, AttendanceStatus)]) -> SubjectAttendance {
        let date_attendance: BTreeMap<_, _> = marks
            .iter()
            .map(|(d, status)| (day(*d), AttendanceMark::new(*status)))
            .collect();
        SubjectAttendance {
            subject_id: id,
            subject_name: format!("Subject {}", id),
            teacher_name: "Teacher".to_string(),
            total_classes: total,
            attended_classes: attended,
            attendance_percentage: percent_of(attended.into(), total.into()),
            date_attendance,
        }
    }

    #[test]
    fn test_no_subjects() {
        let stats = compute_daily_statistics(&[], Some(day(2)));
        assert_eq!(
            stats,
            DailyStatistics {
                classes_attended_today: 0,
                total_classes_today: 0,
                overall_percentage: 0.0,
                today_status: TodayStatus::Absent,
            }
        );
    }

    #[test]
    fn test_no_subjects_default_date() {
        let stats = compute_daily_statistics(&[], None);
        assert_eq!(stats.total_classes_today, 0);
        assert_eq!(stats.today_status, TodayStatus::Absent);
    }

    #[test]
    fn test_overall_percentage_38_of_40() {
        let subjects = vec![subject(1, 20, 21, &[]), subject(2, 18, 19, &[])];
        assert_eq!(overall_percentage(&subjects), 95.0);
        assert_eq!(compute_daily_statistics(&subjects, Some(day(2))).overall_percentage, 95.0);
    }

    #[test]
    fn test_overall_percentage_zero_classes() {
        let subjects = vec![subject(1, 0, 0, &[])];
        assert_eq!(overall_percentage(&subjects), 0.0);
    }

    #[test]
    fn test_overall_percentage_large_counts() {
        let subjects = vec![
            subject(1, 3_000_000_000, 3_000_000_000, &[]),
            subject(2, 3_000_000_000, 3_000_000_000, &[]),
        ];
        assert_eq!(overall_percentage(&subjects), 100.0);
        let stats = compute_daily_statistics(&subjects, Some(day(2)));
        assert_eq!(stats.overall_percentage, 100.0);

        let subjects = vec![
            subject(1, 3_000_000_000, 4_000_000_000, &[]),
            subject(2, 1_000_000_000, 4_000_000_000, &[]),
        ];
        assert_eq!(overall_percentage(&subjects), 50.0);
    }

    #[test]
    fn test_all_present_or_late_is_present() {
        let subjects = vec![
            subject(1, 1, 1, &[(2, AttendanceStatus::Present)]),
            subject(2, 1, 1, &[(2, AttendanceStatus::Late)]),
        ];
        let stats = compute_daily_statistics(&subjects, Some(day(2)));
        assert_eq!(stats.classes_attended_today, 2);
        assert_eq!(stats.total_classes_today, 2);
        assert_eq!(stats.today_status, TodayStatus::Present);
    }

    #[test]
    fn test_some_absent_is_partial() {
        let subjects = vec![
            subject(1, 1, 2, &[(2, AttendanceStatus::Present)]),
            subject(2, 0, 2, &[(2, AttendanceStatus::Absent)]),
            subject(3, 0, 2, &[(3, AttendanceStatus::Present)]),
        ];
        let stats = compute_daily_statistics(&subjects, Some(day(2)));
        assert_eq!(stats.classes_attended_today, 1);
        assert_eq!(stats.total_classes_today, 2);
        assert_eq!(stats.today_status, TodayStatus::Partial);
    }

    #[test]
    fn test_all_absent_is_absent() {
        let subjects = vec![subject(1, 0, 1, &[(2, AttendanceStatus::Absent)])];
        let stats = compute_daily_statistics(&subjects, Some(day(2)));
        assert_eq!(stats.total_classes_today, 1);
        assert_eq!(stats.today_status, TodayStatus::Absent);
    }

    #[test]
    fn test_holiday_mark_counts_as_scheduled_but_not_attended() {
        let subjects = vec![
            subject(1, 1, 1, &[(2, AttendanceStatus::Holiday)]),
            subject(2, 1, 1, &[(2, AttendanceStatus::Present)]),
        ];
        let stats = compute_daily_statistics(&subjects, Some(day(2)));
        assert_eq!(stats.total_classes_today, 2);
        assert_eq!(stats.classes_attended_today, 1);
        assert_eq!(stats.today_status, TodayStatus::Partial);
    }

    #[test]
    fn test_no_classes_on_date_is_absent() {
        // A weekend has no marks at all
        let subjects = vec![subject(1, 10, 10, &[(2, AttendanceStatus::Present)])];
        let stats = compute_daily_statistics(&subjects, Some(day(7)));
        assert_eq!(stats.total_classes_today, 0);
        assert_eq!(stats.classes_attended_today, 0);
        assert_eq!(stats.today_status, TodayStatus::Absent);
        assert_eq!(stats.overall_percentage, 100.0);
    }
}
