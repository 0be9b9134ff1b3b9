use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::utils::{clock, format_percentage, percent_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub enum AttendanceStatus {
    #[serde(rename = "P")]
    Present,
    #[serde(rename = "A")]
    Absent,
    #[serde(rename = "L")]
    Late,
    #[serde(rename = "H")]
    Holiday,
}

impl AttendanceStatus {
    /// Late arrivals still count as attending the class.
    pub fn counts_as_attended(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }

    pub fn code(&self) -> char {
        match self {
            AttendanceStatus::Present => 'P',
            AttendanceStatus::Absent => 'A',
            AttendanceStatus::Late => 'L',
            AttendanceStatus::Holiday => 'H',
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
            AttendanceStatus::Late => write!(f, "Late"),
            AttendanceStatus::Holiday => write!(f, "Holiday"),
        }
    }
}

/// One subject's status on one day, with the check-in time when known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub struct AttendanceMark {
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "clock::hhmm_opt")]
    #[cfg_attr(feature = "ts", ts(type = "string | null"))]
    pub time: Option<NaiveTime>,
}

impl AttendanceMark {
    pub fn new(status: AttendanceStatus) -> Self {
        Self { status, time: None }
    }

    pub fn at(status: AttendanceStatus, hour: u32, minute: u32) -> Self {
        Self {
            status,
            time: NaiveTime::from_hms_opt(hour, minute, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub struct SubjectAttendance {
    pub subject_id: i64,
    pub subject_name: String,
    pub teacher_name: String,
    pub total_classes: u32,
    pub attended_classes: u32,
    /// Stored percentage as shipped with the ledger. See `derived_percentage`.
    pub attendance_percentage: f64,
    #[serde(default)]
    #[cfg_attr(feature = "ts", ts(type = "Record<string, AttendanceMark>"))]
    pub date_attendance: BTreeMap<NaiveDate, AttendanceMark>,
}

impl SubjectAttendance {
    pub fn mark_on(&self, date: NaiveDate) -> Option<&AttendanceMark> {
        self.date_attendance.get(&date)
    }

    /// attended / total as a percentage, rounded to one decimal.
    pub fn derived_percentage(&self) -> f64 {
        percent_of(self.attended_classes.into(), self.total_classes.into())
    }

    /// Whether the stored percentage agrees with the class counts.
    pub fn is_consistent(&self) -> bool {
        (self.attendance_percentage - self.derived_percentage()).abs() < 0.05 + f64::EPSILON
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub enum TodayStatus {
    Present,
    Absent,
    Partial,
}

impl std::fmt::Display for TodayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodayStatus::Present => write!(f, "Present"),
            TodayStatus::Absent => write!(f, "Absent"),
            TodayStatus::Partial => write!(f, "Partial"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub struct DailyStatistics {
    pub classes_attended_today: u32,
    pub total_classes_today: u32,
    pub overall_percentage: f64,
    pub today_status: TodayStatus,
}

impl DailyStatistics {
    pub fn summary(&self) -> String {
        format!(
            "{} of {} classes today ({}), {} overall",
            self.classes_attended_today,
            self.total_classes_today,
            self.today_status,
            format_percentage(self.overall_percentage)
        )
    }
}
