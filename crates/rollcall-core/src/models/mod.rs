//! Data models for the school dashboards.
//!
//! This module contains the data structures shared across the crate:
//!
//! - `StudentProfile`, `StaffCredential`: the two credential spaces
//! - `Principal`: an authenticated identity, tagged by role
//! - `SubjectAttendance`, `AttendanceMark`, `DailyStatistics`: attendance ledger types
//! - Roster types: `ClassGroup`, `RosterStudent`, `StudentDraft`
//! - Timetable types: `TimeSlot`, `Schedule`, `TeacherTimetable`, `SectionTimetable`

pub mod attendance;
pub mod person;
pub mod principal;
pub mod roster;
pub mod timetable;

pub use attendance::{AttendanceMark, AttendanceStatus, DailyStatistics, SubjectAttendance, TodayStatus};
pub use person::{StaffCredential, StaffRole, StudentProfile};
pub use principal::{Principal, Role, StaffPrincipal, StudentPrincipal};
pub use roster::{ClassGroup, RosterStudent, StudentDraft};
pub use timetable::{
    ClassInfo, Schedule, SchoolDay, Section, SectionSlot, SectionTimetable, TeacherSlot,
    TeacherTimetable, TimeSlot,
};
