//! Rollcall core - credentials, sessions and attendance for a school dashboard.
//!
//! This crate holds everything the admin, teacher and student dashboards need
//! apart from rendering:
//!
//! - `auth`: password derivation, login against staff/student credentials,
//!   and the persisted session slot
//! - `attendance`: per-subject ledgers and daily statistics
//! - `register`: the per-class daily Present/Absent sheet
//! - `roster`: classes, sections and enrolled students
//! - `timetable`: teacher and section timetables
//! - `fixtures`: the seed data the dashboards run against

pub mod attendance;
pub mod auth;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod register;
pub mod roster;
pub mod store;
pub mod timetable;
pub mod utils;

pub use attendance::{compute_daily_statistics, get_attendance_for_student};
pub use auth::{derive_password, CredentialDirectory, LoginForm, SessionContext};
pub use config::Config;
pub use error::{AuthError, RegisterError, RosterError, TimetableError};
pub use models::{
    AttendanceMark, AttendanceStatus, DailyStatistics, Principal, Role, StaffCredential,
    StaffPrincipal, StaffRole, StudentPrincipal, StudentProfile, SubjectAttendance, TodayStatus,
};
pub use register::{AttendanceRegister, RegisterMark, RegisterSummary};
pub use roster::Roster;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use timetable::TimetableBook;
