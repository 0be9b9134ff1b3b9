//! Seed data the dashboards run against.
//!
//! Every function returns a fresh owned copy so callers can mutate freely:
//!
//! - `student_profiles`, `staff_credentials`: the two credential spaces
//! - `subject_ledger`: per-subject attendance for September 2024
//! - `roster_classes`, `roster_students`, `register_marks`: the class register
//! - `time_slots`, `timetable_classes`, `timetable_sections`,
//!   `teacher_timetables`, `section_timetables`: the timetable book

mod ledger;
mod people;
mod school;
mod timetables;

pub use ledger::{subject_ledger, LEDGER_MONTH, LEDGER_YEAR};
pub use people::{staff_credentials, student_profiles};
pub use school::{register_marks, roster_classes, roster_students};
pub use timetables::{
    section_timetables, teacher_timetables, time_slots, timetable_classes, timetable_sections,
    ACADEMIC_YEAR,
};
