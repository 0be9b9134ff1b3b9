use chrono::NaiveDate;

use crate::models::{ClassGroup, RosterStudent};
use crate::register::{AttendanceRegister, RegisterMark};

pub fn roster_classes() -> Vec<ClassGroup> {
    vec![
        ClassGroup::new(1, "Class 10", &["A", "B"]),
        ClassGroup::new(2, "Class 9", &["A"]),
    ]
}

pub fn roster_students() -> Vec<RosterStudent> {
    vec![
        RosterStudent::new(1, "Arjun Sharma", 1, 1, "A"),
        RosterStudent::new(2, "Priya Verma", 2, 1, "A"),
        RosterStudent::new(3, "Ravi Singh", 1, 2, "A"),
        RosterStudent::new(4, "Sneha Patel", 3, 1, "A"),
        RosterStudent::new(5, "Amit Kumar", 4, 1, "A"),
    ]
}

/// Register rows for September 2025: (day of month, marks for students 1..=5).
const REGISTER_ROWS: &[(u32, [bool; 5])] = &[
    (2, [true, true, false, true, true]),
    (3, [true, false, true, true, false]),
    (4, [false, true, true, false, true]),
    (5, [true, true, true, true, true]),
    (6, [true, false, true, true, true]),
    (9, [true, true, false, true, false]),
    (10, [false, true, true, true, true]),
    (11, [true, true, true, false, true]),
    (12, [true, false, true, true, true]),
    (13, [true, true, true, true, false]),
    (16, [true, true, false, true, true]),
    (17, [false, true, true, true, true]),
    (18, [true, true, true, true, true]),
    (19, [true, false, true, true, true]),
];

pub fn register_marks() -> AttendanceRegister {
    let mut register = AttendanceRegister::new();
    for (day, marks) in REGISTER_ROWS {
        let Some(date) = NaiveDate::from_ymd_opt(2025, 9, *day) else {
            continue;
        };
        for (i, present) in marks.iter().enumerate() {
            let mark = if *present {
                RegisterMark::Present
            } else {
                RegisterMark::Absent
            };
            register.set(i as i64 + 1, date, mark);
        }
    }
    register
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_students_belong_to_known_classes() {
        let classes = roster_classes();
        for student in roster_students() {
            let class = classes
                .iter()
                .find(|c| c.id == student.class_id)
                .expect("student class exists");
            assert!(class.has_section(&student.section));
        }
    }

    #[test]
    fn test_register_marks_loaded() {
        let register = register_marks();
        let day = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
        assert_eq!(register.status(1, day), Some(RegisterMark::Present));
        assert_eq!(register.status(3, day), Some(RegisterMark::Absent));
        assert_eq!(register.marked_days().count(), 14);
    }
}
