use chrono::NaiveDate;

use crate::models::{StaffCredential, StaffRole, StudentProfile};

/// Birth date of a seeded student. Panics on an impossible date, which can
/// only come from a typo in the table below.
fn born(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture birth date is a real date")
}

pub fn student_profiles() -> Vec<StudentProfile> {
    vec![
        StudentProfile {
            id: 1001,
            first_name: "Arjun".to_string(),
            last_name: "Sharma".to_string(),
            phone_number: "9876543210".to_string(),
            date_of_birth: born(2005, 3, 15),
            roll_number: "2021001".to_string(),
            class_id: 10,
            section: "A".to_string(),
            address: "123 Main Street, Delhi".to_string(),
            profile_photo: None,
        },
        StudentProfile {
            id: 1002,
            first_name: "Priya".to_string(),
            last_name: "Patel".to_string(),
            phone_number: "9876543211".to_string(),
            date_of_birth: born(2006, 7, 22),
            roll_number: "2021002".to_string(),
            class_id: 9,
            section: "B".to_string(),
            address: "456 Park Avenue, Mumbai".to_string(),
            profile_photo: None,
        },
        StudentProfile {
            id: 1003,
            first_name: "Rahul".to_string(),
            last_name: "Kumar".to_string(),
            phone_number: "9876543212".to_string(),
            date_of_birth: born(2005, 11, 8),
            roll_number: "2021003".to_string(),
            class_id: 10,
            section: "A".to_string(),
            address: "789 Oak Street, Bangalore".to_string(),
            profile_photo: None,
        },
    ]
}

pub fn staff_credentials() -> Vec<StaffCredential> {
    vec![
        StaffCredential::new("admin", "admin123", StaffRole::Admin),
        StaffCredential::new("teacher1", "teach123", StaffRole::Teacher),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_student_ids_and_phones_unique() {
        let students = student_profiles();
        let ids: HashSet<_> = students.iter().map(|s| s.id).collect();
        let phones: HashSet<_> = students.iter().map(|s| s.phone_number.as_str()).collect();
        assert_eq!(ids.len(), students.len());
        assert_eq!(phones.len(), students.len());
    }

    #[test]
    fn test_birth_dates_parsed() {
        let students = student_profiles();
        assert_eq!(students[0].date_of_birth, NaiveDate::from_ymd_opt(2005, 3, 15).unwrap());
        assert_eq!(students[1].date_of_birth, NaiveDate::from_ymd_opt(2006, 7, 22).unwrap());
        assert_eq!(students[2].birth_year(), 2005);
    }

    #[test]
    #[should_panic(expected = "fixture birth date is a real date")]
    fn test_impossible_birth_date_is_loud() {
        born(2005, 2, 30);
    }

    #[test]
    fn test_staff_usernames_unique() {
        let staff = staff_credentials();
        let names: HashSet<_> = staff.iter().map(|s| s.username.as_str()).collect();
        assert_eq!(names.len(), staff.len());
    }
}
