use chrono::NaiveDate;
use thiserror::Error;

/// Login failure. Deliberately carries no detail about which credential
/// space was probed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Attendance can only be marked for today, not {0}")]
    NotToday(NaiveDate),

    #[error("{0} is a holiday")]
    Holiday(NaiveDate),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Please fill all fields")]
    MissingFields,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid roll number: {0}")]
    InvalidRollNumber(String),

    #[error("Class not found: {0}")]
    ClassNotFound(i64),

    #[error("Student not found: {0}")]
    StudentNotFound(i64),

    #[error("Section {section} already exists in {class}")]
    DuplicateSection { class: String, section: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimetableError {
    #[error("Timetable not found: {0}")]
    TimetableNotFound(i64),

    #[error("No slot at position {index} on {day}")]
    SlotOutOfRange { day: String, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_is_generic() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_roster_error_messages() {
        assert_eq!(RosterError::MissingFields.to_string(), "Please fill all fields");
        let dup = RosterError::DuplicateSection {
            class: "Class 10".to_string(),
            section: "A".to_string(),
        };
        assert_eq!(dup.to_string(), "Section A already exists in Class 10");
    }

    #[test]
    fn test_register_error_includes_date() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 7).unwrap();
        assert_eq!(RegisterError::Holiday(date).to_string(), "2025-09-07 is a holiday");
    }
}
