use tracing::{debug, info};

use crate::error::AuthError;
use crate::fixtures;
use crate::models::{Principal, StaffCredential, StudentProfile};

/// Separator between the name prefix and the birth year.
const PASSWORD_SEPARATOR: &str = "@#";

/// Characters of the first name used in a student password.
const NAME_PREFIX_CHARS: usize = 4;

/// Student password: first four characters of the first name (the whole name
/// if shorter), then `@#`, then the four-digit birth year.
///
/// `derive_password("Arjun", 2005)` is `"Arju@#2005"`.
pub fn derive_password(first_name: &str, birth_year: i32) -> String {
    let prefix: String = first_name.chars().take(NAME_PREFIX_CHARS).collect();
    format!("{}{}{:04}", prefix, PASSWORD_SEPARATOR, birth_year)
}

/// The two login forms the dashboard shows. Each has its own failure copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginForm {
    Staff,
    Student,
}

impl LoginForm {
    pub fn identifier_label(&self) -> &'static str {
        match self {
            LoginForm::Staff => "Username",
            LoginForm::Student => "Phone Number",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            LoginForm::Staff => "Invalid username or password",
            LoginForm::Student => "Invalid phone number or password. Check your credentials.",
        }
    }
}

/// Staff usernames and student phone numbers, the two spaces a login is
/// checked against.
#[derive(Debug, Clone, Default)]
pub struct CredentialDirectory {
    staff: Vec<StaffCredential>,
    students: Vec<StudentProfile>,
}

impl CredentialDirectory {
    pub fn new(staff: Vec<StaffCredential>, students: Vec<StudentProfile>) -> Self {
        Self { staff, students }
    }

    /// Directory seeded with the fixture staff accounts and student profiles.
    pub fn with_fixtures() -> Self {
        Self::new(fixtures::staff_credentials(), fixtures::student_profiles())
    }

    pub fn staff(&self) -> &[StaffCredential] {
        &self.staff
    }

    pub fn students(&self) -> &[StudentProfile] {
        &self.students
    }

    pub fn find_student_by_phone(&self, phone_number: &str) -> Option<&StudentProfile> {
        self.students.iter().find(|s| s.phone_number == phone_number)
    }

    pub fn find_student(&self, student_id: i64) -> Option<&StudentProfile> {
        self.students.iter().find(|s| s.id == student_id)
    }

    /// The password a student logs in with, recomputed from their profile.
    pub fn expected_student_password(profile: &StudentProfile) -> String {
        derive_password(&profile.first_name, profile.birth_year())
    }

    /// Check `identifier`/`secret` against staff accounts first, then student
    /// phone numbers. Unknown identifiers and wrong secrets fail the same way.
    pub fn authenticate(&self, identifier: &str, secret: &str) -> Result<Principal, AuthError> {
        if identifier.is_empty() || secret.is_empty() {
            debug!("Rejected login with empty identifier or secret");
            return Err(AuthError::InvalidCredentials);
        }

        if let Some(staff) = self
            .staff
            .iter()
            .find(|s| s.username == identifier && s.password == secret)
        {
            info!(username = %staff.username, role = %staff.role, "Staff login succeeded");
            return Ok(Principal::staff(&staff.username, staff.role));
        }

        if let Some(student) = self.find_student_by_phone(identifier) {
            if Self::expected_student_password(student) == secret {
                info!(student_id = student.id, "Student login succeeded");
                return Ok(Principal::student(student));
            }
        }

        debug!("Login failed");
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, StaffRole};

    // -------------------------------------------------------------------------
    // Password Derivation
    // -------------------------------------------------------------------------

    #[test]
    fn test_derive_password() {
        assert_eq!(derive_password("Arjun", 2005), "Arju@#2005");
        assert_eq!(derive_password("Priya", 2006), "Priy@#2006");
        assert_eq!(derive_password("Rahul", 2005), "Rahu@#2005");
    }

    #[test]
    fn test_derive_password_short_name() {
        assert_eq!(derive_password("Ar", 2005), "Ar@#2005");
        assert_eq!(derive_password("Anu", 2007), "Anu@#2007");
        assert_eq!(derive_password("Ravi", 2004), "Ravi@#2004");
        assert_eq!(derive_password("", 2005), "@#2005");
    }

    #[test]
    fn test_derive_password_counts_characters_not_bytes() {
        assert_eq!(derive_password("Zoë-Anne", 2006), "Zoë-@#2006");
    }

    #[test]
    fn test_derive_password_pads_year() {
        assert_eq!(derive_password("Arjun", 999), "Arju@#0999");
    }

    // -------------------------------------------------------------------------
    // Authentication
    // -------------------------------------------------------------------------

    #[test]
    fn test_every_staff_fixture_authenticates() {
        let dir = CredentialDirectory::with_fixtures();
        for cred in dir.staff() {
            let principal = dir
                .authenticate(&cred.username, &cred.password)
                .expect("staff fixture should log in");
            assert_eq!(principal.role(), Role::from(cred.role));
            assert_eq!(principal.identifier(), cred.username);
        }
    }

    #[test]
    fn test_every_student_fixture_authenticates() {
        let dir = CredentialDirectory::with_fixtures();
        for profile in dir.students() {
            let secret = derive_password(&profile.first_name, profile.birth_year());
            let principal = dir
                .authenticate(&profile.phone_number, &secret)
                .expect("student fixture should log in");
            match principal {
                Principal::Student(s) => {
                    assert_eq!(s.student_profile.id, profile.id);
                    assert_eq!(s.student_id, profile.id);
                    assert_eq!(&s.student_profile, profile);
                }
                other => panic!("expected student principal, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_wrong_secret_fails_for_every_identifier() {
        let dir = CredentialDirectory::with_fixtures();
        for cred in dir.staff() {
            let wrong = format!("{}x", cred.password);
            assert_eq!(
                dir.authenticate(&cred.username, &wrong),
                Err(AuthError::InvalidCredentials)
            );
        }
        for profile in dir.students() {
            let wrong = derive_password(&profile.first_name, profile.birth_year() + 1);
            assert_eq!(
                dir.authenticate(&profile.phone_number, &wrong),
                Err(AuthError::InvalidCredentials)
            );
        }
    }

    #[test]
    fn test_unknown_identifier_fails() {
        let dir = CredentialDirectory::with_fixtures();
        assert_eq!(
            dir.authenticate("nobody", "admin123"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            dir.authenticate("0000000000", "Arju@#2005"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_empty_inputs_fail() {
        let dir = CredentialDirectory::with_fixtures();
        assert!(dir.authenticate("", "admin123").is_err());
        assert!(dir.authenticate("admin", "").is_err());
    }

    #[test]
    fn test_phone_match_is_exact() {
        let dir = CredentialDirectory::with_fixtures();
        assert!(dir.authenticate("98765 43210", "Arju@#2005").is_err());
        assert!(dir.authenticate("9876543210", "Arju@#2005").is_ok());
    }

    #[test]
    fn test_staff_space_checked_before_students() {
        // A staff username that collides with a student phone number logs in as staff
        let student = fixtures::student_profiles().remove(0);
        let dir = CredentialDirectory::new(
            vec![StaffCredential::new(&student.phone_number, "secret", StaffRole::Teacher)],
            vec![student.clone()],
        );
        let p = dir.authenticate(&student.phone_number, "secret").unwrap();
        assert_eq!(p.role(), Role::Teacher);

        // The student password still works through the second space
        let secret = CredentialDirectory::expected_student_password(&student);
        let p = dir.authenticate(&student.phone_number, &secret).unwrap();
        assert_eq!(p.role(), Role::Student);
    }

    #[test]
    fn test_login_form_copy() {
        assert_eq!(LoginForm::Staff.failure_message(), "Invalid username or password");
        assert_eq!(
            LoginForm::Student.failure_message(),
            "Invalid phone number or password. Check your credentials."
        );
        assert_eq!(LoginForm::Student.identifier_label(), "Phone Number");
    }
}
