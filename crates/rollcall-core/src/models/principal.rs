use serde::{Deserialize, Serialize};

use super::person::{StaffRole, StudentProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Teacher => write!(f, "teacher"),
            Role::Student => write!(f, "student"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            _ => Err(format!("{:?} is not a valid role", s)),
        }
    }
}

impl From<StaffRole> for Role {
    fn from(role: StaffRole) -> Self {
        match role {
            StaffRole::Admin => Role::Admin,
            StaffRole::Teacher => Role::Teacher,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub struct StaffPrincipal {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub struct StudentPrincipal {
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "studentId")]
    pub student_id: i64,
    #[serde(rename = "studentProfile")]
    pub student_profile: StudentProfile,
}

/// An authenticated identity.
///
/// Serialized with the role as the tag, e.g.
/// `{"role":"admin","username":"admin"}` or
/// `{"role":"student","phoneNumber":"...","studentId":1001,"studentProfile":{...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub enum Principal {
    Admin(StaffPrincipal),
    Teacher(StaffPrincipal),
    Student(StudentPrincipal),
}

impl Principal {
    pub fn staff(username: &str, role: StaffRole) -> Self {
        let staff = StaffPrincipal {
            username: username.to_string(),
        };
        match role {
            StaffRole::Admin => Principal::Admin(staff),
            StaffRole::Teacher => Principal::Teacher(staff),
        }
    }

    pub fn student(profile: &StudentProfile) -> Self {
        Principal::Student(StudentPrincipal {
            phone_number: profile.phone_number.clone(),
            student_id: profile.id,
            student_profile: profile.clone(),
        })
    }

    pub fn role(&self) -> Role {
        match self {
            Principal::Admin(_) => Role::Admin,
            Principal::Teacher(_) => Role::Teacher,
            Principal::Student(_) => Role::Student,
        }
    }

    /// The value the principal typed to log in (username or phone number).
    pub fn identifier(&self) -> &str {
        match self {
            Principal::Admin(s) | Principal::Teacher(s) => &s.username,
            Principal::Student(s) => &s.phone_number,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Principal::Admin(s) | Principal::Teacher(s) => s.username.clone(),
            Principal::Student(s) => s.student_profile.full_name(),
        }
    }

    pub fn student_id(&self) -> Option<i64> {
        match self {
            Principal::Student(s) => Some(s.student_id),
            _ => None,
        }
    }

    pub fn is_staff(&self) -> bool {
        !matches!(self, Principal::Student(_))
    }
}
