use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::{format_date, format_phone};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
pub struct StudentProfile {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "dateOfBirth")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub date_of_birth: NaiveDate,
    #[serde(rename = "rollNumber")]
    pub roll_number: String,
    #[serde(rename = "classId")]
    pub class_id: i64,
    pub section: String,
    pub address: String,
    #[serde(rename = "profilePhoto", default)]
    pub profile_photo: Option<String>,
}

impl StudentProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    pub fn birth_year(&self) -> i32 {
        self.date_of_birth.year()
    }

    pub fn phone_display(&self) -> String {
        format_phone(&self.phone_number)
    }

    pub fn date_of_birth_display(&self) -> String {
        format_date(self.date_of_birth)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    Teacher,
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaffRole::Admin => write!(f, "admin"),
            StaffRole::Teacher => write!(f, "teacher"),
        }
    }
}

/// A staff login. The password is a plaintext fixture value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffCredential {
    pub username: String,
    pub password: String,
    pub role: StaffRole,
}

impl StaffCredential {
    pub fn new(username: &str, password: &str, role: StaffRole) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role,
        }
    }
}
