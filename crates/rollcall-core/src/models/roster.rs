use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sections: Vec<String>,
}

impl ClassGroup {
    pub fn new(id: i64, name: &str, sections: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            sections: sections.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.iter().any(|s| s == section)
    }

    pub fn section_count_display(&self) -> String {
        match self.sections.len() {
            1 => "1 section".to_string(),
            n => format!("{} sections", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterStudent {
    pub id: i64,
    pub name: String,
    #[serde(rename = "rollNo")]
    pub roll_no: u32,
    #[serde(rename = "classId")]
    pub class_id: i64,
    pub section: String,
}

impl RosterStudent {
    pub fn new(id: i64, name: &str, roll_no: u32, class_id: i64, section: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            roll_no,
            class_id,
            section: section.to_string(),
        }
    }
}

/// Raw form input for adding or editing a student. Every field arrives as
/// text and is validated by the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    #[serde(rename = "rollNo")]
    pub roll_no: String,
    #[serde(rename = "classId")]
    pub class_id: String,
    pub section: String,
}

impl StudentDraft {
    pub fn new(name: &str, roll_no: &str, class_id: &str, section: &str) -> Self {
        Self {
            name: name.to_string(),
            roll_no: roll_no.to_string(),
            class_id: class_id.to_string(),
            section: section.to_string(),
        }
    }

    pub fn from_student(student: &RosterStudent) -> Self {
        Self {
            name: student.name.clone(),
            roll_no: student.roll_no.to_string(),
            class_id: student.class_id.to_string(),
            section: student.section.clone(),
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.roll_no, &self.class_id, &self.section]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}
