//! Classes, their sections, and the students enrolled in them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RosterError;
use crate::fixtures;
use crate::models::{ClassGroup, RosterStudent, StudentDraft};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub classes: Vec<ClassGroup>,
    pub students: Vec<RosterStudent>,
}

/// Student fields after the text form has been checked.
struct ValidDraft {
    name: String,
    roll_no: u32,
    class_id: i64,
    section: String,
}

impl Roster {
    pub fn new(classes: Vec<ClassGroup>, students: Vec<RosterStudent>) -> Self {
        Self { classes, students }
    }

    pub fn with_fixtures() -> Self {
        Self::new(fixtures::roster_classes(), fixtures::roster_students())
    }

    // ------------------------------------------------------------------------
    // Classes and sections
    // ------------------------------------------------------------------------

    pub fn class(&self, class_id: i64) -> Option<&ClassGroup> {
        self.classes.iter().find(|c| c.id == class_id)
    }

    fn class_mut(&mut self, class_id: i64) -> Result<&mut ClassGroup, RosterError> {
        self.classes
            .iter_mut()
            .find(|c| c.id == class_id)
            .ok_or(RosterError::ClassNotFound(class_id))
    }

    /// Display name for a class id, "Unknown" when it no longer exists.
    pub fn class_name(&self, class_id: i64) -> &str {
        self.class(class_id).map(|c| c.name.as_str()).unwrap_or("Unknown")
    }

    pub fn sections_for(&self, class_id: i64) -> &[String] {
        self.class(class_id)
            .map(|c| c.sections.as_slice())
            .unwrap_or(&[])
    }

    pub fn add_class(&mut self, name: &str) -> Result<&ClassGroup, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let id = self.classes.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        self.classes.push(ClassGroup::new(id, name, &[]));
        info!(class_id = id, name, "Class added");
        Ok(&self.classes[self.classes.len() - 1])
    }

    pub fn remove_class(&mut self, class_id: i64) -> Result<ClassGroup, RosterError> {
        let idx = self
            .classes
            .iter()
            .position(|c| c.id == class_id)
            .ok_or(RosterError::ClassNotFound(class_id))?;
        let removed = self.classes.remove(idx);
        info!(class_id, name = %removed.name, "Class removed");
        Ok(removed)
    }

    pub fn add_section(&mut self, class_id: i64, name: &str) -> Result<(), RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let class = self.class_mut(class_id)?;
        if class.has_section(name) {
            return Err(RosterError::DuplicateSection {
                class: class.name.clone(),
                section: name.to_string(),
            });
        }
        class.sections.push(name.to_string());
        debug!(class_id, section = name, "Section added");
        Ok(())
    }

    /// Returns whether the section existed.
    pub fn remove_section(&mut self, class_id: i64, name: &str) -> Result<bool, RosterError> {
        let class = self.class_mut(class_id)?;
        let before = class.sections.len();
        class.sections.retain(|s| s != name);
        Ok(class.sections.len() != before)
    }

    // ------------------------------------------------------------------------
    // Students
    // ------------------------------------------------------------------------

    pub fn student(&self, student_id: i64) -> Option<&RosterStudent> {
        self.students.iter().find(|s| s.id == student_id)
    }

    fn validate(&self, draft: &StudentDraft) -> Result<ValidDraft, RosterError> {
        if !draft.is_complete() {
            return Err(RosterError::MissingFields);
        }
        let roll_no = draft
            .roll_no
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| RosterError::InvalidRollNumber(draft.roll_no.clone()))?;
        let class_id = draft
            .class_id
            .trim()
            .parse::<i64>()
            .map_err(|_| RosterError::ClassNotFound(0))?;
        if self.class(class_id).is_none() {
            return Err(RosterError::ClassNotFound(class_id));
        }
        Ok(ValidDraft {
            name: draft.name.trim().to_string(),
            roll_no,
            class_id,
            section: draft.section.trim().to_string(),
        })
    }

    pub fn add_student(&mut self, draft: &StudentDraft) -> Result<&RosterStudent, RosterError> {
        let valid = self.validate(draft)?;
        let id = self.students.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        self.students.push(RosterStudent {
            id,
            name: valid.name,
            roll_no: valid.roll_no,
            class_id: valid.class_id,
            section: valid.section,
        });
        info!(student_id = id, "Student added");
        Ok(&self.students[self.students.len() - 1])
    }

    pub fn update_student(
        &mut self,
        student_id: i64,
        draft: &StudentDraft,
    ) -> Result<&RosterStudent, RosterError> {
        let valid = self.validate(draft)?;
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == student_id)
            .ok_or(RosterError::StudentNotFound(student_id))?;
        student.name = valid.name;
        student.roll_no = valid.roll_no;
        student.class_id = valid.class_id;
        student.section = valid.section;
        info!(student_id, "Student updated");
        Ok(&*student)
    }

    pub fn remove_student(&mut self, student_id: i64) -> Result<RosterStudent, RosterError> {
        let idx = self
            .students
            .iter()
            .position(|s| s.id == student_id)
            .ok_or(RosterError::StudentNotFound(student_id))?;
        let removed = self.students.remove(idx);
        info!(student_id, name = %removed.name, "Student removed");
        Ok(removed)
    }

    /// Students matching the class and section filters. `None` means "all".
    pub fn filter(&self, class_id: Option<i64>, section: Option<&str>) -> Vec<&RosterStudent> {
        self.students
            .iter()
            .filter(|s| class_id.map_or(true, |id| s.class_id == id))
            .filter(|s| section.map_or(true, |sec| s.section == sec))
            .collect()
    }
}
