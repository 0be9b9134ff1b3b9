//! Teacher and section timetables over a fixed set of daily periods.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::TimetableError;
use crate::fixtures;
use crate::models::{
    ClassInfo, Schedule, Section, SectionTimetable, TeacherTimetable, TimeSlot,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableBook {
    pub time_slots: Vec<TimeSlot>,
    pub classes: Vec<ClassInfo>,
    pub sections: Vec<Section>,
    pub teacher_timetables: Vec<TeacherTimetable>,
    pub section_timetables: Vec<SectionTimetable>,
}

fn next_id<'a>(ids: impl Iterator<Item = &'a i64>) -> i64 {
    ids.max().copied().unwrap_or(0) + 1
}

impl TimetableBook {
    pub fn with_fixtures() -> Self {
        Self {
            time_slots: fixtures::time_slots(),
            classes: fixtures::timetable_classes(),
            sections: fixtures::timetable_sections(),
            teacher_timetables: fixtures::teacher_timetables(),
            section_timetables: fixtures::section_timetables(),
        }
    }

    pub fn slot(&self, id: u32) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|s| s.id == id)
    }

    pub fn sections_of(&self, class_id: i64) -> Vec<&Section> {
        self.sections.iter().filter(|s| s.class_id == class_id).collect()
    }

    /// All teacher timetables, or only the given teacher's.
    pub fn teacher_timetables(&self, teacher_id: Option<i64>) -> Vec<&TeacherTimetable> {
        self.teacher_timetables
            .iter()
            .filter(|t| teacher_id.map_or(true, |id| t.teacher_id == id))
            .collect()
    }

    /// All section timetables, or only the given section's.
    pub fn section_timetables(&self, section_id: Option<i64>) -> Vec<&SectionTimetable> {
        self.section_timetables
            .iter()
            .filter(|t| section_id.map_or(true, |id| t.section_id == id))
            .collect()
    }

    pub fn section_timetables_for(
        &self,
        class_name: &str,
        section_name: &str,
    ) -> Vec<&SectionTimetable> {
        self.section_timetables
            .iter()
            .filter(|t| t.class_name == class_name && t.section_name == section_name)
            .collect()
    }

    // ------------------------------------------------------------------------
    // Teacher timetables
    // ------------------------------------------------------------------------

    pub fn create_teacher_timetable(
        &mut self,
        teacher_id: i64,
        teacher_name: &str,
        subject: &str,
    ) -> &mut TeacherTimetable {
        let id = next_id(self.teacher_timetables.iter().map(|t| &t.id));
        self.teacher_timetables.push(TeacherTimetable {
            id,
            teacher_id,
            teacher_name: teacher_name.to_string(),
            subject: subject.to_string(),
            schedule: Schedule::empty(),
        });
        info!(timetable_id = id, teacher_id, "Teacher timetable created");
        let last = self.teacher_timetables.len() - 1;
        &mut self.teacher_timetables[last]
    }

    pub fn update_teacher_timetable(
        &mut self,
        timetable: TeacherTimetable,
    ) -> Result<(), TimetableError> {
        let existing = self
            .teacher_timetables
            .iter_mut()
            .find(|t| t.id == timetable.id)
            .ok_or(TimetableError::TimetableNotFound(timetable.id))?;
        info!(timetable_id = timetable.id, "Teacher timetable updated");
        *existing = timetable;
        Ok(())
    }

    pub fn delete_teacher_timetable(&mut self, id: i64) -> Result<TeacherTimetable, TimetableError> {
        let idx = self
            .teacher_timetables
            .iter()
            .position(|t| t.id == id)
            .ok_or(TimetableError::TimetableNotFound(id))?;
        info!(timetable_id = id, "Teacher timetable deleted");
        Ok(self.teacher_timetables.remove(idx))
    }

    // ------------------------------------------------------------------------
    // Section timetables
    // ------------------------------------------------------------------------

    pub fn create_section_timetable(
        &mut self,
        section_id: i64,
        class_name: &str,
        section_name: &str,
        academic_year: &str,
    ) -> &mut SectionTimetable {
        let id = next_id(self.section_timetables.iter().map(|t| &t.id));
        self.section_timetables.push(SectionTimetable {
            id,
            section_id,
            class_name: class_name.to_string(),
            section_name: section_name.to_string(),
            academic_year: academic_year.to_string(),
            schedule: Schedule::empty(),
        });
        info!(timetable_id = id, section_id, "Section timetable created");
        let last = self.section_timetables.len() - 1;
        &mut self.section_timetables[last]
    }

    pub fn update_section_timetable(
        &mut self,
        timetable: SectionTimetable,
    ) -> Result<(), TimetableError> {
        let existing = self
            .section_timetables
            .iter_mut()
            .find(|t| t.id == timetable.id)
            .ok_or(TimetableError::TimetableNotFound(timetable.id))?;
        info!(timetable_id = timetable.id, "Section timetable updated");
        *existing = timetable;
        Ok(())
    }

    pub fn delete_section_timetable(&mut self, id: i64) -> Result<SectionTimetable, TimetableError> {
        let idx = self
            .section_timetables
            .iter()
            .position(|t| t.id == id)
            .ok_or(TimetableError::TimetableNotFound(id))?;
        info!(timetable_id = id, "Section timetable deleted");
        Ok(self.section_timetables.remove(idx))
    }
}
