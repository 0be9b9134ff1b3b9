use std::collections::BTreeMap;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::TimetableError;
use crate::utils::clock;

/// Days the timetable covers. Sunday has no periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SchoolDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl SchoolDay {
    pub const ALL: [SchoolDay; 6] = [
        SchoolDay::Monday,
        SchoolDay::Tuesday,
        SchoolDay::Wednesday,
        SchoolDay::Thursday,
        SchoolDay::Friday,
        SchoolDay::Saturday,
    ];

    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(SchoolDay::Monday),
            Weekday::Tue => Some(SchoolDay::Tuesday),
            Weekday::Wed => Some(SchoolDay::Wednesday),
            Weekday::Thu => Some(SchoolDay::Thursday),
            Weekday::Fri => Some(SchoolDay::Friday),
            Weekday::Sat => Some(SchoolDay::Saturday),
            Weekday::Sun => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SchoolDay::Monday => "Monday",
            SchoolDay::Tuesday => "Tuesday",
            SchoolDay::Wednesday => "Wednesday",
            SchoolDay::Thursday => "Thursday",
            SchoolDay::Friday => "Friday",
            SchoolDay::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for SchoolDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: u32,
    pub label: String,
    #[serde(with = "clock::hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "clock::hhmm")]
    pub end_time: NaiveTime,
}

impl TimeSlot {
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start_time && time < self.end_time
    }
}

/// Per-day ordered list of periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule<T> {
    days: BTreeMap<SchoolDay, Vec<T>>,
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }
}

impl<T> Schedule<T> {
    /// A schedule with every school day present and no periods.
    pub fn empty() -> Self {
        Self {
            days: SchoolDay::ALL.iter().map(|d| (*d, Vec::new())).collect(),
        }
    }

    pub fn slots_on(&self, day: SchoolDay) -> &[T] {
        self.days.get(&day).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn days(&self) -> impl Iterator<Item = (SchoolDay, &[T])> {
        self.days.iter().map(|(d, v)| (*d, v.as_slice()))
    }

    pub fn add_slot(&mut self, day: SchoolDay, slot: T) {
        self.days.entry(day).or_default().push(slot);
    }

    pub fn remove_slot(&mut self, day: SchoolDay, index: usize) -> Result<T, TimetableError> {
        match self.days.get_mut(&day) {
            Some(slots) if index < slots.len() => Ok(slots.remove(index)),
            _ => Err(TimetableError::SlotOutOfRange {
                day: day.to_string(),
                index,
            }),
        }
    }

    pub fn update_slot<F>(&mut self, day: SchoolDay, index: usize, f: F) -> Result<(), TimetableError>
    where
        F: FnOnce(&mut T),
    {
        match self.days.get_mut(&day).and_then(|slots| slots.get_mut(index)) {
            Some(slot) => {
                f(slot);
                Ok(())
            }
            None => Err(TimetableError::SlotOutOfRange {
                day: day.to_string(),
                index,
            }),
        }
    }

    pub fn total_periods(&self) -> usize {
        self.days.values().map(|v| v.len()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSlot {
    pub time_slot_id: u32,
    pub class_name: String,
    pub section_name: String,
    #[serde(default)]
    pub room: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSlot {
    pub time_slot_id: u32,
    pub subject: String,
    pub teacher_name: String,
    #[serde(default)]
    pub room: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherTimetable {
    pub id: i64,
    pub teacher_id: i64,
    pub teacher_name: String,
    pub subject: String,
    pub schedule: Schedule<TeacherSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTimetable {
    pub id: i64,
    pub section_id: i64,
    pub class_name: String,
    pub section_name: String,
    pub academic_year: String,
    pub schedule: Schedule<SectionSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: i64,
    pub name: String,
    pub class_id: i64,
}
