use chrono::NaiveTime;

use crate::models::{
    ClassInfo, Schedule, SchoolDay, Section, SectionSlot, SectionTimetable, TeacherSlot,
    TeacherTimetable, TimeSlot,
};

use crate::models::SchoolDay::{Friday, Monday, Saturday, Thursday, Tuesday, Wednesday};

pub const ACADEMIC_YEAR: &str = "2024-25";

fn time_slot(id: u32, label: &str, start: (u32, u32), end: (u32, u32)) -> TimeSlot {
    TimeSlot {
        id,
        label: label.to_string(),
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap_or_default(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap_or_default(),
    }
}

/// Eight periods. Break is 11:00-11:15, lunch 13:30-14:15.
pub fn time_slots() -> Vec<TimeSlot> {
    vec![
        time_slot(1, "08:00 - 08:45", (8, 0), (8, 45)),
        time_slot(2, "08:45 - 09:30", (8, 45), (9, 30)),
        time_slot(3, "09:30 - 10:15", (9, 30), (10, 15)),
        time_slot(4, "10:15 - 11:00", (10, 15), (11, 0)),
        time_slot(5, "11:15 - 12:00", (11, 15), (12, 0)),
        time_slot(6, "12:00 - 12:45", (12, 0), (12, 45)),
        time_slot(7, "12:45 - 01:30", (12, 45), (13, 30)),
        time_slot(8, "02:15 - 03:00", (14, 15), (15, 0)),
    ]
}

pub fn timetable_classes() -> Vec<ClassInfo> {
    ["Class X", "Class XI", "Class XII"]
        .iter()
        .enumerate()
        .map(|(i, name)| ClassInfo {
            id: i as i64 + 1,
            name: name.to_string(),
        })
        .collect()
}

pub fn timetable_sections() -> Vec<Section> {
    (1..=3)
        .flat_map(|class_id| {
            ["A", "B"].iter().enumerate().map(move |(i, name)| Section {
                id: (class_id - 1) * 2 + i as i64 + 1,
                name: name.to_string(),
                class_id,
            })
        })
        .collect()
}

fn schedule<T>(days: Vec<(SchoolDay, Vec<T>)>) -> Schedule<T> {
    let mut schedule = Schedule::empty();
    for (day, slots) in days {
        for slot in slots {
            schedule.add_slot(day, slot);
        }
    }
    schedule
}

fn teaching(time_slot_id: u32, class_name: &str, section_name: &str, room: &str) -> TeacherSlot {
    TeacherSlot {
        time_slot_id,
        class_name: class_name.to_string(),
        section_name: section_name.to_string(),
        room: Some(room.to_string()),
    }
}

fn period(time_slot_id: u32, subject: &str, teacher_name: &str, room: &str) -> SectionSlot {
    SectionSlot {
        time_slot_id,
        subject: subject.to_string(),
        teacher_name: teacher_name.to_string(),
        room: Some(room.to_string()),
    }
}

fn teacher(
    id: i64,
    teacher_name: &str,
    subject: &str,
    days: Vec<(SchoolDay, Vec<TeacherSlot>)>,
) -> TeacherTimetable {
    TeacherTimetable {
        id,
        teacher_id: id,
        teacher_name: teacher_name.to_string(),
        subject: subject.to_string(),
        schedule: schedule(days),
    }
}

pub fn teacher_timetables() -> Vec<TeacherTimetable> {
    vec![
        teacher(1, "Dr. Rajesh Kumar", "Mathematics", vec![
            (Monday, vec![
                teaching(1, "Class X", "A", "Room 101"),
                teaching(3, "Class XI", "A", "Room 201"),
                teaching(6, "Class XII", "B", "Room 301"),
            ]),
            (Tuesday, vec![
                teaching(2, "Class X", "B", "Room 102"),
                teaching(4, "Class XI", "B", "Room 202"),
                teaching(7, "Class XII", "A", "Room 302"),
            ]),
            (Wednesday, vec![
                teaching(1, "Class X", "A", "Room 101"),
                teaching(5, "Class XI", "A", "Room 201"),
            ]),
            (Thursday, vec![
                teaching(2, "Class X", "B", "Room 102"),
                teaching(4, "Class XI", "B", "Room 202"),
                teaching(6, "Class XII", "B", "Room 301"),
            ]),
            (Friday, vec![
                teaching(3, "Class XI", "A", "Room 201"),
                teaching(7, "Class XII", "A", "Room 302"),
            ]),
            (Saturday, vec![
                teaching(1, "Class X", "A", "Room 101"),
                teaching(3, "Class X", "B", "Room 102"),
            ]),
        ]),
        teacher(2, "Prof. Sunita Sharma", "Physics", vec![
            (Monday, vec![
                teaching(2, "Class XI", "A", "Physics Lab"),
                teaching(5, "Class XII", "A", "Physics Lab"),
            ]),
            (Tuesday, vec![
                teaching(1, "Class XI", "B", "Physics Lab"),
                teaching(6, "Class XII", "B", "Physics Lab"),
            ]),
            (Wednesday, vec![
                teaching(3, "Class XI", "A", "Room 203"),
                teaching(7, "Class XII", "A", "Room 303"),
            ]),
            (Thursday, vec![
                teaching(1, "Class XI", "B", "Room 204"),
                teaching(5, "Class XII", "B", "Room 304"),
            ]),
            (Friday, vec![
                teaching(2, "Class XI", "A", "Physics Lab"),
                teaching(6, "Class XII", "A", "Physics Lab"),
            ]),
            (Saturday, vec![
                teaching(2, "Class XI", "B", "Physics Lab"),
            ]),
        ]),
        teacher(3, "Ms. Priya Patel", "Chemistry", vec![
            (Monday, vec![
                teaching(4, "Class XI", "B", "Chemistry Lab"),
                teaching(7, "Class XII", "B", "Chemistry Lab"),
            ]),
            (Tuesday, vec![
                teaching(3, "Class XI", "A", "Chemistry Lab"),
                teaching(5, "Class XII", "A", "Chemistry Lab"),
            ]),
            (Wednesday, vec![
                teaching(2, "Class XI", "B", "Room 205"),
                teaching(6, "Class XII", "B", "Room 305"),
            ]),
            (Thursday, vec![
                teaching(3, "Class XI", "A", "Room 206"),
                teaching(7, "Class XII", "A", "Room 306"),
            ]),
            (Friday, vec![
                teaching(1, "Class XI", "B", "Chemistry Lab"),
                teaching(4, "Class XII", "B", "Chemistry Lab"),
            ]),
            (Saturday, vec![
                teaching(4, "Class XI", "A", "Chemistry Lab"),
            ]),
        ]),
    ]
}

pub fn section_timetables() -> Vec<SectionTimetable> {
    vec![
        SectionTimetable {
            id: 1,
            section_id: 1,
            class_name: "Class X".to_string(),
            section_name: "A".to_string(),
            academic_year: ACADEMIC_YEAR.to_string(),
            schedule: schedule(vec![
                (Monday, vec![
                    period(1, "Mathematics", "Dr. Rajesh Kumar", "Room 101"),
                    period(2, "English", "Mr. David Wilson", "Room 105"),
                    period(3, "Science", "Ms. Kavita Rao", "Science Lab"),
                    period(4, "Social Science", "Dr. Meera Singh", "Room 107"),
                    period(5, "Hindi", "Mrs. Asha Verma", "Room 109"),
                    period(6, "Computer Science", "Mr. Ravi Agarwal", "Computer Lab"),
                ]),
                (Tuesday, vec![
                    period(1, "English", "Mr. David Wilson", "Room 105"),
                    period(2, "Mathematics", "Dr. Rajesh Kumar", "Room 101"),
                    period(3, "Science", "Ms. Kavita Rao", "Science Lab"),
                    period(4, "Physical Education", "Mr. Suresh Khanna", "Playground"),
                    period(5, "Social Science", "Dr. Meera Singh", "Room 107"),
                    period(6, "Art", "Ms. Anita Joshi", "Art Room"),
                ]),
                (Wednesday, vec![
                    period(1, "Hindi", "Mrs. Asha Verma", "Room 109"),
                    period(2, "Science", "Ms. Kavita Rao", "Science Lab"),
                    period(3, "Mathematics", "Dr. Rajesh Kumar", "Room 101"),
                    period(4, "English", "Mr. David Wilson", "Room 105"),
                    period(5, "Computer Science", "Mr. Ravi Agarwal", "Computer Lab"),
                    period(6, "Music", "Mrs. Lakshmi Nair", "Music Room"),
                ]),
                (Thursday, vec![
                    period(1, "Social Science", "Dr. Meera Singh", "Room 107"),
                    period(2, "Mathematics", "Dr. Rajesh Kumar", "Room 101"),
                    period(3, "English", "Mr. David Wilson", "Room 105"),
                    period(4, "Science", "Ms. Kavita Rao", "Science Lab"),
                    period(5, "Hindi", "Mrs. Asha Verma", "Room 109"),
                    period(6, "Library", "Ms. Geetha Nair", "Library"),
                ]),
                (Friday, vec![
                    period(1, "Mathematics", "Dr. Rajesh Kumar", "Room 101"),
                    period(2, "Science", "Ms. Kavita Rao", "Science Lab"),
                    period(3, "English", "Mr. David Wilson", "Room 105"),
                    period(4, "Computer Science", "Mr. Ravi Agarwal", "Computer Lab"),
                    period(5, "Physical Education", "Mr. Suresh Khanna", "Playground"),
                    period(6, "Social Science", "Dr. Meera Singh", "Room 107"),
                ]),
                (Saturday, vec![
                    period(1, "Hindi", "Mrs. Asha Verma", "Room 109"),
                    period(2, "Art", "Ms. Anita Joshi", "Art Room"),
                    period(3, "Music", "Mrs. Lakshmi Nair", "Music Room"),
                    period(4, "General Studies", "Various Teachers", "Main Hall"),
                ]),
            ]),
        },
        SectionTimetable {
            id: 2,
            section_id: 3,
            class_name: "Class XI".to_string(),
            section_name: "A".to_string(),
            academic_year: ACADEMIC_YEAR.to_string(),
            schedule: schedule(vec![
                (Monday, vec![
                    period(1, "Physics", "Prof. Sunita Sharma", "Physics Lab"),
                    period(2, "Chemistry", "Ms. Priya Patel", "Room 203"),
                    period(3, "Mathematics", "Dr. Rajesh Kumar", "Room 201"),
                    period(4, "English", "Mr. David Wilson", "Room 205"),
                    period(5, "Computer Science", "Mr. Ravi Agarwal", "Computer Lab"),
                    period(6, "Biology", "Dr. Sanjay Gupta", "Biology Lab"),
                ]),
                (Tuesday, vec![
                    period(1, "Chemistry", "Ms. Priya Patel", "Chemistry Lab"),
                    period(2, "Mathematics", "Dr. Rajesh Kumar", "Room 201"),
                    period(3, "Physics", "Prof. Sunita Sharma", "Room 203"),
                    period(4, "Biology", "Dr. Sanjay Gupta", "Biology Lab"),
                    period(5, "English", "Mr. David Wilson", "Room 205"),
                    period(6, "Physical Education", "Mr. Suresh Khanna", "Playground"),
                ]),
                (Wednesday, vec![
                    period(1, "Mathematics", "Dr. Rajesh Kumar", "Room 201"),
                    period(2, "Physics", "Prof. Sunita Sharma", "Physics Lab"),
                    period(3, "English", "Mr. David Wilson", "Room 205"),
                    period(4, "Chemistry", "Ms. Priya Patel", "Room 203"),
                    period(5, "Computer Science", "Mr. Ravi Agarwal", "Computer Lab"),
                    period(6, "Economics", "Dr. Amit Sharma", "Room 207"),
                ]),
                (Thursday, vec![
                    period(1, "Biology", "Dr. Sanjay Gupta", "Biology Lab"),
                    period(2, "Mathematics", "Dr. Rajesh Kumar", "Room 201"),
                    period(3, "Chemistry", "Ms. Priya Patel", "Chemistry Lab"),
                    period(4, "Physics", "Prof. Sunita Sharma", "Room 203"),
                    period(5, "English", "Mr. David Wilson", "Room 205"),
                    period(6, "Library", "Ms. Geetha Nair", "Library"),
                ]),
                (Friday, vec![
                    period(1, "Physics", "Prof. Sunita Sharma", "Physics Lab"),
                    period(2, "Chemistry", "Ms. Priya Patel", "Chemistry Lab"),
                    period(3, "Mathematics", "Dr. Rajesh Kumar", "Room 201"),
                    period(4, "Computer Science", "Mr. Ravi Agarwal", "Computer Lab"),
                    period(5, "Biology", "Dr. Sanjay Gupta", "Biology Lab"),
                    period(6, "Economics", "Dr. Amit Sharma", "Room 207"),
                ]),
                (Saturday, vec![
                    period(1, "English", "Mr. David Wilson", "Room 205"),
                    period(2, "General Studies", "Various Teachers", "Main Hall"),
                    period(3, "Career Counseling", "Ms. Reena Khanna", "Counseling Room"),
                ]),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slots_ordered_and_non_overlapping() {
        let slots = time_slots();
        assert_eq!(slots.len(), 8);
        for pair in slots.windows(2) {
            assert!(pair[0].end_time <= pair[1].start_time);
        }
    }

    #[test]
    fn test_sections_cover_each_class() {
        let sections = timetable_sections();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[2], Section { id: 3, name: "A".to_string(), class_id: 2 });
        assert_eq!(sections[5], Section { id: 6, name: "B".to_string(), class_id: 3 });
    }

    #[test]
    fn test_timetable_slots_reference_known_periods() {
        let ids: Vec<u32> = time_slots().iter().map(|s| s.id).collect();
        for tt in teacher_timetables() {
            for (_, slots) in tt.schedule.days() {
                assert!(slots.iter().all(|s| ids.contains(&s.time_slot_id)));
            }
        }
        for tt in section_timetables() {
            for (_, slots) in tt.schedule.days() {
                assert!(slots.iter().all(|s| ids.contains(&s.time_slot_id)));
            }
        }
    }

    #[test]
    fn test_fixture_period_counts() {
        let teachers = teacher_timetables();
        assert_eq!(teachers[0].schedule.total_periods(), 15);
        assert_eq!(teachers[1].schedule.slots_on(SchoolDay::Saturday).len(), 1);
        let sections = section_timetables();
        assert_eq!(sections[0].schedule.slots_on(SchoolDay::Saturday).len(), 4);
        assert_eq!(sections[1].schedule.total_periods(), 33);
    }
}
