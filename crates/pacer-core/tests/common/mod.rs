#![allow(dead_code)]

use pacer_core::{
    AddTeacher, AddTimetablePeriod, Scheduler, SchedulerBuilder, Scope, SetAcademicYear, Syllabus,
    models::{SyllabusChapter, SyllabusTopic, SyllabusUnit},
};
use tempfile::TempDir;

pub const SCOPE: Scope = Scope {
    school_id: 1,
    class_id: 7,
    section_id: 2,
    subject_id: 11,
    academic_year_id: 2024,
};

pub const TEACHER_ID: u64 = 5;

/// Helper function to create a test scheduler
pub async fn create_test_scheduler() -> (TempDir, Scheduler) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let scheduler = SchedulerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create scheduler");
    (temp_dir, scheduler)
}

/// Registers the teacher, an academic year from 2024-09-01 to `year_end`
/// and one published period "P1" on every weekday.
pub async fn register_school(scheduler: &Scheduler, year_end: &str) {
    scheduler
        .add_teacher(&AddTeacher {
            school_id: SCOPE.school_id,
            teacher_id: TEACHER_ID,
            name: "Asha Rao".to_string(),
        })
        .await
        .expect("Failed to add teacher");

    scheduler
        .set_academic_year(&SetAcademicYear {
            school_id: SCOPE.school_id,
            academic_year_id: SCOPE.academic_year_id,
            label: "2024-25".to_string(),
            start_date: "2024-09-01".to_string(),
            end_date: year_end.to_string(),
        })
        .await
        .expect("Failed to set academic year");

    for day in ["mon", "tue", "wed", "thu", "fri"] {
        scheduler
            .add_timetable_period(&weekday_period(day, 1, None))
            .await
            .expect("Failed to add period");
    }
}

pub fn weekday_period(day: &str, order: u32, status: Option<&str>) -> AddTimetablePeriod {
    AddTimetablePeriod {
        school_id: SCOPE.school_id,
        class_id: SCOPE.class_id,
        section_id: SCOPE.section_id,
        subject_id: SCOPE.subject_id,
        day_of_week: day.to_string(),
        period_order: order,
        period_label: format!("P{order}"),
        status: status.map(String::from),
    }
}

/// Single-unit, single-chapter syllabus with the given topics.
pub fn syllabus(unit: &str, chapter: &str, topics: &[&str]) -> Syllabus {
    Syllabus(vec![SyllabusUnit {
        title: unit.to_string(),
        chapters: vec![SyllabusChapter {
            title: chapter.to_string(),
            topics: topics
                .iter()
                .map(|title| SyllabusTopic {
                    title: title.to_string(),
                })
                .collect(),
        }],
    }])
}
