//! Collaborator contracts consumed by the pacing pipeline.
//!
//! The pipeline never talks to storage directly. It reads timetable,
//! calendar, academic-year and teacher data through these traits and writes
//! lesson plans through [`LessonPlanStore`]. [`crate::Database`] implements
//! all of them over SQLite; tests substitute in-memory fakes.

use jiff::civil::Date;

use crate::{
    error::Result,
    models::{AcademicYear, CalendarException, DayOfWeek, LessonPlanRecord, Scope, TimetablePeriod},
};

/// Weekly timetable lookup.
pub trait TimetableReader {
    /// Periods scheduled for the scope's class, section and subject on the
    /// given weekday, ordered by period order. Draft periods are included;
    /// callers filter on [`crate::models::PeriodStatus::is_confirmed`].
    fn periods_for(&self, scope: &Scope, day: DayOfWeek) -> Result<Vec<TimetablePeriod>>;
}

/// School calendar lookup.
pub trait CalendarReader {
    /// Exceptions of the scope's school and academic year dated within
    /// `from..=to`.
    fn exceptions_between(
        &self,
        scope: &Scope,
        from: Date,
        to: Date,
    ) -> Result<Vec<CalendarException>>;
}

/// Academic year bounds lookup.
pub trait AcademicYearReader {
    fn academic_year(&self, school_id: u64, year_id: u64) -> Result<Option<AcademicYear>>;
}

/// Teacher identity lookup.
pub trait TeacherDirectory {
    fn teacher_exists(&self, school_id: u64, teacher_id: u64) -> Result<bool>;
}

/// Durable lesson plan storage.
pub trait LessonPlanStore {
    /// Delete every record of `scope` and insert `records`, atomically.
    /// Returns the number of records inserted.
    fn replace_scope(&mut self, scope: &Scope, records: &[LessonPlanRecord]) -> Result<usize>;

    /// Records of `scope` ordered by date, then sequence.
    fn find_by_scope(&self, scope: &Scope) -> Result<Vec<LessonPlanRecord>>;

    /// Delete every record of `scope`, returning how many were removed.
    fn delete_by_scope(&mut self, scope: &Scope) -> Result<usize>;
}

/// Everything the read-only pacing pipeline needs.
pub trait ScheduleSource: TimetableReader + CalendarReader + AcademicYearReader {}

impl<T> ScheduleSource for T where
    T: TimetableReader + CalendarReader + AcademicYearReader + ?Sized
{
}
