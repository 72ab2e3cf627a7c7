//! Registration of the school data the pacing pipeline reads.

use super::Scheduler;
use crate::{
    error::Result,
    models::{AcademicYear, CalendarException, Teacher, TimetablePeriod},
    params::{AddCalendarException, AddTeacher, AddTimetablePeriod, SetAcademicYear},
};

impl Scheduler {
    pub async fn add_teacher(&self, params: &AddTeacher) -> Result<Teacher> {
        let teacher = params.validate()?;

        self.with_database(move |db, _| db.upsert_teacher(&teacher))
            .await
    }

    /// Registers or replaces the bounds of an academic year.
    pub async fn set_academic_year(&self, params: &SetAcademicYear) -> Result<AcademicYear> {
        let year = params.validate()?;

        self.with_database(move |db, _| db.upsert_academic_year(&year))
            .await
    }

    /// Registers one weekly timetable period. A period with the same day and
    /// order for the same class, section and subject is replaced.
    pub async fn add_timetable_period(&self, params: &AddTimetablePeriod) -> Result<TimetablePeriod> {
        let (scope, period) = params.validate()?;

        self.with_database(move |db, _| db.upsert_timetable_period(&scope, &period))
            .await
    }

    pub async fn add_calendar_exception(
        &self,
        params: &AddCalendarException,
    ) -> Result<CalendarException> {
        let (scope, exception) = params.validate()?;

        self.with_database(move |db, _| db.insert_calendar_exception(&scope, &exception))
            .await
    }
}
