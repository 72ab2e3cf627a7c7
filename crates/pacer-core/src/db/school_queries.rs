//! School data queries: teachers, academic years, timetable periods and
//! calendar exceptions.
//!
//! These tables are read by the pacing pipeline through the reader traits
//! in [`crate::sources`]. The write helpers only register rows so that a
//! standalone database can be populated.

use jiff::civil::Date;
use rusqlite::{OptionalExtension, params};

use crate::{
    error::{DatabaseResultExt, PacerError, Result},
    models::{AcademicYear, CalendarException, DayOfWeek, Scope, Teacher, TimetablePeriod},
    sources::{AcademicYearReader, CalendarReader, TeacherDirectory, TimetableReader},
};

use super::{date_column, parsed_column};

const UPSERT_TEACHER_SQL: &str = "INSERT INTO teachers (id, school_id, name) VALUES (?1, ?2, ?3)
     ON CONFLICT (school_id, id) DO UPDATE SET name = excluded.name";
const CHECK_TEACHER_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM teachers WHERE school_id = ?1 AND id = ?2)";

const UPSERT_YEAR_SQL: &str = "INSERT INTO academic_years (id, school_id, label, start_date, end_date)
     VALUES (?1, ?2, ?3, ?4, ?5)
     ON CONFLICT (school_id, id) DO UPDATE SET
         label = excluded.label,
         start_date = excluded.start_date,
         end_date = excluded.end_date";
const SELECT_YEAR_SQL: &str = "SELECT id, school_id, label, start_date, end_date
     FROM academic_years WHERE school_id = ?1 AND id = ?2";

const UPSERT_PERIOD_SQL: &str = "INSERT INTO timetable_periods
     (school_id, class_id, section_id, subject_id, day_of_week, period_order, period_label, status)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
     ON CONFLICT (school_id, class_id, section_id, subject_id, day_of_week, period_order)
     DO UPDATE SET period_label = excluded.period_label, status = excluded.status";
const SELECT_PERIODS_SQL: &str = "SELECT day_of_week, period_order, period_label, status
     FROM timetable_periods
     WHERE school_id = ?1 AND class_id = ?2 AND section_id = ?3 AND subject_id = ?4
       AND day_of_week = ?5
     ORDER BY period_order, id";

const INSERT_EXCEPTION_SQL: &str = "INSERT INTO calendar_exceptions
     (school_id, academic_year_id, exception_date, kind, title) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_EXCEPTIONS_SQL: &str = "SELECT exception_date, kind, title
     FROM calendar_exceptions
     WHERE school_id = ?1 AND academic_year_id = ?2
       AND exception_date >= ?3 AND exception_date <= ?4
     ORDER BY exception_date, id";

impl super::Database {
    /// Registers a teacher, replacing the name of an existing one with the
    /// same id.
    pub fn upsert_teacher(&mut self, teacher: &Teacher) -> Result<Teacher> {
        if teacher.name.trim().is_empty() {
            return Err(PacerError::invalid_input("name").with_reason("must not be empty"));
        }

        self.connection
            .execute(
                UPSERT_TEACHER_SQL,
                params![teacher.id as i64, teacher.school_id as i64, teacher.name],
            )
            .db_context("Failed to upsert teacher")?;

        Ok(teacher.clone())
    }

    /// Registers the bounds of an academic year.
    ///
    /// Malformed bounds are stored as given: the pacing pipeline decides how
    /// to treat them through its year fallback.
    pub fn upsert_academic_year(&mut self, year: &AcademicYear) -> Result<AcademicYear> {
        self.connection
            .execute(
                UPSERT_YEAR_SQL,
                params![
                    year.id as i64,
                    year.school_id as i64,
                    year.label,
                    year.start_date.to_string(),
                    year.end_date.to_string()
                ],
            )
            .db_context("Failed to upsert academic year")?;

        Ok(year.clone())
    }

    /// Registers one weekly timetable period for the scope's class, section
    /// and subject. A period with the same day and order is replaced.
    pub fn upsert_timetable_period(
        &mut self,
        scope: &Scope,
        period: &TimetablePeriod,
    ) -> Result<TimetablePeriod> {
        if period.period_label.trim().is_empty() {
            return Err(PacerError::invalid_input("period_label").with_reason("must not be empty"));
        }

        self.connection
            .execute(
                UPSERT_PERIOD_SQL,
                params![
                    scope.school_id as i64,
                    scope.class_id as i64,
                    scope.section_id as i64,
                    scope.subject_id as i64,
                    period.day_of_week.as_str(),
                    period.period_order as i64,
                    period.period_label,
                    period.status.as_str()
                ],
            )
            .db_context("Failed to upsert timetable period")?;

        Ok(period.clone())
    }

    /// Adds a calendar exception to the scope's school and academic year.
    pub fn insert_calendar_exception(
        &mut self,
        scope: &Scope,
        exception: &CalendarException,
    ) -> Result<CalendarException> {
        self.connection
            .execute(
                INSERT_EXCEPTION_SQL,
                params![
                    scope.school_id as i64,
                    scope.academic_year_id as i64,
                    exception.date.to_string(),
                    exception.kind.as_str(),
                    exception.title
                ],
            )
            .db_context("Failed to insert calendar exception")?;

        Ok(exception.clone())
    }
}

impl TimetableReader for super::Database {
    fn periods_for(&self, scope: &Scope, day: DayOfWeek) -> Result<Vec<TimetablePeriod>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PERIODS_SQL)
            .db_context("Failed to prepare timetable query")?;

        let periods = stmt
            .query_map(
                params![
                    scope.school_id as i64,
                    scope.class_id as i64,
                    scope.section_id as i64,
                    scope.subject_id as i64,
                    day.as_str()
                ],
                |row| {
                    Ok(TimetablePeriod {
                        day_of_week: parsed_column(row, 0)?,
                        period_order: row.get::<_, i64>(1)? as u32,
                        period_label: row.get(2)?,
                        status: parsed_column(row, 3)?,
                    })
                },
            )
            .db_context("Failed to query timetable periods")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read timetable period")?;

        Ok(periods)
    }
}

impl CalendarReader for super::Database {
    fn exceptions_between(
        &self,
        scope: &Scope,
        from: Date,
        to: Date,
    ) -> Result<Vec<CalendarException>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_EXCEPTIONS_SQL)
            .db_context("Failed to prepare calendar query")?;

        // ISO dates compare correctly as text
        let exceptions = stmt
            .query_map(
                params![
                    scope.school_id as i64,
                    scope.academic_year_id as i64,
                    from.to_string(),
                    to.to_string()
                ],
                |row| {
                    Ok(CalendarException {
                        date: date_column(row, 0)?,
                        kind: parsed_column(row, 1)?,
                        title: row.get(2)?,
                    })
                },
            )
            .db_context("Failed to query calendar exceptions")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read calendar exception")?;

        Ok(exceptions)
    }
}

impl AcademicYearReader for super::Database {
    fn academic_year(&self, school_id: u64, year_id: u64) -> Result<Option<AcademicYear>> {
        self.connection
            .query_row(
                SELECT_YEAR_SQL,
                params![school_id as i64, year_id as i64],
                |row| {
                    Ok(AcademicYear {
                        id: row.get::<_, i64>(0)? as u64,
                        school_id: row.get::<_, i64>(1)? as u64,
                        label: row.get(2)?,
                        start_date: date_column(row, 3)?,
                        end_date: date_column(row, 4)?,
                    })
                },
            )
            .optional()
            .db_context("Failed to query academic year")
    }
}

impl TeacherDirectory for super::Database {
    fn teacher_exists(&self, school_id: u64, teacher_id: u64) -> Result<bool> {
        self.connection
            .query_row(
                CHECK_TEACHER_EXISTS_SQL,
                params![school_id as i64, teacher_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check teacher existence")
    }
}
