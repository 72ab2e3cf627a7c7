//! Parameter structures for Pacer operations.
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework dependencies beyond serde and the optional `schema` feature.
//! Interface layers wrap them with their own derives and convert with
//! `From`.
//!
//! Dates travel as ISO `YYYY-MM-DD` strings so that the JSON schema stays
//! simple; each structure's `validate` method parses them into civil dates
//! and reports the offending field on failure.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PacerError, Result},
    models::{
        AcademicYear, CalendarException, DayOfWeek, ExceptionKind, PeriodStatus, Scope, Syllabus,
        Teacher, TimetablePeriod,
    },
};

fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.trim().parse::<Date>().map_err(|e| {
        PacerError::invalid_input(field).with_reason(format!("expected YYYY-MM-DD: {e}"))
    })
}

fn parse_field<T>(field: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|reason| PacerError::invalid_input(field).with_reason(reason))
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PacerError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(())
}

/// Parameters for previewing a schedule without persisting it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PreviewSchedule {
    /// Class, section, subject and academic year to pace
    #[serde(flatten)]
    pub scope: Scope,
    /// First date lessons may be scheduled on (YYYY-MM-DD)
    pub start_date: String,
    /// Ordered units, each with ordered chapters of ordered topics
    #[serde(default)]
    pub syllabus: Syllabus,
}

impl PreviewSchedule {
    /// Parse the start date.
    ///
    /// # Errors
    ///
    /// * `PacerError::InvalidInput` - When `start_date` is not an ISO date
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pacer_core::params::PreviewSchedule;
    ///
    /// let params = PreviewSchedule {
    ///     start_date: "2024-09-02".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(params.validate()?.to_string(), "2024-09-02");
    ///
    /// let bad = PreviewSchedule {
    ///     start_date: "02/09/2024".to_string(),
    ///     ..Default::default()
    /// };
    /// assert!(bad.validate().is_err());
    /// # Ok::<(), pacer_core::PacerError>(())
    /// ```
    pub fn validate(&self) -> Result<Date> {
        parse_date("start_date", &self.start_date)
    }
}

/// Parameters for committing a schedule, replacing whatever was committed
/// for the same scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CommitSchedule {
    #[serde(flatten)]
    pub schedule: PreviewSchedule,
    /// Teacher the lesson plans are assigned to
    pub teacher_id: u64,
}

/// Parameters for operations addressing one scope's committed schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ScopeParams {
    #[serde(flatten)]
    pub scope: Scope,
}

/// Parameters for registering a teacher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddTeacher {
    pub school_id: u64,
    pub teacher_id: u64,
    pub name: String,
}

impl AddTeacher {
    pub fn validate(&self) -> Result<Teacher> {
        require_text("name", &self.name)?;
        Ok(Teacher {
            id: self.teacher_id,
            school_id: self.school_id,
            name: self.name.trim().to_string(),
        })
    }
}

/// Parameters for registering the bounds of an academic year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetAcademicYear {
    pub school_id: u64,
    pub academic_year_id: u64,
    /// Display label, e.g. "2024-25"
    pub label: String,
    /// First day of the year (YYYY-MM-DD)
    pub start_date: String,
    /// Last day of the year (YYYY-MM-DD)
    pub end_date: String,
}

impl SetAcademicYear {
    /// Parse both bounds.
    ///
    /// An end date before the start date is rejected here even though the
    /// pacing pipeline tolerates such records.
    pub fn validate(&self) -> Result<AcademicYear> {
        let start_date = parse_date("start_date", &self.start_date)?;
        let end_date = parse_date("end_date", &self.end_date)?;
        if end_date < start_date {
            return Err(PacerError::invalid_input("end_date").with_reason(format!(
                "{end_date} is before the start date {start_date}"
            )));
        }

        let label = if self.label.trim().is_empty() {
            format!("{}-{}", start_date.year(), end_date.year())
        } else {
            self.label.trim().to_string()
        };

        Ok(AcademicYear {
            id: self.academic_year_id,
            school_id: self.school_id,
            label,
            start_date,
            end_date,
        })
    }
}

/// Parameters for registering one weekly timetable period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddTimetablePeriod {
    pub school_id: u64,
    pub class_id: u64,
    pub section_id: u64,
    pub subject_id: u64,
    /// Day name, e.g. "monday" or "mon"
    pub day_of_week: String,
    /// Position of the period within the day
    pub period_order: u32,
    pub period_label: String,
    /// 'draft', 'published' or 'locked'; defaults to 'published'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl AddTimetablePeriod {
    /// Parse the day and status, returning the scope the period belongs to
    /// (academic year left at zero, timetables are not per-year) and the
    /// period itself.
    pub fn validate(&self) -> Result<(Scope, TimetablePeriod)> {
        require_text("period_label", &self.period_label)?;
        let day_of_week: DayOfWeek = parse_field("day_of_week", &self.day_of_week)?;
        let status = match self.status.as_deref() {
            Some(status) => parse_field("status", status)?,
            None => PeriodStatus::Published,
        };

        let scope = Scope {
            school_id: self.school_id,
            class_id: self.class_id,
            section_id: self.section_id,
            subject_id: self.subject_id,
            ..Scope::default()
        };
        let period = TimetablePeriod {
            day_of_week,
            period_order: self.period_order,
            period_label: self.period_label.trim().to_string(),
            status,
        };
        Ok((scope, period))
    }
}

/// Parameters for flagging a date on the school calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddCalendarException {
    pub school_id: u64,
    pub academic_year_id: u64,
    /// Date of the exception (YYYY-MM-DD)
    pub date: String,
    /// 'holiday', 'event' or 'note'
    pub kind: String,
    pub title: String,
}

impl AddCalendarException {
    pub fn validate(&self) -> Result<(Scope, CalendarException)> {
        let date = parse_date("date", &self.date)?;
        let kind: ExceptionKind = parse_field("kind", &self.kind)?;

        let scope = Scope {
            school_id: self.school_id,
            academic_year_id: self.academic_year_id,
            ..Scope::default()
        };
        let exception = CalendarException {
            date,
            kind,
            title: self.title.trim().to_string(),
        };
        Ok((scope, exception))
    }
}
