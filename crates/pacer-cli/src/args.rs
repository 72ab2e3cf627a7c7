//! Command-line argument definitions using clap.
//!
//! Each argument structure converts into the matching core parameter type so
//! that clap concerns stay in this crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Scheduler
//! ```

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use pacer_core::{
    models::{Scope, Syllabus},
    params::{
        AddCalendarException, AddTeacher, AddTimetablePeriod, CommitSchedule, PreviewSchedule,
        ScopeParams, SetAcademicYear,
    },
};

/// Lesson auto-pacing scheduler
///
/// Pacer distributes a syllabus of units, chapters and topics over the
/// teaching slots left by a weekly timetable and the school calendar, adding
/// revision sessions when there is room. Schedules can be previewed, committed
/// as day-by-day lesson plans, and served to AI assistants over MCP.
#[derive(Parser)]
#[command(version, about, name = "pacer")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pacer/pacer.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    /// Share of available slots a plan may occupy before revisions are added
    #[arg(long, global = true, value_name = "RATIO")]
    pub utilization_ceiling: Option<f64>,

    /// Fail instead of pacing one year ahead when the academic year is
    /// missing or malformed
    #[arg(long, global = true)]
    pub strict_year: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Pacer CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Compute a schedule without saving it
    #[command(alias = "p")]
    Preview(PreviewArgs),
    /// Compute a schedule and replace the committed lesson plans with it
    #[command(alias = "c")]
    Commit(CommitArgs),
    /// Show the committed schedule of a scope
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Delete the committed schedule of a scope
    Clear(ShowArgs),
    /// Register teachers, academic years, timetable periods and calendar
    /// exceptions
    School {
        #[command(subcommand)]
        command: SchoolCommands,
    },
    /// Start the MCP server
    Serve,
}

#[derive(Subcommand)]
pub enum SchoolCommands {
    /// Register a teacher
    Teacher(AddTeacherArgs),
    /// Set the bounds of an academic year
    Year(SetAcademicYearArgs),
    /// Add a weekly timetable period
    Period(AddTimetablePeriodArgs),
    /// Flag a date on the school calendar
    Exception(AddCalendarExceptionArgs),
}

/// Class, section, subject and academic year a schedule belongs to
#[derive(ClapArgs, Clone, Copy)]
pub struct ScopeArgs {
    #[arg(long, help = "School (tenant) identifier")]
    pub school: u64,
    #[arg(long = "class", help = "Class identifier")]
    pub class_id: u64,
    #[arg(long, help = "Section identifier")]
    pub section: u64,
    #[arg(long, help = "Subject identifier")]
    pub subject: u64,
    #[arg(long, help = "Academic year identifier")]
    pub year: u64,
}

impl From<ScopeArgs> for Scope {
    fn from(val: ScopeArgs) -> Self {
        Scope {
            school_id: val.school,
            class_id: val.class_id,
            section_id: val.section,
            subject_id: val.subject,
            academic_year_id: val.year,
        }
    }
}

#[derive(ClapArgs)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,
    /// First date lessons may be scheduled on
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start: String,
    /// JSON file holding the syllabus: an array of units with chapters and
    /// topics
    #[arg(long, value_name = "FILE")]
    pub syllabus: PathBuf,
}

impl PreviewArgs {
    /// Read the syllabus file and build the core parameters.
    pub fn into_params(self) -> Result<PreviewSchedule> {
        let raw = fs::read_to_string(&self.syllabus)
            .with_context(|| format!("Failed to read syllabus {}", self.syllabus.display()))?;
        let syllabus = Syllabus::from_json(&raw)
            .with_context(|| format!("Invalid syllabus JSON in {}", self.syllabus.display()))?;

        Ok(PreviewSchedule {
            scope: self.scope.into(),
            start_date: self.start,
            syllabus,
        })
    }
}

#[derive(ClapArgs)]
pub struct CommitArgs {
    #[command(flatten)]
    pub preview: PreviewArgs,
    /// Teacher the lesson plans are assigned to
    #[arg(long)]
    pub teacher: u64,
}

impl CommitArgs {
    pub fn into_params(self) -> Result<CommitSchedule> {
        Ok(CommitSchedule {
            teacher_id: self.teacher,
            schedule: self.preview.into_params()?,
        })
    }
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,
}

impl From<ShowArgs> for ScopeParams {
    fn from(val: ShowArgs) -> Self {
        ScopeParams {
            scope: val.scope.into(),
        }
    }
}

#[derive(ClapArgs)]
pub struct AddTeacherArgs {
    #[arg(long)]
    pub school: u64,
    #[arg(long)]
    pub id: u64,
    /// Display name of the teacher
    pub name: String,
}

impl From<AddTeacherArgs> for AddTeacher {
    fn from(val: AddTeacherArgs) -> Self {
        AddTeacher {
            school_id: val.school,
            teacher_id: val.id,
            name: val.name,
        }
    }
}

#[derive(ClapArgs)]
pub struct SetAcademicYearArgs {
    #[arg(long)]
    pub school: u64,
    #[arg(long)]
    pub id: u64,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start: String,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end: String,
    /// Display label, defaults to the start and end years
    #[arg(long, default_value = "")]
    pub label: String,
}

impl From<SetAcademicYearArgs> for SetAcademicYear {
    fn from(val: SetAcademicYearArgs) -> Self {
        SetAcademicYear {
            school_id: val.school,
            academic_year_id: val.id,
            label: val.label,
            start_date: val.start,
            end_date: val.end,
        }
    }
}

/// Command-line representation of timetable period statuses
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PeriodStatusArg {
    Draft,
    Published,
    Locked,
}

impl PeriodStatusArg {
    fn as_str(self) -> &'static str {
        match self {
            PeriodStatusArg::Draft => "draft",
            PeriodStatusArg::Published => "published",
            PeriodStatusArg::Locked => "locked",
        }
    }
}

#[derive(ClapArgs)]
pub struct AddTimetablePeriodArgs {
    #[arg(long)]
    pub school: u64,
    #[arg(long = "class")]
    pub class_id: u64,
    #[arg(long)]
    pub section: u64,
    #[arg(long)]
    pub subject: u64,
    /// Day of the week, e.g. "mon" or "monday"
    #[arg(long)]
    pub day: String,
    /// Position of the period within the day
    #[arg(long)]
    pub order: u32,
    /// Label shown in schedules, defaults to "P<order>"
    #[arg(long)]
    pub label: Option<String>,
    #[arg(long, value_enum, default_value = "published")]
    pub status: PeriodStatusArg,
}

impl From<AddTimetablePeriodArgs> for AddTimetablePeriod {
    fn from(val: AddTimetablePeriodArgs) -> Self {
        AddTimetablePeriod {
            school_id: val.school,
            class_id: val.class_id,
            section_id: val.section,
            subject_id: val.subject,
            day_of_week: val.day,
            period_order: val.order,
            period_label: val.label.unwrap_or_else(|| format!("P{}", val.order)),
            status: Some(val.status.as_str().to_string()),
        }
    }
}

/// Command-line representation of calendar exception kinds
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ExceptionKindArg {
    /// No teaching on this date
    Holiday,
    /// School event, no teaching on this date
    Event,
    /// Informational, teaching continues
    Note,
}

impl ExceptionKindArg {
    fn as_str(self) -> &'static str {
        match self {
            ExceptionKindArg::Holiday => "holiday",
            ExceptionKindArg::Event => "event",
            ExceptionKindArg::Note => "note",
        }
    }
}

#[derive(ClapArgs)]
pub struct AddCalendarExceptionArgs {
    #[arg(long)]
    pub school: u64,
    #[arg(long)]
    pub year: u64,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: String,
    #[arg(long, value_enum, default_value = "holiday")]
    pub kind: ExceptionKindArg,
    pub title: String,
}

impl From<AddCalendarExceptionArgs> for AddCalendarException {
    fn from(val: AddCalendarExceptionArgs) -> Self {
        AddCalendarException {
            school_id: val.school,
            academic_year_id: val.year,
            date: val.date,
            kind: val.kind.as_str().to_string(),
            title: val.title,
        }
    }
}
