//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper pairs an operation's return value with the scope it acted on
//! so the rendered markdown can say what happened and where.

use std::fmt;

use crate::models::{
    AcademicYear, CalendarException, CommitOutcome, Scope, SimulationResult, Teacher,
    TimetablePeriod,
};

/// A previewed schedule.
pub struct SchedulePreview {
    pub scope: Scope,
    pub result: SimulationResult,
}

impl fmt::Display for SchedulePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Schedule preview for {}", self.scope)?;
        writeln!(f)?;
        write!(f, "{}", self.result)
    }
}

/// The committed schedule of a scope, if any.
pub struct ExistingSchedule {
    pub scope: Scope,
    pub result: Option<SimulationResult>,
}

impl fmt::Display for ExistingSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Some(result) => {
                writeln!(f, "# Committed schedule for {}", self.scope)?;
                writeln!(f)?;
                write!(f, "{result}")
            }
            None => writeln!(f, "No lesson plans committed for {}.", self.scope),
        }
    }
}

/// Outcome of a commit.
///
/// # Examples
///
/// ```rust
/// use pacer_core::{
///     display::CommitResult,
///     models::{CommitOutcome, Scope},
/// };
///
/// let result = CommitResult {
///     scope: Scope::default(),
///     outcome: CommitOutcome { count: 5 },
/// };
/// assert!(result.to_string().starts_with("Committed 5 lesson plans"));
/// ```
pub struct CommitResult {
    pub scope: Scope,
    pub outcome: CommitOutcome,
}

impl fmt::Display for CommitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome.count {
            0 => writeln!(
                f,
                "The syllabus has no topics; lesson plans for {} were left unchanged.",
                self.scope
            ),
            1 => writeln!(f, "Committed 1 lesson plan for {}.", self.scope),
            count => writeln!(f, "Committed {count} lesson plans for {}.", self.scope),
        }
    }
}

/// Outcome of clearing a scope.
pub struct ClearResult {
    pub scope: Scope,
    pub removed: usize,
}

impl fmt::Display for ClearResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Removed {} lesson plans for {}.", self.removed, self.scope)
    }
}

/// A registered piece of school data.
pub struct Registered<T> {
    pub resource: T,
}

impl<T> Registered<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for Registered<Teacher> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registered teacher with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for Registered<AcademicYear> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Set academic year with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for Registered<TimetablePeriod> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registered timetable period")?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for Registered<CalendarException> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registered calendar exception")?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
