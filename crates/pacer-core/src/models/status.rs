//! Status and kind enumerations for timetable periods, calendar exceptions,
//! tasks and lesson plan records.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a weekly timetable period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    /// Still being edited, not usable for pacing
    #[default]
    Draft,

    /// Visible to staff and students
    Published,

    /// Frozen for the rest of the year
    Locked,
}

impl FromStr for PeriodStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(PeriodStatus::Draft),
            "published" => Ok(PeriodStatus::Published),
            "locked" => Ok(PeriodStatus::Locked),
            _ => Err(format!("Invalid period status: {s}")),
        }
    }
}

impl PeriodStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodStatus::Draft => "draft",
            PeriodStatus::Published => "published",
            PeriodStatus::Locked => "locked",
        }
    }

    /// Published and locked periods are the only ones that yield teaching
    /// slots.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, PeriodStatus::Published | PeriodStatus::Locked)
    }
}

/// Kind of a calendar exception.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ExceptionKind {
    /// School is closed
    Holiday,

    /// School-wide event replacing regular classes
    Event,

    /// Informational entry; regular classes still take place
    Note,
}

impl FromStr for ExceptionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "holiday" => Ok(ExceptionKind::Holiday),
            "event" => Ok(ExceptionKind::Event),
            "note" => Ok(ExceptionKind::Note),
            _ => Err(format!("Invalid calendar exception kind: {s}")),
        }
    }
}

impl ExceptionKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ExceptionKind::Holiday => "holiday",
            ExceptionKind::Event => "event",
            ExceptionKind::Note => "note",
        }
    }

    /// Whether a date carrying this exception has no regular teaching.
    pub fn blocks_teaching(&self) -> bool {
        matches!(self, ExceptionKind::Holiday | ExceptionKind::Event)
    }
}

/// Kind of a pacing task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// One syllabus topic
    Topic,

    /// Synthetic revision session at a chapter or unit boundary
    Revision,

    /// Practice session
    Practice,
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "topic" => Ok(TaskKind::Topic),
            "revision" => Ok(TaskKind::Revision),
            "practice" => Ok(TaskKind::Practice),
            _ => Err(format!("Invalid task kind: {s}")),
        }
    }
}

impl TaskKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Topic => "topic",
            TaskKind::Revision => "revision",
            TaskKind::Practice => "practice",
        }
    }
}

/// Progress of a persisted lesson plan record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    /// Created by a commit, not yet taught
    #[default]
    Planned,

    /// Marked as taught by the teacher
    Completed,
}

impl FromStr for LessonStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(LessonStatus::Planned),
            "completed" => Ok(LessonStatus::Completed),
            _ => Err(format!("Invalid lesson status: {s}")),
        }
    }
}

impl LessonStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonStatus::Planned => "planned",
            LessonStatus::Completed => "completed",
        }
    }

    /// Get status with an icon for display.
    ///
    /// ```rust
    /// use pacer_core::models::LessonStatus;
    ///
    /// assert_eq!(LessonStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(LessonStatus::Planned.with_icon(), "○ Planned");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            LessonStatus::Completed => "✓ Completed",
            LessonStatus::Planned => "○ Planned",
        }
    }
}
