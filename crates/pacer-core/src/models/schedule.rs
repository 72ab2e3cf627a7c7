//! Teaching slots, scheduled entries and simulation results.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{DayOfWeek, TaskKind, UnitTimeline};

/// One concrete teaching opportunity: a date and a period on that date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeachingSlot {
    pub date: Date,
    pub day_of_week: DayOfWeek,
    pub period_label: String,
}

/// A task bound to a slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledEntry {
    pub slot: TeachingSlot,
    pub kind: TaskKind,
    pub unit_title: String,
    /// `None` for unit-level revisions
    pub chapter_title: Option<String>,
    pub topic_title: String,
}

impl ScheduledEntry {
    pub fn date(&self) -> Date {
        self.slot.date
    }
}

/// Outcome of a pacing run, shared by previews and reloaded schedules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationResult {
    /// True when every task found a slot
    pub success: bool,
    pub total_tasks: usize,
    pub scheduled_count: usize,
    pub remaining_tasks: usize,
    pub schedule: Vec<ScheduledEntry>,
    pub unit_timelines: Vec<UnitTimeline>,
    pub first_date: Option<Date>,
    pub last_date: Option<Date>,
}

impl SimulationResult {
    /// The trivial result for a syllabus without topics.
    pub fn empty() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }
}

/// Result of committing a schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Number of lesson plan records written
    pub count: usize,
}
