//! Persisted lesson plan records.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{DayOfWeek, LessonStatus, ScheduledEntry, Scope, TaskKind, TeachingSlot};

/// One day-by-day lesson plan row owned by a scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LessonPlanRecord {
    /// Database identifier, `None` until inserted
    pub id: Option<u64>,
    pub scope: Scope,
    pub teacher_id: u64,
    pub date: Date,
    pub period_label: String,
    /// Position of the entry within the committed run
    pub sequence: u32,
    pub kind: TaskKind,
    pub unit_title: String,
    pub chapter_title: Option<String>,
    pub topic_title: String,
    #[serde(default)]
    pub status: LessonStatus,
    pub created_at: Timestamp,
}

impl LessonPlanRecord {
    /// Build the record for the entry at `sequence` of a committed run.
    pub fn from_entry(
        scope: Scope,
        teacher_id: u64,
        sequence: u32,
        entry: &ScheduledEntry,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: None,
            scope,
            teacher_id,
            date: entry.slot.date,
            period_label: entry.slot.period_label.clone(),
            sequence,
            kind: entry.kind,
            unit_title: entry.unit_title.clone(),
            chapter_title: entry.chapter_title.clone(),
            topic_title: entry.topic_title.clone(),
            status: LessonStatus::Planned,
            created_at,
        }
    }

    /// Rebuild the scheduled entry this record was created from.
    pub fn to_entry(&self) -> ScheduledEntry {
        ScheduledEntry {
            slot: TeachingSlot {
                date: self.date,
                day_of_week: DayOfWeek::of(self.date),
                period_label: self.period_label.clone(),
            },
            kind: self.kind,
            unit_title: self.unit_title.clone(),
            chapter_title: self.chapter_title.clone(),
            topic_title: self.topic_title.clone(),
        }
    }
}
