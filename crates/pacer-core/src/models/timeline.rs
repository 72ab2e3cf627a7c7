//! Hierarchical timeline views over a schedule.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ScheduledEntry;

/// Chapter title used for entries that belong to a unit but no chapter.
pub const REVIEW_BUCKET: &str = "Review";

/// Entries of one chapter with their date span.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChapterTimeline {
    pub chapter_title: String,
    pub start_date: Date,
    pub end_date: Date,
    pub entries: Vec<ScheduledEntry>,
}

impl ChapterTimeline {
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

/// Chapters of one unit with the unit's overall date span.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitTimeline {
    pub unit_title: String,
    pub start_date: Date,
    pub end_date: Date,
    pub entry_count: usize,
    pub chapters: Vec<ChapterTimeline>,
}
