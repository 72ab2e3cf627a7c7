//! Pacing tasks derived from the syllabus.

use serde::{Deserialize, Serialize};

use super::TaskKind;

/// One unit of teaching work waiting for a slot.
///
/// Tasks have no identity beyond their position in the ordered task list of
/// a single scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub kind: TaskKind,
    pub unit_title: String,
    /// `None` for unit-level revisions
    pub chapter_title: Option<String>,
    pub display_title: String,
    pub weight: u32,
}

impl Task {
    /// A syllabus topic task.
    pub fn topic(unit: &str, chapter: &str, title: &str) -> Self {
        Self {
            kind: TaskKind::Topic,
            unit_title: unit.to_string(),
            chapter_title: Some(chapter.to_string()),
            display_title: title.to_string(),
            weight: 1,
        }
    }

    /// A revision session closing a chapter.
    pub fn chapter_revision(unit: &str, chapter: &str) -> Self {
        Self {
            kind: TaskKind::Revision,
            unit_title: unit.to_string(),
            chapter_title: Some(chapter.to_string()),
            display_title: format!("Revision: {chapter}"),
            weight: 1,
        }
    }

    /// A revision session closing a unit.
    pub fn unit_revision(unit: &str) -> Self {
        Self {
            kind: TaskKind::Revision,
            unit_title: unit.to_string(),
            chapter_title: None,
            display_title: format!("Unit Revision: {unit}"),
            weight: 1,
        }
    }

    pub fn is_revision(&self) -> bool {
        self.kind == TaskKind::Revision
    }
}
