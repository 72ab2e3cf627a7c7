//! Tabular views over lists of scheduled entries.

use std::fmt;

use super::models::DayDate;
use crate::models::{ScheduledEntry, TaskKind};

/// Markdown table of scheduled entries, one row per lesson.
///
/// Revision entries are italicised so they stand out from regular topics.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use pacer_core::{
///     display::ScheduleTable,
///     models::{DayOfWeek, ScheduledEntry, TaskKind, TeachingSlot},
/// };
///
/// let entry = ScheduledEntry {
///     slot: TeachingSlot {
///         date: date(2024, 9, 2),
///         day_of_week: DayOfWeek::Monday,
///         period_label: "P1".to_string(),
///     },
///     kind: TaskKind::Revision,
///     unit_title: "Algebra".to_string(),
///     chapter_title: Some("Equations".to_string()),
///     topic_title: "Revision: Equations".to_string(),
/// };
///
/// let output = ScheduleTable(&[entry]).to_string();
/// assert!(output.contains("| 1 | Mon 2024-09-02 | P1 | *Revision: Equations* |"));
/// ```
pub struct ScheduleTable<'a>(pub &'a [ScheduledEntry]);

impl fmt::Display for ScheduleTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No lessons scheduled.");
        }

        writeln!(f, "| # | Date | Period | Lesson |")?;
        writeln!(f, "|--:|:-----|:-------|:-------|")?;
        for (index, entry) in self.0.iter().enumerate() {
            let lesson = if entry.kind == TaskKind::Revision {
                format!("*{}*", entry.topic_title)
            } else {
                entry.topic_title.clone()
            };
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                index + 1,
                DayDate(entry.date()),
                entry.slot.period_label,
                lesson
            )?;
        }
        Ok(())
    }
}
