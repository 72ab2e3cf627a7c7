//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it with termimad and the MCP
//! server can hand it to clients verbatim.

use std::fmt;

use jiff::civil::Date;

use super::collections::ScheduleTable;
use crate::models::{
    AcademicYear, CalendarException, ChapterTimeline, DayOfWeek, ExceptionKind, LessonStatus,
    PeriodStatus, SimulationResult, TaskKind, Teacher, TimetablePeriod, UnitTimeline,
};

/// A date with its weekday, e.g. `Mon 2024-09-02`.
pub struct DayDate(pub Date);

impl fmt::Display for DayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", DayOfWeek::of(self.0), self.0)
    }
}

fn lessons(count: usize) -> &'static str {
    if count == 1 { "lesson" } else { "lessons" }
}

impl fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_tasks == 0 {
            return writeln!(f, "Nothing to schedule: the syllabus has no topics.");
        }

        if self.success {
            writeln!(f, "- Status: ✓ every task fits")?;
        } else if self.scheduled_count == 0 {
            writeln!(f, "- Status: ✗ no teaching slots available")?;
        } else {
            writeln!(
                f,
                "- Status: ⚠ {} of {} tasks do not fit",
                self.remaining_tasks, self.total_tasks
            )?;
        }
        writeln!(
            f,
            "- Tasks: {} ({} scheduled, {} remaining)",
            self.total_tasks, self.scheduled_count, self.remaining_tasks
        )?;
        if let (Some(first), Some(last)) = (self.first_date, self.last_date) {
            writeln!(f, "- Span: {} to {}", DayDate(first), DayDate(last))?;
        }

        if !self.unit_timelines.is_empty() {
            writeln!(f, "\n## Timeline")?;
            for unit in &self.unit_timelines {
                writeln!(f)?;
                write!(f, "{unit}")?;
            }
        }

        if !self.schedule.is_empty() {
            writeln!(f, "\n## Lessons")?;
            writeln!(f)?;
            write!(f, "{}", ScheduleTable(&self.schedule))?;
        }

        Ok(())
    }
}

impl fmt::Display for UnitTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} ({} to {}, {} {})",
            self.unit_title,
            DayDate(self.start_date),
            DayDate(self.end_date),
            self.entry_count,
            lessons(self.entry_count)
        )?;
        writeln!(f)?;
        for chapter in &self.chapters {
            writeln!(f, "{chapter}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ChapterTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.entry_count();
        write!(
            f,
            "- **{}**: {} to {} ({} {})",
            self.chapter_title,
            DayDate(self.start_date),
            DayDate(self.end_date),
            count,
            lessons(count)
        )
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Teacher {}: {} (school {})", self.id, self.name, self.school_id)
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Academic year {} \"{}\": {} to {} (school {})",
            self.id,
            self.label,
            DayDate(self.start_date),
            DayDate(self.end_date),
            self.school_id
        )
    }
}

impl fmt::Display for TimetablePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} period {} \"{}\" ({})",
            self.day_of_week, self.period_order, self.period_label, self.status
        )
    }
}

impl fmt::Display for CalendarException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let effect = if self.kind.blocks_teaching() {
            "no teaching"
        } else {
            "teaching continues"
        };
        writeln!(
            f,
            "- {} {}: {} ({effect})",
            DayDate(self.date),
            self.kind,
            self.title
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{ScheduledEntry, TeachingSlot};

    fn entry(day: i8, kind: TaskKind, chapter: Option<&str>, title: &str) -> ScheduledEntry {
        let date = date(2024, 9, day);
        ScheduledEntry {
            slot: TeachingSlot {
                date,
                day_of_week: DayOfWeek::of(date),
                period_label: "P1".to_string(),
            },
            kind,
            unit_title: "Algebra".to_string(),
            chapter_title: chapter.map(String::from),
            topic_title: title.to_string(),
        }
    }

    #[test]
    fn test_empty_result_display() {
        let output = SimulationResult::empty().to_string();
        assert!(output.contains("Nothing to schedule"));
    }

    #[test]
    fn test_partial_result_display() {
        let schedule = vec![
            entry(2, TaskKind::Topic, Some("Equations"), "Linear"),
            entry(3, TaskKind::Topic, Some("Equations"), "Quadratic"),
        ];
        let result = crate::pacing::build_result(3, schedule);

        let output = result.to_string();
        assert!(output.contains("⚠ 1 of 3 tasks do not fit"));
        assert!(output.contains("- Span: Mon 2024-09-02 to Tue 2024-09-03"));
        assert!(output.contains("### Algebra (Mon 2024-09-02 to Tue 2024-09-03, 2 lessons)"));
        assert!(output.contains("- **Equations**: Mon 2024-09-02 to Tue 2024-09-03 (2 lessons)"));
        assert!(output.contains("| 2 | Tue 2024-09-03 | P1 | Quadratic |"));
    }

    #[test]
    fn test_unscheduled_result_display() {
        let result = crate::pacing::build_result(3, Vec::new());
        assert!(result.to_string().contains("no teaching slots available"));
    }

    #[test]
    fn test_calendar_exception_display() {
        let holiday = CalendarException {
            date: date(2024, 10, 2),
            kind: ExceptionKind::Holiday,
            title: "Gandhi Jayanti".to_string(),
        };
        assert_eq!(
            holiday.to_string(),
            "- Wed 2024-10-02 holiday: Gandhi Jayanti (no teaching)\n"
        );
    }
}
