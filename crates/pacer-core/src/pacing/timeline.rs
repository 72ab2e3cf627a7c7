//! Unit and chapter timelines derived from a flat schedule.

use crate::models::{ChapterTimeline, ScheduledEntry, SimulationResult, UnitTimeline, REVIEW_BUCKET};

struct ChapterGroup {
    title: String,
    entries: Vec<ScheduledEntry>,
}

struct UnitGroup {
    title: String,
    chapters: Vec<ChapterGroup>,
}

/// Group `entries` by unit, then by chapter, in order of first appearance.
///
/// Entries without a chapter land in the [`REVIEW_BUCKET`] chapter of their
/// unit. Dates come from list order, which is ascending for schedules
/// produced by the pipeline or reloaded from storage.
pub fn summarize(entries: &[ScheduledEntry]) -> Vec<UnitTimeline> {
    let mut units: Vec<UnitGroup> = Vec::new();

    for entry in entries {
        let unit_index = match units.iter().position(|u| u.title == entry.unit_title) {
            Some(index) => index,
            None => {
                units.push(UnitGroup {
                    title: entry.unit_title.clone(),
                    chapters: Vec::new(),
                });
                units.len() - 1
            }
        };

        let chapter_title = entry.chapter_title.as_deref().unwrap_or(REVIEW_BUCKET);
        let chapters = &mut units[unit_index].chapters;
        match chapters.iter_mut().find(|c| c.title == chapter_title) {
            Some(chapter) => chapter.entries.push(entry.clone()),
            None => chapters.push(ChapterGroup {
                title: chapter_title.to_string(),
                entries: vec![entry.clone()],
            }),
        }
    }

    units.into_iter().filter_map(unit_timeline).collect()
}

fn chapter_timeline(group: ChapterGroup) -> Option<ChapterTimeline> {
    let start_date = group.entries.first()?.date();
    let end_date = group.entries.last()?.date();
    Some(ChapterTimeline {
        chapter_title: group.title,
        start_date,
        end_date,
        entries: group.entries,
    })
}

fn unit_timeline(group: UnitGroup) -> Option<UnitTimeline> {
    let chapters: Vec<ChapterTimeline> = group
        .chapters
        .into_iter()
        .filter_map(chapter_timeline)
        .collect();
    let start_date = chapters.iter().map(|c| c.start_date).min()?;
    let end_date = chapters.iter().map(|c| c.end_date).max()?;
    let entry_count = chapters.iter().map(ChapterTimeline::entry_count).sum();

    Some(UnitTimeline {
        unit_title: group.title,
        start_date,
        end_date,
        entry_count,
        chapters,
    })
}

/// Assemble the result view for a schedule of `total_tasks` planned tasks.
pub fn build_result(total_tasks: usize, schedule: Vec<ScheduledEntry>) -> SimulationResult {
    let scheduled_count = schedule.len();
    let remaining_tasks = total_tasks.saturating_sub(scheduled_count);

    SimulationResult {
        success: remaining_tasks == 0,
        total_tasks,
        scheduled_count,
        remaining_tasks,
        unit_timelines: summarize(&schedule),
        first_date: schedule.first().map(ScheduledEntry::date),
        last_date: schedule.last().map(ScheduledEntry::date),
        schedule,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{DayOfWeek, TaskKind, TeachingSlot};

    fn entry(day: i8, unit: &str, chapter: Option<&str>, topic: &str) -> ScheduledEntry {
        let date = date(2024, 9, day);
        ScheduledEntry {
            slot: TeachingSlot {
                date,
                day_of_week: DayOfWeek::of(date),
                period_label: "P1".to_string(),
            },
            kind: if chapter.is_some() {
                TaskKind::Topic
            } else {
                TaskKind::Revision
            },
            unit_title: unit.to_string(),
            chapter_title: chapter.map(String::from),
            topic_title: topic.to_string(),
        }
    }

    #[test]
    fn test_groups_by_unit_and_chapter() {
        let entries = vec![
            entry(2, "Algebra", Some("Equations"), "e1"),
            entry(3, "Algebra", Some("Equations"), "e2"),
            entry(4, "Algebra", Some("Inequalities"), "i1"),
            entry(5, "Algebra", None, "Unit Revision: Algebra"),
            entry(9, "Geometry", Some("Triangles"), "t1"),
        ];

        let timelines = summarize(&entries);
        assert_eq!(timelines.len(), 2);

        let algebra = &timelines[0];
        assert_eq!(algebra.unit_title, "Algebra");
        assert_eq!(algebra.start_date, date(2024, 9, 2));
        assert_eq!(algebra.end_date, date(2024, 9, 5));
        assert_eq!(algebra.entry_count, 4);

        let chapter_titles: Vec<&str> = algebra
            .chapters
            .iter()
            .map(|c| c.chapter_title.as_str())
            .collect();
        assert_eq!(chapter_titles, vec!["Equations", "Inequalities", REVIEW_BUCKET]);
        assert_eq!(algebra.chapters[0].start_date, date(2024, 9, 2));
        assert_eq!(algebra.chapters[0].end_date, date(2024, 9, 3));
        assert_eq!(algebra.chapters[0].entry_count(), 2);

        let geometry = &timelines[1];
        assert_eq!(geometry.start_date, date(2024, 9, 9));
        assert_eq!(geometry.end_date, date(2024, 9, 9));
        assert_eq!(geometry.entry_count, 1);
    }

    #[test]
    fn test_empty_schedule_has_no_timelines() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_build_result_counts() {
        let schedule = vec![
            entry(2, "Algebra", Some("Equations"), "e1"),
            entry(3, "Algebra", Some("Equations"), "e2"),
        ];

        let result = build_result(3, schedule);
        assert!(!result.success);
        assert_eq!(result.scheduled_count, 2);
        assert_eq!(result.remaining_tasks, 1);
        assert_eq!(result.first_date, Some(date(2024, 9, 2)));
        assert_eq!(result.last_date, Some(date(2024, 9, 3)));
        assert_eq!(result.unit_timelines.len(), 1);

        let complete = build_result(0, Vec::new());
        assert!(complete.success);
        assert_eq!(complete.first_date, None);
    }
}
