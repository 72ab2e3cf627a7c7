//! Positional binding of tasks to slots.

use crate::models::{ScheduledEntry, Task, TeachingSlot};

/// Bind `tasks[i]` to `slots[i]` until either list runs out.
pub fn assign_slots(slots: &[TeachingSlot], tasks: &[Task]) -> Vec<ScheduledEntry> {
    slots
        .iter()
        .zip(tasks)
        .map(|(slot, task)| ScheduledEntry {
            slot: slot.clone(),
            kind: task.kind,
            unit_title: task.unit_title.clone(),
            chapter_title: task.chapter_title.clone(),
            topic_title: task.display_title.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, Date};

    use super::*;
    use crate::models::DayOfWeek;

    fn slot(date: Date) -> TeachingSlot {
        TeachingSlot {
            date,
            day_of_week: DayOfWeek::of(date),
            period_label: "P1".to_string(),
        }
    }

    fn tasks(count: usize) -> Vec<Task> {
        (0..count)
            .map(|i| Task::topic("U", "C", &format!("t{i}")))
            .collect()
    }

    #[test]
    fn test_more_slots_than_tasks() {
        let slots = vec![slot(date(2024, 9, 2)), slot(date(2024, 9, 3)), slot(date(2024, 9, 4))];
        let entries = assign_slots(&slots, &tasks(2));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].topic_title, "t0");
        assert_eq!(entries[0].date(), date(2024, 9, 2));
        assert_eq!(entries[1].date(), date(2024, 9, 3));
    }

    #[test]
    fn test_more_tasks_than_slots() {
        let slots = vec![slot(date(2024, 9, 2))];
        let entries = assign_slots(&slots, &tasks(5));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].topic_title, "t0");
    }

    #[test]
    fn test_no_slots() {
        assert!(assign_slots(&[], &tasks(3)).is_empty());
    }
}
