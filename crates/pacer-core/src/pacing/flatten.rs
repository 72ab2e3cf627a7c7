//! Syllabus tree to ordered task list.

use crate::models::{Syllabus, Task};

/// One topic task per leaf topic, in unit, chapter, topic document order.
pub fn flatten_syllabus(syllabus: &Syllabus) -> Vec<Task> {
    syllabus
        .units()
        .iter()
        .flat_map(|unit| {
            unit.chapters.iter().flat_map(move |chapter| {
                chapter
                    .topics
                    .iter()
                    .map(move |topic| Task::topic(&unit.title, &chapter.title, &topic.title))
            })
        })
        .collect()
}
