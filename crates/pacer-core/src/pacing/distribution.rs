//! Tight versus spaced distribution of topics over capacity.

use serde::{Deserialize, Serialize};

use crate::models::{Syllabus, Task};

/// How the planner filled the available capacity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PacingMode {
    /// Topics only, no padding
    Tight,
    /// Revision tasks injected at chapter and unit boundaries
    Spaced,
}

/// Planner output: the final task list and how it was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionPlan {
    pub mode: PacingMode,
    /// `floor(capacity * ceiling) - topic_count`, may be negative
    pub surplus: i64,
    pub tasks: Vec<Task>,
}

impl DistributionPlan {
    pub fn revision_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_revision()).count()
    }
}

/// Decides between tight and spaced mode and injects revisions.
#[derive(Debug, Clone, Copy)]
pub struct DistributionPlanner {
    utilization_ceiling: f64,
}

impl DistributionPlanner {
    pub fn new(utilization_ceiling: f64) -> Self {
        Self {
            utilization_ceiling,
        }
    }

    /// Slots the plan may occupy out of `capacity`.
    pub fn target_usage(&self, capacity: usize) -> usize {
        (capacity as f64 * self.utilization_ceiling).floor() as usize
    }

    /// Plan the task list for `topics`, the flattened form of `syllabus`,
    /// against `capacity` slots.
    ///
    /// In spaced mode a chapter revision follows each chapter's topics and a
    /// unit revision follows each unit's chapters, until `surplus` revisions
    /// have been injected. Empty chapters and units are still closed by a
    /// revision while the budget lasts.
    pub fn plan(&self, syllabus: &Syllabus, topics: Vec<Task>, capacity: usize) -> DistributionPlan {
        let surplus = self.target_usage(capacity) as i64 - topics.len() as i64;
        if surplus <= 0 {
            return DistributionPlan {
                mode: PacingMode::Tight,
                surplus,
                tasks: topics,
            };
        }

        let budget = surplus as usize;
        let mut injected = 0;
        let mut tasks = Vec::with_capacity(topics.len() + budget);
        let mut topics = topics.into_iter();

        for unit in syllabus.units() {
            for chapter in &unit.chapters {
                tasks.extend(topics.by_ref().take(chapter.topics.len()));
                if injected < budget {
                    tasks.push(Task::chapter_revision(&unit.title, &chapter.title));
                    injected += 1;
                }
            }
            if injected < budget {
                tasks.push(Task::unit_revision(&unit.title));
                injected += 1;
            }
        }
        // Topics not described by the tree keep their order at the end.
        tasks.extend(topics);

        DistributionPlan {
            mode: PacingMode::Spaced,
            surplus,
            tasks,
        }
    }
}
