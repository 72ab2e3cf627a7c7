//! Schedule operations for the Scheduler.

use super::Scheduler;
use crate::{
    error::Result,
    models::{CommitOutcome, SimulationResult},
    pacing::{SchedulePersister, persist},
    params::{CommitSchedule, PreviewSchedule, ScopeParams},
    sources::LessonPlanStore,
};

impl Scheduler {
    /// Computes the schedule a commit would write, without writing it.
    ///
    /// A scope without teaching slots yields an unsuccessful result rather
    /// than an error.
    pub async fn preview(&self, params: &PreviewSchedule) -> Result<SimulationResult> {
        let start = params.validate()?;
        let scope = params.scope;
        let syllabus = params.syllabus.clone();

        self.with_database(move |db, config| {
            SchedulePersister::new(db, config).simulate(&scope, &syllabus, start)
        })
        .await
    }

    /// Recomputes the schedule and atomically replaces every lesson plan of
    /// the scope with it.
    ///
    /// # Errors
    ///
    /// * `PacerError::InvalidInput` - When the start date is malformed
    /// * `PacerError::TeacherNotFound` - When the teacher is unknown
    /// * `PacerError::NoAvailableSlots` - When topics exist but nothing fits
    pub async fn commit(&self, params: &CommitSchedule) -> Result<CommitOutcome> {
        let start = params.schedule.validate()?;
        let scope = params.schedule.scope;
        let syllabus = params.schedule.syllabus.clone();
        let teacher_id = params.teacher_id;

        self.with_database(move |db, config| {
            SchedulePersister::new(db, config).commit(&scope, &syllabus, start, teacher_id)
        })
        .await
    }

    /// Rebuilds the committed schedule of a scope, or `None` when nothing has
    /// been committed.
    pub async fn load_existing(&self, params: &ScopeParams) -> Result<Option<SimulationResult>> {
        let scope = params.scope;

        self.with_database(move |db, _| persist::load_existing(&*db, &scope))
            .await
    }

    /// Removes the committed schedule of a scope, returning how many lesson
    /// plans were deleted.
    pub async fn clear(&self, params: &ScopeParams) -> Result<usize> {
        let scope = params.scope;

        self.with_database(move |db, _| {
            let removed = db.delete_by_scope(&scope)?;
            log::info!("Cleared {removed} lesson plans for {scope}");
            Ok(removed)
        })
        .await
    }
}
