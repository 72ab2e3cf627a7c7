//! Committing and reloading lesson plans.

use jiff::{civil::Date, Timestamp};
use log::info;

use super::{build_result, PacingConfig, PacingPipeline};
use crate::{
    error::{PacerError, Result},
    models::{CommitOutcome, LessonPlanRecord, Scope, SimulationResult, Syllabus},
    sources::{LessonPlanStore, ScheduleSource, TeacherDirectory},
};

/// Owns the write side of pacing: whole-scope replacement of lesson plans.
pub struct SchedulePersister<'a, S: ?Sized> {
    store: &'a mut S,
    config: &'a PacingConfig,
}

impl<'a, S> SchedulePersister<'a, S>
where
    S: ScheduleSource + TeacherDirectory + LessonPlanStore + ?Sized,
{
    pub fn new(store: &'a mut S, config: &'a PacingConfig) -> Self {
        Self { store, config }
    }

    /// Preview the schedule without writing.
    pub fn simulate(&self, scope: &Scope, syllabus: &Syllabus, start: Date) -> Result<SimulationResult> {
        PacingPipeline::new(&*self.store, self.config).simulate(scope, syllabus, start)
    }

    /// Recompute the schedule and replace every record of `scope` with it.
    ///
    /// # Errors
    ///
    /// * `PacerError::TeacherNotFound` - teacher is unknown to the school,
    ///   checked before anything else
    /// * `PacerError::NoAvailableSlots` - topics exist but no slot could be
    ///   found; nothing is written
    pub fn commit(
        &mut self,
        scope: &Scope,
        syllabus: &Syllabus,
        start: Date,
        teacher_id: u64,
    ) -> Result<CommitOutcome> {
        if !self.store.teacher_exists(scope.school_id, teacher_id)? {
            return Err(PacerError::TeacherNotFound {
                school_id: scope.school_id,
                id: teacher_id,
            });
        }

        let result = self.simulate(scope, syllabus, start)?;
        if result.total_tasks == 0 {
            info!("Empty syllabus for {scope}, existing lesson plans left untouched");
            return Ok(CommitOutcome { count: 0 });
        }
        if result.scheduled_count == 0 {
            return Err(PacerError::NoAvailableSlots { scope: *scope });
        }

        let created_at = Timestamp::now();
        let records: Vec<LessonPlanRecord> = result
            .schedule
            .iter()
            .enumerate()
            .map(|(sequence, entry)| {
                LessonPlanRecord::from_entry(*scope, teacher_id, sequence as u32, entry, created_at)
            })
            .collect();

        let count = self.store.replace_scope(scope, &records)?;
        info!(
            "Committed {count} lesson plans for {scope} ({} of {} tasks scheduled)",
            result.scheduled_count, result.total_tasks
        );
        Ok(CommitOutcome { count })
    }

    /// Rebuild the committed schedule of `scope`, or `None` when nothing has
    /// been committed. See [`load_existing`] for how counts are reported.
    pub fn load_existing(&self, scope: &Scope) -> Result<Option<SimulationResult>> {
        load_existing(&*self.store, scope)
    }
}

/// Rebuild a simulation-shaped result from the persisted records of `scope`.
///
/// Only scheduled entries are stored, so a reloaded plan always reports
/// `success` with no remaining tasks, even when the committing run left
/// tasks unscheduled. Its `total_tasks` equals the number of stored records.
pub fn load_existing<S>(store: &S, scope: &Scope) -> Result<Option<SimulationResult>>
where
    S: LessonPlanStore + ?Sized,
{
    let records = store.find_by_scope(scope)?;
    if records.is_empty() {
        return Ok(None);
    }

    let schedule: Vec<_> = records.iter().map(LessonPlanRecord::to_entry).collect();
    Ok(Some(build_result(schedule.len(), schedule)))
}
