//! The lesson auto-pacing pipeline.
//!
//! ```text
//! Syllabus ──▶ flatten ──────────────┐
//!                                    ├──▶ DistributionPlanner ──▶ assign ──▶ summarize (preview)
//! Calendar ──▶ SlotCapacityResolver ─┘                                  └──▶ SchedulePersister (commit)
//! ```
//!
//! Every stage except the persister is a pure, synchronous computation over
//! data read once from a [`ScheduleSource`]. Runs are bounded by
//! [`PacingConfig::max_horizon_days`].

use jiff::{civil::Date, ToSpan};
use log::{debug, warn};

use crate::{
    error::{PacerError, Result},
    models::{Scope, SimulationResult, Syllabus},
    sources::{AcademicYearReader, ScheduleSource},
};

pub mod assign;
pub mod capacity;
pub mod distribution;
pub mod flatten;
pub mod persist;
pub mod timeline;


pub use assign::assign_slots;
pub use capacity::{SlotCapacityResolver, WeekdayArena};
pub use distribution::{DistributionPlan, DistributionPlanner, PacingMode};
pub use flatten::flatten_syllabus;
pub use persist::SchedulePersister;
pub use timeline::{build_result, summarize};

/// Share of available slots a plan may occupy; the rest is headroom for
/// unplanned disruption days.
pub const DEFAULT_UTILIZATION_CEILING: f64 = 0.85;

/// Upper bound on the number of calendar days walked per run.
pub const DEFAULT_MAX_HORIZON_DAYS: u32 = 365;

/// What to do when the academic year record is missing or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFallback {
    /// Pace until one calendar year after the start date
    #[default]
    OneYearFromStart,
    /// Fail with [`PacerError::AcademicYearUnavailable`]
    Reject,
}

/// Tunable parameters of a pacing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacingConfig {
    pub utilization_ceiling: f64,
    pub max_horizon_days: u32,
    pub year_fallback: YearFallback,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            utilization_ceiling: DEFAULT_UTILIZATION_CEILING,
            max_horizon_days: DEFAULT_MAX_HORIZON_DAYS,
            year_fallback: YearFallback::default(),
        }
    }
}

impl PacingConfig {
    /// Check that the configuration can drive a run.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::InvalidInput` when the utilization ceiling is not
    /// a finite value in `[0, 1]` or the horizon is zero days.
    pub fn validate(&self) -> Result<()> {
        if !self.utilization_ceiling.is_finite() || !(0.0..=1.0).contains(&self.utilization_ceiling)
        {
            return Err(PacerError::invalid_input("utilization_ceiling").with_reason(format!(
                "must be between 0 and 1, got {}",
                self.utilization_ceiling
            )));
        }
        if self.max_horizon_days == 0 {
            return Err(PacerError::invalid_input("max_horizon_days")
                .with_reason("must be at least one day"));
        }
        Ok(())
    }
}

/// Runs the read-only stages of the pipeline against a source.
pub struct PacingPipeline<'a, S: ?Sized> {
    source: &'a S,
    config: &'a PacingConfig,
}

impl<'a, S> PacingPipeline<'a, S>
where
    S: ScheduleSource + ?Sized,
{
    pub fn new(source: &'a S, config: &'a PacingConfig) -> Self {
        Self { source, config }
    }

    /// Compute the schedule for `syllabus` in `scope` starting at `start`
    /// without writing anything.
    ///
    /// An empty syllabus short-circuits to [`SimulationResult::empty`]. A
    /// scope without slots yields an unsuccessful result, not an error.
    pub fn simulate(&self, scope: &Scope, syllabus: &Syllabus, start: Date) -> Result<SimulationResult> {
        let topics = flatten_syllabus(syllabus);
        if topics.is_empty() {
            debug!("Syllabus for {scope} has no topics, nothing to pace");
            return Ok(SimulationResult::empty());
        }

        let end = resolve_year_end(self.source, scope, start, self.config.year_fallback)?;
        let slots = SlotCapacityResolver::new(self.source, self.config.max_horizon_days)
            .resolve(scope, start, end)?;

        let plan = DistributionPlanner::new(self.config.utilization_ceiling).plan(
            syllabus,
            topics,
            slots.len(),
        );
        debug!(
            "Planned {} tasks ({} revisions) in {:?} mode against {} slots, surplus {}",
            plan.tasks.len(),
            plan.revision_count(),
            plan.mode,
            slots.len(),
            plan.surplus
        );

        let schedule = assign_slots(&slots, &plan.tasks);
        Ok(build_result(plan.tasks.len(), schedule))
    }
}

/// Last date a run may use: the academic year's end, or the configured
/// fallback when the year is missing or ends before it starts.
pub fn resolve_year_end<R>(
    reader: &R,
    scope: &Scope,
    start: Date,
    fallback: YearFallback,
) -> Result<Date>
where
    R: AcademicYearReader + ?Sized,
{
    let reason = match reader.academic_year(scope.school_id, scope.academic_year_id)? {
        Some(year) if year.is_well_formed() => return Ok(year.end_date),
        Some(year) => format!(
            "end date {} precedes start date {}",
            year.end_date, year.start_date
        ),
        None => "no academic year record".to_string(),
    };

    match fallback {
        YearFallback::OneYearFromStart => {
            warn!(
                "Academic year {} of school {}: {reason}; pacing until one year after {start}",
                scope.academic_year_id, scope.school_id
            );
            start.checked_add(1.year()).map_err(|e| {
                PacerError::invalid_input("start_date").with_reason(e.to_string())
            })
        }
        YearFallback::Reject => Err(PacerError::AcademicYearUnavailable {
            id: scope.academic_year_id,
            reason,
        }),
    }
}
