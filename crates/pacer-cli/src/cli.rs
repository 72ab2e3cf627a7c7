//! Command handlers for the Pacer CLI.
//!
//! Each handler converts clap arguments into core parameters, calls the
//! [`Scheduler`] and renders the outcome as markdown through the
//! [`TerminalRenderer`], or as JSON when `--json` is given.

use anyhow::{Context, Result};
use log::debug;
use pacer_core::{
    ClearResult, CommitResult, ExistingSchedule, Registered, SchedulePreview, Scheduler,
    params::{
        AddCalendarException, AddTeacher, AddTimetablePeriod, ScopeParams, SetAcademicYear,
    },
};
use serde::Serialize;

use crate::{
    args::{CommitArgs, PreviewArgs, SchoolCommands, ShowArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            scheduler,
            renderer,
            json,
        }
    }

    /// Print `value` as JSON or render its markdown.
    fn emit<T: Serialize>(&self, value: &T, markdown: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&markdown())
        }
    }

    pub async fn preview(&self, args: PreviewArgs) -> Result<()> {
        let params = args.into_params()?;
        debug!("preview: {} from {}", params.scope, params.start_date);

        let result = self
            .scheduler
            .preview(&params)
            .await
            .context("Failed to preview schedule")?;

        self.emit(&result, || {
            SchedulePreview {
                scope: params.scope,
                result: result.clone(),
            }
            .to_string()
        })
    }

    pub async fn commit(&self, args: CommitArgs) -> Result<()> {
        let params = args.into_params()?;
        let scope = params.schedule.scope;
        debug!("commit: {scope} for teacher {}", params.teacher_id);

        let outcome = self
            .scheduler
            .commit(&params)
            .await
            .context("Failed to commit schedule")?;

        self.emit(&outcome, || CommitResult { scope, outcome }.to_string())
    }

    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let params = ScopeParams::from(args);

        let result = self
            .scheduler
            .load_existing(&params)
            .await
            .context("Failed to load schedule")?;

        self.emit(&result, || {
            ExistingSchedule {
                scope: params.scope,
                result: result.clone(),
            }
            .to_string()
        })
    }

    pub async fn clear(&self, args: ShowArgs) -> Result<()> {
        let params = ScopeParams::from(args);

        let removed = self
            .scheduler
            .clear(&params)
            .await
            .context("Failed to clear schedule")?;

        self.emit(&removed, || {
            ClearResult {
                scope: params.scope,
                removed,
            }
            .to_string()
        })
    }

    pub async fn handle_school_command(&self, command: SchoolCommands) -> Result<()> {
        match command {
            SchoolCommands::Teacher(args) => {
                let teacher = self
                    .scheduler
                    .add_teacher(&AddTeacher::from(args))
                    .await
                    .context("Failed to register teacher")?;
                self.emit(&teacher, || Registered::new(teacher.clone()).to_string())
            }
            SchoolCommands::Year(args) => {
                let year = self
                    .scheduler
                    .set_academic_year(&SetAcademicYear::from(args))
                    .await
                    .context("Failed to set academic year")?;
                self.emit(&year, || Registered::new(year.clone()).to_string())
            }
            SchoolCommands::Period(args) => {
                let period = self
                    .scheduler
                    .add_timetable_period(&AddTimetablePeriod::from(args))
                    .await
                    .context("Failed to add timetable period")?;
                self.emit(&period, || Registered::new(period.clone()).to_string())
            }
            SchoolCommands::Exception(args) => {
                let exception = self
                    .scheduler
                    .add_calendar_exception(&AddCalendarException::from(args))
                    .await
                    .context("Failed to add calendar exception")?;
                self.emit(&exception, || Registered::new(exception.clone()).to_string())
            }
        }
    }
}
