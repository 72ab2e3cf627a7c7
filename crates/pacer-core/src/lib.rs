//! Core library for the Pacer lesson auto-pacing scheduler.
//!
//! Given a syllabus (units → chapters → topics), a class/section/subject
//! scope and a start date, Pacer finds every teaching slot the weekly
//! timetable and the school calendar allow until the end of the academic
//! year, decides whether the surplus leaves room for revision sessions, and
//! binds tasks to slots in syllabus order. The result can be previewed or
//! committed as a day-by-day lesson plan that replaces the scope's previous
//! plan atomically.
//!
//! # Layers
//!
//! - [`pacing`]: the synchronous pipeline (capacity, flattening,
//!   distribution, assignment, timelines, persistence)
//! - [`sources`]: the collaborator traits the pipeline reads and writes
//!   through
//! - [`db`]: SQLite implementation of every collaborator
//! - [`scheduler`]: async facade used by the CLI and MCP server
//! - [`display`]: markdown formatting of results
//!
//! # Quick Start
//!
//! ```rust
//! use pacer_core::{SchedulerBuilder, params::{CommitSchedule, PreviewSchedule}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("school.db"))
//!     .build()
//!     .await?;
//!
//! let preview = PreviewSchedule {
//!     start_date: "2024-09-02".to_string(),
//!     syllabus: serde_json::from_str(
//!         r#"[{"title": "Algebra", "chapters": [{"title": "Equations",
//!             "topics": [{"title": "Linear"}, {"title": "Quadratic"}]}]}]"#,
//!     )?,
//!     ..Default::default()
//! };
//! let result = scheduler.preview(&preview).await?;
//! println!("{result}");
//!
//! if result.success {
//!     let outcome = scheduler
//!         .commit(&CommitSchedule { schedule: preview, teacher_id: 5 })
//!         .await?;
//!     println!("Committed {} lesson plans", outcome.count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod pacing;
pub mod params;
pub mod scheduler;
pub mod sources;

// Re-export commonly used types
pub use db::Database;
pub use display::{ClearResult, CommitResult, ExistingSchedule, Registered, SchedulePreview};
pub use error::{PacerError, Result};
pub use models::{
    CommitOutcome, LessonPlanRecord, ScheduledEntry, Scope, SimulationResult, Syllabus,
    UnitTimeline,
};
pub use pacing::{PacingConfig, YearFallback};
pub use params::{
    AddCalendarException, AddTeacher, AddTimetablePeriod, CommitSchedule, PreviewSchedule,
    ScopeParams, SetAcademicYear,
};
pub use scheduler::{Scheduler, SchedulerBuilder};
