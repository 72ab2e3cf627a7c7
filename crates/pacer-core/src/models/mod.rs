//! Data models for syllabi, timetables and lesson plans.
//!
//! This module contains the domain types that flow through the pacing
//! pipeline. Display implementations live in [`crate::display`] to keep data
//! structures separate from presentation.
//!
//! # Overview
//!
//! - **Input**: [`Syllabus`] (units → chapters → topics) and a [`Scope`]
//! - **Collaborator data**: [`TimetablePeriod`], [`CalendarException`],
//!   [`AcademicYear`], [`Teacher`]
//! - **Pipeline values**: [`Task`], [`TeachingSlot`], [`ScheduledEntry`]
//! - **Views**: [`SimulationResult`], [`UnitTimeline`], [`ChapterTimeline`]
//! - **Persistence**: [`LessonPlanRecord`]
//!
//! # Examples
//!
//! ```rust
//! use pacer_core::models::{DayOfWeek, Task, TaskKind};
//! use jiff::civil::date;
//!
//! let task = Task::chapter_revision("Algebra", "Linear Equations");
//! assert_eq!(task.kind, TaskKind::Revision);
//! assert_eq!(task.display_title, "Revision: Linear Equations");
//!
//! // 2024-09-02 was a Monday
//! assert_eq!(DayOfWeek::of(date(2024, 9, 2)), DayOfWeek::Monday);
//! ```

pub mod calendar;
pub mod record;
pub mod schedule;
pub mod scope;
pub mod status;
pub mod syllabus;
pub mod task;
pub mod timeline;


pub use calendar::{AcademicYear, CalendarException, DayOfWeek, Teacher, TimetablePeriod};
pub use record::LessonPlanRecord;
pub use schedule::{CommitOutcome, ScheduledEntry, SimulationResult, TeachingSlot};
pub use scope::Scope;
pub use status::{ExceptionKind, LessonStatus, PeriodStatus, TaskKind};
pub use syllabus::{Syllabus, SyllabusChapter, SyllabusTopic, SyllabusUnit};
pub use task::Task;
pub use timeline::{ChapterTimeline, UnitTimeline, REVIEW_BUCKET};
