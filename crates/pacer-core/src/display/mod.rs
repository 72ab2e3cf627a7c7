//! Display wrappers and markdown formatting.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers in [`results`] add operation context such as the scope a
//! commit acted on. Everything renders to markdown, which the CLI passes
//! through termimad and the MCP server returns as text content.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Result Wrappers │    │    Markdown     │
//! │ (SimulationRes.)│───▶│ (CommitResult,  │───▶│ (Terminal/MCP)  │
//! │                 │    │  SchedulePrev.) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

pub mod collections;
pub mod models;
pub mod results;

pub use collections::ScheduleTable;
pub use models::DayDate;
pub use results::{ClearResult, CommitResult, ExistingSchedule, Registered, SchedulePreview};
