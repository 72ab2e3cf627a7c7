//! High-level async API for previewing and committing lesson schedules.
//!
//! The [`Scheduler`] is the entry point used by the CLI and the MCP server.
//! It owns nothing but a database path and a [`PacingConfig`]; every call
//! opens a fresh connection inside `tokio::task::spawn_blocking`, runs the
//! synchronous pacing pipeline against it and returns.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Scheduler     │    │     pacing      │    │    Database     │
//! │ (schedule_ops,  │───▶│ (pipeline,      │───▶│   (via db/)     │
//! │  school_ops)    │    │  persister)     │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust
//! use pacer_core::{SchedulerBuilder, params::PreviewSchedule};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("/tmp/pacer.db"))
//!     .with_utilization_ceiling(0.9)
//!     .build()
//!     .await?;
//!
//! let preview = scheduler
//!     .preview(&PreviewSchedule {
//!         start_date: "2024-09-02".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} of {} tasks fit", preview.scheduled_count, preview.total_tasks);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{PacerError, Result},
    pacing::PacingConfig,
};

pub mod builder;
pub mod schedule_ops;
pub mod school_ops;


pub use builder::SchedulerBuilder;

/// Main scheduler interface.
#[derive(Debug, Clone)]
pub struct Scheduler {
    pub(crate) db_path: PathBuf,
    pub(crate) config: PacingConfig,
}

impl Scheduler {
    pub(crate) fn new(db_path: PathBuf, config: PacingConfig) -> Self {
        Self { db_path, config }
    }

    /// Path of the SQLite database this scheduler operates on.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    pub fn config(&self) -> &PacingConfig {
        &self.config
    }

    /// Run `op` on a fresh connection in the blocking pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database, &PacingConfig) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        let config = self.config;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db, &config)
        })
        .await
        .map_err(|e| PacerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
