//! Builder for creating and configuring Scheduler instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{PacerError, Result},
    pacing::{PacingConfig, YearFallback},
};

/// Builder for creating and configuring Scheduler instances.
#[derive(Debug, Clone)]
pub struct SchedulerBuilder {
    database_path: Option<PathBuf>,
    config: PacingConfig,
}

impl SchedulerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            config: PacingConfig::default(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/pacer/pacer.db` or `~/.local/share/pacer/pacer.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Share of the available slots a plan may occupy, in `[0, 1]`.
    pub fn with_utilization_ceiling(mut self, ceiling: f64) -> Self {
        self.config.utilization_ceiling = ceiling;
        self
    }

    /// Maximum number of calendar days walked per run.
    pub fn with_max_horizon_days(mut self, days: u32) -> Self {
        self.config.max_horizon_days = days;
        self
    }

    pub fn with_year_fallback(mut self, fallback: YearFallback) -> Self {
        self.config.year_fallback = fallback;
        self
    }

    /// Builds the configured scheduler instance.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::InvalidInput` if the pacing configuration is invalid
    /// Returns `PacerError::FileSystem` if the database path is invalid
    /// Returns `PacerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Scheduler> {
        self.config.validate()?;

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PacerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), PacerError>(())
        })
        .await
        .map_err(|e| PacerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Scheduler::new(db_path, self.config))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pacer")
            .place_data_file("pacer.db")
            .map_err(|e| PacerError::XdgDirectory(e.to_string()))
    }
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
