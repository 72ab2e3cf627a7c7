//! Error types for the pacing library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Scope;

/// Comprehensive error type for all pacing operations.
#[derive(Error, Debug)]
pub enum PacerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Teacher could not be resolved within the school
    #[error("Teacher with ID {id} not found in school {school_id}")]
    TeacherNotFound { school_id: u64, id: u64 },
    /// The timetable and calendar leave no teaching slot for the scope
    #[error("No available teaching slots for {scope}")]
    NoAvailableSlots { scope: Scope },
    /// Academic year bounds are missing or malformed and no fallback applies
    #[error("Academic year {id} is unavailable: {reason}")]
    AcademicYearUnavailable { id: u64, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PacerError {
        PacerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PacerError {
        PacerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PacerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true for errors caused by the caller's request rather than by
    /// storage or environment failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PacerError::NoAvailableSlots { .. }
                | PacerError::InvalidInput { .. }
                | PacerError::TeacherNotFound { .. }
                | PacerError::AcademicYearUnavailable { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PacerError::database(message).with_source(e))
    }
}

/// Result type alias for pacing operations
pub type Result<T> = std::result::Result<T, PacerError>;
