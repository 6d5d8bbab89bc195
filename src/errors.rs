//! Unified application error type.
//! Config loading, data access, command handlers and rendering all return
//! AppError so the top-level handler in main.rs is the only place that
//! decides the exit status.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Couldn't open the database config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid database config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Error connecting to the database: {0}")]
    Connection(#[source] rusqlite::Error),

    #[error("Error executing schema SQL: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("All fields are required for adding a work item (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Id is required for deleting a work item.")]
    MissingId,

    #[error("Invalid date format: {0} (expected YYYY-MM-DD or TODAY)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM:SS or HH:MM)")]
    InvalidTime(String),

    #[error("Invalid work item id: {0}")]
    InvalidId(String),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl AppError {
    /// True for errors caused by user input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MissingFields(_)
                | AppError::MissingId
                | AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
                | AppError::InvalidId(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
