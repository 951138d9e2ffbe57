//! Unified application error type.
//! Every fatal condition of an import run is an `AppError`; the reporter turns
//! it into the terminal `{"error": ...}` line. Failures confined to a single
//! spreadsheet row are `RowError`s and never abort the batch.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Invocation
    // ---------------------------
    #[error("usage: {0}")]
    Usage(String),

    // ---------------------------
    // Spreadsheet input
    // ---------------------------
    #[error("Failed to read spreadsheet: {0}")]
    Read(#[from] calamine::Error),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// A failure confined to one spreadsheet row.
#[derive(Error, Debug)]
pub enum RowError {
    #[error("column '{column}' holds a spreadsheet error ({value})")]
    CellError { column: String, value: String },

    #[error("{0}")]
    Store(#[from] rusqlite::Error),
}
