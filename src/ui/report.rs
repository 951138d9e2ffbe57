//! Newline-delimited JSON report written to stdout.
//!
//! A run prints zero or more row error lines followed by exactly one
//! terminal line: `{"inserted": N}` or `{"error": "..."}`.

use crate::errors::{AppError, AppResult, RowError};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// A single row was skipped; the batch goes on.
    RowFailed { row: usize, error: String },
    /// Terminal line of a completed run.
    Inserted { inserted: usize },
    /// Terminal line of a failed run.
    Failed { error: String },
}

impl Report {
    pub fn row_failed(row: usize, err: &RowError) -> Self {
        Report::RowFailed {
            row,
            error: format!("Error inserting row {}: {}", row, err),
        }
    }

    pub fn failed(err: &AppError) -> Self {
        Report::Failed {
            error: err.to_string(),
        }
    }
}

/// Write one report line and flush, so a consumer sees row errors as they occur.
pub fn emit(out: &mut dyn Write, report: &Report) -> AppResult<()> {
    serde_json::to_writer(&mut *out, report)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
