use crate::errors::{AppError, AppResult};

/// Columns every seating spreadsheet must carry, in the order they are checked.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "reg_no",
    "seat_no",
    "room",
    "course_code",
    "course_title",
    "session",
];

/// Optional column; see `normalize::resolve_date` for the fallback chain.
pub const DATE_COLUMN: &str = "date";

/// Fail fast when any required column is absent.
/// `has_column` must match names exactly (case-sensitive).
pub fn validate_columns(has_column: impl Fn(&str) -> bool) -> AppResult<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !has_column(**c))
        .map(|c| c.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingColumns(missing))
    }
}
