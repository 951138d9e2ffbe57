use serde::Serialize;

/// One examination seat assignment, as normalized from a spreadsheet row
/// and as stored in the `students` table.
///
/// Identity is `(reg_no, date, session)`; a record with the same key
/// replaces the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatingRecord {
    pub reg_no: String,
    pub seat_no: String,
    pub room: String,
    pub course_code: String,
    pub course_title: String,
    pub date: String,
    pub session: String,
    /// Insertion time filled by the store; `None` before the record is written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
