use crate::models::seating::SeatingRecord;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Insert `rec`, replacing any stored record with the same
/// `(reg_no, date, session)`. The replacement is a full overwrite.
pub fn upsert_student(conn: &Connection, rec: &SeatingRecord) -> Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT OR REPLACE INTO students
            (reg_no, seat_no, room, course_code, course_title, date, session)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    stmt.execute(params![
        rec.reg_no,
        rec.seat_no,
        rec.room,
        rec.course_code,
        rec.course_title,
        rec.date,
        rec.session,
    ])?;
    Ok(())
}

pub fn map_row(row: &Row) -> Result<SeatingRecord> {
    Ok(SeatingRecord {
        reg_no: row.get("reg_no")?,
        seat_no: row.get("seat_no")?,
        room: row.get("room")?,
        course_code: row.get("course_code")?,
        course_title: row.get("course_title")?,
        date: row.get("date")?,
        session: row.get("session")?,
        timestamp: row.get("timestamp")?,
    })
}

pub fn count_students(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))
}

/// All stored records, newest date first, then by session.
/// Dates are compared as text, see [`find_latest_seating`].
pub fn list_students(conn: &Connection) -> Result<Vec<SeatingRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT reg_no, seat_no, room, course_code, course_title, date, session, timestamp
         FROM students
         ORDER BY date DESC, session ASC, reg_no ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;
    rows.collect()
}

/// Seat of a student for a session, most recent date first.
/// The registration number is trimmed; the session is trimmed and upper-cased.
///
/// `date` is stored as text and ordered as text, so "most recent" only holds
/// for sortable formats such as `%Y-%m-%d`. With the default `%d.%m.%Y` the
/// day is compared first: `25.10.2025` wins over `03.11.2025`.
pub fn find_latest_seating(
    conn: &Connection,
    reg_no: &str,
    session: &str,
) -> Result<Option<SeatingRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT reg_no, seat_no, room, course_code, course_title, date, session, timestamp
         FROM students
         WHERE reg_no = ?1 AND session = ?2
         ORDER BY date DESC
         LIMIT 1",
    )?;
    stmt.query_row(
        params![reg_no.trim(), session.trim().to_uppercase()],
        map_row,
    )
    .optional()
}
