use crate::errors::AppResult;
use rusqlite::Connection;

/// Ensure the `students` and `log` tables exist.
/// Existing tables are left as they are.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            reg_no       TEXT,
            seat_no      TEXT,
            room         TEXT,
            course_code  TEXT,
            course_title TEXT,
            date         TEXT,
            session      TEXT,
            timestamp    DATETIME DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (reg_no, date, session)
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
