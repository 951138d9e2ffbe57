//! SQLite connection wrapper (one connection per import run).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the store, creating the file if it does not exist.
    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Explicit close, so a failing close surfaces as an error instead of
    /// being swallowed by `Drop`.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)
    }
}
