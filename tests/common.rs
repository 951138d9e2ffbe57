#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const REQUIRED: [&str; 6] = [
    "reg_no",
    "seat_no",
    "room",
    "course_code",
    "course_title",
    "session",
];

/// The binary, isolated from any real user configuration.
pub fn rsi() -> Command {
    let mut cmd = cargo_bin_cmd!("rseatimport");
    cmd.env("HOME", env::temp_dir().join("rseatimport_test_home"));
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    temp_path(&format!("{}_rseatimport", name), "sqlite")
}

/// Create a temporary file path inside tempdir and ensure it's removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A spreadsheet cell for fixtures.
pub enum Cell<'a> {
    S(&'a str),
    N(f64),
    /// year, month, day written as a real Excel date cell
    D(u16, u8, u8),
}

/// Write a one-sheet workbook with `headers` on the first line.
pub fn write_xlsx(name: &str, headers: &[&str], rows: &[Vec<Cell>]) -> String {
    let path = temp_path(name, "xlsx");

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    let date_fmt = Format::new().set_num_format("yyyy-mm-dd");

    for (c, h) in headers.iter().enumerate() {
        ws.write_string(0, c as u16, *h).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                Cell::S(s) => {
                    ws.write_string(r, c, *s).unwrap();
                }
                Cell::N(n) => {
                    ws.write_number(r, c, *n).unwrap();
                }
                Cell::D(y, m, d) => {
                    let dt = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
                    ws.write_datetime_with_format(r, c, &dt, &date_fmt).unwrap();
                }
            }
        }
    }

    wb.save(&path).unwrap();
    path
}

/// A valid seating row for the six required columns.
pub fn seat_row<'a>(reg_no: &'a str, room: &'a str, session: &'a str) -> Vec<Cell<'a>> {
    vec![
        Cell::S(reg_no),
        Cell::S("A-01"),
        Cell::S(room),
        Cell::S("CS101"),
        Cell::S("Programming I"),
        Cell::S(session),
    ]
}

/// Parse every stdout line as JSON.
pub fn json_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("stdout line is JSON"))
        .collect()
}

pub fn open_store(db_path: &str) -> Connection {
    Connection::open(db_path).expect("open db")
}
