use crate::config::Config;
use crate::errors::RowError;
use crate::import::reader::{Cell, EMPTY_CELL, Row};
use crate::import::schema::DATE_COLUMN;
use crate::models::seating::SeatingRecord;
use crate::utils::excel_date::format_excel_serial;

/// Turns loosely typed spreadsheet rows into `SeatingRecord`s.
pub struct Normalizer<'a> {
    override_date: Option<&'a str>,
    default_date: &'a str,
    date_format: &'a str,
}

impl<'a> Normalizer<'a> {
    /// An empty override counts as no override.
    pub fn new(override_date: Option<&'a str>, cfg: &'a Config) -> Self {
        Self {
            override_date: override_date.filter(|d| !d.is_empty()),
            default_date: &cfg.default_date,
            date_format: &cfg.date_format,
        }
    }

    pub fn normalize(&self, row: &Row) -> Result<SeatingRecord, RowError> {
        Ok(SeatingRecord {
            reg_no: self.field(row, "reg_no")?,
            seat_no: self.field(row, "seat_no")?,
            room: self.field(row, "room")?,
            course_code: self.field(row, "course_code")?,
            course_title: self.field(row, "course_title")?,
            date: self.resolve_date(row)?,
            session: self.field(row, "session")?,
            timestamp: None,
        })
    }

    /// Override, then the row's own non-empty `date` cell, then the default.
    fn resolve_date(&self, row: &Row) -> Result<String, RowError> {
        if let Some(d) = self.override_date {
            return Ok(d.to_string());
        }
        match row.get(DATE_COLUMN) {
            Some(cell) if !cell.is_empty() => self.text(DATE_COLUMN, cell),
            _ => Ok(self.default_date.to_string()),
        }
    }

    fn field(&self, row: &Row, column: &str) -> Result<String, RowError> {
        self.text(column, row.get(column).unwrap_or(&EMPTY_CELL))
    }

    fn text(&self, column: &str, cell: &Cell) -> Result<String, RowError> {
        match cell {
            Cell::Empty => Ok(String::new()),
            Cell::Text(s) => Ok(s.clone()),
            Cell::Int(i) => Ok(i.to_string()),
            Cell::Float(f) => Ok(float_to_text(*f)),
            Cell::Bool(b) => Ok(b.to_string()),
            Cell::DateTime(serial) => Ok(format_excel_serial(*serial, self.date_format)),
            Cell::Error(e) => Err(RowError::CellError {
                column: column.to_string(),
                value: e.clone(),
            }),
        }
    }
}

/// Spreadsheets store every number as a float: `12345.0` must come back as `12345`.
fn float_to_text(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}
