use std::collections::HashMap;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::errors::AppResult;

/// Stands in for cells past the end of a short row.
pub(crate) static EMPTY_CELL: Cell = Cell::Empty;

/// A raw spreadsheet cell, detached from the workbook backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Excel serial date (days since 1899-12-30).
    DateTime(f64),
    /// Spreadsheet error value such as `#DIV/0!`.
    Error(String),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Text used when the cell is read as a column header.
    fn header_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) | Cell::Error(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) if f.fract() == 0.0 => (*f as i64).to_string(),
            Cell::Float(f) | Cell::DateTime(f) => f.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }
}

impl From<&Data> for Cell {
    fn from(d: &Data) -> Self {
        match d {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(e) => Cell::Error(e.to_string()),
        }
    }
}

/// The first worksheet of a workbook: header names plus data rows.
#[derive(Debug, Default)]
pub struct Table {
    index: HashMap<String, usize>,
    rows: Vec<(usize, Vec<Cell>)>,
}

/// A borrowed data row with access by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    /// 1-based data row number (header excluded).
    pub number: usize,
    cells: &'a [Cell],
    index: &'a HashMap<String, usize>,
}

impl<'a> Row<'a> {
    /// Cell under `column`; `None` when the table has no such column.
    /// Short rows read as `Cell::Empty` past their last cell.
    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        let idx = *self.index.get(column)?;
        Some(self.cells.get(idx).unwrap_or(&EMPTY_CELL))
    }
}

impl Table {
    /// Build a table from a header row and data rows.
    /// Fully empty data rows are dropped but still consume a row number.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let mut index = HashMap::new();
        for (i, name) in columns.iter().enumerate() {
            // first occurrence wins for repeated headers
            index.entry(name.clone()).or_insert(i);
        }

        let rows = rows
            .into_iter()
            .enumerate()
            .filter(|(_, cells)| !cells.iter().all(Cell::is_empty))
            .map(|(i, cells)| (i + 1, cells))
            .collect();

        Self { index, rows }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|(number, cells)| Row {
            number: *number,
            cells,
            index: &self.index,
        })
    }
}

/// Load the first worksheet of the workbook at `path` (`.xlsx`, `.xls`, `.ods`, ...).
///
/// The first row of the used range is the header; every following row is data.
/// A workbook without sheets, or with an empty first sheet, gives an empty table.
pub fn read_table(path: impl AsRef<Path>) -> AppResult<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let Some(first) = workbook.sheet_names().first().cloned() else {
        return Ok(Table::default());
    };
    let range = workbook.worksheet_range(&first)?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Table::default());
    };

    let columns: Vec<String> = header.iter().map(|c| Cell::from(c).header_text()).collect();
    let data: Vec<Vec<Cell>> = rows.map(|r| r.iter().map(Cell::from).collect()).collect();

    Ok(Table::new(columns, data))
}
