//! Spreadsheet side of an import: load the sheet, check its header,
//! turn rows into `SeatingRecord`s.

pub mod normalize;
pub mod reader;
pub mod schema;
