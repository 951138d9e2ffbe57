pub mod colors;
pub mod excel_date;
pub mod path;
