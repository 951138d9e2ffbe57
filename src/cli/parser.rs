use clap::Parser;

/// Usage line reported when the arguments cannot be parsed.
pub const USAGE: &str = "rseatimport <excel_path> <db_path> [override_date]";

/// Command-line interface definition for rseatimport
#[derive(Parser, Debug)]
#[command(
    name = "rseatimport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Import an exam seating spreadsheet into a SQLite store",
    long_about = "Import an exam seating spreadsheet into a SQLite store.\n\n\
                  The first worksheet must have the columns reg_no, seat_no, room, \
                  course_code, course_title and session; a date column is optional.\n\
                  Each row's date is OVERRIDE_DATE if given, else its own date cell, \
                  else the configured default date.\n\
                  Rows are keyed by (reg_no, date, session): importing the same key \
                  again replaces the stored record.\n\n\
                  Output is one JSON object per line on stdout."
)]
pub struct Cli {
    /// Spreadsheet to import (.xlsx, .xls, .ods, ...)
    pub excel_path: String,

    /// SQLite database file (created if absent)
    pub db_path: String,

    /// Date applied to every row, overriding the spreadsheet's date column
    pub override_date: Option<String>,

    /// Use this configuration file instead of the default one
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print progress diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
