//! rseatimport library root.
//! Exposes the CLI parser, the import pipeline and the store helpers.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use clap::error::ErrorKind;
use crate::cli::parser::{Cli, USAGE};
use crate::config::Config;
use crate::core::import::ImportSummary;
use crate::errors::{AppError, AppResult};
use crate::ui::report::{Report, emit};
use crate::utils::path::expand_tilde;
use std::ffi::OsString;
use std::io::{self, Write};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, out: &mut dyn Write) -> AppResult<ImportSummary> {
    crate::cli::commands::import::handle(cli, cfg, out)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(std::env::args_os(), &mut out)
}

/// Run with explicit arguments, writing the JSON report to `out`.
/// Exactly one terminal line is written per import attempt, error or not.
/// A fatal import error is part of the report, so it returns `Ok`; `Err` means
/// the report itself could not be written.
pub fn run_with<I, T>(args: I, out: &mut dyn Write) -> AppResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match execute(args, out) {
        Ok(Some(summary)) => emit(
            out,
            &Report::Inserted {
                inserted: summary.inserted,
            },
        ),
        Ok(None) => Ok(()),
        Err(e) => {
            crate::ui::messages::error(&e);
            emit(out, &Report::failed(&e))
        }
    }
}

/// `Ok(None)` when clap only printed help or version.
fn execute<I, T>(args: I, out: &mut dyn Write) -> AppResult<Option<ImportSummary>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // 1️⃣ parse CLI
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e)?;
            return Ok(None);
        }
        Err(_) => return Err(AppError::Usage(USAGE.to_string())),
    };

    crate::ui::messages::set_verbose(cli.verbose);

    // 2️⃣ load config once
    let config_path = cli.config.as_deref().map(expand_tilde);
    let cfg = Config::load(config_path.as_deref())?;

    // 3️⃣ import
    dispatch(&cli, &cfg, out).map(Some)
}
