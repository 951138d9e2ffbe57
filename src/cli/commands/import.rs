use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::import::{ImportLogic, ImportRequest, ImportSummary};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use std::io::Write;

/// Handle an import invocation.
pub fn handle(cli: &Cli, cfg: &Config, out: &mut dyn Write) -> AppResult<ImportSummary> {
    let req = ImportRequest {
        excel_path: expand_tilde(&cli.excel_path),
        db_path: expand_tilde(&cli.db_path),
        override_date: cli.override_date.clone(),
    };

    ImportLogic::apply(&req, cfg, out)
}
