use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_student;
use crate::errors::{AppResult, RowError};
use crate::import::normalize::Normalizer;
use crate::import::reader::read_table;
use crate::import::schema::validate_columns;
use crate::ui::messages::{info, success, warning};
use crate::ui::report::{Report, emit};
use std::io::Write;
use std::path::PathBuf;

/// Everything one import run needs from the command line.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub excel_path: PathBuf,
    pub db_path: PathBuf,
    pub override_date: Option<String>,
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct ImportSummary {
    /// Rows written (a replaced record counts as written).
    pub inserted: usize,
    /// 1-based numbers of the rows that were skipped.
    pub failed_rows: Vec<usize>,
}

/// High-level business logic for a spreadsheet import.
pub struct ImportLogic;

impl ImportLogic {
    /// Read, validate, normalize and upsert. Row errors are reported on `out`
    /// as they happen; fatal errors are returned before the store is touched
    /// whenever they come from the spreadsheet.
    pub fn apply(req: &ImportRequest, cfg: &Config, out: &mut dyn Write) -> AppResult<ImportSummary> {
        // ------------------------------------------------
        // 1️⃣ READ + VALIDATE (no store access yet)
        // ------------------------------------------------
        info(format!("Reading {}", req.excel_path.display()));
        let table = read_table(&req.excel_path)?;
        validate_columns(|c| table.has_column(c))?;
        info(format!("{} data rows found", table.rows().count()));

        let normalizer = Normalizer::new(req.override_date.as_deref(), cfg);

        // ------------------------------------------------
        // 2️⃣ STORE
        // ------------------------------------------------
        let mut pool = DbPool::new(&req.db_path)?;
        init_db(&pool.conn)?;

        let mut summary = ImportSummary::default();
        let tx = pool.conn.transaction()?;

        for row in table.rows() {
            let written = normalizer
                .normalize(&row)
                .and_then(|rec| upsert_student(&tx, &rec).map_err(RowError::from));

            match written {
                Ok(()) => summary.inserted += 1,
                Err(e) => {
                    emit(out, &Report::row_failed(row.number, &e))?;
                    summary.failed_rows.push(row.number);
                }
            }
        }

        tx.commit()?;

        // ------------------------------------------------
        // 3️⃣ INTERNAL LOG (non-blocking)
        // ------------------------------------------------
        if cfg.log_imports
            && let Err(e) = ttlog(
                &pool.conn,
                "import",
                &req.excel_path.display().to_string(),
                &format!(
                    "inserted {} rows, {} row errors",
                    summary.inserted,
                    summary.failed_rows.len()
                ),
            )
        {
            warning(format!("Failed to write internal log: {}", e));
        }

        pool.close()?;

        success(format!(
            "Imported {} rows into {}",
            summary.inserted,
            req.db_path.display()
        ));
        Ok(summary)
    }
}
