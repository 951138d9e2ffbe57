use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, starts_with};
use rseatimport::db::log::load_log;
use rseatimport::db::queries::list_students;
use std::fs;
use std::path::Path;

mod common;
use common::{REQUIRED, json_lines, open_store, rsi, seat_row, setup_test_db, temp_path, write_xlsx};

const USAGE_LINE: &str =
    "{\"error\":\"usage: rseatimport <excel_path> <db_path> [override_date]\"}\n";

#[test]
fn test_no_arguments_is_a_usage_error() {
    rsi().assert().success().stdout(USAGE_LINE);
}

#[test]
fn test_single_argument_touches_nothing() {
    let xlsx = temp_path("usage_single", "xlsx");
    rsi().arg(&xlsx).assert().success().stdout(USAGE_LINE);
    assert!(!Path::new(&xlsx).exists());
}

#[test]
fn test_too_many_arguments_is_a_usage_error() {
    rsi()
        .args(["a.xlsx", "b.sqlite", "01.01.2026", "extra"])
        .assert()
        .success()
        .stdout(USAGE_LINE);
}

#[test]
fn test_help_is_plain_text() {
    rsi()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("override_date").or(contains("OVERRIDE_DATE")));
}

#[test]
fn test_missing_spreadsheet_is_a_read_error() {
    let db_path = setup_test_db("missing_file");
    let xlsx = temp_path("does_not_exist", "xlsx");

    let out = rsi().args([&xlsx, &db_path]).assert().success();
    let lines = json_lines(&out.get_output().stdout);
    assert_eq!(lines.len(), 1);
    assert!(
        lines[0]["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to read spreadsheet:")
    );
    assert!(!Path::new(&db_path).exists());
}

#[test]
fn test_corrupt_spreadsheet_is_a_read_error() {
    let db_path = setup_test_db("corrupt_file");
    let xlsx = temp_path("corrupt", "xlsx");
    fs::write(&xlsx, "reg_no,seat_no\nnot,a workbook\n").unwrap();

    rsi()
        .args([&xlsx, &db_path])
        .assert()
        .success()
        .stdout(starts_with("{\"error\":\"Failed to read spreadsheet:"));
    assert!(!Path::new(&db_path).exists());
}

#[test]
fn test_import_is_recorded_in_log_table() {
    let db_path = setup_test_db("log_row");
    let xlsx = write_xlsx("log_row", &REQUIRED, &[seat_row("8001", "801", "FN")]);

    rsi().args([&xlsx, &db_path]).assert().success();

    let conn = open_store(&db_path);
    let log = load_log(&conn).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].operation, "import");
    assert_eq!(log[0].target, xlsx);
    assert_eq!(log[0].message, "inserted 1 rows, 0 row errors");
}

#[test]
fn test_config_file_sets_default_date_and_disables_log() {
    let db_path = setup_test_db("config_file");
    let cfg = temp_path("config_file", "conf");
    fs::write(&cfg, "default_date: \"15.01.2026\"\nlog_imports: false\n").unwrap();
    let xlsx = write_xlsx("config_file", &REQUIRED, &[seat_row("9001", "901", "AN")]);

    rsi()
        .args([xlsx.as_str(), db_path.as_str(), "--config", cfg.as_str()])
        .assert()
        .success()
        .stdout("{\"inserted\":1}\n");

    let conn = open_store(&db_path);
    let all = list_students(&conn).unwrap();
    assert_eq!(all[0].date, "15.01.2026");
    assert!(load_log(&conn).unwrap().is_empty());
}

#[test]
fn test_malformed_config_is_fatal() {
    let db_path = setup_test_db("bad_config");
    let cfg = temp_path("bad_config", "conf");
    fs::write(&cfg, "log_imports: [1, 2]\n").unwrap();
    let xlsx = write_xlsx("bad_config", &REQUIRED, &[seat_row("9101", "911", "AN")]);

    rsi()
        .args([xlsx.as_str(), db_path.as_str(), "--config", cfg.as_str()])
        .assert()
        .success()
        .stdout(starts_with("{\"error\":\"Configuration error:"));
    assert!(!Path::new(&db_path).exists());
}

#[test]
fn test_verbose_output_stays_off_stdout() {
    let db_path = setup_test_db("verbose");
    let xlsx = write_xlsx("verbose", &REQUIRED, &[seat_row("9201", "921", "FN")]);

    rsi()
        .args([xlsx.as_str(), db_path.as_str(), "--verbose"])
        .assert()
        .success()
        .stdout("{\"inserted\":1}\n")
        .stderr(contains("Imported 1 rows"));
}

#[test]
fn test_fatal_error_exits_zero_with_json_and_stderr() {
    let db_path = setup_test_db("fatal_exit");
    let xlsx = temp_path("fatal_exit_missing", "xlsx");

    rsi()
        .args([&xlsx, &db_path])
        .assert()
        .code(0)
        .stdout(starts_with("{\"error\":\"Failed to read spreadsheet:"))
        .stderr(contains("Failed to read spreadsheet:"));
}
