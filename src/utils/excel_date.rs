// src/utils/excel_date.rs

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

/// Convert an Excel *serial* (days since 1899-12-30, fraction = time of day)
/// into a `NaiveDateTime`. Returns `None` for negative or out-of-range values.
pub(crate) fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let days = serial.trunc() as i64;
    // round to the second: serials carry float noise (0.999999... for midnight)
    let secs = ((serial - serial.trunc()) * 86400.0).round() as i64;

    excel_epoch
        .checked_add_signed(Duration::try_days(days)?)?
        .checked_add_signed(Duration::try_seconds(secs)?)
}

/// Render an Excel serial with `date_format`; a time part, if any, is appended
/// as `HH:MM:SS`. Falls back to the raw serial when it is not a valid date.
pub(crate) fn format_excel_serial(serial: f64, date_format: &str) -> String {
    match excel_serial_to_datetime(serial) {
        Some(dt) if dt.num_seconds_from_midnight() == 0 => dt.format(date_format).to_string(),
        Some(dt) => format!("{} {}", dt.format(date_format), dt.format("%H:%M:%S")),
        None => serial.to_string(),
    }
}
