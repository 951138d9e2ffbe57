//! Human-oriented diagnostics.
//! Everything goes to stderr: stdout carries only the JSON report lines.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable `info` / `success` output (`--verbose`).
pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

fn verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn info<T: fmt::Display>(msg: T) {
    if verbose() {
        eprintln!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
    }
}

pub fn success<T: fmt::Display>(msg: T) {
    if verbose() {
        eprintln!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
    }
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}
