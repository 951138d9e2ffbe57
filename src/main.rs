//! rseatimport main entrypoint.

use rseatimport::run;
use rseatimport::ui::messages::error;

fn main() {
    // import errors are already on stdout as JSON; only a lost report lands here
    if let Err(e) = run() {
        error(format!("Failed to write report: {}", e));
        std::process::exit(1);
    }
}
