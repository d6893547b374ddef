//! `basket` - Acme Widget Co basket calculator

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = acme_cli::run() {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
