//! `singlish-catalogue` command-line tool
//!
//! Writes the transliteration test catalogue to `test-data/test-cases.xlsx`
//! when run without arguments.

use catalogue_service::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
