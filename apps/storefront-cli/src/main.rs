//! # Storefront Console Entry Point
//!
//! The actual setup is in lib.rs so sessions can be driven from tests.

use std::process::ExitCode;

fn main() -> ExitCode {
    match storefront_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("storefront: {}", e);
            ExitCode::FAILURE
        }
    }
}
