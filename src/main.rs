//! momo-api CLI entry point
//!
//! Thin dispatcher: parse arguments, run the selected command, print the
//! error and exit non-zero on failure. All logic lives in the CLI module.

use momo_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
