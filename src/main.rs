//! userstore CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Delegates parsing and dispatch to `cli::run`
//! 2. Logs and prints errors to stderr
//! 3. Exits with non-zero on failure

use userstore::cli;
use userstore::observability::{log_event_with_fields, Event};

fn main() {
    if let Err(e) = cli::run() {
        log_event_with_fields(
            Event::OperationFailed,
            &[("code", e.code_str()), ("message", e.message())],
        );
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
