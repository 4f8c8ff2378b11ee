//! CLI command implementations
//!
//! `run` is the binary's entry point; `perform` is the dispatcher from a
//! validated `Config` to the store and is what tests drive directly.

use std::io::Write;

use crate::observability::Logger;
use crate::store::UserStore;

use super::args::Cli;
use super::config::{Config, Operation};
use super::errors::CliResult;
use super::io::write_result;

/// Main CLI entry point
///
/// Parses arguments, validates them, runs the operation and prints the
/// result. This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let config = Config::from_cli(Cli::parse_args())?;
    Logger::set_threshold(config.log_threshold());

    let mut result = Vec::new();
    perform(&config, &mut result)?;
    write_result(&result)
}

/// Run the configured operation against its backing file, writing the
/// result to `out`.
pub fn perform<W: Write>(config: &Config, out: &mut W) -> CliResult<()> {
    let mut store = UserStore::open(&config.file_name)?;

    match &config.operation {
        Operation::Add { item } => store.add(item, out)?,
        Operation::List => store.list(out)?,
        Operation::FindById { id } => store.find_by_id(id, out)?,
        Operation::Remove { id } => store.remove(id, out)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use tempfile::TempDir;

    fn config(dir: &TempDir, operation: Operation) -> Config {
        Config {
            file_name: dir.path().join("users.json"),
            operation,
            verbose: false,
        }
    }

    fn perform_to_string(config: &Config) -> String {
        let mut out = Vec::new();
        perform(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_dispatch_add_then_find() {
        let dir = TempDir::new().unwrap();
        let add = config(
            &dir,
            Operation::Add {
                item: r#"{"id":"5","email":"e@x.com","age":5}"#.to_string(),
            },
        );
        assert_eq!(
            perform_to_string(&add),
            r#"[{"id":"5","email":"e@x.com","age":5}]"#
        );

        let find = config(&dir, Operation::FindById { id: "5".to_string() });
        assert_eq!(
            perform_to_string(&find),
            r#"{"id":"5","email":"e@x.com","age":5}"#
        );
    }

    #[test]
    fn test_list_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let list = config(&dir, Operation::List);
        assert_eq!(perform_to_string(&list), "");
        assert!(dir.path().join("users.json").exists());
    }

    #[test]
    fn test_store_failure_maps_to_cli_error() {
        let dir = TempDir::new().unwrap();
        let add = config(
            &dir,
            Operation::Add {
                item: "not json".to_string(),
            },
        );
        let mut out = Vec::new();
        let err = perform(&add, &mut out).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::StoreFailed);
        assert!(out.is_empty());
    }
}
