//! Validated invocation configuration
//!
//! Flag values are checked once, in a fixed order (fileName, operation,
//! operation name, then the operation's own argument), and turned into
//! an explicit `Config` before the backing file is touched.

use std::fmt;
use std::path::PathBuf;

use crate::observability::Severity;

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// The requested operation with its argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Append a user given as JSON text
    Add { item: String },
    /// Print every user
    List,
    /// Print the user with this id
    FindById { id: String },
    /// Delete the user with this id
    Remove { id: String },
}

impl Operation {
    /// Build an operation from its flag name and the optional flags.
    ///
    /// Only the argument the operation needs is checked: `list` ignores
    /// `item` and `id`, `add` ignores `id`.
    pub fn parse(name: &str, item: Option<String>, id: Option<String>) -> CliResult<Self> {
        match name {
            "add" => Ok(Operation::Add {
                item: required(item, CliError::missing_item)?,
            }),
            "list" => Ok(Operation::List),
            "findById" => Ok(Operation::FindById {
                id: required(id, CliError::missing_id)?,
            }),
            "remove" => Ok(Operation::Remove {
                id: required(id, CliError::missing_id)?,
            }),
            other => Err(CliError::operation_not_allowed(other)),
        }
    }

    /// Flag name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::List => "list",
            Operation::FindById { .. } => "findById",
            Operation::Remove { .. } => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything one invocation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backing file path
    pub file_name: PathBuf,
    /// Operation to perform
    pub operation: Operation,
    /// Log below WARN as well
    pub verbose: bool,
}

impl Config {
    /// Validate parsed flags into a configuration
    pub fn from_cli(cli: Cli) -> CliResult<Self> {
        let file_name = required(cli.file_name, CliError::missing_file_name)?;
        let operation_name = required(cli.operation, CliError::missing_operation)?;
        let operation = Operation::parse(&operation_name, cli.item, cli.id)?;

        Ok(Self {
            file_name: PathBuf::from(file_name),
            operation,
            verbose: cli.verbose,
        })
    }

    /// Minimum severity the logger should write
    pub fn log_threshold(&self) -> Severity {
        if self.verbose {
            Severity::Trace
        } else {
            Severity::Warn
        }
    }
}

/// An absent or empty flag is missing
fn required(value: Option<String>, missing: fn() -> CliError) -> CliResult<String> {
    value.filter(|v| !v.is_empty()).ok_or_else(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;

    fn cli(file_name: &str, operation: &str) -> Cli {
        Cli {
            file_name: Some(file_name.to_string()),
            operation: Some(operation.to_string()),
            ..Cli::default()
        }
    }

    fn code_of(cli: Cli) -> CliErrorCode {
        *Config::from_cli(cli).unwrap_err().code()
    }

    #[test]
    fn test_list_config() {
        let config = Config::from_cli(cli("users.json", "list")).unwrap();
        assert_eq!(config.file_name, PathBuf::from("users.json"));
        assert_eq!(config.operation, Operation::List);
        assert_eq!(config.log_threshold(), Severity::Warn);
    }

    #[test]
    fn test_missing_file_name_checked_first() {
        let cli = Cli {
            operation: Some("bogus".to_string()),
            ..Cli::default()
        };
        assert_eq!(code_of(cli), CliErrorCode::MissingFileName);
    }

    #[test]
    fn test_empty_values_are_missing() {
        assert_eq!(code_of(cli("", "list")), CliErrorCode::MissingFileName);
        assert_eq!(code_of(cli("users.json", "")), CliErrorCode::MissingOperation);
    }

    #[test]
    fn test_missing_operation() {
        let cli = Cli {
            file_name: Some("users.json".to_string()),
            ..Cli::default()
        };
        assert_eq!(code_of(cli), CliErrorCode::MissingOperation);
    }

    #[test]
    fn test_unknown_operation() {
        let err = Config::from_cli(cli("users.json", "purge")).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::OperationNotAllowed);
        assert_eq!(err.message(), "Operation purge not allowed!");
    }

    #[test]
    fn test_operation_names_are_case_sensitive() {
        assert_eq!(
            code_of(cli("users.json", "findbyid")),
            CliErrorCode::OperationNotAllowed
        );
    }

    #[test]
    fn test_add_requires_item() {
        assert_eq!(code_of(cli("users.json", "add")), CliErrorCode::MissingItem);

        let mut with_item = cli("users.json", "add");
        with_item.item = Some(r#"{"id":"1"}"#.to_string());
        let config = Config::from_cli(with_item).unwrap();
        assert_eq!(
            config.operation,
            Operation::Add {
                item: r#"{"id":"1"}"#.to_string()
            }
        );
    }

    #[test]
    fn test_find_and_remove_require_id() {
        assert_eq!(code_of(cli("users.json", "findById")), CliErrorCode::MissingId);
        assert_eq!(code_of(cli("users.json", "remove")), CliErrorCode::MissingId);

        let mut with_id = cli("users.json", "remove");
        with_id.id = Some("7".to_string());
        assert_eq!(
            Config::from_cli(with_id).unwrap().operation,
            Operation::Remove { id: "7".to_string() }
        );
    }

    #[test]
    fn test_verbose_lowers_threshold() {
        let mut verbose = cli("users.json", "list");
        verbose.verbose = true;
        let config = Config::from_cli(verbose).unwrap();
        assert_eq!(config.log_threshold(), Severity::Trace);
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::FindById { id: "1".into() }.to_string(), "findById");
        assert_eq!(Operation::List.name(), "list");
    }
}
