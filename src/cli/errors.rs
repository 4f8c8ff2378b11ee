//! CLI-specific error types
//!
//! All CLI errors are fatal for the invocation.

use std::fmt;
use std::io;

use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// `-fileName` missing or empty
    MissingFileName,
    /// `-operation` missing or empty
    MissingOperation,
    /// `-item` missing or empty for add
    MissingItem,
    /// `-id` missing or empty for findById / remove
    MissingId,
    /// Unknown operation name
    OperationNotAllowed,
    /// Backing file, JSON, or output failure
    StoreFailed,
    /// I/O error on stdout
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFileName => "USERSTORE_CLI_MISSING_FILE_NAME",
            Self::MissingOperation => "USERSTORE_CLI_MISSING_OPERATION",
            Self::MissingItem => "USERSTORE_CLI_MISSING_ITEM",
            Self::MissingId => "USERSTORE_CLI_MISSING_ID",
            Self::OperationNotAllowed => "USERSTORE_CLI_OPERATION_NOT_ALLOWED",
            Self::StoreFailed => "USERSTORE_CLI_STORE_FAILED",
            Self::IoError => "USERSTORE_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn missing_file_name() -> Self {
        Self::new(CliErrorCode::MissingFileName, "-fileName flag has to be specified")
    }

    pub fn missing_operation() -> Self {
        Self::new(CliErrorCode::MissingOperation, "-operation flag has to be specified")
    }

    pub fn missing_item() -> Self {
        Self::new(CliErrorCode::MissingItem, "-item flag has to be specified")
    }

    pub fn missing_id() -> Self {
        Self::new(CliErrorCode::MissingId, "-id flag has to be specified")
    }

    /// Unknown operation name
    pub fn operation_not_allowed(operation: &str) -> Self {
        Self::new(
            CliErrorCode::OperationNotAllowed,
            format!("Operation {} not allowed!", operation),
        )
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::new(CliErrorCode::StoreFailed, e.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
