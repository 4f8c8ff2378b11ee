//! CLI module for userstore
//!
//! Flags are parsed with clap, validated into a `Config`, and dispatched
//! to the store:
//! - add: append a user given as JSON
//! - list: print all users
//! - findById: print one user
//! - remove: delete one user

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{normalize_args, Cli};
pub use commands::{perform, run};
pub use config::{Config, Operation};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_result, write_result_to};
