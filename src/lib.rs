//! userstore - a list of users kept as a JSON array in a single file

pub mod cli;
pub mod observability;
pub mod store;
