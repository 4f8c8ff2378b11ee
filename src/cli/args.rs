//! CLI argument definitions using clap
//!
//! ```text
//! userstore --operation add --item '{"id":"1","email":"a@b.com","age":34}' --fileName users.json
//! userstore -operation=list -fileName=users.json
//! ```
//!
//! Every flag is optional at the clap level; required-ness depends on the
//! operation and is checked by `Config::from_cli`.

use std::ffi::OsString;

use clap::Parser;

/// Long flag names that may also be spelled with a single dash
const LONG_FLAGS: [&str; 4] = ["fileName", "operation", "item", "id"];

/// userstore - keep a list of users in a JSON file
#[derive(Parser, Debug, Default)]
#[command(name = "userstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the backing JSON file (created if missing)
    #[arg(long = "fileName", value_name = "PATH")]
    pub file_name: Option<String>,

    /// One of: add, list, findById, remove
    #[arg(long)]
    pub operation: Option<String>,

    /// JSON-encoded user, required for add
    #[arg(long, value_name = "JSON", allow_hyphen_values = true)]
    pub item: Option<String>,

    /// User id, required for findById and remove
    #[arg(long, allow_hyphen_values = true)]
    pub id: Option<String>,

    /// Emit INFO and TRACE log lines to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite `-fileName`, `-operation`, `-item` and `-id` (with or
/// without `=value`) to their double-dash form. Everything else,
/// including values following a flag, passes through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;

    for arg in args.into_iter().map(Into::into) {
        if expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(|s| {
            let name = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let (flag, has_value) = match name.split_once('=') {
                Some((flag, _)) => (flag, true),
                None => (name, false),
            };
            LONG_FLAGS
                .contains(&flag)
                .then(|| (format!("-{}", s), has_value))
        });

        match rewritten {
            Some((long, has_value)) => {
                expect_value = !has_value;
                normalized.push(OsString::from(long));
            }
            None => {
                if let Some(s) = arg.to_str() {
                    if let Some(flag) = s.strip_prefix("--") {
                        expect_value = LONG_FLAGS.contains(&flag);
                    }
                }
                normalized.push(arg);
            }
        }
    }

    normalized
}
