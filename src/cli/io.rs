//! Result output for the CLI
//!
//! The operation result goes to stdout as-is, followed by a newline when
//! it is non-empty. An empty result prints nothing at all.

use std::io::{self, Write};

use super::errors::CliResult;

/// Write an operation result to stdout
pub fn write_result(result: &[u8]) -> CliResult<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_result_to(&mut handle, result)
}

/// Write an operation result to the given writer
pub fn write_result_to<W: Write>(writer: &mut W, result: &[u8]) -> CliResult<()> {
    if !result.is_empty() {
        writer.write_all(result)?;
        writeln!(writer)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_result_gets_newline() {
        let mut buffer = Vec::new();
        write_result_to(&mut buffer, b"[]").unwrap();
        assert_eq!(buffer, b"[]\n");
    }

    #[test]
    fn test_empty_result_prints_nothing() {
        let mut buffer = Vec::new();
        write_result_to(&mut buffer, b"").unwrap();
        assert!(buffer.is_empty());
    }
}
