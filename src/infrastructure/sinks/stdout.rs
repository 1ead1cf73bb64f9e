use std::io::Write;

use crate::domain::{ports::LogSink, Result};

/// Sink writing to the process's standard output.
///
/// Each line goes out under the stdout lock in one `write_all`, so lines
/// from concurrent loggers cannot interleave.
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}
