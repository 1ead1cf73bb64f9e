use std::sync::Mutex;

use crate::domain::{ports::LogSink, Result};

/// In-memory sink capturing emitted lines, for tests and embedders that
/// inspect output.
pub struct InMemorySink {
    lines: Mutex<Vec<String>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every line written so far, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for InMemorySink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        lines.push(line.to_string());
        Ok(())
    }
}
