use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{ports::LogSink, Severity};
use crate::infrastructure::StdoutSink;

/// Configuration for a [`Logger`].
///
/// Fixed at construction; a differently-configured logger means building a
/// new one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggerConfig {
    /// Records below this level are dropped. Defaults to [`Severity::Debug`].
    #[serde(default)]
    pub min_level: Severity,
}

/// Leveled logger writing timestamped, colored lines to a sink.
///
/// One long-lived instance is meant to be shared (via `Arc`) across
/// concurrent callers; the sink's line-atomicity keeps concurrent output
/// from interleaving.
pub struct Logger {
    config: LoggerConfig,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Creates a logger writing to standard output.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sink(config, Arc::new(StdoutSink::new()))
    }

    /// Creates a logger writing to an explicit sink.
    pub fn with_sink(config: LoggerConfig, sink: Arc<dyn LogSink>) -> Self {
        Self { config, sink }
    }

    pub fn min_level(&self) -> Severity {
        self.config.min_level
    }

    /// Renders and emits one record, unless `level` is below the configured
    /// threshold. Suppressed calls return before any timestamp or formatting
    /// work happens.
    ///
    /// Extra values are appended space-separated: a string renders verbatim,
    /// anything else is pretty-printed. The whole line goes to the sink as a
    /// single write. Sink write failures are discarded — logging never fails
    /// the caller.
    pub fn log(&self, level: Severity, message: impl AsRef<str>, extra: &[Value]) {
        if level.rank() < self.config.min_level.rank() {
            return;
        }

        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut line = format!(
            "{} [{}] - {}",
            timestamp.dimmed(),
            level.label().color(level.color()),
            message.as_ref(),
        );
        for value in extra {
            line.push(' ');
            line.push_str(&render_extra(value));
        }

        let _ = self.sink.write_line(&line);
    }

    pub fn debug(&self, message: impl AsRef<str>, extra: &[Value]) {
        self.log(Severity::Debug, message, extra);
    }

    pub fn info(&self, message: impl AsRef<str>, extra: &[Value]) {
        self.log(Severity::Info, message, extra);
    }

    pub fn warn(&self, message: impl AsRef<str>, extra: &[Value]) {
        self.log(Severity::Warn, message, extra);
    }

    pub fn error(&self, message: impl AsRef<str>, extra: &[Value]) {
        self.log(Severity::Error, message, extra);
    }
}

fn render_extra(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}
