//! Application layer - the logging service itself.
//!
//! The [`Logger`] depends on the domain's sink port (a trait) rather than a
//! concrete output, so embedders and tests can substitute their own.

pub mod logger;

pub use logger::{Logger, LoggerConfig};
