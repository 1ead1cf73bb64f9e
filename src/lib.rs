pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{Logger, LoggerConfig};
pub use domain::{ports::LogSink, LogError, Severity};
