pub mod config;
pub mod sinks;

pub use config::{Config, ServerConfig};
pub use sinks::{InMemorySink, StdoutSink};
