mod memory;
mod stdout;

pub use memory::InMemorySink;
pub use stdout::StdoutSink;
