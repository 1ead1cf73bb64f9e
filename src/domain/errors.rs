use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Sink write failed: {0}")]
    Sink(#[from] std::io::Error),
}

impl LogError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LogError>;
