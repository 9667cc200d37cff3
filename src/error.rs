use std::path::PathBuf;
use thiserror::Error;

/// Custom Result type for this crate.
pub type Result<T> = std::result::Result<T, PublisherError>;

/// The Error type for loading inputs and publishing to the broker.
#[derive(Error, Debug)]
pub enum PublisherError {
    #[error("Config file '{0}' does not exist or cannot be opened")]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config is not populated correctly: {0}")]
    ConfigIncomplete(String),

    #[error("Message file '{0}' does not exist or cannot be opened")]
    MessageNotFound(PathBuf),

    #[error("No message in message file '{0}'")]
    MessageEmpty(PathBuf),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to connect to broker at {addr}: {reason}")]
    Connection { addr: String, reason: String },

    #[error("Failed to open channel: {0}")]
    Channel(String),

    #[error("Failed to publish to queue '{queue}': {reason}")]
    Publish { queue: String, reason: String },
}

impl PublisherError {
    /// Process exit code for this error class. Zero is reserved for success.
    pub fn exit_code(&self) -> u8 {
        match self {
            PublisherError::ConfigNotFound(_)
            | PublisherError::ConfigParse { .. }
            | PublisherError::ConfigIncomplete(_) => 2,
            PublisherError::MessageNotFound(_) | PublisherError::MessageEmpty(_) => 3,
            PublisherError::Connection { .. } | PublisherError::Channel(_) => 4,
            PublisherError::Publish { .. } => 5,
            PublisherError::Io { .. } => 1,
        }
    }
}
