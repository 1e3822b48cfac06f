use thiserror::Error;

/// Top-level error type for the college finder.
///
/// Subsystem crates define their own error types and convert into
/// `FinderError` where a failure has to cross a crate boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FinderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for FinderError {
    fn from(err: toml::de::Error) -> Self {
        FinderError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for FinderError {
    fn from(err: toml::ser::Error) -> Self {
        FinderError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for FinderError {
    fn from(err: serde_json::Error) -> Self {
        FinderError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for college finder operations.
pub type Result<T> = std::result::Result<T, FinderError>;
