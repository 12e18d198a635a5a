use thiserror::Error;

/// Top-level error type for the Medibot system.
///
/// Covers the outer layers (configuration, I/O, the HTTP server). The chat
/// engine keeps its own error type and never lets it escape the composer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MedibotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for MedibotError {
    fn from(err: toml::de::Error) -> Self {
        MedibotError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for MedibotError {
    fn from(err: toml::ser::Error) -> Self {
        MedibotError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for MedibotError {
    fn from(err: serde_json::Error) -> Self {
        MedibotError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Medibot operations.
pub type Result<T> = std::result::Result<T, MedibotError>;
