use thiserror::Error;

/// Errors that can occur while talking to TheMealDB
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to reach the endpoint or got a non-success status
    #[error("Failed to fetch from TheMealDB: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be decoded into the expected shape
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Endpoint URL could not be built
    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Errors produced while decoding a meal payload.
///
/// Required-field violations name the wire field (e.g. `strArea`) so callers
/// can tell exactly which part of the payload was rejected.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A required field was absent or JSON null
    #[error("Missing required field `{0}`")]
    MissingField(String),

    /// A required field was present but held an unexpected type or value
    #[error("Unexpected type for field `{0}`")]
    TypeMismatch(String),

    /// The response body was not valid JSON
    #[error("Malformed response body: {0}")]
    Syntax(#[from] serde_json::Error),
}
