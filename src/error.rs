use thiserror::Error;

/// Main error type for the match engine
///
/// Matching itself never fails; these cover loading options and reading inputs.
#[derive(Error, Debug)]
pub enum MatchEngineError {
    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Options rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for MatchEngineError {
    fn from(s: String) -> Self {
        MatchEngineError::Other(s)
    }
}

impl From<&str> for MatchEngineError {
    fn from(s: &str) -> Self {
        MatchEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MatchEngineError>;
