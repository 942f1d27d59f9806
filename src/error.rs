//! Error types for the gemba_scan library

use thiserror::Error;

/// Result type alias for gemba_scan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors produced by the analysis pipeline
///
/// Decoding is the only fallible stage. The scoring engine operates on
/// range-validated metrics and cannot fail.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input bytes are not a valid, supported image encoding
    #[error("Failed to decode image: {message}")]
    DecodeError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create a decode error with context from an underlying decoder error
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DecodeError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a decode error without an underlying source
    pub fn decode_msg(message: impl Into<String>) -> Self {
        Self::DecodeError {
            message: message.into(),
            source: None,
        }
    }
}
