//! Error types for the feature extraction engine

use std::fmt;

/// Errors that can occur during audio analysis
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Invalid input parameters (zero sample rate, non-finite samples, bad config)
    InvalidInput(String),

    /// Audio decoding error
    DecodingError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
