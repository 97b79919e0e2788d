//! Error types for the AI organizer

/// AI backend error type
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{provider} API error {status}: {body}")]
    ApiError {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Empty response from {0}")]
    EmptyResponse(&'static str),
}

/// Result type alias for AI backend calls
pub type Result<T> = std::result::Result<T, AiError>;
