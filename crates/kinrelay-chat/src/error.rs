//! Error types for chat delivery

/// Chat delivery error type
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Chatwork API error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Notifier not configured")]
    NotConfigured,
}

/// Result type alias for chat delivery
pub type Result<T> = std::result::Result<T, ChatError>;
