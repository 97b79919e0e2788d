//! Error types for kinrelay

/// kinrelay error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required environment variables: {0}")]
    MissingEnv(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result type alias for kinrelay
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }
}
