//! Error types for the release bot.

use thiserror::Error;

/// Main error type for release bot operations.
#[derive(Error, Debug)]
pub enum ReleaseBotError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Event payload errors
    #[error("Failed to decode event payload: {0}")]
    DecodeError(String),

    // Forge errors
    #[error("{operation} failed: {message}")]
    CollaboratorError { operation: String, message: String },

    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    // Version errors
    #[error("Invalid release tag '{tag}': {reason}")]
    TagParseError { tag: String, reason: String },

    #[error("Run cancelled during {0}")]
    Cancelled(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using ReleaseBotError
pub type Result<T> = std::result::Result<T, ReleaseBotError>;

impl ReleaseBotError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }

    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }

    /// Wrap a failure from an external call with the operation that failed
    pub fn collaborator(operation: impl Into<String>, err: Self) -> Self {
        let message = match err {
            Self::ForgeError(msg) => msg,
            other => other.to_string(),
        };

        Self::CollaboratorError {
            operation: operation.into(),
            message,
        }
    }

    /// Create a tag parse error
    pub fn tag_parse(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TagParseError {
            tag: tag.into(),
            reason: reason.into(),
        }
    }
}

// Unusable command line or INPUT_* values
impl From<clap::Error> for ReleaseBotError {
    fn from(err: clap::Error) -> Self {
        Self::InvalidConfig(err.render().to_string().trim_end().to_string())
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for ReleaseBotError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}
