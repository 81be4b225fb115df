//! Unified error handling for the comment-raffle crate
//!
//! Every failure the pipeline can produce is a variant of [`Error`]. Lower
//! layers return them unchanged; the CLI and the HTTP API turn them into a
//! single human-readable message.
//!
//! # Architecture
//!
//! - [`Error`] - the error enum shared by every module
//! - [`ErrorCategory`] - classification used for logging and reporting

use thiserror::Error;

/// Maximum number of response body characters kept in a transport error
const BODY_EXCERPT_LEN: usize = 200;

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Rejected input (empty URL, zero winners)
    Validation,
    /// Connection failures, timeouts, non-success HTTP status
    Network,
    /// The comment API answered with an application-level error
    Remote,
    /// Undecodable responses
    Parsing,
    /// Configuration errors
    Config,
    /// Nothing to draw from
    Lottery,
}

impl ErrorCategory {
    /// Short label used in structured logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Network => "network",
            Self::Remote => "remote",
            Self::Parsing => "parsing",
            Self::Config => "config",
            Self::Lottery => "lottery",
        }
    }
}

/// Unified error type for the comment-raffle crate
#[derive(Error, Debug)]
pub enum Error {
    /// Request input failed validation before any network call
    #[error("{0}")]
    Validation(String),

    /// URL does not contain an `article/details/<digits>` segment
    #[error("Unable to parse article ID from URL: {0}")]
    InvalidUrl(String),

    /// Comment endpoint answered with a non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// HTTP success, but the JSON body carries a non-200 code
    #[error("Comment API error {code}: {message}")]
    Application { code: i64, message: String },

    /// The deduplicated comment set is empty, so no draw is possible
    #[error("No comments available for the lottery")]
    EmptyResult,

    /// HTTP client errors (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error, keeping only the head of the response body
    pub fn transport(status: u16, body: &str) -> Self {
        Self::Transport {
            status,
            body: body.chars().take(BODY_EXCERPT_LEN).collect(),
        }
    }

    /// Get the error category for handling strategies
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) | Self::InvalidUrl(_) => ErrorCategory::Validation,
            Self::Transport { .. } | Self::Http(_) => ErrorCategory::Network,
            Self::Application { .. } => ErrorCategory::Remote,
            Self::Json(_) => ErrorCategory::Parsing,
            Self::Config(_) => ErrorCategory::Config,
            Self::EmptyResult => ErrorCategory::Lottery,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
