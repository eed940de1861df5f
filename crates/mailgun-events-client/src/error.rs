//! Error types for mailgun-events-client

use thiserror::Error;

/// Result type alias for mailgun-events-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while polling the events API
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error decoding an event record
    #[error("Event error: {0}")]
    Core(#[from] mailgun_events_core::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the API
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Leading bytes of the response body
        body: String,
    },

    /// Malformed endpoint or paging URL
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parser message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error in a response envelope
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid-URL error.
    pub fn invalid_url<U, M>(url: U, message: M) -> Self
    where
        U: Into<String>,
        M: std::fmt::Display,
    {
        Error::InvalidUrl {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Returns whether repeating the request may succeed.
    ///
    /// Rate limits, server errors and connection failures are retryable;
    /// decoding and configuration errors are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Api { status, .. } => *status == 429 || *status >= 500,
            Error::Io(_) => true,
            Error::Core(_) => false,
            Error::InvalidUrl { .. } => false,
            Error::Config { .. } => false,
            Error::Serialization(_) => false,
        }
    }
}
