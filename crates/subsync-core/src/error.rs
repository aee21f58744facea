//! Error types for the subsync system
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for subsync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the subsync system
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (credentials file, endpoint selection)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input (empty subdomain, malformed value)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Public IP resolution errors
    #[error("IP resolution error: {0}")]
    IpResolve(String),

    /// HTTP transport errors (connection, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Authentication rejected by the zone API
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limiting by the zone API
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Record or subdomain not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Zone API rejected the request
    #[error("Zone API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Error message from the API response
        message: String,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local I/O errors (credentials file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an IP resolution error
    pub fn ip_resolve(msg: impl Into<String>) -> Self {
        Self::IpResolve(msg.into())
    }

    /// Create an HTTP transport error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a rate limit error
    pub fn rate_limited(msg: impl Into<String>) -> Self {
        Self::RateLimited(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a zone API rejection error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_status_and_message() {
        let err = Error::api(409, "record already exists");
        assert_eq!(
            err.to_string(),
            "Zone API error (409): record already exists"
        );
    }

    #[test]
    fn not_found_is_distinct_from_api_error() {
        let err = Error::not_found("no A record for 'missing'");
        assert!(matches!(err, Error::NotFound(_)));
        assert!(err.to_string().contains("missing"));
    }
}
