//! Error types for the SurveyGizmo client.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, SurveyGizmoError>;

/// Errors returned by client operations
#[derive(Error, Debug)]
pub enum SurveyGizmoError {
    /// HTTP request failed before a usable response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The base URL or an assembled request URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A path template placeholder had no matching parameter
    #[error("Missing required identifier `{key}` for `{resource}`")]
    MissingId {
        resource: &'static str,
        key: &'static str,
    },

    /// The operation is not available on this resource
    #[error("`{operation}` is not supported by `{resource}`")]
    NotSupported {
        resource: &'static str,
        operation: &'static str,
    },

    /// The API rejected the supplied credentials
    #[error("Authentication failed: check api_token and api_token_secret")]
    AuthenticationFailed,

    /// The API answered with a non-success status code
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Client-side configuration problem
    #[error("Configuration error: {0}")]
    Config(String),
}
