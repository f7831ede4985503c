// error.rs
//! Errors returned by the Resend API client.
//!
//! See <https://resend.com/docs/api-reference/error-codes> for the codes the
//! API reports.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// 400, 401, 404 and 422 responses.
    #[error("invalid request ({status}): {message}")]
    InvalidRequest { status: u16, message: String },

    #[error("rate limit exceeded: {message}")]
    RateLimitExceeded { message: String },

    #[error("internal server error: {message}")]
    InternalServer { message: String },

    /// Any other error status.
    #[error("resend API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Resend API returned an unexpected response (status {status})")]
    UnexpectedResponse { status: u16 },

    /// Rejected before any request was sent.
    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// Maps an API status code and message to the matching variant.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 | 401 | 404 | 422 => Error::InvalidRequest { status, message },
            429 => Error::RateLimitExceeded { message },
            500 => Error::InternalServer { message },
            _ => Error::Api { status, message },
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// HTTP status behind the error, when the API produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::InvalidRequest { status, .. }
            | Error::Api { status, .. }
            | Error::UnexpectedResponse { status } => Some(*status),
            Error::RateLimitExceeded { .. } => Some(429),
            Error::InternalServer { .. } => Some(500),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
