//! REST client error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body; login failures carry their reason code here.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// An authenticated endpoint was called without a token.
    #[error("no auth token, run `dtc login`")]
    NotAuthenticated,
}

impl ClientError {
    /// The backend rejected the credentials or the session.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated | Self::Api { status: 401 | 403, .. }
        )
    }

    /// Raw response body for API errors.
    #[must_use]
    pub fn response_text(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}
