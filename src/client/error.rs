//! Error types for RecipeHub API calls.
//!
//! Every operation in this crate returns [`ClientError`]. The variants keep
//! the three failure classes distinct: the request never reached the server
//! ([`Network`](ClientError::Network)), the server answered with a
//! non-success status ([`Api`](ClientError::Api)), or the request was
//! rejected client-side before anything was sent
//! ([`Validation`](ClientError::Validation)).

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: timeout, refused connection, DNS failure. No HTTP
    /// response was received.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status. `message` carries the
    /// response body text, which may be empty.
    #[error("api error: HTTP {status}: {message}")]
    Api {
        status: StatusCode,
        message: String,
    },

    /// The request was rejected client-side before it was sent, e.g. a
    /// required field was missing from an update command.
    #[error("validation error: {0}")]
    Validation(String),

    /// The server answered with a success status but the body could not be
    /// parsed into the expected type.
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// The session file could not be read or written.
    #[error("session storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// Classify a `reqwest` error from a completed exchange: body decode
    /// failures become [`Decode`](ClientError::Decode), everything else is
    /// transport-level.
    pub(crate) fn from_read(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err)
        } else {
            ClientError::Network(err)
        }
    }

    /// HTTP status of an [`Api`](ClientError::Api) error, if that is what
    /// this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for an [`Api`](ClientError::Api) error with status 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// True when the underlying transport failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            ClientError::Network(err) => err.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status() {
        let err = ClientError::Api {
            status: StatusCode::NOT_FOUND,
            message: "no such recipe".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(!err.is_timeout());
    }

    #[test]
    fn validation_error_has_no_status() {
        let err = ClientError::Validation("recipe name is required".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }

    #[test]
    fn error_messages_name_the_failure_class() {
        let err = ClientError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "api error: HTTP 500 Internal Server Error: boom");

        let err = ClientError::Validation("quantity must be non-negative".to_string());
        assert_eq!(err.to_string(), "validation error: quantity must be non-negative");
    }
}
