//! Error types for the fluent request builder.
//!
//! # Design
//! Each stage of a request fails with its own variant so callers can tell a
//! bad configuration from a bad payload, a failed round-trip, or a response
//! that does not fit the target type. Transport failures keep the status and
//! body the server sent, and the underlying ureq error when there is one.

use thiserror::Error;

/// Errors returned while configuring or executing a request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// A blank URL, or a blank or repeated parameter name.
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),

    /// The body object could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(#[source] serde_json::Error),

    /// The request could not be sent, or the server answered with a non-2xx
    /// status.
    #[error(transparent)]
    TransportError(#[from] TransportError),

    /// The response body is not UTF-8, not JSON, or does not match the
    /// target type.
    #[error("deserialization failed at '{path}': {message}")]
    DeserializationError { path: String, message: String },
}

/// Failures reported by a [`Transport`](crate::transport::Transport) or by
/// the status check that follows it.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// No response was received.
    #[error("connection failed: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl TransportError {
    /// Status code of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Connection { .. } => None,
        }
    }

    /// Body of the error response, if one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            TransportError::Status { body, .. } => Some(body),
            TransportError::Connection { .. } => None,
        }
    }
}

impl From<ureq::Error> for TransportError {
    fn from(e: ureq::Error) -> Self {
        TransportError::Connection {
            message: e.to_string(),
            source: Some(Box::new(e)),
        }
    }
}

pub type Result<T, E = RequestError> = std::result::Result<T, E>;
