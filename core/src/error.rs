//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other rejected responses land in `Http` with the raw status
//! code and body. `Transport` is produced by hosts when the round-trip itself
//! fails (DNS, refused connection, CORS), never by the core.

use thiserror::Error;

/// Errors returned by `TodoClient` methods and reported by hosts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status the operation does not accept.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
}

impl ApiError {
    /// True when the server answered but with a rejected status code.
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::NotFound | ApiError::Http { .. })
    }
}
