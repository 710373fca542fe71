//! Error types for the todo API client.
//!
//! # Design
//! A failed operation carries the HTTP status and reason phrase, matching
//! what the backend reports. Transport failures (refused connection, reset)
//! never have a status, so they get their own variant rather than a fake
//! status code.

use thiserror::Error;

/// Errors returned by `TodoClient` and `TodoApi` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
