//! Error types for talking to the todo store.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants so callers of
//! `commit_edit` and the logs can tell "the todo is gone" and "the store
//! refused the text" apart from an unexpected status. The list controller
//! itself raises the same generic notice for all of them. Every other non-2xx
//! response lands in `Http` with the raw status and body for debugging.

use thiserror::Error;

/// Errors returned by store operations and `TodoClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The store returned 404: the todo does not exist (any more).
    #[error("resource not found")]
    NotFound,

    /// The store rejected the payload, e.g. blank todo text.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The store returned a non-2xx status other than 404 or 422.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The host could not complete the round-trip at all.
    #[error("transport failed: {0}")]
    Transport(String),
}
