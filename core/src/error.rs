//! Error types for the request executor.
//!
//! # Design
//! Each variant names the pipeline stage that failed, so a caller can tell a
//! bad body from an unreachable host without parsing the message. Messages
//! carry the underlying library's description as a `String`; the transport
//! is pluggable, so no single source error type fits every variant.
//! `HttpStatus` only appears when the caller opts into
//! [`StatusPolicy::RequireSuccess`](crate::StatusPolicy::RequireSuccess).

use thiserror::Error;

/// Errors returned by [`RequestExecutor::execute`](crate::RequestExecutor::execute)
/// and the helpers around it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be serialized to JSON.
    #[error("body encoding failed: {0}")]
    Encode(String),

    /// The URL or a header was rejected before anything was sent.
    #[error("request construction failed: {0}")]
    Build(String),

    /// The request never produced a response (DNS, refused connection, or a
    /// timeout before the response headers arrived).
    #[error("send failed: {0}")]
    Send(String),

    /// The response body could not be read to the end: the connection broke,
    /// the timeout expired mid-body, or the configured size cap was exceeded.
    #[error("response read failed: {0}")]
    Read(String),

    /// The response body could not be deserialized into the expected type.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The server returned a non-2xx status and the caller asked for that to fail.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

/// Pipeline stage an [`ApiError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Encode,
    Build,
    Send,
    Read,
    Decode,
    Status,
}

impl ApiError {
    pub fn stage(&self) -> Stage {
        match self {
            ApiError::Encode(_) => Stage::Encode,
            ApiError::Build(_) => Stage::Build,
            ApiError::Send(_) => Stage::Send,
            ApiError::Read(_) => Stage::Read,
            ApiError::Decode(_) => Stage::Decode,
            ApiError::HttpStatus { .. } => Stage::Status,
        }
    }
}
