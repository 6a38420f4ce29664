//! Error types for the recipes API client.
//!
//! # Design
//! The taxonomy is deliberately small. View-models reduce every `ApiError`
//! to its `Display` string, so the messages below are what a user sees:
//! `InvalidUrl` has a fixed message, the other two carry the underlying
//! transport or decoder description verbatim.

use thiserror::Error;

/// Errors returned by `ApiService::perform_request`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The base URL and request path did not form a valid URL.
    #[error("Invalid URL")]
    InvalidUrl,

    /// The response body could not be decoded into the expected shape.
    #[error("{0}")]
    DecodingError(String),

    /// The request never produced a response (connection, DNS, TLS, I/O).
    #[error("{0}")]
    NetworkError(String),
}

/// Failure reported by a `Transport` before any response body was read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// A filter label that does not name any known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} filter: {value}")]
pub struct ParseFilterError {
    pub kind: &'static str,
    pub value: String,
}
