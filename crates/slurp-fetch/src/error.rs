//! Error types for slurp-fetch.

use std::io;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Terminal failures of a single download invocation.
///
/// None of these are retried internally; retry policy, if any, belongs to
/// the caller.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS, or response-header failure.
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The terminal (non-redirect) response carried a status other than 200.
    ///
    /// The sink is guaranteed untouched when this is returned.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The server closed the body stream before it completed.
    ///
    /// Bytes already forwarded to the sink are not rolled back.
    #[error("transfer aborted before completion: {0}")]
    Aborted(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The sink failed to accept a chunk or to close.
    #[error("sink error: {0}")]
    Sink(#[source] io::Error),

    /// The redirect chain exceeded the configured hop ceiling.
    #[error("redirect limit exceeded ({limit} hops)")]
    TooManyRedirects { limit: u32 },
}
