//! Streaming HTTP(S) downloads with redirect resolution and live progress.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and per-transfer bookkeeping
//! - [`core`] - Pure transformations (status classification, bar rendering)
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Key Features
//!
//! - **Single-Pass**: Each body chunk is forwarded to the sink as it
//!   arrives, so memory use stays bounded regardless of resource size
//! - **Manual Redirects**: Redirects are followed by the fetcher itself
//!   with an explicit hop ceiling, never by the transport
//! - **Mechanism-Only**: No retry policy; the caller decides whether and
//!   when to try again

mod data;
mod effects;
mod error;

pub mod core;

pub use self::core::{host, human_bytes, human_duration, human_rate, is_redirect};
pub use data::{
    FetchOptions, Transfer, TransferReport, DEFAULT_MAX_REDIRECTS, DEFAULT_UNIT_BUDGET,
};
pub use effects::{BoxStream, ByteSink, Console, Fetcher, HttpClient, HttpResponse};
pub use error::{FetchError, Result};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;
