//! Immutable configuration and per-transfer bookkeeping.

pub mod options;
pub mod transfer;

pub use options::{FetchOptions, DEFAULT_MAX_REDIRECTS, DEFAULT_UNIT_BUDGET};
pub use transfer::{Transfer, TransferReport};
