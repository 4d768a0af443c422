//! Per-download bookkeeping.

use std::time::{Duration, Instant};

/// State of one in-progress download.
///
/// Created once the terminal (non-redirect) response is obtained, advanced
/// on every body chunk, and dropped when the transfer completes or fails.
/// It is never persisted.
///
/// Invariants: cumulative bytes never decrease; the rendered unit count is
/// a monotone non-decreasing function of `bytes / total`, clamped to the
/// unit budget; an unknown or zero total keeps the unit count at 0 rather
/// than dividing by zero.
#[derive(Debug)]
pub struct Transfer {
    url: String,
    bytes: u64,
    total: Option<u64>,
    budget: u32,
    units: u32,
    started: Instant,
}

impl Transfer {
    /// Begin tracking a transfer whose declared size is `total` (if known).
    pub fn new(url: impl Into<String>, total: Option<u64>, budget: u32) -> Self {
        Self {
            url: url.into(),
            bytes: 0,
            total,
            budget,
            units: 0,
            started: Instant::now(),
        }
    }

    /// Record `n` newly received bytes.
    ///
    /// Returns `Some(units)` when the discrete unit target grew past the
    /// previously rendered count, i.e. exactly when the caller should
    /// redraw the progress indicator. With an unknown total the target
    /// stays at 0 and this never asks for a redraw.
    pub fn advance(&mut self, n: u64) -> Option<u32> {
        self.bytes += n;
        let total = self.total.filter(|t| *t > 0)?;
        let capped = self.bytes.min(total);
        let target = ((capped as u128 * self.budget as u128) / total as u128) as u32;
        let target = target.min(self.budget);
        if target > self.units {
            self.units = target;
            Some(target)
        } else {
            None
        }
    }

    /// Source URL of the terminal response.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Cumulative bytes received so far.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Declared total from Content-Length, if any.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Currently rendered discrete unit count.
    pub fn units(&self) -> u32 {
        self.units
    }

    /// Unit budget the transfer was created with.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Wall-clock time since the terminal response was obtained.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Snapshot the final statistics of a finished transfer.
    pub fn report(&self) -> TransferReport {
        TransferReport {
            bytes: self.bytes,
            total: self.total,
            elapsed: self.elapsed(),
        }
    }
}

/// Final statistics returned on success.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferReport {
    /// Bytes actually received and written to the sink.
    pub bytes: u64,

    /// Declared total from Content-Length, if the server sent one.
    pub total: Option<u64>,

    /// Wall-clock duration of the body transfer.
    pub elapsed: Duration,
}

impl TransferReport {
    /// Average throughput in bytes per second, from actual bytes received.
    ///
    /// Returns 0.0 for a zero-length elapsed time instead of dividing by
    /// zero.
    #[must_use]
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 { self.bytes as f64 / secs } else { 0.0 }
    }
}
