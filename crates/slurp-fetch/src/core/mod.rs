//! Pure transformations for the download pipeline.
//!
//! Everything in this module is free of I/O: status classification, URL
//! inspection, progress-bar rendering, and human-readable formatting. The
//! effectful layer calls into these between suspension points, so nothing
//! here may block or await.

mod bar;
mod format;
mod headers;
mod redirect;

pub use bar::{cell_count, render_bar};
pub use format::{human_bytes, human_duration, human_rate};
pub use headers::{host, parse_content_length};
pub use redirect::is_redirect;
