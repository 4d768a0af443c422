//! I/O operations and effectful collaborators.
//!
//! The seams are traits: [`HttpClient`] for the transport and [`ByteSink`]
//! for the destination, so the download loop in [`Fetcher`] can be driven
//! by scripted implementations in tests.

mod console;
mod fetcher;
mod http;
mod sink;

pub use console::Console;
pub use fetcher::Fetcher;
pub use http::{BoxStream, HttpClient, HttpResponse};
pub use sink::ByteSink;

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
