use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// One HTTP response, redirect or terminal, with its body left unread.
///
/// The body is a lazy stream: a redirect response can be dropped without
/// its body ever being pulled, which the fetcher relies on.
pub struct HttpResponse<E> {
    /// HTTP status code.
    pub status: u16,

    /// Absolute redirect target, when the response carries a `Location`
    /// header. Relative targets are resolved against the request URL by
    /// the client implementation.
    pub location: Option<String>,

    /// Declared body size, leniently parsed from `Content-Length`.
    /// Absent or malformed values surface as `None`.
    pub content_length: Option<u64>,

    /// The response body as a chunk stream.
    pub body: BoxStream<'static, Result<Bytes, E>>,
}

/// Asynchronous HTTP client abstraction.
///
/// This is the minimal transport interface the fetcher needs. Redirects
/// must NOT be followed by the implementation; the fetcher walks the chain
/// itself so it can log hops and enforce its ceiling.
///
/// # Implementations
///
/// - [`ReqwestClient`]: production implementation using `reqwest`
/// - Scripted implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a GET and return status, headers of interest, and the body
    /// stream without consuming any of the body.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures (DNS, connect, TLS, or
    /// reading the response head). Error statuses are NOT errors here;
    /// they come back as a normal [`HttpResponse`] for the fetcher to
    /// judge.
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<HttpResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::core::parse_content_length;

    /// Production HTTP client implementation using `reqwest`.
    ///
    /// Built with the transport's redirect following disabled so every hop
    /// is visible to the fetcher.
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a client with redirect following disabled.
        pub fn new() -> Result<Self, reqwest::Error> {
            let client = reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> Result<HttpResponse<Self::Error>, Self::Error> {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();

            let location = response
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(|target| match response.url().join(target) {
                    Ok(absolute) => absolute.to_string(),
                    Err(_) => target.to_string(),
                });

            let content_length = response
                .headers()
                .get(reqwest::header::CONTENT_LENGTH)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_content_length);

            Ok(HttpResponse {
                status,
                location,
                content_length,
                body: Box::pin(response.bytes_stream()),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
