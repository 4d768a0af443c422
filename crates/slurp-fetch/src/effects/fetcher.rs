use futures_util::StreamExt;
use tracing::debug;

use crate::core::{host, human_bytes, human_duration, human_rate, is_redirect, render_bar};
use crate::data::{FetchOptions, Transfer, TransferReport};
use crate::effects::console::Console;
use crate::effects::http::{HttpClient, HttpResponse};
use crate::effects::sink::ByteSink;
use crate::error::{FetchError, Result};

/// Streams an HTTP(S) resource into a caller-provided sink.
///
/// One call to [`download`](Fetcher::download) handles one logical
/// transfer: redirect resolution, terminal-status validation, the chunk
/// copy loop with live progress, and the post-completion throughput line.
/// The fetcher holds no mutable state across calls.
pub struct Fetcher<C: HttpClient> {
    client: C,
    options: FetchOptions,
    console: Console,
}

impl<C: HttpClient> Fetcher<C> {
    /// Fetcher with default options, rendering to stdout.
    pub fn new(client: C) -> Self {
        Self::with_options(client, FetchOptions::default())
    }

    /// Fetcher with explicit options, rendering to stdout.
    pub fn with_options(client: C, options: FetchOptions) -> Self {
        let console = Console::stdout(options.verbose);
        Self {
            client,
            options,
            console,
        }
    }

    /// Fetcher with an explicit console, for embedding and tests.
    pub fn with_console(client: C, options: FetchOptions, console: Console) -> Self {
        Self {
            client,
            options,
            console,
        }
    }

    /// Access the underlying HTTP client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Download `url` into `sink`, following redirects.
    ///
    /// The sink must be open and writable. Every received chunk is
    /// forwarded immediately in arrival order; on success the sink has
    /// been closed and its closure confirmed before this returns. On
    /// failure the sink is left as-is: bytes already written stay written,
    /// and close is not attempted.
    ///
    /// # Errors
    ///
    /// See [`FetchError`] for the failure taxonomy. Nothing is retried.
    pub async fn download<S: ByteSink>(&self, url: &str, sink: &mut S) -> Result<TransferReport> {
        let (final_url, response) = self.resolve(url).await?;

        if response.status != 200 {
            return Err(FetchError::UnexpectedStatus {
                status: response.status,
                url: final_url,
            });
        }

        let budget = self.options.unit_budget;
        let mut transfer = Transfer::new(&final_url, response.content_length, budget);
        let mut body = response.body;
        let mut width = 0usize;

        if transfer.total().is_some() && budget > 0 {
            width = self.draw_progress(&transfer, width);
        }

        while let Some(chunk) = body.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(cause) => {
                    self.console.clear(width);
                    self.console
                        .error(&format!("download aborted after {}: {cause}", human_bytes(transfer.bytes())));
                    return Err(FetchError::Aborted(Box::new(cause)));
                }
            };

            if let Err(cause) = sink.write(&chunk).await {
                self.console.clear(width);
                self.console.error(&format!("write failed: {cause}"));
                return Err(FetchError::Sink(cause));
            }

            if transfer.advance(chunk.len() as u64).is_some() {
                width = self.draw_progress(&transfer, width);
            }
        }

        self.console.clear(width);

        // Success is only reported once the sink confirms closure; write
        // completion may lag network completion.
        if let Err(cause) = sink.close().await {
            self.console.error(&format!("failed to finalize sink: {cause}"));
            return Err(FetchError::Sink(cause));
        }

        let report = transfer.report();
        debug!(
            url = %final_url,
            bytes = report.bytes,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "transfer complete"
        );
        self.console.debug(&format!(
            "{} in {} ({})",
            human_bytes(report.bytes),
            human_duration(report.elapsed),
            human_rate(report.rate()),
        ));

        Ok(report)
    }

    /// Follow redirect hops until a non-redirect response is obtained.
    ///
    /// Redirect bodies are dropped unread. Returns the URL the terminal
    /// response was fetched from alongside the response itself.
    async fn resolve(&self, url: &str) -> Result<(String, HttpResponse<C::Error>)> {
        let mut current = url.to_string();
        let mut hops = 0u32;

        loop {
            let response = self
                .client
                .get(&current)
                .await
                .map_err(|cause| FetchError::Network(Box::new(cause)))?;

            let target = if is_redirect(response.status) {
                response.location.clone()
            } else {
                None
            };
            let Some(target) = target else {
                return Ok((current, response));
            };

            if let Some(limit) = self.options.max_redirects {
                if hops >= limit {
                    return Err(FetchError::TooManyRedirects { limit });
                }
            }
            hops += 1;

            debug!(status = response.status, from = %current, to = %target, "following redirect");
            self.console.debug(&format!("redirect -> {}", host(&target)));
            current = target;
        }
    }

    /// Render the bar plus percentage and return the drawn width.
    fn draw_progress(&self, transfer: &Transfer, previous_width: usize) -> usize {
        let budget = transfer.budget();
        let percent = transfer.units() as u64 * 100 / budget as u64;
        let line = format!("{} {percent:>3}%", render_bar(transfer.units(), budget));
        let width = line.chars().count().max(previous_width);
        self.console.draw(&line);
        width
    }
}
