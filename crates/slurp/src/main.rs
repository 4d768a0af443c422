use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use slurp_fetch::{human_bytes, human_duration, FetchOptions, Fetcher, ReqwestClient};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "slurp",
    version = env!("CARGO_PKG_VERSION"),
    about = "Stream an HTTP(S) resource to a local file with live progress",
    long_about = None
)]
struct App {
    /// URL to download (http or https).
    url: String,

    /// Output file. Defaults to the last path segment of the URL.
    output: Option<PathBuf>,

    /// Print diagnostic lines (redirect hops, final throughput).
    #[arg(short, long)]
    verbose: bool,

    /// Maximum redirect hops to follow. 0 removes the ceiling.
    #[arg(long, default_value_t = 32)]
    max_redirects: u32,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "slurp=debug,slurp_fetch=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Derive an output file name from the URL when none was given.
fn output_path(url: &str, output: Option<PathBuf>) -> PathBuf {
    if let Some(path) = output {
        return path;
    }
    let after_scheme = url.find("://").map(|i| &url[i + 3..]).unwrap_or(url);
    let path_part = after_scheme
        .find('/')
        .map(|i| &after_scheme[i + 1..])
        .unwrap_or("");
    let name = path_part
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("")
        .split(['?', '#'])
        .next()
        .unwrap_or("");
    if name.is_empty() {
        PathBuf::from("download")
    } else {
        PathBuf::from(name)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let app = App::parse();
    init_tracing(app.verbose);

    let dest = output_path(&app.url, app.output.clone());
    let mut sink = tokio::fs::File::create(&dest)
        .await
        .with_context(|| format!("failed to create {}", dest.display()))?;

    let options = FetchOptions::default()
        .verbose(app.verbose)
        .max_redirects((app.max_redirects > 0).then_some(app.max_redirects));
    let client = ReqwestClient::new().context("failed to build HTTP client")?;
    let fetcher = Fetcher::with_options(client, options);

    let report = fetcher
        .download(&app.url, &mut sink)
        .await
        .with_context(|| format!("failed to download {}", app.url))?;

    println!(
        "{} {} ({} in {})",
        style("Downloaded").green().bold(),
        dest.display(),
        human_bytes(report.bytes),
        human_duration(report.elapsed),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_explicit_wins() {
        let path = output_path("https://example.com/a.tar.gz", Some(PathBuf::from("x")));
        assert_eq!(path, PathBuf::from("x"));
    }

    #[test]
    fn test_output_path_from_url() {
        assert_eq!(
            output_path("https://example.com/dl/a.tar.gz", None),
            PathBuf::from("a.tar.gz")
        );
        assert_eq!(
            output_path("https://example.com/dl/a.bin?sig=abc", None),
            PathBuf::from("a.bin")
        );
    }

    #[test]
    fn test_output_path_fallback() {
        assert_eq!(output_path("https://example.com/", None), PathBuf::from("download"));
        assert_eq!(output_path("https://example.com", None), PathBuf::from("download"));
    }
}
