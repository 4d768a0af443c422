/// Default number of discrete progress units a transfer is quantized into.
pub const DEFAULT_UNIT_BUDGET: u32 = 100;

/// Default ceiling on redirect hops before a download is abandoned.
pub const DEFAULT_MAX_REDIRECTS: u32 = 32;

/// Configuration for a [`Fetcher`](crate::Fetcher).
///
/// Verbosity is deliberately carried here instead of in process-wide state,
/// so concurrent fetchers (and tests) can disagree about it.
///
/// # Examples
///
/// ```
/// use slurp_fetch::FetchOptions;
///
/// let options = FetchOptions::default()
///     .verbose(true)
///     .max_redirects(Some(5));
/// assert_eq!(options.unit_budget, 100);
/// ```
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Discrete progress steps the bar is quantized into.
    ///
    /// Default: 100
    pub unit_budget: u32,

    /// Maximum redirect hops to follow before failing with
    /// [`TooManyRedirects`](crate::FetchError::TooManyRedirects).
    ///
    /// `None` removes the ceiling entirely and follows redirect chains
    /// indefinitely, including cycles. The ceiling is a hardening over
    /// that original behavior; opt out only when you control the server.
    ///
    /// Default: `Some(32)`
    pub max_redirects: Option<u32>,

    /// Emit diagnostic lines (redirect hops, final throughput).
    ///
    /// Default: false
    pub verbose: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            unit_budget: DEFAULT_UNIT_BUDGET,
            max_redirects: Some(DEFAULT_MAX_REDIRECTS),
            verbose: false,
        }
    }
}

impl FetchOptions {
    /// Set the progress unit budget.
    ///
    /// A budget of 0 disables progress rendering.
    #[must_use]
    pub fn unit_budget(mut self, unit_budget: u32) -> Self {
        self.unit_budget = unit_budget;
        self
    }

    /// Set or remove the redirect-hop ceiling.
    #[must_use]
    pub fn max_redirects(mut self, max_redirects: Option<u32>) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Enable or disable diagnostic output.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FetchOptions::default();
        assert_eq!(options.unit_budget, DEFAULT_UNIT_BUDGET);
        assert_eq!(options.max_redirects, Some(DEFAULT_MAX_REDIRECTS));
        assert!(!options.verbose);
    }

    #[test]
    fn test_builder_chaining() {
        let options = FetchOptions::default()
            .unit_budget(50)
            .max_redirects(None)
            .verbose(true);
        assert_eq!(options.unit_budget, 50);
        assert_eq!(options.max_redirects, None);
        assert!(options.verbose);
    }
}
