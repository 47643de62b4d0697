use std::fmt;
use std::sync::Arc;

use crate::{
    extract::{parse_document, select_text},
    NoHooks, PageResponse, Result, ScrapeError, ScrapeHooks, ScrapeOptions, ScrapeOutcome,
};

/// Fetches a page once (plus retries) and returns the text matched by
/// `selector`, using a default client and no hooks.
///
/// # Example
///
/// ```no_run
/// use scrape_data::{scrape_data, ScrapeOptions};
///
/// # async fn demo() {
/// let outcome = scrape_data(
///     "https://example.com/product/42",
///     ".price",
///     ScrapeOptions::default().with_retry(2),
/// )
/// .await;
/// println!("{:?}", outcome.data());
/// # }
/// ```
pub async fn scrape_data(url: &str, selector: &str, options: ScrapeOptions) -> ScrapeOutcome {
    Scraper::new()
        .with_options(options)
        .scrape(url, selector)
        .await
}

/// Same as [`scrape_data`], reporting progress to `hooks`.
pub async fn scrape_data_with_hooks<H>(
    url: &str,
    selector: &str,
    options: ScrapeOptions,
    hooks: H,
) -> ScrapeOutcome
where
    H: ScrapeHooks + 'static,
{
    Scraper::new()
        .with_options(options)
        .with_hooks(hooks)
        .scrape(url, selector)
        .await
}

#[derive(Clone)]
/// Reusable scraping client.
///
/// Cloning is cheap; clones share the connection pool and hooks. Calls made
/// concurrently on the same client do not interact.
pub struct Scraper {
    http: reqwest::Client,
    options: ScrapeOptions,
    hooks: Arc<dyn ScrapeHooks>,
}

impl fmt::Debug for Scraper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header values can hold credentials; only names are printed.
        let header_names: Vec<&str> = self.options.headers.keys().map(String::as_str).collect();
        f.debug_struct("Scraper")
            .field("timeout_ms", &self.options.timeout_ms)
            .field("retry", &self.options.retry)
            .field("headers", &header_names)
            .finish_non_exhaustive()
    }
}

impl Default for Scraper {
    fn default() -> Self {
        Self::new()
    }
}

impl Scraper {
    /// Creates a scraper with default options and no hooks.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Creates a scraper on top of an existing `reqwest` client.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self {
            http,
            options: ScrapeOptions::default(),
            hooks: Arc::new(NoHooks),
        }
    }

    /// Applies timeout, header and retry options.
    pub fn with_options(mut self, options: ScrapeOptions) -> Self {
        self.options = options;
        self
    }

    /// Installs the observer notified during each scrape.
    pub fn with_hooks<H>(mut self, hooks: H) -> Self
    where
        H: ScrapeHooks + 'static,
    {
        self.hooks = Arc::new(hooks);
        self
    }

    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }

    /// Fetches `url` and returns the trimmed text of all elements matching
    /// `selector`.
    ///
    /// Failed attempts are retried immediately, up to `options.retry` times.
    /// Request and selector failures are folded into
    /// [`ScrapeOutcome::Error`]; hook panics are not caught.
    pub async fn scrape(&self, url: &str, selector: &str) -> ScrapeOutcome {
        let mut attempts_left = self.options.retry;
        loop {
            let err = match self.attempt(url, selector).await {
                Ok(text) => {
                    tracing::debug!(url, selector, len = text.len(), "scrape succeeded");
                    return ScrapeOutcome::Data(text);
                }
                Err(err) => err,
            };

            tracing::warn!(url, error = %err, "scrape attempt failed");
            self.hooks.on_error(&err);
            self.hooks.before_retry(&err);

            if attempts_left > 0 {
                tracing::info!(url, attempts_left, "retrying scrape, attempts left: {attempts_left}");
                attempts_left -= 1;
                continue;
            }

            self.hooks.after_retry(&err);
            let message = err.report();
            tracing::debug!(url, %message, "scrape failed");
            return ScrapeOutcome::Error(message);
        }
    }

    async fn attempt(&self, url: &str, selector: &str) -> Result<String> {
        self.hooks.before_request(url);
        let page = self.fetch(url).await?;
        self.hooks.after_request(&page);
        self.extract(&page, selector)
    }

    async fn fetch(&self, url: &str) -> Result<PageResponse> {
        tracing::debug!(url, timeout_ms = self.options.timeout_ms, "sending scrape request");

        let mut request = self.http.get(url).timeout(self.options.timeout());
        for (name, value) in &self.options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(ScrapeError::Transport)?;
        let status = response.status();

        if !status.is_success() {
            // The status alone classifies the failure; the body is best effort.
            let body = response.text().await.unwrap_or_default();
            return Err(ScrapeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let final_url = response.url().to_string();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(ScrapeError::Transport)?;

        Ok(PageResponse {
            url: final_url,
            status: status.as_u16(),
            headers,
            body,
        })
    }

    // The parsed document is not `Send`, so it must not live across an await.
    fn extract(&self, page: &PageResponse, selector: &str) -> Result<String> {
        let mut document = parse_document(&page.body);
        self.hooks.before_parse(&mut document);
        let text = select_text(&document, selector)?;
        self.hooks.after_parse(&text);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::Scraper;
    use crate::ScrapeOptions;

    #[test]
    fn debug_omits_header_values() {
        let scraper = Scraper::new().with_options(
            ScrapeOptions::default().with_header("Authorization", "Bearer secret-token"),
        );
        let debug = format!("{scraper:?}");
        assert!(debug.contains("Authorization"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn new_uses_default_options() {
        assert_eq!(Scraper::new().options(), &ScrapeOptions::default());
    }
}
