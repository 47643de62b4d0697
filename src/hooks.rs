use scraper::Html;

use crate::{PageResponse, ScrapeError};

/// Observer invoked at fixed points of a scrape.
///
/// Every method defaults to a no-op, so implementors only override the
/// points they care about. Hooks run synchronously on the scraping task.
/// A panicking hook is not treated as a scrape failure: the panic unwinds
/// out of the scrape call.
///
/// Per attempt the order is `before_request`, `after_request`,
/// `before_parse`, `after_parse` on success. On failure `on_error` and
/// `before_retry` run for every failed attempt; `after_retry` runs once,
/// after the last attempt has failed.
pub trait ScrapeHooks: Send + Sync {
    /// Called with the target URL before the request is sent.
    fn before_request(&self, _url: &str) {}

    /// Called with the successful response once its body has been read.
    fn after_request(&self, _response: &PageResponse) {}

    /// Called with the parsed document before selection.
    ///
    /// Changes made to the document are visible to the extraction step.
    fn before_parse(&self, _document: &mut Html) {}

    /// Called with the extracted text before it is returned.
    fn after_parse(&self, _text: &str) {}

    /// Called whenever an attempt fails.
    fn on_error(&self, _error: &ScrapeError) {}

    /// Called after `on_error`, whether or not a retry follows.
    fn before_retry(&self, _error: &ScrapeError) {}

    /// Called once with the final error when no retries remain.
    fn after_retry(&self, _error: &ScrapeError) {}
}

/// Hooks that do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl ScrapeHooks for NoHooks {}
