use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configures timeout, extra headers and retry count for a scrape.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial JSON object such as `{"retry": 2}` is a valid configuration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Headers sent with every request.
    pub headers: BTreeMap<String, String>,
    /// Number of retries after the initial attempt. No backoff is applied.
    pub retry: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            headers: BTreeMap::new(),
            retry: 0,
        }
    }
}

impl ScrapeOptions {
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_retry(mut self, retry: usize) -> Self {
        self.retry = retry;
        self
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
