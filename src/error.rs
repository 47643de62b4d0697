/// Reported when the server answered with a non-success status.
pub(crate) const HTTP_FAILED: &str = "HTTP request failed";

/// Failure of a single scrape attempt.
///
/// Observers receive this value; callers only ever see the flattened
/// message produced by [`ScrapeError::report`].
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Network, timeout or request-building error from `reqwest`.
    #[error("{0}")]
    Transport(reqwest::Error),
    /// Selector was rejected by the query engine.
    #[error("invalid selector: {0}")]
    Selector(String),
}

impl ScrapeError {
    /// Returns `true` when the failure carries an HTTP response.
    pub fn has_response(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Returns `true` for timeouts raised by the HTTP client.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }

    /// Collapses the error into the message returned to callers.
    ///
    /// HTTP-layer failures drop their status and body; everything else keeps
    /// its own text.
    pub fn report(&self) -> String {
        match self {
            Self::Http { .. } => HTTP_FAILED.to_owned(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrapeError, HTTP_FAILED};

    #[test]
    fn http_errors_discard_status_and_body() {
        let err = ScrapeError::Http {
            status: 503,
            body: "maintenance".to_owned(),
        };
        assert!(err.has_response());
        assert_eq!(err.report(), HTTP_FAILED);
    }

    #[test]
    fn selector_errors_keep_their_message() {
        let err = ScrapeError::Selector("`##` is not a valid selector".to_owned());
        assert!(!err.has_response());
        assert_eq!(err.report(), "invalid selector: `##` is not a valid selector");
        assert!(!err.is_timeout());
    }
}
