use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Final result of a scrape.
///
/// Serializes as `{"data": "..."}` or `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrapeOutcome {
    Data(String),
    Error(String),
}

impl ScrapeOutcome {
    pub fn data(&self) -> Option<&str> {
        match self {
            Self::Data(text) => Some(text),
            Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Data(_) => None,
            Self::Error(message) => Some(message),
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    /// Converts into a standard `Result`, with the error message as `Err`.
    pub fn into_result(self) -> std::result::Result<String, String> {
        match self {
            Self::Data(text) => Ok(text),
            Self::Error(message) => Err(message),
        }
    }
}

/// Response handed to [`ScrapeHooks::after_request`](crate::ScrapeHooks::after_request).
#[derive(Clone, Debug)]
pub struct PageResponse {
    /// Final URL after redirects.
    pub url: String,
    pub status: u16,
    pub headers: HeaderMap,
    /// Body decoded with the charset from `Content-Type` (UTF-8 when absent).
    /// Undecodable bytes are replaced rather than rejected.
    pub body: String,
}
