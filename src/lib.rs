//! `scrape-data` fetches a web page and returns the text of the elements
//! matching a CSS selector.
//!
//! The crate exposes one operation in two shapes:
//! - [`scrape_data`] / [`scrape_data_with_hooks`] for one-off calls
//! - [`Scraper::scrape`] for a reusable client with its own options and hooks
//!
//! Failures never escape as `Err`: every call resolves to a [`ScrapeOutcome`].

mod client;
mod error;
mod extract;
mod hooks;
mod options;
mod types;

pub use client::{scrape_data, scrape_data_with_hooks, Scraper};
pub use error::ScrapeError;
pub use hooks::{NoHooks, ScrapeHooks};
pub use options::ScrapeOptions;
pub use types::{PageResponse, ScrapeOutcome};

/// Re-exported so observers can inspect or edit the parsed document.
pub use scraper::Html;

pub type Result<T> = std::result::Result<T, ScrapeError>;
