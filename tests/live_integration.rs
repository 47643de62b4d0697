use scrape_data::{scrape_data, ScrapeOptions, ScrapeOutcome};

/// Target page for the live test, e.g. `https://example.com`.
fn live_url() -> Option<String> {
    std::env::var("SCRAPE_DATA_LIVE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}

#[tokio::test]
async fn live_page_title_is_extracted() {
    let Some(url) = live_url() else {
        eprintln!("skipping live test: SCRAPE_DATA_LIVE_URL is not set");
        return;
    };

    let outcome = scrape_data(
        &url,
        "title",
        ScrapeOptions::default()
            .with_timeout_ms(10_000)
            .with_header("User-Agent", "scrape-data-live-test")
            .with_retry(1),
    )
    .await;

    match outcome {
        ScrapeOutcome::Data(title) => assert!(!title.is_empty(), "page has an empty <title>"),
        ScrapeOutcome::Error(message) => panic!("live scrape failed: {message}"),
    }
}
