use scrape_data::{PageResponse, ScrapeError, ScrapeHooks, ScrapeOptions, Scraper};

struct LogHooks;

impl ScrapeHooks for LogHooks {
    fn before_request(&self, url: &str) {
        println!("-> GET {url}");
    }

    fn after_request(&self, response: &PageResponse) {
        println!("<- {} ({} bytes)", response.status, response.body.len());
    }

    fn on_error(&self, error: &ScrapeError) {
        eprintln!("!! {error}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: basic <url> [selector]"))?;
    let selector = args.next().unwrap_or_else(|| "title".to_owned());

    let scraper = Scraper::new()
        .with_options(
            ScrapeOptions::default()
                .with_header("User-Agent", "scrape-data-demo")
                .with_retry(2),
        )
        .with_hooks(LogHooks);

    let outcome = scraper.scrape(&url, &selector).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
