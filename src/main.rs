use anyhow::Context;
use chrono::Local;
use moj_crawler::client::PowerBiClient;
use moj_crawler::crawler::{CrawlWindow, PaginationController};
use moj_crawler::decoder::TRANSACTION_SALE_LAYOUT;
use moj_crawler::logging;
use moj_crawler::shared::config::CONFIG;
use moj_crawler::sink::JsonlSink;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;
    info!("Starting moj_crawler");

    let window = CrawlWindow::for_today(Local::now().date_naive());
    info!(
        month = %window.target(),
        boundary = %window.boundary(),
        "Crawling the last completed month"
    );

    let fetcher = PowerBiClient::from_config(&CONFIG.powerbi)
        .context("building the PowerBI client")?;
    let mut sink =
        JsonlSink::create(&CONFIG.sink.out_path).context("opening the output file")?;

    let stop = PaginationController::new(fetcher, &TRANSACTION_SALE_LAYOUT, window)
        .with_max_empty_retries(CONFIG.crawler.max_empty_retries)
        .run(&mut sink)
        .await?;
    info!(?stop, "Crawl finished");

    Ok(())
}
