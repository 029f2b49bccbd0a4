use crate::{report, Fetcher, ScrapeError, ScrapeReport, Scraper};
use axum::{extract::State, response::Html, routing::get, Router};
use reqwest::Url;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, warn};

pub fn router(report: Arc<ScrapeReport>) -> Router {
    Router::new().route("/", get(index)).with_state(report)
}

async fn index(State(report): State<Arc<ScrapeReport>>) -> Html<String> {
    if let Err(e) = report::echo_text(&mut tokio::io::stdout(), &report).await {
        warn!("Failed to write console report: {}", e);
    }
    Html(report::render_html(&report))
}

/// Serves `report` on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, report: Arc<ScrapeReport>) -> Result<(), ScrapeError> {
    info!("Server is running on http://{}", listener.local_addr()?);
    axum::serve(listener, router(report)).await?;
    Ok(())
}

/// Scrapes `url` once, then serves the frozen report on `bind`. The
/// listener is never bound when the scrape fails.
pub async fn run<F: Fetcher>(
    scraper: &Scraper<F>,
    url: &Url,
    bind: SocketAddr,
) -> Result<(), ScrapeError> {
    let report = Arc::new(scraper.scrape(url).await?);
    let listener = TcpListener::bind(bind).await?;
    serve(listener, report).await
}
