use crate::ScrapeError;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// Source of the raw HTML for one page.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, ScrapeError>;
}

/// Fetches pages over HTTP with reqwest. Any non-2xx status is an error.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// `timeout` of `None` leaves the request unbounded.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ScrapeError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(HttpFetcher {
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
        debug!("Visit {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}
