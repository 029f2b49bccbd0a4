use reqwest::Url;
use scraper::Html;
use tracing::{debug, info, instrument};

pub mod collector;
pub mod config;
pub mod data;
pub mod fetch;
pub mod report;
pub mod rules;
pub mod server;

mod error;

pub use collector::CompiledRuleSet;
pub use data::{IndividualLeader, RecordKind, ScheduleResult, ScrapeReport, Table, TeamStat};
pub use error::ScrapeError;
pub use fetch::{Fetcher, HttpFetcher};
pub use rules::ExtractionRule;

/// Fetches one page and collects every rule's rows from it.
#[derive(Debug)]
pub struct Scraper<F> {
    fetcher: F,
    rules: CompiledRuleSet,
}

impl<F: Fetcher> Scraper<F> {
    pub fn new(fetcher: F, rules: &[ExtractionRule]) -> Result<Self, ScrapeError> {
        Ok(Scraper {
            fetcher,
            rules: CompiledRuleSet::new(rules)?,
        })
    }

    /// Runs the single fetch-and-collect pass. Any fetch failure fails the
    /// whole scrape; no partial report is returned.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn scrape(&self, url: &Url) -> Result<ScrapeReport, ScrapeError> {
        let html = self.fetcher.fetch(url).await?;

        let report = {
            let doc = Html::parse_document(&html);
            if !doc.errors.is_empty() {
                debug!("Recovered from {} HTML parse errors", doc.errors.len());
            }
            self.rules.collect(&doc)
        };

        for rule in self.rules.rules() {
            info!(
                "Extracted {} {} records",
                report.len(rule.kind()),
                rule.kind().name()
            );
        }
        Ok(report)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    /// Serves a fixed body, or a fixed failure status.
    pub(crate) struct StaticFetcher(pub Result<String, u16>);

    #[async_trait::async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
            match &self.0 {
                Ok(body) => Ok(body.clone()),
                Err(code) => Err(ScrapeError::Status {
                    url: url.to_string(),
                    status: reqwest::StatusCode::from_u16(*code).expect("Invalid status"),
                }),
            }
        }
    }

    pub(crate) fn fixture_body() -> String {
        fs::read_to_string("tests/htmls/team.html").expect("Invalid file path")
    }

    pub(crate) fn team_url() -> Url {
        Url::parse(rules::ncaa::DEFAULT_URL).expect("Invalid url")
    }

    #[tokio::test]
    async fn test_scrape_fixture() {
        let scraper = Scraper::new(StaticFetcher(Ok(fixture_body())), &rules::ncaa::rules())
            .expect("Invalid rules");

        let report = scraper.scrape(&team_url()).await.expect("Scrape failed");
        assert_eq!(report.schedule_results.len(), 2);
        assert_eq!(report.schedule_results[1].attendance, "");
        assert_eq!(report.team_stats.len(), 1);
        assert_eq!(report.individual_leaders.len(), 3);
    }

    #[tokio::test]
    async fn test_scrape_fails_as_a_unit() {
        let scraper = Scraper::new(StaticFetcher(Err(500)), &rules::ncaa::rules())
            .expect("Invalid rules");

        let result = scraper.scrape(&team_url()).await;
        assert!(matches!(result, Err(ScrapeError::Status { .. })));
    }
}
