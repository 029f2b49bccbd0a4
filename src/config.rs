use crate::rules::ncaa::DEFAULT_URL;
use clap::Parser;
use reqwest::Url;
use std::{net::SocketAddr, time::Duration};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "ncaa-stats",
    version,
    about = "Scrapes an NCAA team page and serves the schedule and stats tables"
)]
pub struct Config {
    /// Team page to scrape
    #[arg(long, env = "NCAA_STATS_URL", default_value = DEFAULT_URL)]
    pub url: Url,

    /// Address the HTTP server listens on
    #[arg(long, env = "NCAA_STATS_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Fetch timeout in seconds (unbounded when omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the report and exit instead of serving it
    #[arg(long)]
    pub once: bool,

    /// Print the report as JSON
    #[arg(long, requires = "once")]
    pub json: bool,
}

impl Config {
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["ncaa-stats"]).expect("Invalid args");
        assert_eq!(config.url.as_str(), DEFAULT_URL);
        assert_eq!(config.bind, "0.0.0.0:8080".parse().expect("Invalid addr"));
        assert_eq!(config.fetch_timeout(), None);
        assert!(!config.once);
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "ncaa-stats",
            "--url",
            "https://stats.ncaa.org/teams/1",
            "--bind",
            "127.0.0.1:3000",
            "--timeout",
            "30",
            "--once",
            "--json",
        ])
        .expect("Invalid args");
        assert_eq!(config.url.as_str(), "https://stats.ncaa.org/teams/1");
        assert_eq!(config.fetch_timeout(), Some(Duration::from_secs(30)));
        assert!(config.json);
    }

    #[test]
    fn test_json_requires_once() {
        assert!(Config::try_parse_from(["ncaa-stats", "--json"]).is_err());
    }
}
