use clap::Parser;
use ncaa_stats::{config::Config, report, rules, server, HttpFetcher, ScrapeError, Scraper};
use tracing::error;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

async fn run(config: Config) -> Result<(), ScrapeError> {
    let scraper = Scraper::new(
        HttpFetcher::new(config.fetch_timeout())?,
        &rules::ncaa::rules(),
    )?;

    if config.once {
        let report = scraper.scrape(&config.url).await?;
        return report::write_once(&mut std::io::stdout().lock(), &report, config.json);
    }

    server::run(&scraper, &config.url, config.bind).await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let config = Config::parse();
    let url = config.url.clone();
    if let Err(e) = run(config).await {
        error!("{} ({})", e, url);
        std::process::exit(1);
    }
}
