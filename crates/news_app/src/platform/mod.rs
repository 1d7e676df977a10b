mod app;
pub mod config;
mod effects;
pub mod logging;
mod serve;
mod ui;

use std::sync::Arc;

use anyhow::Context;
use news_engine::{HttpPageSource, LocalPageSource, PageSource};
use news_logging::{news_info, parse_level};

use config::AppConfig;
use logging::LogDestination;

pub fn run_serve(config: &AppConfig, bind: Option<String>) -> anyhow::Result<()> {
    logging::initialize(LogDestination::Both, parse_level(&config.log_level));
    let bind = bind.unwrap_or_else(|| config.bind.clone());
    serve::run_server(config, &bind)
}

/// Browses a running server when `server` is given, otherwise fetches upstream in-process.
pub fn run_browse(config: &AppConfig, server: Option<String>, page: usize) -> anyhow::Result<()> {
    logging::initialize(LogDestination::File, parse_level(&config.log_level));
    let page = page.max(1);

    let (source, initial_url): (Arc<dyn PageSource>, String) = match server {
        Some(base) => {
            news_info!("Browsing headlines served by {}", base);
            let source = HttpPageSource::new(&base, config.fetch_settings())
                .with_context(|| format!("invalid server url {base}"))?;
            (Arc::new(source), format!("?page={page}"))
        }
        None => {
            news_info!("Browsing headlines fetched in-process");
            let service = serve::service_for(config, "/")?;
            (
                Arc::new(LocalPageSource::new(Arc::new(service))),
                format!("/?page={page}"),
            )
        }
    };

    app::run_browser(source, &initial_url, config.timestamp_format())
}
