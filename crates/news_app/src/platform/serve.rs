use std::sync::Arc;

use anyhow::Context;
use news_engine::{bind_and_serve, NewsApiClient, NewsService};
use news_logging::news_warn;

use super::config::AppConfig;

pub fn service_for(config: &AppConfig, path: impl Into<String>) -> anyhow::Result<NewsService> {
    if config.api_key.is_empty() {
        news_warn!(
            "No API key configured; set {} or api_key in the config file",
            super::config::API_KEY_ENV
        );
    }
    let client = NewsApiClient::new(config.news_api(), config.fetch_settings())
        .context("building upstream client")?;
    Ok(NewsService::new(Arc::new(client), config.per_page, path))
}

/// Serves the JSON page endpoint until the process is stopped.
pub fn run_server(config: &AppConfig, bind: &str) -> anyhow::Result<()> {
    let service = Arc::new(service_for(config, format!("http://{bind}"))?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building server runtime")?;

    runtime
        .block_on(bind_and_serve(bind, service))
        .with_context(|| format!("serving on {bind}"))
}
