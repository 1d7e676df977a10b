use std::sync::Arc;

use news_core::Page;
use news_logging::news_debug;
use url::Url;

use crate::fetch::{FetchSettings, JsonClient};
use crate::paginate::resolve_page_number;
use crate::service::NewsService;
use crate::{FailureKind, FetchError};

/// Resolves a pagination link url into the page it points at.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<Page, FetchError>;
}

/// Fetches page objects from a running page endpoint.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    base: Url,
    client: JsonClient,
}

impl HttpPageSource {
    /// Relative link urls are resolved against `base`.
    pub fn new(base: &str, settings: FetchSettings) -> Result<Self, FetchError> {
        let base = Url::parse(base)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        Ok(Self {
            base,
            client: JsonClient::new(settings)?,
        })
    }
}

#[async_trait::async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str) -> Result<Page, FetchError> {
        let target = self
            .base
            .join(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        news_debug!("Fetching page {}", target);
        let page: Page = self.client.get_json(target).await?;
        if page.is_failure() {
            // The endpoint answers 200 with the empty shape when upstream failed.
            return Err(FetchError::new(
                FailureKind::Upstream { code: None },
                "page endpoint returned no articles and no links",
            ));
        }
        Ok(page)
    }
}

/// Answers link urls in-process by asking a [`NewsService`] directly.
#[derive(Clone)]
pub struct LocalPageSource {
    service: Arc<NewsService>,
}

impl LocalPageSource {
    pub fn new(service: Arc<NewsService>) -> Self {
        Self { service }
    }
}

#[async_trait::async_trait]
impl PageSource for LocalPageSource {
    async fn fetch_page(&self, url: &str) -> Result<Page, FetchError> {
        let page = page_param(url)?;
        self.service.try_page(page).await
    }
}

/// Reads the `page` query parameter of a (possibly relative) link url.
pub fn page_param(url: &str) -> Result<usize, FetchError> {
    let base = Url::parse("http://localhost/")
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    let parsed = base
        .join(url)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    let raw = parsed
        .query_pairs()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.into_owned());
    Ok(resolve_page_number(raw.as_deref()))
}
