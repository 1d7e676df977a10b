use std::sync::Arc;

use news_core::Page;
use news_logging::{news_info, news_warn};

use crate::fetch::HeadlinesSource;
use crate::paginate::paginate;
use crate::FetchError;

/// Server-side page fetcher: one upstream call per request, paginated in memory.
#[derive(Clone)]
pub struct NewsService {
    source: Arc<dyn HeadlinesSource>,
    per_page: usize,
    path: String,
}

impl NewsService {
    pub fn new(source: Arc<dyn HeadlinesSource>, per_page: usize, path: impl Into<String>) -> Self {
        Self {
            source,
            per_page: per_page.max(1),
            path: path.into(),
        }
    }

    /// Base used for page links when the caller does not supply one.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub async fn page(&self, page: usize) -> Page {
        self.page_at(page, &self.path).await
    }

    /// Like [`NewsService::page`], with page links built on `path`.
    pub async fn page_at(&self, page: usize, path: &str) -> Page {
        match self.try_page_at(page, path).await {
            Ok(page) => page,
            Err(err) => {
                // Every failure kind collapses into the same empty page.
                news_warn!("Top headlines request failed: {}", err);
                Page::empty()
            }
        }
    }

    /// The upstream failure is kept for callers that must tell it apart
    /// from an empty page.
    pub async fn try_page(&self, page: usize) -> Result<Page, FetchError> {
        self.try_page_at(page, &self.path).await
    }

    async fn try_page_at(&self, page: usize, path: &str) -> Result<Page, FetchError> {
        let articles = self.source.top_headlines().await?;
        news_info!(
            "Serving page {} of {} headlines (per_page={})",
            page,
            articles.len(),
            self.per_page
        );
        Ok(paginate(articles, page, self.per_page, path))
    }
}
