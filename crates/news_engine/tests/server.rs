use std::sync::Arc;

use news_core::{Article, Page, Source};
use news_engine::{serve, FetchError, HeadlinesSource, NewsService};
use tokio::net::TcpListener;

struct StaticHeadlines(Vec<Article>);

#[async_trait::async_trait]
impl HeadlinesSource for StaticHeadlines {
    async fn top_headlines(&self) -> Result<Vec<Article>, FetchError> {
        Ok(self.0.clone())
    }
}

fn articles(count: usize) -> Vec<Article> {
    (1..=count)
        .map(|n| Article {
            source: Source {
                id: None,
                name: "Wire".to_string(),
            },
            title: format!("Story {n}"),
            ..Article::default()
        })
        .collect()
}

async fn start(count: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = Arc::new(NewsService::new(
        Arc::new(StaticHeadlines(articles(count))),
        10,
        format!("http://{addr}"),
    ));
    tokio::spawn(async move {
        let _ = serve(listener, service).await;
    });
    format!("http://{addr}")
}

async fn get_page(url: &str) -> Page {
    let body = reqwest::get(url).await.unwrap().bytes().await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn root_serves_requested_page_with_links_to_itself() {
    let base = start(23).await;

    let page = get_page(&format!("{base}/?page=3")).await;

    assert_eq!(page.current_page, 3);
    assert_eq!(page.data.len(), 3);
    assert_eq!(page.data[0].title, "Story 21");
    assert_eq!(page.links[1].url.as_deref(), Some(format!("{base}?page=1").as_str()));
    assert!(page.links[3].active);
}

#[tokio::test]
async fn invalid_page_parameter_falls_back_to_first_page() {
    let base = start(23).await;

    let page = get_page(&format!("{base}/news?page=banana")).await;

    assert_eq!(page.current_page, 1);
    assert_eq!(page.data[0].title, "Story 1");
    assert_eq!(
        page.next_page_url.as_deref(),
        Some(format!("{base}/news?page=2").as_str())
    );
}

#[tokio::test]
async fn healthz_answers_ok() {
    let base = start(0).await;

    let body = reqwest::get(format!("{base}/healthz"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body, "ok");
}
