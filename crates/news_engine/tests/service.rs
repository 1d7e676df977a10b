use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use news_core::{update, Article, Effect, Msg, Page, Source, TableState, TimestampFormat};
use news_engine::{
    paginate, EngineEvent, EngineHandle, FailureKind, FetchError, HeadlinesSource,
    LocalPageSource, NewsService, PageSource, NEXT_LABEL, PREVIOUS_LABEL,
};
use pretty_assertions::assert_eq;

struct FakeHeadlines {
    result: Result<Vec<Article>, FetchError>,
    calls: AtomicUsize,
}

impl FakeHeadlines {
    fn ok(count: usize) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(articles(count)),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            result: Err(FetchError {
                kind: FailureKind::HttpStatus(429),
                message: "Too Many Requests".to_string(),
            }),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait::async_trait]
impl HeadlinesSource for FakeHeadlines {
    async fn top_headlines(&self) -> Result<Vec<Article>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

fn articles(count: usize) -> Vec<Article> {
    (1..=count)
        .map(|n| Article {
            source: Source {
                id: None,
                name: format!("Source {n}"),
            },
            title: format!("Story {n}"),
            url: format!("https://example.com/{n}"),
            ..Article::default()
        })
        .collect()
}

fn titles(page: &Page) -> Vec<String> {
    page.data.iter().map(|a| a.title.clone()).collect()
}

#[test]
fn paginate_slices_and_builds_links() {
    let page = paginate(articles(25), 2, 10, "http://localhost:8000");

    assert_eq!(titles(&page).first().map(String::as_str), Some("Story 11"));
    assert_eq!(page.data.len(), 10);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.last_page, 3);
    assert_eq!(page.total, 25);
    assert_eq!(page.from, Some(11));
    assert_eq!(page.to, Some(20));
    assert_eq!(
        page.prev_page_url.as_deref(),
        Some("http://localhost:8000?page=1")
    );
    assert_eq!(
        page.next_page_url.as_deref(),
        Some("http://localhost:8000?page=3")
    );

    let labels: Vec<_> = page.links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec![PREVIOUS_LABEL, "1", "2", "3", NEXT_LABEL]);
    let active: Vec<_> = page.links.iter().filter(|l| l.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].label, "2");
}

#[test]
fn first_and_last_pages_disable_their_edge_links() {
    let first = paginate(articles(25), 1, 10, "/");
    assert_eq!(first.links[0].url, None);
    assert_eq!(first.links[1].url.as_deref(), Some("/?page=1"));

    let last = paginate(articles(25), 3, 10, "/");
    assert_eq!(last.data.len(), 5);
    assert_eq!(last.links.last().and_then(|l| l.url.clone()), None);
}

#[test]
fn page_past_the_end_is_empty_with_links() {
    let page = paginate(articles(5), 4, 10, "/");
    assert!(page.data.is_empty());
    assert_eq!(page.from, None);
    assert_eq!(page.last_page, 1);
    assert_eq!(page.links.len(), 3);
}

#[test]
fn no_articles_yield_single_page() {
    let page = paginate(Vec::new(), 1, 10, "/");
    assert!(page.data.is_empty());
    assert_eq!(page.last_page, 1);
    let labels: Vec<_> = page.links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec![PREVIOUS_LABEL, "1", NEXT_LABEL]);
    assert!(!page.is_failure());
}

#[tokio::test]
async fn service_paginates_successful_fetch() {
    let source = FakeHeadlines::ok(34);
    let service = NewsService::new(source.clone(), 10, "/");

    let page = service.page(4).await;

    assert_eq!(titles(&page), vec!["Story 31", "Story 32", "Story 33", "Story 34"]);
    assert_eq!(page.last_page, 4);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn service_failure_yields_empty_page_without_links() {
    let service = NewsService::new(FakeHeadlines::failing(), 10, "/");

    let page = service.page(1).await;

    assert_eq!(page, Page::empty());
}

#[tokio::test]
async fn every_page_request_hits_upstream() {
    let source = FakeHeadlines::ok(12);
    let local = LocalPageSource::new(Arc::new(NewsService::new(source.clone(), 10, "/")));

    let first = local.fetch_page("/?page=1").await.unwrap();
    let second = local.fetch_page("/?page=2").await.unwrap();

    assert_eq!(first.data.len(), 10);
    assert_eq!(titles(&second), vec!["Story 11", "Story 12"]);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn local_source_reports_upstream_failure() {
    let local = LocalPageSource::new(Arc::new(NewsService::new(
        FakeHeadlines::failing(),
        10,
        "/",
    )));

    let err = local.fetch_page("/?page=2").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(429));
}

#[tokio::test]
async fn failed_navigation_keeps_loaded_page_and_links() {
    let initial = paginate(articles(15), 1, 10, "/");
    let state = TableState::new(initial.clone(), TimestampFormat::default());
    let local = LocalPageSource::new(Arc::new(NewsService::new(
        FakeHeadlines::failing(),
        10,
        "/",
    )));

    let page_two = initial
        .links
        .iter()
        .position(|link| link.label == "2")
        .expect("link to page 2");
    let (state, effects) = update(state, Msg::PageLinkClicked { index: page_two });
    let [Effect::FetchPage { request_id, url }] = effects.as_slice() else {
        panic!("expected one fetch, got {effects:?}");
    };

    let msg = match local.fetch_page(url).await {
        Ok(page) => Msg::PageFetched {
            request_id: *request_id,
            page,
        },
        Err(err) => Msg::PageFetchFailed {
            request_id: *request_id,
            reason: err.to_string(),
        },
    };
    let (state, _) = update(state, msg);

    assert_eq!(state.articles(), initial.data.as_slice());
    assert_eq!(state.links(), initial.links.as_slice());
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.pending_request(), None);
}

#[test]
fn engine_delivers_fetched_pages_by_request_id() {
    let service = Arc::new(NewsService::new(FakeHeadlines::ok(15), 10, "/"));
    let engine = EngineHandle::new(Arc::new(LocalPageSource::new(service))).expect("engine");

    let initial = engine
        .fetch_page_blocking("/?page=1")
        .expect("engine alive")
        .expect("page");
    assert_eq!(initial.data.len(), 10);

    engine.fetch_page(7, "/?page=2");

    let deadline = Instant::now() + Duration::from_secs(5);
    let event = loop {
        if let Some(event) = engine.try_recv() {
            break event;
        }
        assert!(Instant::now() < deadline, "engine produced no event");
        std::thread::sleep(Duration::from_millis(5));
    };

    match event {
        EngineEvent::PageFetched { request_id, result } => {
            assert_eq!(request_id, 7);
            let page = result.expect("page");
            assert_eq!(page.current_page, 2);
            assert_eq!(page.data.len(), 5);
        }
    }
}
