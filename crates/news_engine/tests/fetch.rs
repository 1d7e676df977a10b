use std::time::Duration;

use news_engine::{
    FailureKind, FetchSettings, HeadlinesSource, HttpPageSource, NewsApiClient, NewsApiConfig,
    PageSource,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HEADLINES: &str = r#"{
    "status": "ok",
    "totalResults": 2,
    "articles": [
        {
            "source": { "id": null, "name": "The Hindu" },
            "author": "Asha Rao",
            "title": "Monsoon arrives early",
            "description": "IMD says the rains are a week early.",
            "url": "https://example.com/monsoon",
            "urlToImage": null,
            "publishedAt": "2024-06-01T08:15:00Z",
            "content": null
        },
        {
            "source": { "id": "ndtv", "name": "NDTV" },
            "author": null,
            "title": "Markets close higher",
            "description": null,
            "url": "https://example.com/markets",
            "urlToImage": "https://example.com/markets.jpg",
            "publishedAt": "2024-06-02T17:45:00Z",
            "content": "Sensex gained 300 points"
        }
    ]
}"#;

fn client_for(server: &MockServer, settings: FetchSettings) -> NewsApiClient {
    NewsApiClient::new(
        NewsApiConfig {
            endpoint: format!("{}/v2/top-headlines", server.uri()),
            country: "in".to_string(),
            api_key: "secret".to_string(),
        },
        settings,
    )
    .expect("client")
}

#[tokio::test]
async fn top_headlines_sends_country_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .and(query_param("country", "in"))
        .and(query_param("apiKey", "secret"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(HEADLINES, "application/json; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, FetchSettings::default());
    let articles = client.top_headlines().await.expect("fetch ok");

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].source.name, "The Hindu");
    assert_eq!(articles[1].author, None);
    assert_eq!(
        articles[1].url_to_image.as_deref(),
        Some("https://example.com/markets.jpg")
    );
}

#[tokio::test]
async fn top_headlines_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(401).set_body_raw(
            r#"{"status":"error","code":"apiKeyInvalid","message":"bad key"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server, FetchSettings::default());
    let err = client.top_headlines().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(401));
}

#[tokio::test]
async fn top_headlines_reports_upstream_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"error","code":"rateLimited","message":"slow down"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server, FetchSettings::default());
    let err = client.top_headlines().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::Upstream {
            code: Some("rateLimited".to_string())
        }
    );
    assert_eq!(err.message, "slow down");
}

#[tokio::test]
async fn top_headlines_rejects_malformed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server, FetchSettings::default());
    let err = client.top_headlines().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn top_headlines_rejects_html() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let client = client_for(&server, FetchSettings::default());
    let err = client.top_headlines().await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn top_headlines_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(HEADLINES, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let client = client_for(&server, settings);
    let err = client.top_headlines().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn top_headlines_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(HEADLINES, "application/json"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let client = client_for(&server, settings);
    let err = client.top_headlines().await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 10, .. }
    ));
}

#[tokio::test]
async fn http_page_source_resolves_relative_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"current_page":2,"data":[],"links":[{"url":null,"label":"...","active":false}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let source =
        HttpPageSource::new(&format!("{}/news", server.uri()), FetchSettings::default()).unwrap();
    let page = source.fetch_page("/news?page=2").await.expect("page");

    assert_eq!(page.current_page, 2);
    assert!(page.data.is_empty());
    assert_eq!(page.links.len(), 1);
}

#[tokio::test]
async fn http_page_source_treats_empty_failure_page_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"current_page":0,"data":[],"links":[]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let source = HttpPageSource::new(&server.uri(), FetchSettings::default()).unwrap();
    let err = source.fetch_page("/?page=2").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Upstream { code: None });
}

#[tokio::test]
async fn http_page_source_surfaces_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = HttpPageSource::new(&server.uri(), FetchSettings::default()).unwrap();
    let err = source.fetch_page("/?page=1").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}
