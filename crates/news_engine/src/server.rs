//! HTTP page endpoint: serves the paginated headline list as JSON.

use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header::HOST, HeaderMap, Uri};
use axum::routing::get;
use axum::{Json, Router};
use news_core::Page;
use news_logging::news_info;
use tokio::net::TcpListener;

use crate::paginate::resolve_page_number;
use crate::service::NewsService;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },
    #[error("server stopped: {0}")]
    Io(#[from] io::Error),
}

pub fn router(service: Arc<NewsService>) -> Router {
    Router::new()
        .route("/", get(news_handler))
        .route("/news", get(news_handler))
        .route("/healthz", get(healthz_handler))
        .with_state(service)
}

async fn news_handler(
    State(service): State<Arc<NewsService>>,
    headers: HeaderMap,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Page> {
    let page = resolve_page_number(params.get("page").map(String::as_str));
    let path = request_path(&headers, &uri).unwrap_or_else(|| service.path().to_string());
    Json(service.page_at(page, &path).await)
}

async fn healthz_handler() -> &'static str {
    "ok"
}

/// Current request url without its query, the base for page links.
fn request_path(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let host = headers.get(HOST)?.to_str().ok()?;
    let path = uri.path().trim_end_matches('/');
    Some(format!("http://{host}{path}"))
}

pub async fn serve(listener: TcpListener, service: Arc<NewsService>) -> Result<(), ServeError> {
    if let Ok(addr) = listener.local_addr() {
        news_info!("Serving headlines on http://{}", addr);
    }
    axum::serve(listener, router(service)).await?;
    Ok(())
}

pub async fn bind_and_serve(addr: &str, service: Arc<NewsService>) -> Result<(), ServeError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    serve(listener, service).await
}
