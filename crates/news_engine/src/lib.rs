//! News engine: upstream fetching, pagination, page sources and the page endpoint.
mod engine;
mod fetch;
mod paginate;
mod server;
mod service;
mod source;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, HeadlinesSource, NewsApiClient, NewsApiConfig};
pub use paginate::{
    paginate, resolve_page_number, LengthAwarePaginator, DEFAULT_PER_PAGE, GAP_LABEL, NEXT_LABEL,
    ON_EACH_SIDE, PREVIOUS_LABEL,
};
pub use server::{bind_and_serve, router, serve, ServeError};
pub use service::NewsService;
pub use source::{page_param, HttpPageSource, LocalPageSource, PageSource};
pub use types::{EngineEvent, FailureKind, FetchError, RequestId};
