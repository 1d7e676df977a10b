use crate::article::{Article, Page, PageLink};
use crate::columns::{Column, ColumnVisibility, FilterField, Filters, SortConfig};
use crate::format::TimestampFormat;
use crate::pipeline;
use crate::view_model::{self, TableViewModel};

pub type RequestId = u64;
pub type DebounceToken = u64;

/// Everything the article table view owns. Created from the first page;
/// only `articles` and `links` are replaced when another page is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableState {
    articles: Vec<Article>,
    links: Vec<PageLink>,
    current_page: usize,
    search_input: String,
    search_query: String,
    debounce_token: DebounceToken,
    filters: Filters,
    sort: SortConfig,
    columns: ColumnVisibility,
    last_request_id: RequestId,
    pending_request: Option<RequestId>,
    timestamp_format: TimestampFormat,
    dirty: bool,
}

impl TableState {
    pub fn new(page: Page, timestamp_format: TimestampFormat) -> Self {
        Self {
            articles: page.data,
            links: page.links,
            current_page: page.current_page,
            timestamp_format,
            dirty: true,
            ..Self::default()
        }
    }

    pub fn view(&self) -> TableViewModel {
        view_model::build(self)
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn links(&self) -> &[PageLink] {
        &self.links
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn columns(&self) -> &ColumnVisibility {
        &self.columns
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending_request
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// The sorted, filtered subset of the loaded page.
    pub fn visible_articles(&self) -> Vec<&Article> {
        pipeline::visible_articles(
            &self.articles,
            &self.search_query,
            &self.filters,
            &self.sort,
            &self.timestamp_format,
        )
    }

    pub(crate) fn stage_search_input(&mut self, text: String) -> DebounceToken {
        self.search_input = text;
        self.debounce_token += 1;
        self.dirty = true;
        self.debounce_token
    }

    /// Commits the staged input if `token` is from the latest keystroke.
    pub(crate) fn commit_search(&mut self, token: DebounceToken) -> bool {
        if token != self.debounce_token || self.search_query == self.search_input {
            return false;
        }
        self.search_query.clone_from(&self.search_input);
        self.dirty = true;
        true
    }

    pub(crate) fn set_filter(&mut self, field: FilterField, value: String) {
        if self.filters.get(field) != value {
            self.filters.set(field, value);
            self.dirty = true;
        }
    }

    pub(crate) fn set_sort(&mut self, sort: SortConfig) {
        self.sort = sort;
        self.dirty = true;
    }

    pub(crate) fn toggle_column(&mut self, column: Column) {
        self.columns.toggle(column);
        self.dirty = true;
    }

    pub(crate) fn begin_navigation(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.pending_request = Some(self.last_request_id);
        self.dirty = true;
        self.last_request_id
    }

    /// Replaces the loaded page if `request_id` is the navigation in flight.
    pub(crate) fn finish_navigation(&mut self, request_id: RequestId, page: Page) -> bool {
        if self.pending_request != Some(request_id) {
            return false;
        }
        self.pending_request = None;
        self.articles = page.data;
        self.links = page.links;
        self.current_page = page.current_page;
        self.dirty = true;
        true
    }

    pub(crate) fn abandon_navigation(&mut self, request_id: RequestId) -> bool {
        if self.pending_request != Some(request_id) {
            return false;
        }
        self.pending_request = None;
        self.dirty = true;
        true
    }
}
