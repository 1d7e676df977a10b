//! News table core: pure article-table state machine and view-model helpers.
mod article;
mod columns;
mod effect;
mod format;
mod msg;
pub mod pipeline;
mod state;
mod update;
mod view_model;

pub use article::{Article, Page, PageLink, Source};
pub use columns::{
    Column, ColumnVisibility, FilterField, Filters, SortConfig, SortDirection, SortKey,
};
pub use effect::{Effect, SEARCH_DEBOUNCE};
pub use format::{decode_label, truncate_content, TimestampFormat, CONTENT_PREVIEW_CHARS};
pub use msg::Msg;
pub use state::{DebounceToken, RequestId, TableState};
pub use update::update;
pub use view_model::{
    render_cell, CellView, ColumnToggleView, HeaderCell, PaginationControl, RowView,
    SortIndicator, TableBody, TableViewModel, AUTHOR_NOT_FOUND, IMAGE_NOT_FOUND, NO_CONTENT,
    NO_NEWS_FOUND, NO_SOURCE, READ_MORE,
};
