use crate::article::Article;
use crate::columns::{Column, Filters, SortConfig, SortDirection};
use crate::format::{truncate_content, TimestampFormat};
use crate::TableState;

pub const NO_NEWS_FOUND: &str = "No News Found";
pub const READ_MORE: &str = "Read more";
pub const IMAGE_NOT_FOUND: &str = "Image Not Found";
pub const NO_SOURCE: &str = "No Source available";
pub const AUTHOR_NOT_FOUND: &str = "Author Not Found";
pub const NO_CONTENT: &str = "No content available";
pub const MISSING_TEXT: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableViewModel {
    pub search_input: String,
    pub filters: Filters,
    pub column_toggles: Vec<ColumnToggleView>,
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
    pub pagination: Vec<PaginationControl>,
    pub current_page: usize,
    /// Articles on the loaded page, before filtering.
    pub loaded_count: usize,
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnToggleView {
    pub column: Column,
    pub label: &'static str,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Ascending,
    Descending,
    Unsorted,
}

impl SortIndicator {
    pub fn symbol(self) -> &'static str {
        match self {
            SortIndicator::Ascending => " ↑",
            SortIndicator::Descending => " ↓",
            SortIndicator::Unsorted => " ↕",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCell {
    pub column: Column,
    pub label: &'static str,
    /// `None` for headers that cannot be sorted.
    pub sort_indicator: Option<SortIndicator>,
}

impl HeaderCell {
    pub fn text(&self) -> String {
        match self.sort_indicator {
            Some(indicator) => format!("{}{}", self.label, indicator.symbol()),
            None => self.label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<RowView>),
    /// Single full-width row shown when no article survives filtering.
    Empty {
        message: &'static str,
        colspan: usize,
    },
}

impl Default for TableBody {
    fn default() -> Self {
        empty_body()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    Text(String),
    /// External link meant to open in a new browsing context.
    Link { href: String, label: &'static str },
    /// Deferred image with a blur-in placeholder; `alt` doubles as the load-failure text.
    Image { src: String, alt: &'static str },
}

impl CellView {
    /// Plain-text rendering for surfaces that cannot show links or images.
    pub fn display_text(&self) -> &str {
        match self {
            CellView::Text(text) => text,
            CellView::Link { label, .. } => label,
            CellView::Image { src, .. } => src,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControl {
    pub index: usize,
    /// Pre-escaped display text, passed through verbatim.
    pub label: String,
    pub url: Option<String>,
    pub active: bool,
}

impl PaginationControl {
    pub fn is_clickable(&self) -> bool {
        self.url.is_some()
    }
}

pub(crate) fn build(state: &TableState) -> TableViewModel {
    let columns = state.columns();
    let sort = state.sort();
    let fmt = state.timestamp_format();

    let column_toggles = Column::ALL
        .into_iter()
        .map(|column| ColumnToggleView {
            column,
            label: column.toggle_label(),
            visible: columns.is_visible(column),
        })
        .collect();

    let headers = columns
        .visible()
        .map(|column| HeaderCell {
            column,
            label: column.header(),
            sort_indicator: sort_indicator(column, sort),
        })
        .collect();

    let visible = state.visible_articles();
    let body = if visible.is_empty() {
        empty_body()
    } else {
        TableBody::Rows(
            visible
                .into_iter()
                .map(|article| RowView {
                    cells: columns
                        .visible()
                        .map(|column| render_cell(article, column, fmt))
                        .collect(),
                })
                .collect(),
        )
    };

    let pagination = state
        .links()
        .iter()
        .enumerate()
        .map(|(index, link)| PaginationControl {
            index,
            label: link.label.clone(),
            url: link.url.clone(),
            active: link.active,
        })
        .collect();

    TableViewModel {
        search_input: state.search_input().to_string(),
        filters: state.filters().clone(),
        column_toggles,
        headers,
        body,
        pagination,
        current_page: state.current_page(),
        loaded_count: state.articles().len(),
        loading: state.pending_request().is_some(),
    }
}

fn empty_body() -> TableBody {
    TableBody::Empty {
        message: NO_NEWS_FOUND,
        colspan: Column::ALL.len(),
    }
}

fn sort_indicator(column: Column, sort: SortConfig) -> Option<SortIndicator> {
    let key = column.sort_key()?;
    Some(match (sort.key, sort.direction) {
        (Some(active), SortDirection::Ascending) if active == key => SortIndicator::Ascending,
        (Some(active), SortDirection::Descending) if active == key => SortIndicator::Descending,
        _ => SortIndicator::Unsorted,
    })
}

/// Applies the per-column presentation fallbacks for absent values.
pub fn render_cell(article: &Article, column: Column, fmt: &TimestampFormat) -> CellView {
    match column {
        Column::Source => text_or(Some(&article.source.name), NO_SOURCE),
        Column::Author => text_or(article.author.as_deref(), AUTHOR_NOT_FOUND),
        Column::Title => text_or(Some(&article.title), MISSING_TEXT),
        Column::Description => text_or(article.description.as_deref(), MISSING_TEXT),
        Column::PublishedAt => match present(article.published_at.as_deref()) {
            Some(raw) => CellView::Text(fmt.format(raw)),
            None => CellView::Text(MISSING_TEXT.to_string()),
        },
        Column::Content => match present(article.content.as_deref()) {
            Some(content) => CellView::Text(truncate_content(content)),
            None => CellView::Text(NO_CONTENT.to_string()),
        },
        Column::Url => CellView::Link {
            href: article.url.clone(),
            label: READ_MORE,
        },
        Column::Image => match present(article.url_to_image.as_deref()) {
            Some(src) => CellView::Image {
                src: src.to_string(),
                alt: IMAGE_NOT_FOUND,
            },
            None => CellView::Text(IMAGE_NOT_FOUND.to_string()),
        },
    }
}

// Empty strings count as absent, like the fields that are missing outright.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn text_or(value: Option<&str>, fallback: &str) -> CellView {
    CellView::Text(present(value).unwrap_or(fallback).to_string())
}
