//! Length-aware pagination: slices the fetched article list and builds the
//! first/previous/window/next link list the table view renders.

use std::ops::RangeInclusive;

use news_core::{Article, Page, PageLink};

pub const DEFAULT_PER_PAGE: usize = 10;
/// Page links shown on each side of the current page in the sliding window.
pub const ON_EACH_SIDE: usize = 3;

pub const PREVIOUS_LABEL: &str = "&laquo; Previous";
pub const NEXT_LABEL: &str = "Next &raquo;";
pub const GAP_LABEL: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
enum WindowItem {
    Pages(RangeInclusive<usize>),
    Gap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthAwarePaginator {
    total: usize,
    per_page: usize,
    current_page: usize,
    path: String,
}

impl LengthAwarePaginator {
    pub fn new(total: usize, per_page: usize, current_page: usize, path: impl Into<String>) -> Self {
        Self {
            total,
            per_page: per_page.max(1),
            current_page: current_page.max(1),
            path: path.into(),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn last_page(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page()
    }

    pub fn url(&self, page: usize) -> String {
        let separator = if self.path.contains('?') { '&' } else { '?' };
        format!("{}{}page={}", self.path, separator, page.max(1))
    }

    pub fn previous_page_url(&self) -> Option<String> {
        (self.current_page > 1).then(|| self.url(self.current_page - 1))
    }

    pub fn next_page_url(&self) -> Option<String> {
        self.has_more_pages()
            .then(|| self.url(self.current_page + 1))
    }

    /// Previous link, numbered window with `...` gaps, next link.
    pub fn links(&self) -> Vec<PageLink> {
        let mut links = vec![PageLink {
            url: self.previous_page_url(),
            label: PREVIOUS_LABEL.to_string(),
            active: false,
        }];

        for item in self.window() {
            match item {
                WindowItem::Pages(range) => {
                    links.extend(range.map(|page| PageLink {
                        url: Some(self.url(page)),
                        label: page.to_string(),
                        active: page == self.current_page,
                    }));
                }
                WindowItem::Gap => links.push(PageLink {
                    url: None,
                    label: GAP_LABEL.to_string(),
                    active: false,
                }),
            }
        }

        links.push(PageLink {
            url: self.next_page_url(),
            label: NEXT_LABEL.to_string(),
            active: false,
        });
        links
    }

    fn window(&self) -> Vec<WindowItem> {
        let last = self.last_page();
        let current = self.current_page;

        if last < ON_EACH_SIDE * 2 + 8 {
            return vec![WindowItem::Pages(1..=last)];
        }

        let window = ON_EACH_SIDE + 4;
        let start = WindowItem::Pages(1..=2);
        let finish = WindowItem::Pages(last - 1..=last);

        if current <= window {
            vec![
                WindowItem::Pages(1..=window + ON_EACH_SIDE),
                WindowItem::Gap,
                finish,
            ]
        } else if current > last - window {
            vec![
                start,
                WindowItem::Gap,
                WindowItem::Pages(last - (window + ON_EACH_SIDE - 1)..=last),
            ]
        } else {
            vec![
                start,
                WindowItem::Gap,
                WindowItem::Pages(current - ON_EACH_SIDE..=current + ON_EACH_SIDE),
                WindowItem::Gap,
                finish,
            ]
        }
    }

    /// Wraps the items of the current page into the serialized page object.
    pub fn into_page(self, data: Vec<Article>) -> Page {
        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            let from = (self.current_page - 1) * self.per_page + 1;
            (Some(from), Some(from + data.len() - 1))
        };

        Page {
            links: self.links(),
            current_page: self.current_page,
            last_page: self.last_page(),
            per_page: self.per_page,
            total: self.total,
            from,
            to,
            first_page_url: Some(self.url(1)),
            last_page_url: Some(self.url(self.last_page())),
            prev_page_url: self.previous_page_url(),
            next_page_url: self.next_page_url(),
            path: self.path,
            data,
        }
    }
}

/// Accepts integers >= 1; anything else (missing, zero, negative, garbage)
/// resolves to the first page.
pub fn resolve_page_number(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Slices one page out of the full article list.
pub fn paginate(articles: Vec<Article>, current_page: usize, per_page: usize, path: &str) -> Page {
    let paginator = LengthAwarePaginator::new(articles.len(), per_page, current_page, path);
    let per_page = per_page.max(1);
    let offset = (paginator.current_page() - 1).saturating_mul(per_page);
    let data = articles.into_iter().skip(offset).take(per_page).collect();
    paginator.into_page(data)
}
