//! Derived-view pipeline: sort the loaded page, then filter it.
//!
//! Everything here is pure and recomputed on every render.

use crate::article::Article;
use crate::columns::{Filters, SortConfig, SortDirection};
use crate::format::TimestampFormat;

/// Stable sort on the resolved field's string value. Equal keys keep their
/// page order in both directions.
pub fn sort_articles<'a>(articles: &'a [Article], sort: &SortConfig) -> Vec<&'a Article> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    if let Some(key) = sort.key {
        sorted.sort_by(|a, b| {
            let ord = a.field(key).cmp(b.field(key));
            match sort.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    sorted
}

/// Whether `article` survives the global search and every per-field filter.
pub fn matches(article: &Article, query: &str, filters: &Filters, fmt: &TimestampFormat) -> bool {
    let query = query.to_lowercase();
    let published = article
        .published_at
        .as_deref()
        .map(|raw| fmt.format(raw).to_lowercase())
        .unwrap_or_default();
    let source = article.source.name.to_lowercase();
    let author = article.author.as_deref().map(str::to_lowercase);

    let search_hit = article.title.to_lowercase().contains(&query)
        || source.contains(&query)
        || author.as_deref().is_some_and(|a| a.contains(&query))
        || published.contains(&query);

    search_hit
        && source.contains(&filters.source.to_lowercase())
        && author_matches(author.as_deref(), &filters.author.to_lowercase())
        && published.contains(&filters.published_at.to_lowercase())
}

fn author_matches(author: Option<&str>, filter: &str) -> bool {
    match author {
        Some(author) => author.contains(filter),
        None => filter.is_empty(),
    }
}

/// Sort-then-filter over the currently loaded page.
pub fn visible_articles<'a>(
    articles: &'a [Article],
    query: &str,
    filters: &Filters,
    sort: &SortConfig,
    fmt: &TimestampFormat,
) -> Vec<&'a Article> {
    sort_articles(articles, sort)
        .into_iter()
        .filter(|article| matches(article, query, filters, fmt))
        .collect()
}
