use serde::{Deserialize, Serialize};

use crate::columns::SortKey;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// One news item as delivered by the upstream top-headlines endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    /// Resolves a sort key to the raw field value; absent fields read as `""`.
    pub fn field(&self, key: SortKey) -> &str {
        match key {
            SortKey::SourceName => &self.source.name,
            SortKey::Author => self.author.as_deref().unwrap_or(""),
            SortKey::Title => &self.title,
            SortKey::Description => self.description.as_deref().unwrap_or(""),
            SortKey::PublishedAt => self.published_at.as_deref().unwrap_or(""),
            SortKey::Content => self.content.as_deref().unwrap_or(""),
        }
    }
}

/// One pagination control. `label` is pre-escaped display text
/// (e.g. `&laquo; Previous`); a `None` url marks an inert entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

/// One page of articles wrapped in length-aware pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub data: Vec<Article>,
    #[serde(default)]
    pub links: Vec<PageLink>,
    #[serde(default)]
    pub current_page: usize,
    #[serde(default)]
    pub last_page: usize,
    #[serde(default)]
    pub per_page: usize,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub from: Option<usize>,
    #[serde(default)]
    pub to: Option<usize>,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub first_page_url: Option<String>,
    #[serde(default)]
    pub last_page_url: Option<String>,
    #[serde(default)]
    pub prev_page_url: Option<String>,
    #[serde(default)]
    pub next_page_url: Option<String>,
}

impl Page {
    /// The shape returned when the upstream call failed: no articles, no links.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True for [`Page::empty`]. A real page always carries at least the
    /// previous/next links, even past the last page.
    pub fn is_failure(&self) -> bool {
        self.data.is_empty() && self.links.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
