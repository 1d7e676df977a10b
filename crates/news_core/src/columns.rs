/// The eight table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Source,
    Author,
    Title,
    Description,
    PublishedAt,
    Content,
    Url,
    Image,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Source,
        Column::Author,
        Column::Title,
        Column::Description,
        Column::PublishedAt,
        Column::Content,
        Column::Url,
        Column::Image,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Source => "Source",
            Column::Author => "Author",
            Column::Title => "Title",
            Column::Description => "Description",
            Column::PublishedAt => "Published At",
            Column::Content => "Content",
            Column::Url => "URL",
            Column::Image => "Image",
        }
    }

    /// Label used next to the visibility checkbox.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Column::Source => "Source",
            Column::Author => "Author",
            Column::Title => "Title",
            Column::Description => "Description",
            Column::PublishedAt => "PublishedAt",
            Column::Content => "Content",
            Column::Url => "Url",
            Column::Image => "Image",
        }
    }

    /// `None` for the link and image columns, whose headers are not clickable.
    pub fn sort_key(self) -> Option<SortKey> {
        match self {
            Column::Source => Some(SortKey::SourceName),
            Column::Author => Some(SortKey::Author),
            Column::Title => Some(SortKey::Title),
            Column::Description => Some(SortKey::Description),
            Column::PublishedAt => Some(SortKey::PublishedAt),
            Column::Content => Some(SortKey::Content),
            Column::Url | Column::Image => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    SourceName,
    Author,
    Title,
    Description,
    PublishedAt,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Header click: same key flips ascending to descending, anything else
    /// starts over ascending.
    pub fn clicked(self, key: SortKey) -> Self {
        let direction = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self {
            key: Some(key),
            direction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnVisibility {
    shown: [bool; 8],
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self { shown: [true; 8] }
    }
}

impl ColumnVisibility {
    pub fn is_visible(&self, column: Column) -> bool {
        self.shown[column.index()]
    }

    pub fn toggle(&mut self, column: Column) {
        let slot = &mut self.shown[column.index()];
        *slot = !*slot;
    }

    pub fn visible(&self) -> impl Iterator<Item = Column> + '_ {
        Column::ALL
            .into_iter()
            .filter(move |column| self.is_visible(*column))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Source,
    Author,
    PublishedAt,
}

/// Per-field free-text filters; an empty string matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub source: String,
    pub author: String,
    pub published_at: String,
}

impl Filters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Source => &self.source,
            FilterField::Author => &self.author,
            FilterField::PublishedAt => &self.published_at,
        }
    }

    pub fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Source => self.source = value,
            FilterField::Author => self.author = value,
            FilterField::PublishedAt => self.published_at = value,
        }
    }
}
