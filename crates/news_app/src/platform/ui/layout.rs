use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
pub struct Areas {
    pub search: Rect,
    pub filters: [Rect; 3],
    pub toggles: Rect,
    pub table: Rect,
    pub pagination: Rect,
    pub status: Rect,
}

pub fn split(area: Rect) -> Areas {
    let [search, filters, toggles, table, pagination, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let filters = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(filters);

    Areas {
        search,
        filters,
        toggles,
        table,
        pagination,
        status,
    }
}

/// Rows of the table body that fit below the header inside the border.
pub fn visible_rows(table: Rect) -> usize {
    usize::from(table.height.saturating_sub(3))
}
