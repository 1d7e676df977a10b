use news_core::{decode_label, CellView, FilterField, TableBody, TableViewModel};
use ratatui::layout::{Constraint, Position, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use super::constants::*;
use super::keys::{Controller, Focus};
use super::layout;

pub fn draw(frame: &mut Frame, view: &TableViewModel, controller: &Controller) {
    let areas = layout::split(frame.area());
    let focus = controller.focus();

    draw_input(frame, areas.search, SEARCH_TITLE, &view.search_input, focus == Focus::Search);
    let filters = [
        (FilterField::Source, SOURCE_FILTER_TITLE),
        (FilterField::Author, AUTHOR_FILTER_TITLE),
        (FilterField::PublishedAt, PUBLISHED_FILTER_TITLE),
    ];
    for ((field, title), area) in filters.into_iter().zip(areas.filters) {
        draw_input(
            frame,
            area,
            title,
            view.filters.get(field),
            focus == Focus::Filter(field),
        );
    }

    frame.render_widget(toggles(view), areas.toggles);
    frame.render_widget(
        table(view, controller.row_offset(), layout::visible_rows(areas.table)),
        areas.table,
    );
    frame.render_widget(pagination(view, controller.selected_link()), areas.pagination);
    frame.render_widget(status(view), areas.status);
}

fn draw_input(frame: &mut Frame, area: Rect, title: &str, text: &str, focused: bool) {
    let mut block = Block::bordered().title(title);
    if focused {
        block = block.border_style(FOCUSED);
    }
    frame.render_widget(Paragraph::new(text).block(block), area);

    if focused {
        let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(width);
        let max_x = area.right().saturating_sub(2);
        frame.set_cursor_position(Position::new(x.min(max_x), area.y + 1));
    }
}

fn toggles(view: &TableViewModel) -> Paragraph<'static> {
    let spans: Vec<Span> = view
        .column_toggles
        .iter()
        .enumerate()
        .flat_map(|(i, toggle)| {
            let mark = if toggle.visible { "[x]" } else { "[ ]" };
            [
                Span::raw(format!("{mark} {} ", i + 1)),
                Span::raw(format!("{}  ", toggle.label)),
            ]
        })
        .collect();
    Paragraph::new(Line::from(spans)).block(Block::bordered().title(COLUMNS_TITLE))
}

fn table(view: &TableViewModel, row_offset: usize, max_rows: usize) -> Table<'static> {
    let header = Row::new(
        view.headers
            .iter()
            .map(|header| Cell::from(header.text()))
            .collect::<Vec<_>>(),
    )
    .style(HEADER);
    let widths = vec![Constraint::Fill(1); view.headers.len().max(1)];

    let rows: Vec<Row> = match &view.body {
        TableBody::Rows(rows) => {
            let offset = row_offset.min(rows.len().saturating_sub(1));
            rows.iter()
                .skip(offset)
                .take(max_rows.max(1))
                .map(|row| Row::new(row.cells.iter().map(cell).collect::<Vec<_>>()))
                .collect()
        }
        TableBody::Empty { message, .. } => {
            vec![Row::new(vec![Cell::from(*message).style(PLACEHOLDER)])]
        }
    };

    let title = Line::from(vec![
        TITLE.bold(),
        Span::raw(format!("page {} ", view.current_page)),
    ]);
    Table::new(rows, widths)
        .header(header)
        .block(Block::bordered().title(title))
        .column_spacing(1)
}

fn cell(view: &CellView) -> Cell<'static> {
    match view {
        CellView::Text(text) => Cell::from(text.clone()),
        CellView::Link { label, .. } => Cell::from(*label).style(LINK),
        CellView::Image { src, .. } => Cell::from(src.clone()).style(PLACEHOLDER),
    }
}

fn pagination(view: &TableViewModel, selected: usize) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(view.pagination.len() * 2);
    for control in &view.pagination {
        let mut style = if control.active {
            ACTIVE_PAGE
        } else if control.is_clickable() {
            Style::new()
        } else {
            INERT_PAGE
        };
        if control.index == selected {
            style = style.patch(SELECTED_PAGE);
        }
        spans.push(Span::styled(format!(" {} ", decode_label(&control.label)), style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans)).block(Block::bordered().title(PAGES_TITLE))
}

fn status(view: &TableViewModel) -> Paragraph<'static> {
    let shown = match &view.body {
        TableBody::Rows(rows) => rows.len(),
        TableBody::Empty { .. } => 0,
    };
    let mut spans = vec![Span::raw(format!(
        " {shown} of {} shown ",
        view.loaded_count
    ))];
    if view.loading {
        spans.push("loading… ".yellow());
    }
    spans.push(Span::raw(format!("| {KEY_HELP}")).dark_gray());
    Paragraph::new(Line::from(spans))
}
