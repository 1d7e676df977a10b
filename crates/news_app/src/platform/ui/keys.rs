//! Maps terminal key presses onto core messages.
//!
//! The controller only tracks what the core does not care about: which
//! input has focus, which pagination control is selected and how far the
//! table is scrolled.

use news_core::{Column, FilterField, Msg, SortKey, TableBody, TableViewModel};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Search,
    Filter(FilterField),
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Table,
        Focus::Search,
        Focus::Filter(FilterField::Source),
        Focus::Filter(FilterField::Author),
        Focus::Filter(FilterField::PublishedAt),
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Msg(Msg),
    /// Controller-local change; the frame must be redrawn.
    Redraw,
    Quit,
}

#[derive(Debug, Default)]
pub struct Controller {
    focus: Focus,
    selected_link: usize,
    row_offset: usize,
    page_seen: usize,
}

impl Controller {
    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected_link(&self) -> usize {
        self.selected_link
    }

    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Re-anchors selection and scroll when a different page is shown.
    pub fn sync(&mut self, view: &TableViewModel) {
        if view.current_page != self.page_seen {
            self.page_seen = view.current_page;
            self.row_offset = 0;
            self.selected_link = view
                .pagination
                .iter()
                .position(|control| control.active)
                .unwrap_or(0);
        }
        let last = view.pagination.len().saturating_sub(1);
        self.selected_link = self.selected_link.min(last);
        self.row_offset = self.row_offset.min(last_row(view));
    }

    pub fn handle_key(&mut self, key: KeyEvent, view: &TableViewModel) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Some(Action::Redraw);
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return Some(Action::Redraw);
            }
            KeyCode::Esc => {
                self.focus = Focus::Table;
                return Some(Action::Redraw);
            }
            _ => {}
        }

        match self.focus {
            Focus::Table => self.handle_table_key(key, view),
            Focus::Search => edit(&view.search_input, key).map(|text| {
                Action::Msg(Msg::SearchInputChanged(text))
            }),
            Focus::Filter(field) => edit(view.filters.get(field), key).map(|value| {
                Action::Msg(Msg::FilterChanged { field, value })
            }),
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent, view: &TableViewModel) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('/') => {
                self.focus = Focus::Search;
                Some(Action::Redraw)
            }
            KeyCode::Char(digit @ '1'..='8') => {
                let index = digit as usize - '1' as usize;
                Some(Action::Msg(Msg::ColumnToggled(Column::ALL[index])))
            }
            KeyCode::Left => {
                self.selected_link = self.selected_link.saturating_sub(1);
                Some(Action::Redraw)
            }
            KeyCode::Right => {
                let last = view.pagination.len().saturating_sub(1);
                self.selected_link = (self.selected_link + 1).min(last);
                Some(Action::Redraw)
            }
            KeyCode::Enter => click(view, self.selected_link),
            KeyCode::Char('b') => click(view, 0),
            KeyCode::Char('n') => click(view, view.pagination.len().checked_sub(1)?),
            KeyCode::Up => {
                self.row_offset = self.row_offset.saturating_sub(1);
                Some(Action::Redraw)
            }
            KeyCode::Down => {
                self.row_offset = (self.row_offset + 1).min(last_row(view));
                Some(Action::Redraw)
            }
            KeyCode::Home => {
                self.row_offset = 0;
                Some(Action::Redraw)
            }
            KeyCode::Char(c) => sort_key_for(c).map(|key| Action::Msg(Msg::SortClicked(key))),
            _ => None,
        }
    }
}

fn last_row(view: &TableViewModel) -> usize {
    match &view.body {
        TableBody::Rows(rows) => rows.len().saturating_sub(1),
        TableBody::Empty { .. } => 0,
    }
}

fn sort_key_for(c: char) -> Option<SortKey> {
    match c {
        's' => Some(SortKey::SourceName),
        'a' => Some(SortKey::Author),
        't' => Some(SortKey::Title),
        'd' => Some(SortKey::Description),
        'p' => Some(SortKey::PublishedAt),
        'c' => Some(SortKey::Content),
        _ => None,
    }
}

fn click(view: &TableViewModel, index: usize) -> Option<Action> {
    view.pagination
        .get(index)
        .filter(|control| control.is_clickable())
        .map(|control| Action::Msg(Msg::PageLinkClicked { index: control.index }))
}

/// Line editing at the end of the text; `None` when the key changes nothing.
fn edit(current: &str, key: KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut text = current.to_string();
            text.push(c);
            Some(text)
        }
        KeyCode::Backspace if !current.is_empty() => {
            let mut text = current.to_string();
            text.pop();
            Some(text)
        }
        KeyCode::Delete if !current.is_empty() => Some(String::new()),
        _ => None,
    }
}
