use ratatui::style::{Color, Modifier, Style};

pub const TITLE: &str = " Top Headlines ";
pub const SEARCH_TITLE: &str = " Search ";
pub const SOURCE_FILTER_TITLE: &str = " Source ";
pub const AUTHOR_FILTER_TITLE: &str = " Author ";
pub const PUBLISHED_FILTER_TITLE: &str = " Published At ";
pub const COLUMNS_TITLE: &str = " Columns ";
pub const PAGES_TITLE: &str = " Pages ";

pub const KEY_HELP: &str =
    "Tab focus | 1-8 columns | s a t d p c sort | ←/→ Enter pages | n/b next/prev | q quit";

pub const FOCUSED: Style = Style::new().fg(Color::Yellow);
pub const HEADER: Style = Style::new().add_modifier(Modifier::BOLD);
pub const ACTIVE_PAGE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);
pub const INERT_PAGE: Style = Style::new().fg(Color::DarkGray);
pub const SELECTED_PAGE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
pub const LINK: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::UNDERLINED);
pub const PLACEHOLDER: Style = Style::new().fg(Color::DarkGray);
