use news_core::{update, Article, Effect, Msg, Page, Source, TableState, TimestampFormat};

fn article(title: &str) -> Article {
    Article {
        source: Source {
            id: None,
            name: "Wire".to_string(),
        },
        title: title.to_string(),
        ..Article::default()
    }
}

fn state() -> TableState {
    let page = Page {
        data: vec![article("Rust 2024"), article("Monsoon update"), article("Rusty nails")],
        ..Page::default()
    };
    let mut state = TableState::new(page, TimestampFormat::default());
    state.consume_dirty();
    state
}

fn type_text(state: TableState, keystrokes: &[&str]) -> (TableState, Vec<u64>) {
    let mut tokens = Vec::new();
    let mut state = state;
    for text in keystrokes {
        let (next, effects) = update(state, Msg::SearchInputChanged(text.to_string()));
        state = next;
        for effect in effects {
            if let Effect::ScheduleSearchCommit { token, .. } = effect {
                tokens.push(token);
            }
        }
    }
    (state, tokens)
}

fn visible_titles(state: &TableState) -> Vec<String> {
    state
        .visible_articles()
        .iter()
        .map(|a| a.title.clone())
        .collect()
}

#[test]
fn rapid_keystrokes_commit_once_with_final_value() {
    let (state, tokens) = type_text(state(), &["r", "ru", "rus", "rust "]);
    assert_eq!(tokens, vec![1, 2, 3, 4]);

    // Timers armed by earlier keystrokes fire but were superseded.
    let mut state = state;
    for token in &tokens[..3] {
        let (mut next, effects) = update(state, Msg::SearchDebounceElapsed { token: *token });
        assert!(effects.is_empty());
        assert_eq!(next.search_query(), "");
        next.consume_dirty();
        state = next;
    }

    let (mut state, _) = update(state, Msg::SearchDebounceElapsed { token: 4 });
    assert!(state.consume_dirty());
    assert_eq!(state.search_query(), "rust ");
    assert_eq!(visible_titles(&state), vec!["Rust 2024"]);
}

#[test]
fn pause_after_last_keystroke_commits_exactly_once() {
    let (state, tokens) = type_text(state(), &["monsoon"]);
    let token = tokens[0];

    let (mut state, _) = update(state, Msg::SearchDebounceElapsed { token });
    assert!(state.consume_dirty());
    assert_eq!(state.search_query(), "monsoon");

    // A duplicate delivery of the same timer changes nothing.
    let (mut state, _) = update(state, Msg::SearchDebounceElapsed { token });
    assert!(!state.consume_dirty());
    assert_eq!(visible_titles(&state), vec!["Monsoon update"]);
}

#[test]
fn clearing_the_search_restores_all_rows() {
    let (state, tokens) = type_text(state(), &["rust"]);
    let (state, _) = update(state, Msg::SearchDebounceElapsed { token: tokens[0] });
    assert_eq!(visible_titles(&state).len(), 2);

    let (state, tokens) = type_text(state, &[""]);
    let (state, _) = update(state, Msg::SearchDebounceElapsed { token: tokens[0] });
    assert_eq!(state.search_query(), "");
    assert_eq!(visible_titles(&state).len(), 3);
}
