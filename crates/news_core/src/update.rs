use crate::{Effect, Msg, TableState, SEARCH_DEBOUNCE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: TableState, msg: Msg) -> (TableState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchInputChanged(text) => {
            // Every keystroke re-arms the timer; older tokens are ignored on arrival.
            let token = state.stage_search_input(text);
            vec![Effect::ScheduleSearchCommit {
                token,
                delay: SEARCH_DEBOUNCE,
            }]
        }
        Msg::SearchDebounceElapsed { token } => {
            state.commit_search(token);
            Vec::new()
        }
        Msg::FilterChanged { field, value } => {
            state.set_filter(field, value);
            Vec::new()
        }
        Msg::SortClicked(key) => {
            let next = state.sort().clicked(key);
            state.set_sort(next);
            Vec::new()
        }
        Msg::ColumnToggled(column) => {
            state.toggle_column(column);
            Vec::new()
        }
        Msg::PageLinkClicked { index } => {
            let url = state.links().get(index).and_then(|link| link.url.clone());
            match url {
                Some(url) => {
                    let request_id = state.begin_navigation();
                    vec![Effect::FetchPage { request_id, url }]
                }
                None => Vec::new(),
            }
        }
        Msg::PageFetched { request_id, page } => {
            state.finish_navigation(request_id, page);
            Vec::new()
        }
        Msg::PageFetchFailed { request_id, .. } => {
            state.abandon_navigation(request_id);
            Vec::new()
        }
    };

    (state, effects)
}
