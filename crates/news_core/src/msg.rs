use crate::{Column, DebounceToken, FilterField, Page, RequestId, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User typed into the search box (raw, not yet debounced).
    SearchInputChanged(String),
    /// The debounce timer armed for `token` ran out.
    SearchDebounceElapsed { token: DebounceToken },
    /// User edited one of the per-field filter boxes.
    FilterChanged { field: FilterField, value: String },
    /// User clicked a sortable column header.
    SortClicked(SortKey),
    /// User flipped a column visibility checkbox.
    ColumnToggled(Column),
    /// User clicked the pagination control at `index`.
    PageLinkClicked { index: usize },
    /// A page requested by `PageLinkClicked` arrived.
    PageFetched { request_id: RequestId, page: Page },
    /// A page request failed; `reason` is for diagnostics only.
    PageFetchFailed { request_id: RequestId, reason: String },
}
