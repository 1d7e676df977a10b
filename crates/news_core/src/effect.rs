use std::time::Duration;

use crate::{DebounceToken, RequestId};

/// Quiet period before staged search input becomes the active query.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `Msg::SearchDebounceElapsed { token }` after `delay`.
    ScheduleSearchCommit { token: DebounceToken, delay: Duration },
    /// Fetch the page behind `url` and answer with `PageFetched`/`PageFetchFailed`.
    FetchPage { request_id: RequestId, url: String },
}
