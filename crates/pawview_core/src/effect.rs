use crate::{RequestId, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one animal for the history; `filter` names the provider to use,
    /// `None` picks one at random.
    FetchAnimal {
        request_id: RequestId,
        filter: Option<String>,
    },
    /// Fetch one random animal that is shown once and never recorded.
    FetchSurprise { request_id: RequestId },
    PersistTheme { theme: Theme },
}
