use crate::{FetchFailure, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub url: String,
    pub provider: String,
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurpriseView {
    pub url: String,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub current: Option<ItemView>,
    pub cursor: Option<usize>,
    pub history_len: usize,
    pub is_at_start: bool,
    pub can_go_forward: bool,
    pub total_likes: u64,
    pub active_filter: Option<String>,
    pub theme: Theme,
    pub loading: bool,
    pub failure: Option<FetchFailure>,
    pub surprise: Option<SurpriseView>,
    /// The current photo is shown enlarged.
    pub lightbox: bool,
}

impl AppViewModel {
    /// Like count of the displayed photo, 0 when nothing is shown.
    pub fn like_count(&self) -> u32 {
        self.current.as_ref().map_or(0, |item| item.likes)
    }
}
