use crate::view_model::{AppViewModel, ItemView, SurpriseView};
use crate::{FetchFailure, FetchedAnimal, FilterState, History};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Session object: everything the viewer knows about one browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    history: History,
    filter: FilterState,
    theme: Theme,
    last_request_id: RequestId,
    pending_fetch: Option<RequestId>,
    pending_surprise: Option<RequestId>,
    failure: Option<FetchFailure>,
    surprise: Option<FetchedAnimal>,
    lightbox: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            current: self.history.current().map(|item| ItemView {
                url: item.url.clone(),
                provider: item.provider.clone(),
                likes: item.likes,
            }),
            cursor: self.history.current_index(),
            history_len: self.history.len(),
            is_at_start: self.history.is_at_start(),
            can_go_forward: self.history.can_go_forward(),
            total_likes: self.history.total_likes(),
            active_filter: self.filter.active().map(ToOwned::to_owned),
            theme: self.theme,
            loading: self.pending_fetch.is_some(),
            failure: self.failure.clone(),
            surprise: self.surprise.as_ref().map(|animal| SurpriseView {
                url: animal.url.clone(),
                provider: animal.provider.clone(),
            }),
            lightbox: self.lightbox && self.history.current().is_some(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Id of the history fetch whose completion will be applied, if any.
    pub fn pending_fetch(&self) -> Option<RequestId> {
        self.pending_fetch
    }

    pub fn pending_surprise(&self) -> Option<RequestId> {
        self.pending_surprise
    }

    /// Returns whether anything visible changed since the last call and
    /// clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub(crate) fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.mark_dirty();
        }
    }

    /// Starts a history fetch, superseding any fetch already in flight.
    pub(crate) fn begin_fetch(&mut self) -> RequestId {
        let request_id = self.next_request_id();
        self.pending_fetch = Some(request_id);
        self.mark_dirty();
        request_id
    }

    pub(crate) fn begin_surprise(&mut self) -> RequestId {
        let request_id = self.next_request_id();
        self.pending_surprise = Some(request_id);
        request_id
    }

    /// Clears the in-flight marker if `request_id` is the one being waited
    /// on. Returns false for stale completions.
    pub(crate) fn settle_fetch(&mut self, request_id: RequestId) -> bool {
        if self.pending_fetch == Some(request_id) {
            self.pending_fetch = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn settle_surprise(&mut self, request_id: RequestId) -> bool {
        if self.pending_surprise == Some(request_id) {
            self.pending_surprise = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn set_failure(&mut self, failure: Option<FetchFailure>) {
        self.failure = failure;
        self.mark_dirty();
    }

    pub(crate) fn set_surprise(&mut self, surprise: Option<FetchedAnimal>) {
        if self.surprise != surprise {
            self.surprise = surprise;
            self.mark_dirty();
        }
    }

    /// Opens the enlarged view, only when a photo is displayed.
    pub(crate) fn toggle_lightbox(&mut self) {
        if !self.lightbox && self.history.current().is_none() {
            return;
        }
        self.lightbox = !self.lightbox;
        self.mark_dirty();
    }

    pub(crate) fn close_lightbox(&mut self) {
        if self.lightbox {
            self.lightbox = false;
            self.mark_dirty();
        }
    }

    fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }
}
