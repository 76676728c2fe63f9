use crate::{RequestId, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedAnimal {
    pub url: String,
    pub provider: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailureKind {
    /// Network, HTTP or payload failure.
    FetchFailed,
    /// Strict validation gave up after its attempt cap.
    RetryExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FetchFailureKind,
    pub message: String,
}

pub type FetchOutcome = Result<FetchedAnimal, FetchFailure>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application finished setting up; loads the first photo.
    Started,
    /// User asked for a new photo.
    NextClicked,
    /// User stepped back one photo.
    PrevClicked,
    /// User stepped forward to an already fetched photo.
    ForwardClicked,
    /// User liked the current photo.
    LikeClicked,
    /// User clicked a provider filter button.
    FilterToggled(String),
    /// User dropped the provider filter.
    FilterCleared,
    /// User switched between light and dark theme.
    ThemeToggled,
    /// Restore the persisted theme at startup.
    RestoreTheme(Theme),
    /// User opened or closed the enlarged view of the current photo.
    LightboxToggled,
    /// User asked for a surprise photo outside the history.
    SurpriseClicked,
    /// Engine completion for a history fetch.
    FetchDone {
        request_id: RequestId,
        outcome: FetchOutcome,
    },
    /// Engine completion for a surprise fetch.
    SurpriseDone {
        request_id: RequestId,
        outcome: FetchOutcome,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
