//! Pawview core: pure browsing-session state machine and view-model helpers.
mod effect;
mod filter;
mod history;
mod likes;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::FilterState;
pub use history::{History, HistoryError, HistoryItem};
pub use msg::{FetchFailure, FetchFailureKind, FetchOutcome, FetchedAnimal, Msg};
pub use state::{AppState, RequestId, Theme};
pub use update::update;
pub use view_model::{AppViewModel, ItemView, SurpriseView};
