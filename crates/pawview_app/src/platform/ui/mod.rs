pub mod input;
pub mod render;

use pawview_core::Msg;

/// Everything the main loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Msg(Msg),
    Help,
    Unknown(String),
    Quit,
}
