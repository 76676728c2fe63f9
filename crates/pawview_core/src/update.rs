use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started | Msg::NextClicked => {
            // Single flight: a second "next" while one is outstanding is dropped.
            if state.pending_fetch().is_some() {
                return (state, Vec::new());
            }
            state.set_surprise(None);
            vec![start_fetch(&mut state)]
        }
        Msg::PrevClicked => {
            if state.history_mut().step_back().is_ok() {
                state.set_surprise(None);
                state.close_lightbox();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ForwardClicked => {
            if state.history_mut().step_forward().is_ok() {
                state.set_surprise(None);
                state.close_lightbox();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::LikeClicked => {
            if let Some(index) = state.history().current_index() {
                if state.history_mut().increment_like(index).is_ok() {
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::FilterToggled(provider) => {
            state.filter_mut().toggle(&provider);
            vec![start_fetch(&mut state)]
        }
        Msg::FilterCleared => {
            if state.filter().active().is_none() {
                return (state, Vec::new());
            }
            state.filter_mut().clear();
            vec![start_fetch(&mut state)]
        }
        Msg::ThemeToggled => {
            let theme = state.theme().toggled();
            state.set_theme(theme);
            vec![Effect::PersistTheme { theme }]
        }
        Msg::RestoreTheme(theme) => {
            state.set_theme(theme);
            Vec::new()
        }
        Msg::LightboxToggled => {
            state.toggle_lightbox();
            Vec::new()
        }
        Msg::SurpriseClicked => {
            if state.pending_surprise().is_some() {
                return (state, Vec::new());
            }
            let request_id = state.begin_surprise();
            vec![Effect::FetchSurprise { request_id }]
        }
        Msg::FetchDone {
            request_id,
            outcome,
        } => {
            // Completions of superseded requests never touch the history.
            if !state.settle_fetch(request_id) {
                return (state, Vec::new());
            }
            match outcome {
                Ok(animal) => {
                    state
                        .history_mut()
                        .record_new_item(animal.url, animal.provider);
                    state.close_lightbox();
                    state.set_failure(None);
                }
                Err(failure) => state.set_failure(Some(failure)),
            }
            Vec::new()
        }
        Msg::SurpriseDone {
            request_id,
            outcome,
        } => {
            if state.settle_surprise(request_id) {
                if let Ok(animal) = outcome {
                    state.set_surprise(Some(animal));
                }
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_fetch(state: &mut AppState) -> Effect {
    let request_id = state.begin_fetch();
    Effect::FetchAnimal {
        request_id,
        filter: state.filter().active().map(ToOwned::to_owned),
    }
}
