use std::sync::{mpsc, Arc};

use pawview_core::{Effect, FetchFailure, FetchFailureKind, FetchOutcome, FetchedAnimal, Msg};
use pawview_engine::{
    AnimalPhoto, EngineConfig, EngineEvent, EngineHandle, EventSink, FetchError, FlagStore,
};
use pawview_logging::{paw_debug, paw_warn};

use super::persistence;
use super::ui::UiEvent;

pub struct EffectRunner {
    engine: EngineHandle,
    flags: FlagStore,
    ui_tx: mpsc::Sender<UiEvent>,
}

impl EffectRunner {
    pub fn new(
        config: EngineConfig,
        flags: FlagStore,
        ui_tx: mpsc::Sender<UiEvent>,
    ) -> Result<Self, FetchError> {
        let sink = Arc::new(MsgSink {
            ui_tx: ui_tx.clone(),
        });
        let engine = EngineHandle::new(config, sink)?;
        Ok(Self {
            engine,
            flags,
            ui_tx,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchAnimal { request_id, filter } => {
                    paw_debug!("FetchAnimal request_id={} filter={:?}", request_id, filter);
                    if let Err(err) = self.engine.fetch(request_id, filter) {
                        self.report(Msg::FetchDone {
                            request_id,
                            outcome: map_result(Err(err)),
                        });
                    }
                }
                Effect::FetchSurprise { request_id } => {
                    paw_debug!("FetchSurprise request_id={}", request_id);
                    if let Err(err) = self.engine.surprise(request_id) {
                        self.report(Msg::SurpriseDone {
                            request_id,
                            outcome: map_result(Err(err)),
                        });
                    }
                }
                Effect::PersistTheme { theme } => persistence::save_theme(&self.flags, theme),
            }
        }
    }

    /// Feeds a completion the engine could not deliver back into the loop.
    fn report(&self, msg: Msg) {
        if self.ui_tx.send(UiEvent::Msg(msg)).is_err() {
            paw_warn!("UI loop gone; dropping engine failure");
        }
    }
}

/// Forwards engine completions into the UI loop as core messages.
struct MsgSink {
    ui_tx: mpsc::Sender<UiEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::AnimalFetched { request_id, result } => Msg::FetchDone {
                request_id,
                outcome: map_result(result),
            },
            EngineEvent::SurpriseFetched { request_id, result } => Msg::SurpriseDone {
                request_id,
                outcome: map_result(result),
            },
        };
        if self.ui_tx.send(UiEvent::Msg(msg)).is_err() {
            paw_warn!("UI loop gone; dropping engine event");
        }
    }
}

fn map_result(result: Result<AnimalPhoto, FetchError>) -> FetchOutcome {
    match result {
        Ok(photo) => Ok(FetchedAnimal {
            url: photo.url,
            provider: photo.provider,
        }),
        Err(err) => Err(FetchFailure {
            kind: if err.is_retry_exhausted() {
                FetchFailureKind::RetryExhausted
            } else {
                FetchFailureKind::FetchFailed
            },
            message: err.kind.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawview_engine::FailureKind;

    #[test]
    fn engine_errors_map_to_core_failure_kinds() {
        let exhausted = map_result(Err(FetchError {
            kind: FailureKind::RetryExhausted { attempts: 10 },
            message: "every candidate failed validation".to_string(),
        }));
        assert_eq!(
            exhausted,
            Err(FetchFailure {
                kind: FetchFailureKind::RetryExhausted,
                message: "no valid image after 10 attempts".to_string(),
            })
        );

        let network = map_result(Err(FetchError {
            kind: FailureKind::HttpStatus(502),
            message: "502 Bad Gateway".to_string(),
        }));
        assert_eq!(
            network.unwrap_err().kind,
            FetchFailureKind::FetchFailed
        );
    }

    #[test]
    fn unavailable_engine_maps_to_fetch_failed() {
        let outcome = map_result(Err(FetchError {
            kind: FailureKind::EngineUnavailable,
            message: "engine worker stopped".to_string(),
        }));
        assert_eq!(
            outcome,
            Err(FetchFailure {
                kind: FetchFailureKind::FetchFailed,
                message: "fetch engine unavailable".to_string(),
            })
        );
    }

    #[test]
    fn sink_tags_messages_with_request_id() {
        let (tx, rx) = mpsc::channel();
        let sink = MsgSink { ui_tx: tx };
        sink.emit(EngineEvent::AnimalFetched {
            request_id: 5,
            result: Ok(AnimalPhoto {
                url: "a.png".to_string(),
                provider: "Dog".to_string(),
            }),
        });

        match rx.recv().unwrap() {
            UiEvent::Msg(Msg::FetchDone { request_id, outcome }) => {
                assert_eq!(request_id, 5);
                assert_eq!(outcome.unwrap().url, "a.png");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
