use std::sync::{mpsc, Arc};
use std::thread;

use pawview_logging::{paw_error, paw_info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animal::{fetch_animal, fetch_surprise, ValidationPolicy};
use crate::fetch::{FetchSettings, JsonSource, ReqwestFetcher};
use crate::providers::ProviderRegistry;
use crate::{EngineEvent, FailureKind, FetchError, RequestId};

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    pub policy: ValidationPolicy,
    pub registry: ProviderRegistry,
}

/// Receives engine completions, typically forwarding them to the UI loop.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, Clone)]
enum EngineCommand {
    Fetch {
        request_id: RequestId,
        filter: Option<String>,
    },
    Surprise {
        request_id: RequestId,
    },
}

impl EngineCommand {
    /// The completion reported when the command could not be served.
    fn failed(&self, error: FetchError) -> EngineEvent {
        match *self {
            EngineCommand::Fetch { request_id, .. } => EngineEvent::AnimalFetched {
                request_id,
                result: Err(error),
            },
            EngineCommand::Surprise { request_id } => EngineEvent::SurpriseFetched {
                request_id,
                result: Err(error),
            },
        }
    }
}

struct Worker {
    source: Arc<dyn JsonSource>,
    registry: ProviderRegistry,
    policy: ValidationPolicy,
}

#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig, sink: Arc<dyn EventSink>) -> Result<Self, FetchError> {
        let source: Arc<dyn JsonSource> = Arc::new(ReqwestFetcher::new(config.fetch)?);
        Self::with_source(source, config.registry, config.policy, sink)
    }

    /// Runs the engine against any JSON source. Fails when the async runtime
    /// cannot be created.
    pub fn with_source(
        source: Arc<dyn JsonSource>,
        registry: ProviderRegistry,
        policy: ValidationPolicy,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, FetchError> {
        let runtime = tokio::runtime::Runtime::new().map_err(|err| {
            FetchError::new(
                FailureKind::EngineUnavailable,
                format!("failed to start engine runtime: {err}"),
            )
        })?;
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let worker = Arc::new(Worker {
            source,
            registry,
            policy,
        });

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let worker = worker.clone();
                let sink = sink.clone();
                let fallback = command.clone();
                let task = runtime.spawn({
                    let sink = sink.clone();
                    async move { handle_command(worker.as_ref(), command, sink.as_ref()).await }
                });
                // A panicking task still owes the UI a completion.
                runtime.spawn(async move {
                    if let Err(err) = task.await {
                        paw_error!("engine task for {:?} failed: {}", fallback, err);
                        sink.emit(fallback.failed(FetchError::new(
                            FailureKind::TaskFailed,
                            err.to_string(),
                        )));
                    }
                });
            }
            paw_info!("engine command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    /// Queues a history fetch. Fails when the worker has stopped.
    pub fn fetch(&self, request_id: RequestId, filter: Option<String>) -> Result<(), FetchError> {
        self.send(EngineCommand::Fetch { request_id, filter })
    }

    pub fn surprise(&self, request_id: RequestId) -> Result<(), FetchError> {
        self.send(EngineCommand::Surprise { request_id })
    }

    fn send(&self, command: EngineCommand) -> Result<(), FetchError> {
        self.cmd_tx.send(command).map_err(|err| {
            paw_error!("engine worker gone, dropping {:?}", err.0);
            FetchError::new(FailureKind::EngineUnavailable, "engine worker stopped")
        })
    }
}

async fn handle_command(worker: &Worker, command: EngineCommand, sink: &dyn EventSink) {
    let mut rng = StdRng::from_os_rng();
    match command {
        EngineCommand::Fetch { request_id, filter } => {
            let result = fetch_animal(
                worker.source.as_ref(),
                &worker.registry,
                filter.as_deref(),
                worker.policy,
                &mut rng,
            )
            .await;
            match &result {
                Ok(photo) => paw_info!(
                    "request {} fetched {} from {}",
                    request_id,
                    photo.url,
                    photo.provider
                ),
                Err(err) => paw_error!("request {} failed: {}", request_id, err),
            }
            sink.emit(EngineEvent::AnimalFetched { request_id, result });
        }
        EngineCommand::Surprise { request_id } => {
            let result = fetch_surprise(worker.source.as_ref(), &worker.registry, &mut rng).await;
            if let Err(err) = &result {
                paw_error!("surprise {} failed: {}", request_id, err);
            }
            sink.emit(EngineEvent::SurpriseFetched { request_id, result });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_to_stopped_worker_reports_unavailable() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        drop(cmd_rx);
        let engine = EngineHandle { cmd_tx };

        let err = engine.fetch(4, None).unwrap_err();
        assert_eq!(err.kind, FailureKind::EngineUnavailable);
        assert_eq!(
            engine.surprise(5).unwrap_err().kind,
            FailureKind::EngineUnavailable
        );
    }

    #[test]
    fn failed_command_keeps_its_request_id() {
        let error = FetchError::new(FailureKind::TaskFailed, "boom");
        let fetch = EngineCommand::Fetch {
            request_id: 7,
            filter: None,
        };
        assert_eq!(
            fetch.failed(error.clone()),
            EngineEvent::AnimalFetched {
                request_id: 7,
                result: Err(error.clone()),
            }
        );
        let surprise = EngineCommand::Surprise { request_id: 8 };
        assert!(matches!(
            surprise.failed(error),
            EngineEvent::SurpriseFetched { request_id: 8, result: Err(_) }
        ));
    }
}
