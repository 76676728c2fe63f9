use std::sync::{mpsc, Arc};
use std::time::Duration;

use pawview_engine::{
    extract_url_field, ChannelEventSink, EngineConfig, EngineEvent, EngineHandle, FailureKind,
    FetchError, JsonSource, Provider, ProviderRegistry, ValidationPolicy,
};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

async fn dog_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/woof.json"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({"url": "https://random.dog/x.png"})))
        .mount(&server)
        .await;
    server
}

fn engine_for(server: &MockServer) -> (EngineHandle, mpsc::Receiver<EngineEvent>) {
    let (tx, rx) = mpsc::channel();
    let config = EngineConfig {
        registry: ProviderRegistry::new(vec![Provider::new(
            "Dog",
            format!("{}/woof.json", server.uri()),
            extract_url_field,
        )]),
        policy: ValidationPolicy::Lenient,
        ..EngineConfig::default()
    };
    let engine = EngineHandle::new(config, Arc::new(ChannelEventSink::new(tx))).expect("engine");
    (engine, rx)
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_command_reports_tagged_result() {
    pawview_logging::initialize_for_tests();
    let server = dog_server(200).await;
    let (engine, rx) = engine_for(&server);

    engine.fetch(41, Some("Dog".to_string())).expect("queued");
    let event = tokio::task::spawn_blocking(move || rx.recv_timeout(WAIT))
        .await
        .unwrap()
        .expect("event");

    match event {
        EngineEvent::AnimalFetched { request_id, result } => {
            assert_eq!(request_id, 41);
            let photo = result.expect("photo");
            assert_eq!(photo.url, "https://random.dog/x.png");
            assert_eq!(photo.provider, "Dog");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_fetch_is_reported_not_swallowed() {
    pawview_logging::initialize_for_tests();
    let server = dog_server(503).await;
    let (engine, rx) = engine_for(&server);

    engine.fetch(3, None).expect("queued");
    let event = tokio::task::spawn_blocking(move || rx.recv_timeout(WAIT))
        .await
        .unwrap()
        .expect("event");

    match event {
        EngineEvent::AnimalFetched { request_id, result } => {
            assert_eq!(request_id, 3);
            assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(503));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn surprise_command_reports_separately() {
    pawview_logging::initialize_for_tests();
    let server = dog_server(200).await;
    let (engine, rx) = engine_for(&server);

    engine.surprise(9).expect("queued");
    let event = tokio::task::spawn_blocking(move || rx.recv_timeout(WAIT))
        .await
        .unwrap()
        .expect("event");

    assert!(matches!(
        event,
        EngineEvent::SurpriseFetched { request_id: 9, result: Ok(_) }
    ));
}

struct PanickingSource;

fn explode() -> Result<Value, FetchError> {
    panic!("source blew up")
}

#[async_trait::async_trait]
impl JsonSource for PanickingSource {
    async fn get_json(&self, _url: &str) -> Result<Value, FetchError> {
        explode()
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn panicking_task_still_reports_a_failure() {
    pawview_logging::initialize_for_tests();
    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::with_source(
        Arc::new(PanickingSource),
        ProviderRegistry::default(),
        ValidationPolicy::Lenient,
        Arc::new(ChannelEventSink::new(tx)),
    )
    .expect("engine");

    engine.fetch(1, None).expect("queued");
    let event = tokio::task::spawn_blocking(move || rx.recv_timeout(WAIT))
        .await
        .unwrap()
        .expect("event");

    match event {
        EngineEvent::AnimalFetched { request_id, result } => {
            assert_eq!(request_id, 1);
            assert_eq!(result.unwrap_err().kind, FailureKind::TaskFailed);
        }
        other => panic!("unexpected event {other:?}"),
    }
}
