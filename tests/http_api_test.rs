//! End-to-end tests for the HTTP API
//! Run with: cargo test --test http_api_test
//!
//! The real router is served on an ephemeral port and driven with reqwest.
//! Generation is stubbed so no network access is needed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use async_trait::async_trait;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;

use deepsphere::application::services::{AssistantService, IntentClassifier, ItineraryService};
use deepsphere::domain::entities::TriggerTable;
use deepsphere::domain::traits::FirstPicker;
use deepsphere::infrastructure::http::{router, AppState};
use deepsphere::infrastructure::llm::{
    GenerationError, GenerationOptions, GenerationResult, Generator,
};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

struct StubGenerator {
    outcome: GenerationResult<String>,
    calls: AtomicUsize,
}

#[async_trait]
impl Generator for StubGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(
        &self,
        _prompt: &str,
        _options: Option<&GenerationOptions>,
    ) -> GenerationResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

struct TestServer {
    base: String,
    generator: Arc<StubGenerator>,
    _static_dir: TempDir,
}

async fn start_server(outcome: GenerationResult<String>) -> TestServer {
    ensure_init();

    let generator = Arc::new(StubGenerator {
        outcome,
        calls: AtomicUsize::new(0),
    });

    let classifier = IntentClassifier::new(TriggerTable::with_defaults("DeepSphere"));
    let assistant =
        AssistantService::new(classifier, generator.clone()).with_picker(Arc::new(FirstPicker));
    let itinerary = ItineraryService::new(generator.clone());
    let state = Arc::new(AppState::new(assistant, itinerary));

    let static_dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        static_dir.path().join("index.html"),
        "<html><body>DeepSphere</body></html>",
    )
    .expect("write index");

    let app = router(state, static_dir.path());
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind to port 0");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    TestServer {
        base: format!("http://{}", addr),
        generator,
        _static_dir: static_dir,
    }
}

async fn post(server: &TestServer, path: &str, body: Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{}{}", server.base, path))
        .json(&body)
        .send()
        .await
        .expect("request failed");
    let status = resp.status().as_u16();
    (status, resp.json().await.expect("invalid JSON"))
}

fn calls(server: &TestServer) -> usize {
    server.generator.calls.load(Ordering::SeqCst)
}

// ── POST /ask ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn ask_greeting_is_canned() {
    let server = start_server(Ok("unused".into())).await;
    let (status, body) = post(&server, "/ask", json!({ "message": "Hello!" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["reply"], "Hello! How can I help you today?");
    assert_eq!(calls(&server), 0);
}

#[tokio::test]
async fn ask_math_is_local() {
    let server = start_server(Ok("unused".into())).await;
    let (_, body) = post(&server, "/ask", json!({ "message": "20 divided by 3" })).await;
    assert_eq!(body["reply"], "20.0 divided by 3.0 equals 6.6667");
    assert_eq!(calls(&server), 0);
}

#[tokio::test]
async fn ask_missing_message_is_not_an_error() {
    let server = start_server(Ok("unused".into())).await;
    for body in [json!({}), json!({ "message": "" }), json!({ "message": null, "lang": "fr" })] {
        let (status, reply) = post(&server, "/ask", body).await;
        assert_eq!(status, 200);
        assert_eq!(reply["reply"], "No message received.");
    }
}

#[tokio::test]
async fn ask_delegates_open_questions() {
    let server = start_server(Ok("Visit Hampi.".into())).await;
    let (_, body) = post(
        &server,
        "/ask",
        json!({ "message": "Where should I go in Karnataka?", "lang": "kn" }),
    )
    .await;
    assert_eq!(body["reply"], "Visit Hampi.");
    assert_eq!(calls(&server), 1);
}

#[tokio::test]
async fn ask_falls_back_when_generation_fails() {
    let server = start_server(Err(GenerationError::Timeout)).await;
    let (status, body) = post(&server, "/ask", json!({ "message": "Is Iceland cold?" })).await;
    assert_eq!(status, 200);
    assert_eq!(body["reply"], "I'm not sure how to respond to that.");
}

// ── POST /generate ───────────────────────────────────────────────────────────

fn trip() -> Value {
    json!({
        "startDate": "2026-12-20",
        "endDate": "2026-12-24",
        "numPeople": 2,
        "budget": 60000,
        "destination": "Udaipur",
        "preferences": "palaces",
    })
}

#[tokio::test]
async fn generate_returns_itinerary() {
    let server = start_server(Ok("<div>Day 1</div>".into())).await;
    let (status, body) = post(&server, "/generate", trip()).await;
    assert_eq!(status, 200);
    assert_eq!(body["itinerary"], "<div>Day 1</div>");
}

#[tokio::test]
async fn generate_missing_destination_is_client_error() {
    let server = start_server(Ok("<div/>".into())).await;
    let mut body = trip();
    body.as_object_mut().unwrap().remove("destination");

    let (status, reply) = post(&server, "/generate", body).await;
    assert_eq!(status, 400);
    assert_eq!(reply, json!({ "error": "Missing required fields" }));
    assert_eq!(calls(&server), 0);
}

#[tokio::test]
async fn generate_failure_is_server_error() {
    let server = start_server(Err(GenerationError::Status { status: 429, body: String::new() })).await;
    let (status, reply) = post(&server, "/generate", trip()).await;
    assert_eq!(status, 500);
    assert_eq!(reply, json!({ "error": "Failed to generate itinerary" }));
}

// ── GET / ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn landing_page_is_served() {
    let server = start_server(Ok("unused".into())).await;
    let resp = reqwest::get(format!("{}/", server.base)).await.expect("request failed");
    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.unwrap().contains("DeepSphere"));
}
