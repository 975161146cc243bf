use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use cloudom_model::{DeepSeekClient, DeepSeekConfig};
use cloudom_server::{AppState, app_router, protocol::ChatReply};
use serde_json::{Value, json};
use tokio::sync::Mutex;

#[derive(Clone)]
struct FakeDeepSeek {
    primary_status: StatusCode,
    primary_hits: Arc<AtomicUsize>,
    secondary_hits: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
}

impl FakeDeepSeek {
    fn new(primary_status: StatusCode) -> Self {
        Self {
            primary_status,
            primary_hits: Arc::default(),
            secondary_hits: Arc::default(),
            last_body: Arc::default(),
        }
    }
}

fn completion(text: &str) -> Value {
    json!({"choices": [{"message": {"role": "assistant", "content": text}}]})
}

async fn primary(State(fake): State<FakeDeepSeek>, Json(body): Json<Value>) -> impl IntoResponse {
    fake.primary_hits.fetch_add(1, Ordering::SeqCst);
    *fake.last_body.lock().await = Some(body);
    if fake.primary_status.is_success() {
        (fake.primary_status, Json(completion("Our Starter Website is $2,500.")))
    } else {
        (fake.primary_status, Json(json!({"error": {"message": "upstream says no"}})))
    }
}

async fn secondary(State(fake): State<FakeDeepSeek>, Json(body): Json<Value>) -> impl IntoResponse {
    fake.secondary_hits.fetch_add(1, Ordering::SeqCst);
    *fake.last_body.lock().await = Some(body);
    (StatusCode::OK, Json(completion("Answer from v1")))
}

async fn spawn(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server run");
    });

    (format!("http://{}", addr), handle)
}

async fn spawn_upstream(fake: FakeDeepSeek) -> (String, tokio::task::JoinHandle<()>) {
    spawn(
        Router::new()
            .route("/chat/completions", post(primary))
            .route("/v1/chat/completions", post(secondary))
            .with_state(fake),
    )
    .await
}

async fn spawn_proxy(upstream_base: &str) -> (String, tokio::task::JoinHandle<()>) {
    let client = DeepSeekClient::new(DeepSeekConfig::new("sk-test").with_base_url(upstream_base))
        .expect("deepseek client");
    spawn(app_router(AppState::new(Arc::new(client)))).await
}

fn chat_body(turns: usize) -> Value {
    let messages: Vec<Value> = (0..turns)
        .map(|i| {
            let role = if i % 2 == 0 { "user" } else { "assistant" };
            json!({"role": role, "content": format!("turn {i}")})
        })
        .collect();
    json!({
        "messages": messages,
        "context": "Pricing\nURL: https://www.cloudomsystems.com/pricing\nStarter Website: $2,500",
        "pageUrl": "https://www.cloudomsystems.com/pricing"
    })
}

#[tokio::test]
async fn health_reports_service() {
    let (base, handle) = spawn(app_router(AppState::default())).await;

    let response = reqwest::get(format!("{base}/health")).await.expect("health response");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("health json");
    assert_eq!(body, json!({"status": "ok", "service": "cloudom-support"}));

    handle.abort();
}

#[tokio::test]
async fn get_is_rejected_with_allow_header() {
    let (base, handle) = spawn(app_router(AppState::default())).await;

    let response = reqwest::get(format!("{base}/api/chat")).await.expect("get response");
    assert_eq!(response.status().as_u16(), 405);
    assert_eq!(response.headers().get("allow").and_then(|v| v.to_str().ok()), Some("POST"));
    let body: Value = response.json().await.expect("error json");
    assert_eq!(body["error"], "Method not allowed");

    handle.abort();
}

#[tokio::test]
async fn missing_api_key_is_a_server_error() {
    let (base, handle) = spawn(app_router(AppState::default())).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&chat_body(1))
        .send()
        .await
        .expect("post response");
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.expect("error json");
    assert_eq!(body["error"], "Server is missing DEEPSEEK_API_KEY");

    handle.abort();
}

#[tokio::test]
async fn bad_requests_never_reach_upstream() {
    let fake = FakeDeepSeek::new(StatusCode::OK);
    let (upstream, upstream_handle) = spawn_upstream(fake.clone()).await;
    let (base, handle) = spawn_proxy(&upstream).await;
    let client = reqwest::Client::new();

    let invalid = client
        .post(format!("{base}/api/chat"))
        .header("content-type", "application/json")
        .body("{\"messages\": [")
        .send()
        .await
        .expect("invalid json response");
    assert_eq!(invalid.status().as_u16(), 400);
    let body: Value = invalid.json().await.expect("error json");
    assert_eq!(body["error"], "Invalid JSON");

    let no_user = client
        .post(format!("{base}/api/chat"))
        .json(&json!({"messages": [{"role": "assistant", "content": "Hi! How can I help?"}]}))
        .send()
        .await
        .expect("no user response");
    assert_eq!(no_user.status().as_u16(), 400);
    let body: Value = no_user.json().await.expect("error json");
    assert_eq!(body["error"], "Missing user message");

    let empty = client.post(format!("{base}/api/chat")).send().await.expect("empty body response");
    assert_eq!(empty.status().as_u16(), 400);

    assert_eq!(fake.primary_hits.load(Ordering::SeqCst), 0);

    handle.abort();
    upstream_handle.abort();
}

#[tokio::test]
async fn long_conversations_forward_last_twelve_messages() {
    let fake = FakeDeepSeek::new(StatusCode::OK);
    let (upstream, upstream_handle) = spawn_upstream(fake.clone()).await;
    let (base, handle) = spawn_proxy(&upstream).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&chat_body(15))
        .send()
        .await
        .expect("chat response");
    assert!(response.status().is_success());
    let reply: ChatReply = response.json().await.expect("reply json");
    assert_eq!(reply.text, "Our Starter Website is $2,500.");

    let sent = fake.last_body.lock().await.clone().expect("upstream body");
    let messages = sent["messages"].as_array().expect("messages array");
    assert_eq!(messages.len(), 13);
    assert_eq!(messages[0]["role"], "system");
    let instruction = messages[0]["content"].as_str().expect("system content");
    assert!(instruction.contains("Current page URL: https://www.cloudomsystems.com/pricing"));
    assert!(instruction.contains("COMPANY INFO:\nPricing\nURL:"));
    assert_eq!(messages[1]["content"], "turn 3");
    assert_eq!(messages[12]["content"], "turn 14");
    assert_eq!(fake.secondary_hits.load(Ordering::SeqCst), 0);

    handle.abort();
    upstream_handle.abort();
}

#[tokio::test]
async fn primary_not_found_uses_v1_endpoint() {
    let fake = FakeDeepSeek::new(StatusCode::NOT_FOUND);
    let (upstream, upstream_handle) = spawn_upstream(fake.clone()).await;
    let (base, handle) = spawn_proxy(&upstream).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&chat_body(1))
        .send()
        .await
        .expect("chat response");
    assert!(response.status().is_success());
    let reply: ChatReply = response.json().await.expect("reply json");
    assert_eq!(reply.text, "Answer from v1");
    assert_eq!(fake.primary_hits.load(Ordering::SeqCst), 1);
    assert_eq!(fake.secondary_hits.load(Ordering::SeqCst), 1);

    handle.abort();
    upstream_handle.abort();
}

#[tokio::test]
async fn upstream_failure_is_a_bad_gateway_with_details() {
    let fake = FakeDeepSeek::new(StatusCode::INTERNAL_SERVER_ERROR);
    let (upstream, upstream_handle) = spawn_upstream(fake.clone()).await;
    let (base, handle) = spawn_proxy(&upstream).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&chat_body(1))
        .send()
        .await
        .expect("chat response");
    assert_eq!(response.status().as_u16(), 502);
    let body: Value = response.json().await.expect("error json");
    assert_eq!(body["error"], "Upstream error");
    assert!(body["details"].as_str().expect("details").contains("upstream says no"));
    assert_eq!(fake.secondary_hits.load(Ordering::SeqCst), 0);

    handle.abort();
    upstream_handle.abort();
}

#[tokio::test]
async fn unreachable_upstream_is_a_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let dead = format!("http://{}", listener.local_addr().expect("addr"));
    drop(listener);
    let (base, handle) = spawn_proxy(&dead).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&chat_body(1))
        .send()
        .await
        .expect("chat response");
    assert_eq!(response.status().as_u16(), 502);
    let body: Value = response.json().await.expect("error json");
    assert_eq!(body["error"], "Request failed");

    handle.abort();
}

fn oversized_body() -> Vec<u8> {
    vec![b' '; 1_100_000]
}

#[tokio::test]
async fn oversized_get_is_still_method_not_allowed() {
    let (base, handle) = spawn(app_router(AppState::default())).await;

    let response = reqwest::Client::new()
        .get(format!("{base}/api/chat"))
        .body(oversized_body())
        .send()
        .await
        .expect("oversized get response");
    assert_eq!(response.status().as_u16(), 405);
    assert_eq!(response.headers().get("allow").and_then(|v| v.to_str().ok()), Some("POST"));

    handle.abort();
}

#[tokio::test]
async fn oversized_post_without_api_key_is_a_server_error() {
    let (base, handle) = spawn(app_router(AppState::default())).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .header("content-type", "application/json")
        .body(oversized_body())
        .send()
        .await
        .expect("oversized post response");
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.expect("error json");
    assert_eq!(body["error"], "Server is missing DEEPSEEK_API_KEY");

    handle.abort();
}

#[tokio::test]
async fn oversized_post_is_invalid_json() {
    let fake = FakeDeepSeek::new(StatusCode::OK);
    let (upstream, upstream_handle) = spawn_upstream(fake.clone()).await;
    let (base, handle) = spawn_proxy(&upstream).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .header("content-type", "application/json")
        .body(oversized_body())
        .send()
        .await
        .expect("oversized post response");
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("error json");
    assert_eq!(body["error"], "Invalid JSON");
    assert_eq!(fake.primary_hits.load(Ordering::SeqCst), 0);

    handle.abort();
    upstream_handle.abort();
}
