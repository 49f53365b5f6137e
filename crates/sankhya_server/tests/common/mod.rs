//! Shared helpers: ephemeral listeners and a fake chat-completions provider.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

/// Serve `app` on 127.0.0.1 with an OS-assigned port; returns the base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Plain client that never routes loopback traffic through a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// How the fake provider answers.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(&'static str),
    Status(u16),
    NoChoices,
}

/// What the fake provider last received.
#[derive(Debug, Default, Clone)]
pub struct Captured {
    pub authorization: Option<String>,
    pub title: Option<String>,
    pub referer: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct FakeState {
    reply: Reply,
    captured: Arc<Mutex<Captured>>,
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn completions(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    *state.captured.lock().unwrap() = Captured {
        authorization: header(&headers, "authorization"),
        title: header(&headers, "x-title"),
        referer: header(&headers, "http-referer"),
        body: Some(body),
    };
    match state.reply {
        Reply::Text(text) => (
            StatusCode::OK,
            Json(json!({ "choices": [{ "message": { "role": "assistant", "content": text } }] })),
        ),
        Reply::Status(code) => (
            StatusCode::from_u16(code).unwrap(),
            Json(json!({ "error": { "message": "upstream failure" } })),
        ),
        Reply::NoChoices => (StatusCode::OK, Json(json!({ "choices": [] }))),
    }
}

/// Start a fake provider; returns its `/v1` base URL and the capture slot.
pub async fn fake_provider(reply: Reply) -> (String, Arc<Mutex<Captured>>) {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(FakeState {
            reply,
            captured: Arc::clone(&captured),
        });
    let base = spawn(app).await;
    (format!("{base}/v1"), captured)
}
