#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::Json,
    routing::post,
};
use capgen_server::models::{client::GenerationConfig, config::CaptionConfig};
use reqwest::Response;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// What the mock completion API saw on its last call.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

/// A stand-in for an OpenAI-compatible completion API that always replies
/// with the same status and body.
#[derive(Clone)]
pub struct MockUpstream {
    status: StatusCode,
    response: Value,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<RecordedRequest>>>,
}

impl MockUpstream {
    pub fn replying_with(content: &str) -> Self {
        let response = json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": content},
                    "finish_reason": "stop"
                }
            ]
        });
        Self::responding(StatusCode::OK, response)
    }

    pub fn responding(status: StatusCode, response: Value) -> Self {
        Self {
            status,
            response,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.last_request
            .lock()
            .expect("mock upstream lock poisoned")
            .clone()
    }

    /// Serve the mock on a random local port and return its base URL.
    pub async fn spawn(&self) -> Result<String, Box<dyn std::error::Error>> {
        let router = Router::new()
            .route("/v1/chat/completions", post(completions))
            .with_state(self.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move { axum::serve(listener, router).await });
        Ok(format!("http://{addr}/v1"))
    }
}

async fn completions(
    State(mock): State<MockUpstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    mock.calls.fetch_add(1, Ordering::SeqCst);
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    *mock
        .last_request
        .lock()
        .expect("mock upstream lock poisoned") = Some(RecordedRequest {
        authorization,
        body,
    });
    (mock.status, Json(mock.response.clone()))
}

/// Serve the caption app against the given completion API and return the
/// caption endpoint URL.
pub async fn spawn_app(
    base_url: String,
    api_key_var: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let config = CaptionConfig {
        generation: GenerationConfig {
            base_url,
            api_key_var: api_key_var.to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let (_, state) = capgen_server::build_state(config)?;
    let router = capgen_server::app(state);
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });
    Ok(format!("http://{addr}/generate-caption"))
}

pub async fn assert_ok_response(response: Response) -> Result<Response, String> {
    if response.status().is_success() {
        Ok(response)
    } else {
        let body = response.text().await.map_err(|err| format!("{err:?}"))?;
        Err(body)
    }
}
