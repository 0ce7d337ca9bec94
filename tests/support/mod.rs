// Shared mock KS API for integration tests.
#![allow(dead_code)]

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use ks_client::{AppContext, FileTokenStorage};
use serde_json::Value;
use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};
use url::Url;

pub const BASE_PATH: &str = "/api_ks_app/v1/";

// What the mock saw for one incoming request.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

// Canned response for a "METHOD /path" key.
#[derive(Debug, Clone)]
pub struct Canned {
    status: StatusCode,
    body: String,
}

impl Canned {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    responses: Arc<HashMap<String, Canned>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

pub struct MockApi {
    base_url: Url,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockApi {
    // Serve the canned routes on an ephemeral port. Unknown routes answer 404 with no body.
    pub async fn start(routes: Vec<(&str, Canned)>) -> Self {
        let responses = routes
            .into_iter()
            .map(|(key, canned)| (key.to_string(), canned))
            .collect::<HashMap<_, _>>();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            responses: Arc::new(responses),
            seen: Arc::clone(&seen),
        };
        let app = Router::new().fallback(record).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral test port");
        let addr = listener.local_addr().expect("get local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock api failed");
        });

        Self {
            base_url: Url::parse(&format!("http://{addr}{BASE_PATH}")).expect("valid mock url"),
            seen,
        }
    }

    pub fn base_url(&self) -> Url {
        self.base_url.clone()
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().expect("seen mutex poisoned").clone()
    }

    pub fn last_request(&self) -> SeenRequest {
        self.requests()
            .pop()
            .expect("expected the mock to receive a request")
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    let seen = SeenRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        authorization: header_text(header::AUTHORIZATION),
        content_type: header_text(header::CONTENT_TYPE),
        body: serde_json::from_slice(&body).ok(),
    };
    state.seen.lock().expect("seen mutex poisoned").push(seen);

    let key = format!("{} {}", method, uri.path());
    match state.responses.get(&key) {
        Some(canned) => (
            canned.status,
            [(header::CONTENT_TYPE, "application/json")],
            canned.body.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

// A base URL nothing listens on: bind, read the port, then release it.
pub async fn unreachable_base_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    Url::parse(&format!("http://{addr}{BASE_PATH}")).expect("valid url")
}

pub fn temp_storage_path() -> PathBuf {
    std::env::temp_dir().join(format!("ks_client-test-{}.toml", uuid::Uuid::new_v4()))
}

pub fn context(base_url: Url) -> AppContext {
    context_with_storage(base_url, temp_storage_path())
}

pub fn context_with_storage(base_url: Url, path: PathBuf) -> AppContext {
    AppContext::new(base_url, FileTokenStorage::new(path)).expect("expected context to build")
}

pub fn full_path(endpoint: &str) -> String {
    format!("{BASE_PATH}{endpoint}")
}
