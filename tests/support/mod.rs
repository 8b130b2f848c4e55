//! In-process HTTP intercept server for driving `HttpApi` end to end.
//!
//! Canned responses are registered per `METHOD path`; anything else gets an
//! empty 404. Every request is recorded so tests can assert on what the core
//! actually sent.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use yoga_studio::{ApiConfig, HttpApi, SessionStore};

/// One request as the server saw it.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Default)]
struct Intercepts {
    replies: HashMap<String, (u16, String)>,
    requests: Vec<Recorded>,
}

type Shared = Arc<Mutex<Intercepts>>;

pub struct InterceptServer {
    base_url: String,
    state: Shared,
}

impl InterceptServer {
    pub async fn start() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let state = Shared::default();
        let app = Router::new().fallback(intercept).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind intercept server");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("intercept server failed");
        });

        Self { base_url: format!("http://{addr}/api/"), state }
    }

    /// Reply to `method path` (e.g. `"GET", "/api/session"`) with `status`
    /// and a JSON body. Re-registering replaces the previous reply.
    pub fn intercept(&self, method: &str, path: &str, status: u16, body: Value) {
        self.intercept_raw(method, path, status, body.to_string());
    }

    pub fn intercept_raw(&self, method: &str, path: &str, status: u16, body: String) {
        let key = format!("{method} {path}");
        self.state.lock().unwrap().replies.insert(key, (status, body));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    /// `METHOD path` of every request, in arrival order.
    pub fn calls(&self) -> Vec<String> {
        self.requests().iter().map(|r| format!("{} {}", r.method, r.path)).collect()
    }

    pub fn last(&self, method: &str, path: &str) -> Recorded {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
            .unwrap_or_else(|| panic!("no {method} {path} request recorded"))
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::new(&self.base_url).expect("valid base url")
    }

    pub fn api(&self, store: &SessionStore) -> HttpApi {
        HttpApi::new(self.config(), store.clone())
    }
}

async fn intercept(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let key = format!("{method} {}", uri.path());

    let mut state = state.lock().unwrap();
    state.requests.push(Recorded {
        method: method.to_string(),
        path: uri.path().to_owned(),
        authorization,
        body,
    });

    match state.replies.get(&key) {
        Some((status, body)) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

// =============================================================================
// FIXTURES
// =============================================================================

pub fn login_response(id: u64, admin: bool) -> Value {
    json!({
        "token": format!("jwt-{id}"),
        "type": "Bearer",
        "id": id,
        "username": "userName",
        "firstName": "firstName",
        "lastName": "lastName",
        "admin": admin
    })
}

pub fn session_json(id: u64, users: &[u64]) -> Value {
    json!({
        "id": id,
        "name": format!("Session {id}"),
        "date": "2024-07-07T19:00:00",
        "teacher_id": 1,
        "description": format!("Description {id}"),
        "users": users,
        "createdAt": "2024-06-30T12:00:00",
        "updatedAt": "2024-07-01T18:30:00"
    })
}

pub fn teacher_json(id: u64, first_name: &str, last_name: &str) -> Value {
    json!({
        "id": id,
        "firstName": first_name,
        "lastName": last_name,
        "createdAt": "2024-01-01T08:30:00",
        "updatedAt": "2024-06-14T12:30:00"
    })
}

pub fn user_json(id: u64, admin: bool) -> Value {
    json!({
        "id": id,
        "email": "john.doe@example.com",
        "firstName": "John",
        "lastName": "Doe",
        "admin": admin,
        "createdAt": "2024-07-02T18:00:00",
        "updatedAt": "2024-07-02T18:00:00"
    })
}
