#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use job_board_backend::{
    database::{pool, seed},
    error::{Error, Result},
    routes,
    services::ai_service::QueryInterpreter,
    AppState,
};
use serde_json::Value as JsonValue;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Deterministic stand-in for the language model.
pub struct StubInterpreter {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl StubInterpreter {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryInterpreter for StubInterpreter {
    async fn interpret(&self, _query: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or_else(|| Error::Internal("model unavailable".to_string()))
    }
}

pub async fn setup_app(interpreter: Arc<StubInterpreter>, seeded: bool) -> (Router, SqlitePool) {
    let pool = pool::create_pool("sqlite::memory:").await.expect("pool");
    pool::run_migrations(&pool).await.expect("migrations");
    if seeded {
        seed::seed_candidates(&pool).await.expect("seed");
    }

    let state = AppState::new(pool.clone(), interpreter);
    (routes::router(state), pool)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    send_raw(app, method, uri, body.map(|json| json.to_string())).await
}

/// Like `send`, but the body text goes out untouched, so malformed JSON can be posted.
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: Option<String>) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(text) => builder
            .header("content-type", "application/json")
            .body(Body::from(text))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn row_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM candidates")
        .fetch_one(pool)
        .await
        .expect("count")
}
