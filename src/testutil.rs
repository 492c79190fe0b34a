//! Test utilities.
//!
//! This module is only available when the `testutil` feature is enabled.

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::Value;
use tokio::task::JoinHandle;

use crate::core::InsightError;

/// What the mock service answers with.
#[derive(Debug, Clone)]
pub enum MockReply {
    Json(Value),
    Status(u16),
    /// Body sent verbatim with a 200 status.
    Raw(String),
}

/// A request seen by the mock service.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedQuery {
    pub text: Option<String>,
    pub raw_query: Option<String>,
    pub accept: Option<String>,
}

#[derive(Default)]
struct MockState {
    replies: Mutex<VecDeque<MockReply>>,
    received: Mutex<Vec<ReceivedQuery>>,
}

/// Stand-in for the query service, serving `GET /query` on an ephemeral port.
///
/// Replies are used in order; the last one repeats.
pub struct MockQueryServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockQueryServer {
    pub async fn start(replies: Vec<MockReply>) -> Result<Self, InsightError> {
        let state = Arc::new(MockState {
            replies: Mutex::new(replies.into()),
            received: Mutex::new(Vec::new()),
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| InsightError::IoError(format!("binding mock server: {e}")))?;
        let addr = listener.local_addr()?;
        let app = router(state.clone());
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn received(&self) -> Vec<ReceivedQuery> {
        self.state
            .received
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Drop for MockQueryServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Router of the mock service, for driving it without a socket.
pub fn mock_router(replies: Vec<MockReply>) -> Router {
    router(Arc::new(MockState {
        replies: Mutex::new(replies.into()),
        received: Mutex::new(Vec::new()),
    }))
}

fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/query", get(handle_query))
        .with_state(state)
}

async fn handle_query(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
    uri: axum::http::Uri,
    headers: HeaderMap,
) -> Response {
    let seen = ReceivedQuery {
        text: params.get("text").cloned(),
        raw_query: uri.query().map(str::to_string),
        accept: headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    if let Ok(mut received) = state.received.lock() {
        received.push(seen);
    }

    let reply = match state.replies.lock() {
        Ok(mut replies) if replies.len() > 1 => replies.pop_front(),
        Ok(replies) => replies.front().cloned(),
        Err(_) => None,
    };

    match reply {
        Some(MockReply::Json(body)) => axum::Json(body).into_response(),
        Some(MockReply::Status(code)) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, "mock failure").into_response()
        }
        Some(MockReply::Raw(body)) => {
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// An endpoint nothing listens on.
pub async fn closed_endpoint() -> Result<String, InsightError> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}
