use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    routing::post,
};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct ReplyState {
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
    status: StatusCode,
    body: &'static str,
}

/// A local `POST /contact` endpoint that always answers the same way and
/// remembers what it was sent.
pub struct TestServer {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl TestServer {
    pub async fn replying(status: u16, body: &'static str) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = ReplyState {
            received: Arc::clone(&received),
            status: StatusCode::from_u16(status).unwrap(),
            body,
        };

        let app = Router::new()
            .route("/contact", post(contact))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, received }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

async fn contact(State(state): State<ReplyState>, headers: HeaderMap, raw: Bytes) -> (StatusCode, &'static str) {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&raw).unwrap_or(Value::Null);

    state
        .received
        .lock()
        .unwrap()
        .push(ReceivedRequest { content_type, body });

    (state.status, state.body)
}

/// An address nothing listens on.
pub async fn closed_port_url(path: &str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, path)
}
