#![allow(dead_code)]
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A request received by the mock lookup endpoint.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

impl ReceivedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct BackendState {
    status: StatusCode,
    body: Arc<String>,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

/// Lookup API stand-in answering every `POST /api/lookup/` with a canned
/// status and body.
pub struct MockLookupBackend {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockLookupBackend {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = BackendState {
            status,
            body: Arc::new(body.into()),
            received: received.clone(),
        };

        let app = Router::new()
            .route("/api/lookup/", post(lookup))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub async fn json(status: StatusCode, body: serde_json::Value) -> Self {
        Self::start(status, body.to_string()).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn lookup_url(&self) -> String {
        format!("{}/api/lookup/", self.base_url())
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for MockLookupBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn lookup(
    State(state): State<BackendState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .received
        .lock()
        .unwrap()
        .push(ReceivedRequest { content_type, body });
    (state.status, state.body.as_str().to_string())
}

/// A local address nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/lookup/", addr)
}
