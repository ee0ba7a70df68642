use axum::{extract::State, http::StatusCode, routing::post, Router};
use serde_json::Value;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

type Reply = (StatusCode, String);

#[derive(Clone, Default)]
struct ApiState {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

/// Mock lookup API serving queued replies in order. The last reply repeats
/// once the queue is down to one.
pub struct MockLookupApi {
    addr: SocketAddr,
    state: ApiState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockLookupApi {
    pub async fn start() -> Self {
        let state = ApiState::default();
        let app = Router::new()
            .route("/api/lookup/", post(lookup))
            .with_state(state.clone());

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
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn reply(&self, status: StatusCode, body: Value) -> &Self {
        self.reply_raw(status, body.to_string())
    }

    pub fn reply_raw(&self, status: StatusCode, body: impl Into<String>) -> &Self {
        self.state
            .replies
            .lock()
            .unwrap()
            .push_back((status, body.into()));
        self
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// JSON bodies received so far.
    pub fn bodies(&self) -> Vec<Value> {
        self.state.bodies.lock().unwrap().clone()
    }
}

impl Drop for MockLookupApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn lookup(State(state): State<ApiState>, body: String) -> Reply {
    if let Ok(json) = serde_json::from_str(&body) {
        state.bodies.lock().unwrap().push(json);
    }

    let mut replies = state.replies.lock().unwrap();
    if replies.len() > 1 {
        replies.pop_front().unwrap()
    } else {
        replies.front().cloned().unwrap_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"status":"error","message":"no reply queued"}"#.to_string(),
        ))
    }
}
