//! HTTP transport for the lookup API.
//!
//! Sends the query as a JSON POST and parses the body as an [`ApiEnvelope`]
//! whatever the HTTP status. Error responses of the backend still carry an
//! envelope, so status codes are only passed up as their reason phrase.
//!
//! Wire format (HTTP):
//! ```text
//! POST /api/lookup/ HTTP/1.1
//! Content-Type: application/json
//!
//! {"query":["example.com"],"type":["A"],"nameservers":["udp://8.8.8.8:53"],"rd":true,...}
//! ```

use async_trait::async_trait;
use dnslookup_application::ports::{LookupTransport, TransportReply};
use dnslookup_domain::{ApiConfig, ApiEnvelope, LookupError, QueryRequest};
use tracing::{debug, warn};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Lookup transport backed by a pooled `reqwest` client.
///
/// No request timeout is configured: a lookup stays pending until the
/// backend answers or the connection fails.
pub struct HttpLookupTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpLookupTransport {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_url(config.lookup_url())
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        let client = client_or_default(reqwest::Client::builder().use_rustls_tls().build());
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn client_or_default(built: reqwest::Result<reqwest::Client>) -> reqwest::Client {
    built.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to build lookup HTTP client, using defaults");
        reqwest::Client::new()
    })
}

#[async_trait]
impl LookupTransport for HttpLookupTransport {
    async fn post_lookup(&self, request: &QueryRequest) -> Result<TransportReply, LookupError> {
        let body = serde_json::to_vec(request)
            .map_err(|e| LookupError::Transport(format!("Failed to encode lookup request: {}", e)))?;

        debug!(
            url = %self.url,
            body_len = body.len(),
            "Sending lookup request"
        );

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .header("Accept", JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                LookupError::Transport(format!("Lookup request to {} failed: {}", self.url, e))
            })?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default();

        let text = response.text().await.map_err(|e| {
            LookupError::Transport(format!(
                "Failed to read lookup response from {}: {}",
                self.url, e
            ))
        })?;

        debug!(
            url = %self.url,
            status = status.as_u16(),
            response_len = text.len(),
            "Lookup response received"
        );

        let envelope: ApiEnvelope = serde_json::from_str(&text).map_err(|e| {
            LookupError::Transport(format!(
                "Invalid lookup response (HTTP {}): {}",
                status.as_u16(),
                e
            ))
        })?;

        Ok(TransportReply::new(status_text, envelope))
    }
}
