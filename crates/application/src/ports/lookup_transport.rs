use async_trait::async_trait;
use dnslookup_domain::{ApiEnvelope, LookupError, QueryRequest};

/// Parsed answer of the lookup endpoint, whatever its HTTP status.
#[derive(Debug, Clone)]
pub struct TransportReply {
    /// HTTP reason phrase, e.g. `Bad Request`.
    pub status_text: String,
    pub envelope: ApiEnvelope,
}

impl TransportReply {
    pub fn new(status_text: impl Into<String>, envelope: ApiEnvelope) -> Self {
        Self {
            status_text: status_text.into(),
            envelope,
        }
    }
}

/// Port for sending a query to the lookup API.
///
/// Implementations fail only with [`LookupError::Transport`]: network errors
/// or a body that is not a JSON envelope. Logical failures are reported in
/// the envelope.
#[async_trait]
pub trait LookupTransport: Send + Sync {
    async fn post_lookup(&self, request: &QueryRequest) -> Result<TransportReply, LookupError>;
}
