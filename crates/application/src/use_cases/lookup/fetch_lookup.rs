use crate::ports::LookupTransport;
use dnslookup_domain::{LookupError, LookupResult, QueryRequest};
use std::sync::Arc;
use tracing::debug;

/// Sends a query to the lookup API and validates the envelope.
pub struct FetchLookupUseCase {
    transport: Arc<dyn LookupTransport>,
}

impl FetchLookupUseCase {
    pub fn new(transport: Arc<dyn LookupTransport>) -> Self {
        Self { transport }
    }

    /// Returns the first lookup result. Results for further nameservers are
    /// dropped since the form only ever sends one.
    pub async fn execute(&self, request: &QueryRequest) -> Result<LookupResult, LookupError> {
        let reply = self.transport.post_lookup(request).await?;

        let count = reply.envelope.result_count();
        if count > 1 {
            debug!(
                results = count,
                "Lookup returned several results, rendering the first"
            );
        }

        reply.envelope.into_first_result(&reply.status_text)
    }
}
