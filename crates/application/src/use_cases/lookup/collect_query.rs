use crate::ports::FormControls;
use dnslookup_domain::{
    NameserverSelection, QueryFlag, QueryFlags, QueryRequest, DEFAULT_RECORD_TYPE,
};
use std::sync::Arc;
use tracing::debug;

/// Snapshots the lookup form into a [`QueryRequest`].
pub struct CollectQueryUseCase {
    form: Arc<dyn FormControls>,
}

impl CollectQueryUseCase {
    pub fn new(form: Arc<dyn FormControls>) -> Self {
        Self { form }
    }

    pub fn execute(&self) -> QueryRequest {
        let domain = self
            .form
            .domain()
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        let record_type = self
            .form
            .record_type()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_RECORD_TYPE.to_string());

        let nameserver = self.server_address();

        let mut flags = QueryFlags::default();
        for flag in QueryFlag::all() {
            flags.set(*flag, self.form.flag(*flag).unwrap_or(false));
        }

        let request = QueryRequest::single(domain, record_type, nameserver)
            .with_flags(flags)
            .with_ecs(self.form.ecs().as_deref().unwrap_or(""));

        debug!(
            domain = %request.domain(),
            nameserver = %request.nameserver(),
            record_type = ?request.record_type,
            ecs = ?request.ecs,
            "Collected lookup form"
        );

        request
    }

    /// Address to query: the custom field when the selector is on `custom`,
    /// otherwise the selector's own value.
    fn server_address(&self) -> String {
        let Some(selected) = self.form.nameserver() else {
            return String::new();
        };
        let custom = self.form.custom_server().unwrap_or_default();
        NameserverSelection::parse(&selected).wire_address(&custom)
    }
}
