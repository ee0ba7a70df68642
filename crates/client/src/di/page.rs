use super::{PageViews, UseCases};
use dnslookup_application::ports::LookupTransport;
use dnslookup_application::use_cases::SubmitOutcome;
use dnslookup_domain::{ClientConfig, LookupError};
use dnslookup_infrastructure::http::HttpLookupTransport;
use dnslookup_infrastructure::page::MemoryPage;
use std::sync::Arc;
use tracing::info;

/// A wired lookup page. Each method is the handler of one page event.
pub struct LookupPage {
    use_cases: UseCases,
}

impl LookupPage {
    /// Wires `views` to the HTTP transport configured in `config.api`.
    pub fn new(config: &ClientConfig, views: PageViews) -> Self {
        let transport = Arc::new(HttpLookupTransport::new(&config.api));
        Self::with_transport(config, views, transport)
    }

    pub fn with_transport(
        config: &ClientConfig,
        views: PageViews,
        transport: Arc<dyn LookupTransport>,
    ) -> Self {
        let use_cases = UseCases::new(config, &views, transport);
        use_cases.select_nameserver.initialize();

        info!(
            lookup_url = %config.api.lookup_url(),
            "Lookup page initialized"
        );

        Self { use_cases }
    }

    /// A page rendered into a fresh [`MemoryPage`].
    pub fn in_memory(config: &ClientConfig) -> (Self, Arc<MemoryPage>) {
        let memory = Arc::new(MemoryPage::new(&config.ui.default_nameserver));
        let page = Self::new(config, PageViews::from_memory(&memory));
        (page, memory)
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.use_cases.submit.execute().await
    }

    pub fn switch_tab(&self, tab_id: &str) -> Result<(), LookupError> {
        self.use_cases.switch_tab.execute(tab_id)
    }

    pub fn nameserver_selected(&self, value: &str) {
        self.use_cases.select_nameserver.selection_changed(value);
    }

    pub fn custom_nameserver_input(&self, value: &str) {
        self.use_cases.select_nameserver.custom_input_changed(value);
    }
}
