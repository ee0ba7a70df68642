#![allow(dead_code)]
pub mod mock_backend;

pub use mock_backend::MockLookupApi;

use dnslookup_client::LookupPage;
use dnslookup_domain::ClientConfig;
use dnslookup_infrastructure::page::MemoryPage;
use std::sync::Arc;

/// An in-memory page talking to `api` over HTTP.
pub fn page_for(api: &MockLookupApi) -> (LookupPage, Arc<MemoryPage>) {
    let mut config = ClientConfig::default();
    config.api.base_url = api.base_url();
    config.ui.scroll_delay_ms = 0;
    LookupPage::in_memory(&config)
}
