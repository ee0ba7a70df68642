//! In-memory page model.
//!
//! Implements every view port with plain state behind locks. It is the
//! headless render target of the client and the page double used by
//! integration tests; [`MemoryPage::snapshot`] captures the whole page as a
//! serializable value.

pub mod chrome;
pub mod form;
pub mod results;

pub use chrome::{
    MemoryBanner, MemoryNameserverPicker, MemoryResultsPanel, MemorySubmitButton, MemoryTabStrip,
    RESULT_TABS,
};
pub use form::{FormState, MemoryForm};
pub use results::{EdnsGridState, MemoryEdnsGrid, MemoryRecordTable, RecordTableState};

use dnslookup_application::ports::ResultViews;
use serde::Serialize;
use std::sync::Arc;

/// Every region of the lookup page.
pub struct MemoryPage {
    pub form: Arc<MemoryForm>,
    pub answers: Arc<MemoryRecordTable>,
    pub authorities: Arc<MemoryRecordTable>,
    pub additional: Arc<MemoryRecordTable>,
    pub edns: Arc<MemoryEdnsGrid>,
    pub submit: Arc<MemorySubmitButton>,
    pub message: Arc<MemoryBanner>,
    pub results: Arc<MemoryResultsPanel>,
    pub tabs: Arc<MemoryTabStrip>,
    pub picker: Arc<MemoryNameserverPicker>,
}

impl MemoryPage {
    /// A freshly loaded page with `default_nameserver` selected and the
    /// answers tab active.
    pub fn new(default_nameserver: &str) -> Self {
        Self {
            form: Arc::new(MemoryForm::new(default_nameserver)),
            answers: Arc::new(MemoryRecordTable::new()),
            authorities: Arc::new(MemoryRecordTable::new()),
            additional: Arc::new(MemoryRecordTable::new()),
            edns: Arc::new(MemoryEdnsGrid::new()),
            submit: Arc::new(MemorySubmitButton::new()),
            message: Arc::new(MemoryBanner::new()),
            results: Arc::new(MemoryResultsPanel::new()),
            tabs: Arc::new(MemoryTabStrip::result_tabs()),
            picker: Arc::new(MemoryNameserverPicker::new()),
        }
    }

    pub fn result_views(&self) -> ResultViews {
        ResultViews {
            answers: self.answers.clone(),
            authorities: self.authorities.clone(),
            additional: self.additional.clone(),
            edns: self.edns.clone(),
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            form: self.form.state(),
            busy: self.submit.busy(),
            message: self.message.visible_text(),
            results_visible: self.results.is_revealed(),
            answers: self.answers.state(),
            authorities: self.authorities.state(),
            additional: self.additional.state(),
            edns: self.edns.state(),
            active_tab: self.tabs.active_tab(),
            active_pane: self.tabs.active_pane(),
            nameserver_label: self.picker.address_label(),
            custom_nameserver_visible: self.picker.custom_group_visible(),
        }
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new("google")
    }
}

/// Point-in-time copy of the page state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub form: FormState,
    pub busy: bool,
    /// Banner text, present only while the banner is shown.
    pub message: Option<String>,
    pub results_visible: bool,
    pub answers: RecordTableState,
    pub authorities: RecordTableState,
    pub additional: RecordTableState,
    pub edns: EdnsGridState,
    pub active_tab: Option<String>,
    pub active_pane: Option<String>,
    pub nameserver_label: String,
    pub custom_nameserver_visible: bool,
}

impl PageSnapshot {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
