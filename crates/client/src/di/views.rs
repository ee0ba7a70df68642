use dnslookup_application::ports::{
    FormControls, MessageBanner, NameserverPicker, ResultViews, ResultsPanel, SubmitControl,
    TabStrip,
};
use dnslookup_infrastructure::page::MemoryPage;
use std::sync::Arc;

/// Every view port the lookup page drives.
#[derive(Clone)]
pub struct PageViews {
    pub form: Arc<dyn FormControls>,
    pub results: ResultViews,
    pub submit: Arc<dyn SubmitControl>,
    pub message: Arc<dyn MessageBanner>,
    pub results_panel: Arc<dyn ResultsPanel>,
    pub tabs: Arc<dyn TabStrip>,
    pub picker: Arc<dyn NameserverPicker>,
}

impl PageViews {
    pub fn from_memory(page: &MemoryPage) -> Self {
        Self {
            form: page.form.clone(),
            results: page.result_views(),
            submit: page.submit.clone(),
            message: page.message.clone(),
            results_panel: page.results.clone(),
            tabs: page.tabs.clone(),
            picker: page.picker.clone(),
        }
    }
}
