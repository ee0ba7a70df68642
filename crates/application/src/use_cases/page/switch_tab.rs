use crate::ports::TabStrip;
use dnslookup_domain::LookupError;
use std::sync::Arc;
use tracing::debug;

/// Keeps exactly one result tab and its pane active.
pub struct SwitchTabUseCase {
    tabs: Arc<dyn TabStrip>,
}

impl SwitchTabUseCase {
    pub fn new(tabs: Arc<dyn TabStrip>) -> Self {
        Self { tabs }
    }

    pub fn execute(&self, tab_id: &str) -> Result<(), LookupError> {
        let tab_ids = self.tabs.tab_ids();
        if !tab_ids.iter().any(|id| id == tab_id) {
            return Err(LookupError::UnknownTab(tab_id.to_string()));
        }

        let pane_ids = self.tabs.pane_ids();
        for id in &tab_ids {
            self.tabs.set_tab_active(id, false);
        }
        for id in &pane_ids {
            self.tabs.set_pane_active(id, false);
        }

        self.tabs.set_tab_active(tab_id, true);
        if pane_ids.iter().any(|id| id == tab_id) {
            self.tabs.set_pane_active(tab_id, true);
        }

        debug!(tab = tab_id, "Tab activated");
        Ok(())
    }
}
