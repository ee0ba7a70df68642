/// The submit button: disabled with a loading indicator while busy.
pub trait SubmitControl: Send + Sync {
    fn set_busy(&self, busy: bool);
    fn is_busy(&self) -> bool;

    /// Marks the control busy unless it already is. Returns whether this
    /// call made it busy. Implementations shared across threads should
    /// override this with a single atomic step.
    fn try_set_busy(&self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.set_busy(true);
        true
    }
}

/// Error banner.
pub trait MessageBanner: Send + Sync {
    fn set_text(&self, text: &str);
    fn set_visible(&self, visible: bool);
}

/// Container holding all result regions.
pub trait ResultsPanel: Send + Sync {
    fn reveal(&self);
    fn scroll_into_view(&self);
}

/// Tab buttons and their content panes; a tab and its pane share an id.
pub trait TabStrip: Send + Sync {
    fn tab_ids(&self) -> Vec<String>;
    fn pane_ids(&self) -> Vec<String>;
    fn set_tab_active(&self, id: &str, active: bool);
    fn set_pane_active(&self, id: &str, active: bool);
}

/// Widgets that react to the nameserver selector.
pub trait NameserverPicker: Send + Sync {
    /// Read-only field describing the selected server.
    fn set_address_label(&self, label: &str);
    fn set_custom_group_visible(&self, visible: bool);
    fn focus_custom_input(&self);
}
