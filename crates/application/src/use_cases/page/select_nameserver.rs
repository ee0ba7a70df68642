use crate::ports::{FormControls, NameserverPicker};
use dnslookup_domain::{format_nameserver, NameserverSelection};
use std::sync::Arc;

/// Keeps the address display and the custom-server input in sync with the
/// nameserver selector.
pub struct SelectNameserverUseCase {
    form: Arc<dyn FormControls>,
    picker: Arc<dyn NameserverPicker>,
}

impl SelectNameserverUseCase {
    pub fn new(form: Arc<dyn FormControls>, picker: Arc<dyn NameserverPicker>) -> Self {
        Self { form, picker }
    }

    /// Shows the label of the selector's current value on page load.
    pub fn initialize(&self) {
        let current = self.form.nameserver().unwrap_or_default();
        self.apply(&current, false);
    }

    /// Called when the selector changes to `value`.
    pub fn selection_changed(&self, value: &str) {
        self.apply(value, true);
    }

    /// Called on every keystroke in the custom-server input.
    pub fn custom_input_changed(&self, value: &str) {
        let label = format_nameserver(value);
        if label.is_empty() {
            self.picker.set_address_label(value);
        } else {
            self.picker.set_address_label(&label);
        }
    }

    fn apply(&self, value: &str, focus_custom: bool) {
        let selection = NameserverSelection::parse(value);
        if selection.is_custom() {
            self.picker.set_custom_group_visible(true);
            self.picker.set_address_label("");
            if focus_custom {
                self.picker.focus_custom_input();
            }
        } else {
            self.picker.set_custom_group_visible(false);
            self.picker.set_address_label(&selection.display_label());
        }
    }
}
