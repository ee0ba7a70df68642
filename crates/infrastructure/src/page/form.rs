use dnslookup_application::ports::FormControls;
use dnslookup_domain::{QueryFlag, DEFAULT_RECORD_TYPE};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Values of the lookup form controls. `None` is a control missing from the
/// page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub domain: Option<String>,
    pub record_type: Option<String>,
    pub nameserver: Option<String>,
    pub custom_server: Option<String>,
    pub ecs: Option<String>,
    /// Toggle state keyed by flag wire key.
    pub flags: BTreeMap<&'static str, bool>,
}

impl FormState {
    /// Every control present; recursion desired is the only toggle on.
    pub fn new(default_nameserver: &str) -> Self {
        let flags = QueryFlag::all()
            .iter()
            .map(|flag| (flag.key(), *flag == QueryFlag::Rd))
            .collect();
        Self {
            domain: Some(String::new()),
            record_type: Some(DEFAULT_RECORD_TYPE.to_string()),
            nameserver: Some(default_nameserver.to_string()),
            custom_server: Some(String::new()),
            ecs: Some(String::new()),
            flags,
        }
    }
}

pub struct MemoryForm {
    state: RwLock<FormState>,
}

impl MemoryForm {
    pub fn new(default_nameserver: &str) -> Self {
        Self::from_state(FormState::new(default_nameserver))
    }

    pub fn from_state(state: FormState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    pub fn state(&self) -> FormState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Applies `edit` to the form state, the way a user fills in controls.
    pub fn update(&self, edit: impl FnOnce(&mut FormState)) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        edit(&mut state);
    }

    pub fn set_domain(&self, domain: &str) {
        self.update(|s| s.domain = Some(domain.to_string()));
    }

    pub fn set_record_type(&self, record_type: &str) {
        self.update(|s| s.record_type = Some(record_type.to_string()));
    }

    pub fn set_nameserver(&self, nameserver: &str) {
        self.update(|s| s.nameserver = Some(nameserver.to_string()));
    }

    pub fn set_custom_server(&self, address: &str) {
        self.update(|s| s.custom_server = Some(address.to_string()));
    }

    pub fn set_ecs(&self, ecs: &str) {
        self.update(|s| s.ecs = Some(ecs.to_string()));
    }

    pub fn set_flag(&self, flag: QueryFlag, checked: bool) {
        self.update(|s| {
            s.flags.insert(flag.key(), checked);
        });
    }

    /// Removes a toggle from the page.
    pub fn remove_flag(&self, flag: QueryFlag) {
        self.update(|s| {
            s.flags.remove(flag.key());
        });
    }
}

impl FormControls for MemoryForm {
    fn domain(&self) -> Option<String> {
        self.state().domain
    }

    fn record_type(&self) -> Option<String> {
        self.state().record_type
    }

    fn nameserver(&self) -> Option<String> {
        self.state().nameserver
    }

    fn custom_server(&self) -> Option<String> {
        self.state().custom_server
    }

    fn ecs(&self) -> Option<String> {
        self.state().ecs
    }

    fn flag(&self, flag: QueryFlag) -> Option<bool> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .flags
            .get(flag.key())
            .copied()
    }
}
