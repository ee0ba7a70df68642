use dnslookup_application::ports::{
    MessageBanner, NameserverPicker, ResultsPanel, SubmitControl, TabStrip,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

/// Tab and pane ids of the results panel, in display order.
pub const RESULT_TABS: &[&str] = &["answers", "authorities", "additional", "edns"];

// ── Submit button ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemorySubmitButton {
    busy: AtomicBool,
}

impl MemorySubmitButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

impl SubmitControl for MemorySubmitButton {
    fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::SeqCst);
    }

    fn is_busy(&self) -> bool {
        self.busy()
    }

    fn try_set_busy(&self) -> bool {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

// ── Message banner ─────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryBanner {
    text: RwLock<String>,
    visible: AtomicBool,
}

impl MemoryBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.text.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Banner text while the banner is shown.
    pub fn visible_text(&self) -> Option<String> {
        self.is_visible().then(|| self.text())
    }
}

impl MessageBanner for MemoryBanner {
    fn set_text(&self, text: &str) {
        *self.text.write().unwrap_or_else(|e| e.into_inner()) = text.to_string();
    }

    fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }
}

// ── Results panel ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryResultsPanel {
    revealed: AtomicBool,
    scrolls: AtomicUsize,
}

impl MemoryResultsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.load(Ordering::SeqCst)
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls.load(Ordering::SeqCst)
    }
}

impl ResultsPanel for MemoryResultsPanel {
    fn reveal(&self) {
        self.revealed.store(true, Ordering::SeqCst);
    }

    fn scroll_into_view(&self) {
        self.scrolls.fetch_add(1, Ordering::SeqCst);
    }
}

// ── Tabs ───────────────────────────────────────────────────────────────────

pub struct MemoryTabStrip {
    tab_ids: Vec<String>,
    pane_ids: Vec<String>,
    active_tabs: RwLock<HashSet<String>>,
    active_panes: RwLock<HashSet<String>>,
}

impl MemoryTabStrip {
    /// Tabs and panes sharing `ids`, the first one active.
    pub fn new(ids: &[&str]) -> Self {
        let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        let initial: HashSet<String> = ids.first().cloned().into_iter().collect();
        Self {
            tab_ids: ids.clone(),
            pane_ids: ids,
            active_tabs: RwLock::new(initial.clone()),
            active_panes: RwLock::new(initial),
        }
    }

    pub fn result_tabs() -> Self {
        Self::new(RESULT_TABS)
    }

    /// The active tab, in display order if several are active.
    pub fn active_tab(&self) -> Option<String> {
        first_active(&self.tab_ids, &self.active_tabs)
    }

    pub fn active_pane(&self) -> Option<String> {
        first_active(&self.pane_ids, &self.active_panes)
    }

    pub fn active_tab_count(&self) -> usize {
        self.active_tabs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

fn first_active(ids: &[String], active: &RwLock<HashSet<String>>) -> Option<String> {
    let active = active.read().unwrap_or_else(|e| e.into_inner());
    ids.iter().find(|id| active.contains(*id)).cloned()
}

fn set_active(set: &RwLock<HashSet<String>>, id: &str, active: bool) {
    let mut set = set.write().unwrap_or_else(|e| e.into_inner());
    if active {
        set.insert(id.to_string());
    } else {
        set.remove(id);
    }
}

impl TabStrip for MemoryTabStrip {
    fn tab_ids(&self) -> Vec<String> {
        self.tab_ids.clone()
    }

    fn pane_ids(&self) -> Vec<String> {
        self.pane_ids.clone()
    }

    fn set_tab_active(&self, id: &str, active: bool) {
        set_active(&self.active_tabs, id, active);
    }

    fn set_pane_active(&self, id: &str, active: bool) {
        set_active(&self.active_panes, id, active);
    }
}

// ── Nameserver picker ──────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryNameserverPicker {
    label: RwLock<String>,
    custom_visible: AtomicBool,
    focus_requests: AtomicUsize,
}

impl MemoryNameserverPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address_label(&self) -> String {
        self.label.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn custom_group_visible(&self) -> bool {
        self.custom_visible.load(Ordering::SeqCst)
    }

    pub fn focus_requests(&self) -> usize {
        self.focus_requests.load(Ordering::SeqCst)
    }
}

impl NameserverPicker for MemoryNameserverPicker {
    fn set_address_label(&self, label: &str) {
        *self.label.write().unwrap_or_else(|e| e.into_inner()) = label.to_string();
    }

    fn set_custom_group_visible(&self, visible: bool) {
        self.custom_visible.store(visible, Ordering::SeqCst);
    }

    fn focus_custom_input(&self) {
        self.focus_requests.fetch_add(1, Ordering::SeqCst);
    }
}
