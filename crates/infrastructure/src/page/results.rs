use dnslookup_application::ports::{EdnsView, RecordTableView};
use dnslookup_domain::{DisplayRow, EdnsItem};
use serde::Serialize;
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordTableState {
    pub rows: Vec<DisplayRow>,
    pub table_visible: bool,
    pub empty_state_visible: bool,
}

impl Default for RecordTableState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            table_visible: true,
            empty_state_visible: false,
        }
    }
}

/// One record table of the results panel.
#[derive(Default)]
pub struct MemoryRecordTable {
    state: RwLock<RecordTableState>,
}

impl MemoryRecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RecordTableState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn row_count(&self) -> usize {
        self.state.read().unwrap_or_else(|e| e.into_inner()).rows.len()
    }

    fn with_state(&self, edit: impl FnOnce(&mut RecordTableState)) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        edit(&mut state);
    }
}

impl RecordTableView for MemoryRecordTable {
    fn clear_rows(&self) {
        self.with_state(|s| s.rows.clear());
    }

    fn append_row(&self, row: DisplayRow) {
        self.with_state(|s| s.rows.push(row));
    }

    fn set_empty_state_visible(&self, visible: bool) {
        self.with_state(|s| s.empty_state_visible = visible);
    }

    fn set_table_visible(&self, visible: bool) {
        self.with_state(|s| s.table_visible = visible);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EdnsGridState {
    pub items: Vec<EdnsItem>,
    pub empty_state_visible: bool,
}

/// Label/value grid of EDNS information.
#[derive(Default)]
pub struct MemoryEdnsGrid {
    state: RwLock<EdnsGridState>,
}

impl MemoryEdnsGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EdnsGridState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl EdnsView for MemoryEdnsGrid {
    fn clear_items(&self) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .items
            .clear();
    }

    fn append_item(&self, item: EdnsItem) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .items
            .push(item);
    }

    fn set_empty_state_visible(&self, visible: bool) {
        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .empty_state_visible = visible;
    }
}
