use dnslookup_domain::{DisplayRow, EdnsItem};
use std::sync::Arc;

/// A record table together with its empty-state marker.
pub trait RecordTableView: Send + Sync {
    fn clear_rows(&self);
    fn append_row(&self, row: DisplayRow);
    fn set_empty_state_visible(&self, visible: bool);
    fn set_table_visible(&self, visible: bool);
}

/// The EDNS grid together with its empty-state marker.
pub trait EdnsView: Send + Sync {
    fn clear_items(&self);
    fn append_item(&self, item: EdnsItem);
    fn set_empty_state_visible(&self, visible: bool);
}

/// The four result regions of the page.
#[derive(Clone)]
pub struct ResultViews {
    pub answers: Arc<dyn RecordTableView>,
    pub authorities: Arc<dyn RecordTableView>,
    pub additional: Arc<dyn RecordTableView>,
    pub edns: Arc<dyn EdnsView>,
}
