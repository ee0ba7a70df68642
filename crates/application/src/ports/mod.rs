mod form_controls;
mod lookup_transport;
mod page_chrome;
mod result_views;

pub use form_controls::FormControls;
pub use lookup_transport::{LookupTransport, TransportReply};
pub use page_chrome::{MessageBanner, NameserverPicker, ResultsPanel, SubmitControl, TabStrip};
pub use result_views::{EdnsView, RecordTableView, ResultViews};
