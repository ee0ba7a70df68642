//! Lookup page composition root.
//!
//! Loads [`ClientConfig`](dnslookup_domain::ClientConfig), installs logging
//! and wires the lookup use cases to a set of view ports.

pub mod bootstrap;
pub mod di;

pub use di::{LookupPage, PageViews, UseCases};
