pub mod busy_guard;
pub mod collect_query;
pub mod fetch_lookup;
pub mod render_lookup;
pub mod submit_lookup;

pub use busy_guard::BusyGuard;
pub use collect_query::CollectQueryUseCase;
pub use fetch_lookup::FetchLookupUseCase;
pub use render_lookup::{RecordSection, RenderLookupUseCase, RenderSummary};
pub use submit_lookup::{SubmitLookupUseCase, SubmitOutcome};
