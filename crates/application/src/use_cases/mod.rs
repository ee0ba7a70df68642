pub mod lookup;
pub mod page;

// Re-export use cases
pub use lookup::{
    BusyGuard, CollectQueryUseCase, FetchLookupUseCase, RecordSection, RenderLookupUseCase,
    RenderSummary, SubmitLookupUseCase, SubmitOutcome,
};
pub use page::{SelectNameserverUseCase, SwitchTabUseCase};
