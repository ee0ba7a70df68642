use super::{BusyGuard, CollectQueryUseCase, FetchLookupUseCase, RenderLookupUseCase, RenderSummary};
use crate::ports::{MessageBanner, ResultsPanel, SubmitControl};
use dnslookup_domain::LookupError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Result of one press of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened.
    Ignored,
    Rendered(RenderSummary),
    /// The error text is shown in the message banner.
    Failed(LookupError),
}

/// Runs collect → fetch → render for the lookup form and drives the busy,
/// error and results state of the page.
pub struct SubmitLookupUseCase {
    collect: CollectQueryUseCase,
    fetch: FetchLookupUseCase,
    render: RenderLookupUseCase,
    submit_control: Arc<dyn SubmitControl>,
    message: Arc<dyn MessageBanner>,
    results: Arc<dyn ResultsPanel>,
    scroll_delay: Duration,
}

impl SubmitLookupUseCase {
    pub fn new(
        collect: CollectQueryUseCase,
        fetch: FetchLookupUseCase,
        render: RenderLookupUseCase,
        submit_control: Arc<dyn SubmitControl>,
        message: Arc<dyn MessageBanner>,
        results: Arc<dyn ResultsPanel>,
    ) -> Self {
        Self {
            collect,
            fetch,
            render,
            submit_control,
            message,
            results,
            scroll_delay: Duration::from_millis(100),
        }
    }

    pub fn with_scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = delay;
        self
    }

    pub async fn execute(&self) -> SubmitOutcome {
        let Some(_busy) = BusyGuard::acquire(self.submit_control.as_ref()) else {
            warn!("Lookup already in progress, ignoring submit");
            return SubmitOutcome::Ignored;
        };

        self.message.set_text("");
        self.message.set_visible(false);

        match self.run().await {
            Ok(summary) => {
                self.results.reveal();
                self.schedule_scroll();
                SubmitOutcome::Rendered(summary)
            }
            Err(e) => {
                error!(error = %e, kind = e.kind(), "Lookup failed");
                self.message.set_text(&e.to_string());
                self.message.set_visible(true);
                SubmitOutcome::Failed(e)
            }
        }
    }

    async fn run(&self) -> Result<RenderSummary, LookupError> {
        let request = self.collect.execute();
        request.validate()?;

        let result = self.fetch.execute(&request).await?;
        let summary = self.render.execute(&result);

        info!(
            domain = %request.domain(),
            nameserver = %request.nameserver(),
            answers = summary.answers,
            authorities = summary.authorities,
            additional = summary.additional,
            edns = summary.edns,
            "Lookup rendered"
        );

        Ok(summary)
    }

    fn schedule_scroll(&self) {
        let results = Arc::clone(&self.results);
        let delay = self.scroll_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            results.scroll_into_view();
        });
    }
}
