use super::PageViews;
use dnslookup_application::ports::LookupTransport;
use dnslookup_application::use_cases::{
    CollectQueryUseCase, FetchLookupUseCase, RenderLookupUseCase, SelectNameserverUseCase,
    SubmitLookupUseCase, SwitchTabUseCase,
};
use dnslookup_domain::ClientConfig;
use std::sync::Arc;

pub struct UseCases {
    pub submit: Arc<SubmitLookupUseCase>,
    pub switch_tab: Arc<SwitchTabUseCase>,
    pub select_nameserver: Arc<SelectNameserverUseCase>,
}

impl UseCases {
    pub fn new(
        config: &ClientConfig,
        views: &PageViews,
        transport: Arc<dyn LookupTransport>,
    ) -> Self {
        let submit = SubmitLookupUseCase::new(
            CollectQueryUseCase::new(views.form.clone()),
            FetchLookupUseCase::new(transport),
            RenderLookupUseCase::new(views.results.clone()),
            views.submit.clone(),
            views.message.clone(),
            views.results_panel.clone(),
        )
        .with_scroll_delay(config.ui.scroll_delay());

        Self {
            submit: Arc::new(submit),
            switch_tab: Arc::new(SwitchTabUseCase::new(views.tabs.clone())),
            select_nameserver: Arc::new(SelectNameserverUseCase::new(
                views.form.clone(),
                views.picker.clone(),
            )),
        }
    }
}
