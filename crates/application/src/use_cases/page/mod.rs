pub mod select_nameserver;
pub mod switch_tab;

pub use select_nameserver::SelectNameserverUseCase;
pub use switch_tab::SwitchTabUseCase;
