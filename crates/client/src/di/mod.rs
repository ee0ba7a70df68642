pub mod page;
pub mod use_cases;
pub mod views;

pub use page::LookupPage;
pub use use_cases::UseCases;
pub use views::PageViews;
