pub mod api;
pub mod errors;
pub mod logging;
pub mod root;
pub mod ui;

pub use api::{ApiConfig, LOOKUP_PATH};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{ClientConfig, ConfigOverrides, DEFAULT_CONFIG_FILE};
pub use ui::UiConfig;
