use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Delay before the results panel is scrolled into view.
    #[serde(default = "default_scroll_delay_ms")]
    pub scroll_delay_ms: u64,

    /// Initial value of the nameserver selector: a preset key, `custom`, or
    /// a protocol-qualified address.
    #[serde(default = "default_nameserver")]
    pub default_nameserver: String,
}

impl UiConfig {
    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scroll_delay_ms: default_scroll_delay_ms(),
            default_nameserver: default_nameserver(),
        }
    }
}

fn default_scroll_delay_ms() -> u64 {
    100
}

fn default_nameserver() -> String {
    "google".to_string()
}
