use serde::{Deserialize, Serialize};

/// Path of the lookup endpoint, relative to [`ApiConfig::base_url`].
pub const LOOKUP_PATH: &str = "/api/lookup/";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Origin serving the lookup API, e.g. `http://127.0.0.1:8080`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ApiConfig {
    pub fn lookup_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), LOOKUP_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}
