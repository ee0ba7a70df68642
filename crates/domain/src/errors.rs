use thiserror::Error;

/// Failures of a lookup submission. The `Display` form is the text shown in
/// the page's message banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Server(String),

    #[error("No data received")]
    EmptyResponse,

    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}

impl LookupError {
    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::Validation(_) => "validation",
            LookupError::Transport(_) => "transport",
            LookupError::Server(_) => "server",
            LookupError::EmptyResponse => "empty_response",
            LookupError::UnknownTab(_) => "unknown_tab",
        }
    }
}
