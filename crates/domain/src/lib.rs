//! DNS lookup client domain layer
pub mod config;
pub mod display;
pub mod errors;
pub mod lookup_response;
pub mod nameserver;
pub mod query_request;

pub use config::{
    ApiConfig, ClientConfig, ConfigError, ConfigOverrides, LoggingConfig, UiConfig,
    DEFAULT_CONFIG_FILE, LOOKUP_PATH,
};
pub use display::{DisplayCell, DisplayRow, EdnsItem, PLACEHOLDER};
pub use errors::LookupError;
pub use lookup_response::{
    ApiEnvelope, EdnsField, EdnsInfo, EdnsValue, LookupResult, Record, RecordField,
    SUCCESS_STATUS,
};
pub use nameserver::{
    format_nameserver, NameserverAddress, NameserverPreset, NameserverSelection, Protocol,
    CUSTOM_NAMESERVER,
};
pub use query_request::{QueryFlag, QueryFlags, QueryRequest, DEFAULT_RECORD_TYPE};
