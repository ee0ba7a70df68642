use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::errors::LookupError;

/// Envelope status reported for a successful lookup.
pub const SUCCESS_STATUS: &str = "success";

/// JSON envelope returned by `POST /api/lookup/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<LookupResult>>,
}

impl ApiEnvelope {
    pub fn success(data: Vec<LookupResult>) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            message: None,
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Validates the envelope and returns the first lookup result.
    ///
    /// `status_text` is the HTTP reason phrase, used when a failed envelope
    /// carries no message. Results after the first are dropped.
    pub fn into_first_result(self, status_text: &str) -> Result<LookupResult, LookupError> {
        if !self.is_success() {
            let message = self
                .message
                .filter(|m| !m.is_empty())
                .or_else(|| Some(status_text.to_string()).filter(|s| !s.is_empty()))
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(LookupError::Server(message));
        }

        self.data
            .and_then(|data| data.into_iter().next())
            .ok_or(LookupError::EmptyResponse)
    }

    pub fn result_count(&self) -> usize {
        self.data.as_ref().map(Vec::len).unwrap_or(0)
    }
}

/// Records and EDNS details returned for one nameserver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    #[serde(default)]
    pub answers: Option<Vec<Record>>,
    #[serde(default)]
    pub authorities: Option<Vec<Record>>,
    #[serde(default)]
    pub additional: Option<Vec<Record>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edns: Option<EdnsInfo>,
}

/// Keys a record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Name,
    Type,
    Class,
    Ttl,
    Address,
    Mname,
    Rtt,
    Nameserver,
    Status,
}

impl RecordField {
    pub fn key(&self) -> &'static str {
        match self {
            RecordField::Name => "name",
            RecordField::Type => "type",
            RecordField::Class => "class",
            RecordField::Ttl => "ttl",
            RecordField::Address => "address",
            RecordField::Mname => "mname",
            RecordField::Rtt => "rtt",
            RecordField::Nameserver => "nameserver",
            RecordField::Status => "status",
        }
    }

    /// Column label: the key with its first letter upper-cased.
    pub fn label(&self) -> &'static str {
        match self {
            RecordField::Name => "Name",
            RecordField::Type => "Type",
            RecordField::Class => "Class",
            RecordField::Ttl => "Ttl",
            RecordField::Address => "Address",
            RecordField::Mname => "Mname",
            RecordField::Rtt => "Rtt",
            RecordField::Nameserver => "Nameserver",
            RecordField::Status => "Status",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single resource record as rendered by the backend.
///
/// Every key is optional. Numbers are accepted and kept in their string
/// form; `null`, `""`, `0` and `false` are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub record_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub mname: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub rtt: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub nameserver: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Record {
    /// Value of `field`, `None` when unset or empty.
    pub fn field(&self, field: RecordField) -> Option<&str> {
        let value = match field {
            RecordField::Name => &self.name,
            RecordField::Type => &self.record_type,
            RecordField::Class => &self.class,
            RecordField::Ttl => &self.ttl,
            RecordField::Address => &self.address,
            RecordField::Mname => &self.mname,
            RecordField::Rtt => &self.rtt,
            RecordField::Nameserver => &self.nameserver,
            RecordField::Status => &self.status,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(true)) => Some("true".to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// An EDNS value as sent by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdnsValue {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl EdnsValue {
    /// `false` and the empty string count as absent.
    pub fn is_present(&self) -> bool {
        match self {
            EdnsValue::Flag(flag) => *flag,
            EdnsValue::Text(text) => !text.is_empty(),
            EdnsValue::Integer(_) | EdnsValue::Float(_) => true,
        }
    }
}

impl fmt::Display for EdnsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdnsValue::Flag(true) => f.write_str("Yes"),
            EdnsValue::Flag(false) => f.write_str("false"),
            EdnsValue::Integer(n) => write!(f, "{}", n),
            EdnsValue::Float(n) => write!(f, "{}", n),
            EdnsValue::Text(text) => f.write_str(text),
        }
    }
}

/// EDNS options, in the order they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdnsField {
    Nsid,
    Cookie,
    Subnet,
    SubnetScope,
    ExtendedError,
    UdpSize,
    DnssecOk,
}

impl EdnsField {
    pub fn key(&self) -> &'static str {
        match self {
            EdnsField::Nsid => "nsid",
            EdnsField::Cookie => "cookie",
            EdnsField::Subnet => "subnet",
            EdnsField::SubnetScope => "subnet_scope",
            EdnsField::ExtendedError => "extended_error",
            EdnsField::UdpSize => "udp_size",
            EdnsField::DnssecOk => "dnssec_ok",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EdnsField::Nsid => "NSID",
            EdnsField::Cookie => "Cookie",
            EdnsField::Subnet => "Client Subnet",
            EdnsField::SubnetScope => "Subnet Scope",
            EdnsField::ExtendedError => "Extended Error",
            EdnsField::UdpSize => "UDP Size",
            EdnsField::DnssecOk => "DNSSEC OK",
        }
    }

    pub fn all() -> &'static [EdnsField] {
        &[
            EdnsField::Nsid,
            EdnsField::Cookie,
            EdnsField::Subnet,
            EdnsField::SubnetScope,
            EdnsField::ExtendedError,
            EdnsField::UdpSize,
            EdnsField::DnssecOk,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdnsInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsid: Option<EdnsValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<EdnsValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<EdnsValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_scope: Option<EdnsValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_error: Option<EdnsValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_size: Option<EdnsValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dnssec_ok: Option<EdnsValue>,
}

impl EdnsInfo {
    pub fn get(&self, field: EdnsField) -> Option<&EdnsValue> {
        match field {
            EdnsField::Nsid => self.nsid.as_ref(),
            EdnsField::Cookie => self.cookie.as_ref(),
            EdnsField::Subnet => self.subnet.as_ref(),
            EdnsField::SubnetScope => self.subnet_scope.as_ref(),
            EdnsField::ExtendedError => self.extended_error.as_ref(),
            EdnsField::UdpSize => self.udp_size.as_ref(),
            EdnsField::DnssecOk => self.dnssec_ok.as_ref(),
        }
    }

    /// Fields that carry a displayable value, in display order.
    pub fn present_fields(&self) -> impl Iterator<Item = (EdnsField, &EdnsValue)> + '_ {
        EdnsField::all().iter().filter_map(move |field| {
            self.get(*field)
                .filter(|value| value.is_present())
                .map(|value| (*field, value))
        })
    }
}
