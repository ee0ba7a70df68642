use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::LookupError;

/// Record type used when the selector has no value.
pub const DEFAULT_RECORD_TYPE: &str = "A";

/// Advanced query toggles exposed by the lookup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryFlag {
    Rd,
    Ad,
    Cd,
    Aa,
    Do,
    Z,
    Nsid,
    Cookie,
    Padding,
    Ede,
}

impl QueryFlag {
    /// Wire key, also used as the id of the matching toggle control.
    pub fn key(&self) -> &'static str {
        match self {
            QueryFlag::Rd => "rd",
            QueryFlag::Ad => "ad",
            QueryFlag::Cd => "cd",
            QueryFlag::Aa => "aa",
            QueryFlag::Do => "do",
            QueryFlag::Z => "z",
            QueryFlag::Nsid => "nsid",
            QueryFlag::Cookie => "cookie",
            QueryFlag::Padding => "padding",
            QueryFlag::Ede => "ede",
        }
    }

    pub fn all() -> &'static [QueryFlag] {
        &[
            QueryFlag::Rd,
            QueryFlag::Ad,
            QueryFlag::Cd,
            QueryFlag::Aa,
            QueryFlag::Do,
            QueryFlag::Z,
            QueryFlag::Nsid,
            QueryFlag::Cookie,
            QueryFlag::Padding,
            QueryFlag::Ede,
        ]
    }
}

impl fmt::Display for QueryFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Header bits and EDNS0 options requested for a lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFlags {
    #[serde(default)]
    pub rd: bool,
    #[serde(default)]
    pub ad: bool,
    #[serde(default)]
    pub cd: bool,
    #[serde(default)]
    pub aa: bool,
    #[serde(default, rename = "do")]
    pub dnssec_ok: bool,
    #[serde(default)]
    pub z: bool,
    #[serde(default)]
    pub nsid: bool,
    #[serde(default)]
    pub cookie: bool,
    #[serde(default)]
    pub padding: bool,
    #[serde(default)]
    pub ede: bool,
}

impl QueryFlags {
    pub fn get(&self, flag: QueryFlag) -> bool {
        match flag {
            QueryFlag::Rd => self.rd,
            QueryFlag::Ad => self.ad,
            QueryFlag::Cd => self.cd,
            QueryFlag::Aa => self.aa,
            QueryFlag::Do => self.dnssec_ok,
            QueryFlag::Z => self.z,
            QueryFlag::Nsid => self.nsid,
            QueryFlag::Cookie => self.cookie,
            QueryFlag::Padding => self.padding,
            QueryFlag::Ede => self.ede,
        }
    }

    pub fn set(&mut self, flag: QueryFlag, value: bool) {
        let slot = match flag {
            QueryFlag::Rd => &mut self.rd,
            QueryFlag::Ad => &mut self.ad,
            QueryFlag::Cd => &mut self.cd,
            QueryFlag::Aa => &mut self.aa,
            QueryFlag::Do => &mut self.dnssec_ok,
            QueryFlag::Z => &mut self.z,
            QueryFlag::Nsid => &mut self.nsid,
            QueryFlag::Cookie => &mut self.cookie,
            QueryFlag::Padding => &mut self.padding,
            QueryFlag::Ede => &mut self.ede,
        };
        *slot = value;
    }

    pub fn with(mut self, flag: QueryFlag) -> Self {
        self.set(flag, true);
        self
    }
}

/// Body of `POST /api/lookup/`.
///
/// The array-shaped fields always hold exactly one element when built by
/// [`QueryRequest::single`]; the backend accepts several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: Vec<String>,
    #[serde(rename = "type")]
    pub record_type: Vec<String>,
    pub nameservers: Vec<String>,
    #[serde(flatten)]
    pub flags: QueryFlags,
    /// Client subnet. Omitted from the body when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecs: Option<String>,
}

impl QueryRequest {
    pub fn single(
        domain: impl Into<String>,
        record_type: impl Into<String>,
        nameserver: impl Into<String>,
    ) -> Self {
        Self {
            query: vec![domain.into()],
            record_type: vec![record_type.into()],
            nameservers: vec![nameserver.into()],
            flags: QueryFlags::default(),
            ecs: None,
        }
    }

    pub fn with_flags(mut self, flags: QueryFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the client subnet; blank values leave it unset.
    pub fn with_ecs(mut self, ecs: &str) -> Self {
        let trimmed = ecs.trim();
        self.ecs = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn domain(&self) -> &str {
        self.query.first().map(String::as_str).unwrap_or("")
    }

    pub fn nameserver(&self) -> &str {
        self.nameservers.first().map(String::as_str).unwrap_or("")
    }

    /// Rejects a request without a query name before it reaches the network.
    pub fn validate(&self) -> Result<(), LookupError> {
        if self.domain().trim().is_empty() {
            return Err(LookupError::Validation("Invalid query name.".to_string()));
        }
        Ok(())
    }
}
