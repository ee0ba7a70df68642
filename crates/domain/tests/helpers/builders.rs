#![allow(dead_code)]
use dnslookup_domain::{EdnsInfo, EdnsValue, LookupResult, Record};

pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn answer(name: &str, record_type: &str, address: &str) -> Self {
        Self {
            record: Record {
                name: Some(name.to_string()),
                record_type: Some(record_type.to_string()),
                class: Some("IN".to_string()),
                ttl: Some("300s".to_string()),
                address: Some(address.to_string()),
                rtt: Some("12ms".to_string()),
                nameserver: Some("8.8.8.8:53".to_string()),
                ..Record::default()
            },
        }
    }

    pub fn authority(name: &str, mname: &str) -> Self {
        Self {
            record: Record {
                name: Some(name.to_string()),
                record_type: Some("SOA".to_string()),
                ttl: Some("1800s".to_string()),
                mname: Some(mname.to_string()),
                rtt: Some("20ms".to_string()),
                ..Record::default()
            },
        }
    }

    pub fn without_ttl(mut self) -> Self {
        self.record.ttl = None;
        self
    }

    pub fn without_rtt(mut self) -> Self {
        self.record.rtt = None;
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

pub struct LookupResultBuilder {
    result: LookupResult,
}

impl LookupResultBuilder {
    pub fn new() -> Self {
        Self {
            result: LookupResult::default(),
        }
    }

    pub fn answers(mut self, records: Vec<Record>) -> Self {
        self.result.answers = Some(records);
        self
    }

    pub fn authorities(mut self, records: Vec<Record>) -> Self {
        self.result.authorities = Some(records);
        self
    }

    pub fn additional(mut self, records: Vec<Record>) -> Self {
        self.result.additional = Some(records);
        self
    }

    pub fn nsid(mut self, nsid: &str) -> Self {
        self.result
            .edns
            .get_or_insert_with(EdnsInfo::default)
            .nsid = Some(EdnsValue::Text(nsid.to_string()));
        self
    }

    pub fn build(self) -> LookupResult {
        self.result
    }
}
