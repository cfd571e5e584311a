use std::collections::BTreeMap;

use crate::domain::DomainParts;
use crate::record::Record;

/// Form parameters to send to the Namecheap API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    params: BTreeMap<String, String>,
}

impl Payload {
    /// Creates a new payload for the given API command.
    pub(crate) fn new(command: &str) -> Self {
        Self::default().add("Command", command)
    }

    /// Creates a new payload for a command on the given domain.
    pub(crate) fn for_domain(command: &str, domain: &DomainParts<'_>) -> Self {
        Self::new(command).add("SLD", domain.sld).add("TLD", domain.tld)
    }

    /// Adds the given key-value pair.
    pub fn add<T: ToString>(mut self, key: &str, value: T) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds the fields of `record` under the given 1-based index.
    pub(crate) fn add_record(self, index: usize, record: &Record) -> Self {
        self.add(&format!("HostName{index}"), &record.name)
            .add(&format!("RecordType{index}"), record.record_type)
            .add(&format!("Address{index}"), &record.address)
            .add(&format!("MXPref{index}"), record.mx_pref)
            .add(&format!("TTL{index}"), record.ttl)
    }

    /// Adds every record, numbered from 1 in the order given.
    pub(crate) fn add_records(self, records: &[Record]) -> Self {
        records
            .iter()
            .enumerate()
            .fold(self, |payload, (i, record)| payload.add_record(i + 1, record))
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the API command this payload is for.
    pub fn command(&self) -> Option<&str> {
        self.get("Command")
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}
