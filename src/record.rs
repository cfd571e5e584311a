//! Type-safe DNS host record.

use std::str::FromStr;

use serde::Deserialize;
use strum::VariantArray;
use strum_macros::{Display, EnumString, IntoStaticStr, VariantArray};

use crate::ValidationError;

/// Lowest TTL, in seconds, that Namecheap accepts for a host record.
pub const MIN_TTL: i64 = 60;
/// Highest TTL, in seconds, that Namecheap accepts for a host record.
pub const MAX_TTL: i64 = 60000;

/// Record types that can be set through the host records API.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Alias,
    Caa,
    Cname,
    Mx,
    Mxe,
    Txt,
    Url,
    Url301,
    Frame,
}

impl RecordType {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Parses a record type, failing with a [`ValidationError`] that lists
    /// the allowed types.
    pub fn parse(record_type: &str) -> Result<Self, ValidationError> {
        RecordType::from_str(record_type).map_err(|_| ValidationError::RecordType {
            record_type: record_type.to_string(),
        })
    }
}

/// Returns the string form of every allowed record type.
pub fn allowed_record_types() -> Vec<&'static str> {
    RecordType::VARIANTS.iter().map(RecordType::as_str).collect()
}

/// Checks whether `record_type` is exactly one of the allowed record types.
///
/// The comparison is case-sensitive, so `"cname"` is rejected.
///
/// # Examples
///
/// ```
/// use namecheap_dns::record::check_record_type;
///
/// assert!(check_record_type("URL301"));
/// assert!(!check_record_type("NS"));
/// ```
pub fn check_record_type(record_type: &str) -> bool {
    RecordType::from_str(record_type).is_ok()
}

/// Checks that `ttl` lies within [`MIN_TTL`] and [`MAX_TTL`], inclusive.
pub fn check_ttl(ttl: i64) -> Result<(), ValidationError> {
    if (MIN_TTL..=MAX_TTL).contains(&ttl) {
        Ok(())
    } else {
        Err(ValidationError::Ttl { ttl })
    }
}

/// A DNS host record to submit.
///
/// Records have no identity of their own; when submitted, their position in
/// the list is all that distinguishes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub record_type: RecordType,
    pub address: String,
    pub mx_pref: i64,
    pub ttl: i64,
}

impl Record {
    /// Creates a record from a type string, validating both the type and the TTL.
    pub fn new(
        name: &str,
        record_type: &str,
        address: &str,
        mx_pref: i64,
        ttl: i64,
    ) -> Result<Self, ValidationError> {
        let record_type = RecordType::parse(record_type)?;
        check_ttl(ttl)?;

        Ok(Self {
            name: name.to_string(),
            record_type,
            address: address.to_string(),
            mx_pref,
            ttl,
        })
    }

    /// Checks the fields that the API constrains.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_ttl(self.ttl)
    }
}

/// A host record as reported by the API.
///
/// The type is kept as the string the API returned, which may be one that
/// cannot be submitted, such as `NS`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Host {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@Type")]
    pub record_type: String,
    #[serde(rename = "@Address")]
    pub address: String,
    #[serde(rename = "@MXPref", default)]
    pub mx_pref: i64,
    #[serde(rename = "@TTL")]
    pub ttl: i64,
}

impl Host {
    /// Converts the host into a [Record] that can be submitted again.
    ///
    /// # Errors
    ///
    /// Will return a `RecordType` error if the type cannot be submitted, or a
    /// `Ttl` error if the TTL is out of range.
    pub fn to_record(&self) -> Result<Record, ValidationError> {
        Record::new(
            &self.name,
            &self.record_type,
            &self.address,
            self.mx_pref,
            self.ttl,
        )
    }
}
