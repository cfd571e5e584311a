use std::fmt;

use reqwest::{StatusCode, blocking::Response};
use thiserror::Error;

use crate::record::{self, MAX_TTL, MIN_TTL};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid record type {record_type:?}, allowed types={allowed:?}", allowed = record::allowed_record_types().join(", "))]
    RecordType { record_type: String },
    #[error("invalid ttl value {ttl}, min={min}, max={max}", min = MIN_TTL, max = MAX_TTL)]
    Ttl { ttl: i64 },
}

/// A single error reported by the Namecheap API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub number: String,
    pub message: String,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number: {} Message: {}", self.number, self.message)
    }
}

/// A well-formed response in which the API reported failure.
#[derive(Error, Debug, PartialEq, Eq)]
pub struct ApiError {
    errors: Vec<RemoteError>,
}

impl ApiError {
    pub(crate) fn new(errors: Vec<RemoteError>) -> Self {
        Self { errors }
    }

    /// The errors reported by the API, in the order they were returned.
    pub fn errors(&self) -> &[RemoteError] {
        &self.errors
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("Namecheap API reported failure without any errors");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
#[error("Namecheap HTTP error: {status} - {body}")]
pub struct HttpError {
    status: StatusCode,
    body: String,
}

impl HttpError {
    pub(crate) fn from_response(resp: Response) -> Self {
        let status = resp.status();
        let body = resp
            .text()
            .unwrap_or_else(|e| format!("unable to read response body: {e}"));

        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] quick_xml::DeError),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
