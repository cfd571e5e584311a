//! # Simple and type-safe client for the Namecheap DNS host records API.
//!
//! Implements an easy-to-use client for reading and replacing the host
//! records of a domain through the [Namecheap API]. Record types and TTLs
//! are checked before anything is sent.
//!
//! ## Examples
//!
//! ```no_run
//! use namecheap_dns::Client;
//! use namecheap_dns::record::Record;
//!
//! let client = Client::builder()
//!     .api_user("<APIUSER>")
//!     .api_key("<APIKEY>")
//!     .client_ip("203.0.113.7".parse().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let www = Record::new("www", "A", "203.0.113.7", 10, 1800).unwrap();
//! let records = client.set_hosts("example.com", &[www]).unwrap();
//! ```
//!
//! [Namecheap API]: https://www.namecheap.com/support/api/methods/domains-dns/

mod client;
pub mod domain;
mod errors;
mod payload;
pub mod record;
mod response;
mod transport;

pub use client::*;
pub use errors::*;
pub use payload::*;
pub use transport::{HttpTransport, Transport};
