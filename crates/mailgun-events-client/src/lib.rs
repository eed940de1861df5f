//! # mailgun-events-client
//!
//! Async client for the Mailgun events API:
//! - [`EventQuery`] builds time ranges, ordering and [`Filter`]s
//! - [`EventsClient`] runs queries and follows paging links
//! - [`Transport`] is the HTTP seam, with [`HttpTransport`] on `reqwest`
//! - [`ClientConfig`] loads from TOML and the `MAILGUN_*` environment

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod page;
pub mod query;
pub mod transport;

pub use client::EventsClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use filter::Filter;
pub use page::{EventPage, PageDirection, Paging};
pub use query::{EventQuery, MAX_LIMIT};
pub use transport::{HttpTransport, Transport};
