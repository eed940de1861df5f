#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Mailgun Events Core
//!
//! Typed records for the events Mailgun reports through its events API,
//! plus the canonical `accepted` event sample.

pub mod error;
pub mod fixtures;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use types::{
    mailbox_address, Accepted, ClientInfo, Clicked, Complained, Delivered, DeliveryMethod,
    DeliveryStatus, Envelope, Event, EventId, EventKind, Failed, Flags, Generic, Geolocation,
    Message, Opened, Route, Storage, Stored, Unsubscribed, UserVariables,
};
