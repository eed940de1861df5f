//! The canonical `accepted` event sample.
//!
//! `ACCEPTED_JSON` is the sample byte for byte, including key order and
//! the trailing newline, so it can be served verbatim by test doubles.

use crate::error::{Error, Result};
use crate::types::{Accepted, Event};

/// The sample `accepted` event as published in Mailgun's event docs.
pub const ACCEPTED_JSON: &str = include_str!("../fixtures/accepted.json");

/// The top-level keys of the accepted sample, in document order.
pub const ACCEPTED_KEYS: [&str; 12] = [
    "event",
    "id",
    "timestamp",
    "tags",
    "envelope",
    "campaigns",
    "user-variables",
    "flags",
    "routes",
    "message",
    "recipient",
    "method",
];

/// Parses [`ACCEPTED_JSON`] as a polymorphic event.
pub fn accepted_event() -> Result<Event> {
    Event::from_json(ACCEPTED_JSON)
}

/// Parses [`ACCEPTED_JSON`] as an [`Accepted`] record.
pub fn accepted() -> Result<Accepted> {
    match accepted_event()? {
        Event::Accepted(accepted) => Ok(accepted),
        other => Err(Error::validation_field(
            "event",
            format!("expected accepted, found {}", other.kind()),
        )),
    }
}
