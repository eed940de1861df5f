//! The polymorphic event record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::ids::{EventId, EventKind};
use super::parts::{Generic, Message};
use super::records::{
    Accepted, Clicked, Complained, Delivered, Failed, Opened, Stored, Unsubscribed,
};
use crate::error::{Error, Result};

/// Any event record Mailgun reports.
///
/// Decoding looks at the `event` name first and then decodes the whole
/// object as the matching record. Serializing writes the inner record
/// unchanged, `event` field included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Event {
    /// `accepted`
    Accepted(Accepted),
    /// `rejected`, shaped like a failure
    Rejected(Failed),
    /// `delivered`
    Delivered(Delivered),
    /// `failed`
    Failed(Failed),
    /// `opened`
    Opened(Opened),
    /// `clicked`
    Clicked(Clicked),
    /// `unsubscribed`
    Unsubscribed(Unsubscribed),
    /// `complained`
    Complained(Complained),
    /// `stored`
    Stored(Stored),
}

impl Event {
    /// Decodes an event from JSON text.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailgun_events_core::{fixtures, Event, EventKind};
    ///
    /// let event = Event::from_json(fixtures::ACCEPTED_JSON).unwrap();
    /// assert_eq!(event.kind(), EventKind::Accepted);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decodes an event from a parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_value_ref(&value)
    }

    /// Decodes an event from a borrowed JSON value, leaving it intact for
    /// error reporting.
    pub fn from_value_ref(value: &Value) -> Result<Self> {
        let name = value
            .get("event")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::validation_field("event", "missing or not a string"))?;
        let kind: EventKind = name.parse()?;

        let event = match kind {
            EventKind::Accepted => Event::Accepted(decode(kind, value)?),
            EventKind::Rejected => Event::Rejected(decode(kind, value)?),
            EventKind::Delivered => Event::Delivered(decode(kind, value)?),
            EventKind::Failed => Event::Failed(decode(kind, value)?),
            EventKind::Opened => Event::Opened(decode(kind, value)?),
            EventKind::Clicked => Event::Clicked(decode(kind, value)?),
            EventKind::Unsubscribed => Event::Unsubscribed(decode(kind, value)?),
            EventKind::Complained => Event::Complained(decode(kind, value)?),
            EventKind::Stored => Event::Stored(decode(kind, value)?),
        };
        Ok(event)
    }

    /// Serializes the record as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The fields every record carries.
    pub fn generic(&self) -> &Generic {
        match self {
            Event::Accepted(e) => &e.generic,
            Event::Rejected(e) | Event::Failed(e) => &e.generic,
            Event::Delivered(e) => &e.generic,
            Event::Opened(e) => &e.generic,
            Event::Clicked(e) => &e.generic,
            Event::Unsubscribed(e) => &e.generic,
            Event::Complained(e) => &e.generic,
            Event::Stored(e) => &e.generic,
        }
    }

    /// The event kind.
    pub fn kind(&self) -> EventKind {
        self.generic().event
    }

    /// The event id.
    pub fn id(&self) -> &EventId {
        &self.generic().id
    }

    /// Seconds since the epoch.
    pub fn timestamp(&self) -> f64 {
        self.generic().timestamp
    }

    /// The recipient, for every kind except `stored`.
    pub fn recipient(&self) -> Option<&str> {
        match self {
            Event::Accepted(e) => Some(&e.recipient),
            Event::Rejected(e) | Event::Failed(e) => Some(&e.recipient),
            Event::Delivered(e) => Some(&e.recipient),
            Event::Opened(e) => Some(&e.recipient),
            Event::Clicked(e) => Some(&e.recipient),
            Event::Unsubscribed(e) => Some(&e.recipient),
            Event::Complained(e) => Some(&e.recipient),
            Event::Stored(_) => None,
        }
    }

    /// Tags set when sending.
    pub fn tags(&self) -> &[String] {
        match self {
            Event::Accepted(e) => &e.tags,
            Event::Rejected(e) | Event::Failed(e) => &e.tags,
            Event::Delivered(e) => &e.tags,
            Event::Opened(e) => &e.tags,
            Event::Clicked(e) => &e.tags,
            Event::Unsubscribed(e) => &e.tags,
            Event::Complained(e) => &e.tags,
            Event::Stored(e) => &e.tags,
        }
    }

    /// The message the event is about.
    pub fn message(&self) -> &Message {
        match self {
            Event::Accepted(e) => &e.message,
            Event::Rejected(e) | Event::Failed(e) => &e.message,
            Event::Delivered(e) => &e.message,
            Event::Opened(e) => &e.message,
            Event::Clicked(e) => &e.message,
            Event::Unsubscribed(e) => &e.message,
            Event::Complained(e) => &e.message,
            Event::Stored(e) => &e.message,
        }
    }
}

fn decode<T: DeserializeOwned>(kind: EventKind, value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|e| {
        tracing::debug!(event = %kind, error = %e, "event record did not match its kind");
        Error::from(e)
    })
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Event::from_value(value).map_err(serde::de::Error::custom)
    }
}
