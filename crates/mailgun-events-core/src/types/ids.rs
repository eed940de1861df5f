//! Identifier and kind types shared by every event record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Opaque event identifier assigned by Mailgun.
///
/// Ids look like `ncV2XwymRUKbPek_MIM-Gw`; nothing beyond uniqueness per
/// event instance should be assumed about their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates an event ID from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailgun_events_core::EventId;
    ///
    /// let id = EventId::new("ncV2XwymRUKbPek_MIM-Gw");
    /// assert_eq!(id.as_str(), "ncV2XwymRUKbPek_MIM-Gw");
    /// ```
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Returns the event ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The kind of an event, as carried in its `event` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Mailgun accepted the message for delivery.
    Accepted,
    /// Mailgun refused the message. Undocumented; shaped like `Failed`.
    Rejected,
    /// The receiving MTA accepted the message.
    Delivered,
    /// Delivery failed, temporarily or permanently.
    Failed,
    /// The recipient opened the message.
    Opened,
    /// The recipient clicked a tracked link.
    Clicked,
    /// The recipient unsubscribed.
    Unsubscribed,
    /// The recipient reported the message as spam.
    Complained,
    /// An inbound message was stored.
    Stored,
}

impl EventKind {
    /// All known kinds, in wire-documentation order.
    pub const ALL: [EventKind; 9] = [
        EventKind::Accepted,
        EventKind::Rejected,
        EventKind::Delivered,
        EventKind::Failed,
        EventKind::Opened,
        EventKind::Clicked,
        EventKind::Unsubscribed,
        EventKind::Complained,
        EventKind::Stored,
    ];

    /// Returns the wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Accepted => "accepted",
            EventKind::Rejected => "rejected",
            EventKind::Delivered => "delivered",
            EventKind::Failed => "failed",
            EventKind::Opened => "opened",
            EventKind::Clicked => "clicked",
            EventKind::Unsubscribed => "unsubscribed",
            EventKind::Complained => "complained",
            EventKind::Stored => "stored",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::unknown_event(s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id_display() {
        let id = EventId::new("W3X4JOhFT-OZidZGKKr9iA");
        assert_eq!(id.to_string(), "W3X4JOhFT-OZidZGKKr9iA");
    }

    #[test]
    fn test_event_id_serializes_as_plain_string() {
        let id = EventId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        let parsed: EventId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_event_kind_wire_names_match_serde() {
        for kind in EventKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_event_kind_from_str() {
        assert_eq!("stored".parse::<EventKind>().unwrap(), EventKind::Stored);
        assert_eq!("rejected".parse::<EventKind>().unwrap(), EventKind::Rejected);
    }

    #[test]
    fn test_event_kind_from_str_unknown() {
        let err = "bounced".parse::<EventKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownEvent { ref name } if name == "bounced"));
    }

    #[test]
    fn test_event_kind_is_case_sensitive() {
        assert!("Accepted".parse::<EventKind>().is_err());
    }
}
