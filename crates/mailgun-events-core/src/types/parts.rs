//! Building blocks embedded in event records.
//!
//! Mailgun documents these shapes by example only, so every field that is
//! missing from at least one documented sample defaults when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::ids::{EventId, EventKind};

/// Fields shared by every event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generic {
    /// Event kind.
    pub event: EventKind,
    /// Opaque identifier, unique per event.
    pub id: EventId,
    /// Seconds since the Unix epoch, with microsecond fraction.
    pub timestamp: f64,
}

impl Generic {
    /// Converts the fractional epoch timestamp to a UTC time.
    ///
    /// Precision is microseconds. Returns `None` for non-finite or
    /// out-of-range timestamps.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        timestamp_to_datetime(self.timestamp)
    }
}

pub(crate) fn timestamp_to_datetime(ts: f64) -> Option<DateTime<Utc>> {
    if !ts.is_finite() {
        return None;
    }
    // Mailgun reports microseconds; finer digits are float noise.
    let total = (ts * 1e6).round();
    if total < i64::MIN as f64 || total >= i64::MAX as f64 {
        return None;
    }
    let total = total as i64;
    let secs = total.div_euclid(1_000_000);
    let micros = total.rem_euclid(1_000_000) as u32;
    DateTime::from_timestamp(secs, micros * 1_000)
}

/// Decodes `null` as the type's default, for list and map fields Mailgun
/// sometimes sends as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Transport-level sender information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Envelope sender (`MAIL FROM`).
    #[serde(default)]
    pub sender: String,
    /// Transport used, e.g. `smtp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    /// Outbound IP the message was sent from.
    #[serde(
        rename = "sending-ip",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sending_ip: Option<String>,
}

/// Named boolean flags attached to an event.
///
/// The two documented flags get typed fields; anything else Mailgun adds
/// is kept in `other` so it survives a round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// Whether the sender authenticated when submitting the message.
    #[serde(
        rename = "is-authenticated",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_authenticated: Option<bool>,
    /// Whether the message was sent in test mode.
    #[serde(
        rename = "is-test-mode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_test_mode: Option<bool>,
    /// Flags not covered by a typed field.
    #[serde(flatten)]
    pub other: BTreeMap<String, bool>,
}

impl Flags {
    /// Number of flags present, typed and untyped.
    pub fn len(&self) -> usize {
        usize::from(self.is_authenticated.is_some())
            + usize::from(self.is_test_mode.is_some())
            + self.other.len()
    }

    /// Returns `true` if no flag is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks a flag up by its wire name.
    pub fn get(&self, name: &str) -> Option<bool> {
        match name {
            "is-authenticated" => self.is_authenticated,
            "is-test-mode" => self.is_test_mode,
            other => self.other.get(other).copied(),
        }
    }
}

/// An inbound routing rule that matched the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Ordering hint; lower values are evaluated first.
    pub priority: i64,
    /// Match predicate, e.g. `match_recipient(".*@example.org")`.
    pub expression: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Actions run on a match, e.g. `stop()`.
    #[serde(default)]
    pub actions: Vec<String>,
}

/// The email message an event refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Selected MIME headers, keyed by lowercase name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: BTreeMap<String, String>,
    /// Attachment descriptors.
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<Value>,
    /// Envelope recipients.
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipients: Vec<String>,
    /// Message size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl Message {
    /// Looks up a header, ignoring ASCII case of the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The `Message-Id` header.
    pub fn message_id(&self) -> Option<&str> {
        self.header("message-id")
    }

    /// The `From` header.
    pub fn from(&self) -> Option<&str> {
        self.header("from")
    }

    /// The `To` header.
    pub fn to(&self) -> Option<&str> {
        self.header("to")
    }

    /// The `Subject` header.
    pub fn subject(&self) -> Option<&str> {
        self.header("subject")
    }
}

/// Status reported by the receiving MTA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryStatus {
    /// SMTP response text.
    #[serde(default)]
    pub message: String,
    /// SMTP response code; 0 when delivered without one.
    #[serde(default)]
    pub code: i64,
    /// Longer description, often `null`.
    #[serde(default)]
    pub description: Option<String>,
}

/// Location derived from the client IP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geolocation {
    /// ISO country code.
    #[serde(default)]
    pub country: String,
    /// Region or state.
    #[serde(default)]
    pub region: String,
    /// City.
    #[serde(default)]
    pub city: String,
}

/// Browser or mail client details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// e.g. `browser`, `mobile browser`.
    #[serde(rename = "client-type", default)]
    pub client_type: String,
    /// e.g. `OS X`.
    #[serde(rename = "client-os", default)]
    pub client_os: String,
    /// e.g. `desktop`.
    #[serde(rename = "device-type", default)]
    pub device_type: String,
    /// e.g. `Chrome`.
    #[serde(rename = "client-name", default)]
    pub client_name: String,
    /// Raw user agent.
    #[serde(rename = "user-agent", default)]
    pub user_agent: String,
}

/// Where a stored message can be retrieved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    /// Retrieval URL.
    pub url: String,
    /// Storage key.
    pub key: String,
}

/// How a message was submitted to Mailgun.
///
/// Unknown methods are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeliveryMethod {
    /// Submitted over SMTP.
    Smtp,
    /// Submitted through the HTTP API.
    Http,
    /// Anything else.
    Other(String),
}

impl DeliveryMethod {
    /// Returns the wire name.
    pub fn as_str(&self) -> &str {
        match self {
            DeliveryMethod::Smtp => "smtp",
            DeliveryMethod::Http => "http",
            DeliveryMethod::Other(s) => s,
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DeliveryMethod {
    fn from(s: String) -> Self {
        match s.as_str() {
            "smtp" => DeliveryMethod::Smtp,
            "http" => DeliveryMethod::Http,
            _ => DeliveryMethod::Other(s),
        }
    }
}

impl From<&str> for DeliveryMethod {
    fn from(s: &str) -> Self {
        DeliveryMethod::from(s.to_string())
    }
}

impl From<DeliveryMethod> for String {
    fn from(method: DeliveryMethod) -> Self {
        match method {
            DeliveryMethod::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Extracts the bare address from a mailbox such as `John Doe <a@b.com>`.
///
/// Input without angle brackets is returned trimmed.
///
/// # Examples
///
/// ```
/// use mailgun_events_core::mailbox_address;
///
/// assert_eq!(mailbox_address("John Doe <sender@example.com>"), "sender@example.com");
/// assert_eq!(mailbox_address(" sender@example.com "), "sender@example.com");
/// ```
pub fn mailbox_address(mailbox: &str) -> &str {
    match (mailbox.rfind('<'), mailbox.rfind('>')) {
        (Some(open), Some(close)) if open < close => mailbox[open + 1..close].trim(),
        _ => mailbox.trim(),
    }
}

/// Opaque user variables attached when the message was sent.
pub type UserVariables = Map<String, Value>;
