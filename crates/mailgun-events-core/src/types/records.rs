//! One record type per event kind.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::parts::{
    mailbox_address, null_as_default, ClientInfo, DeliveryMethod, DeliveryStatus, Envelope, Flags, Generic,
    Geolocation, Message, Route, Storage, UserVariables,
};

/// Mailgun accepted a message for delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accepted {
    /// Kind, id and timestamp.
    #[serde(flatten)]
    pub generic: Generic,
    /// Tags set when sending.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Transport-level sender.
    #[serde(default)]
    pub envelope: Envelope,
    /// Campaigns the message belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub campaigns: Vec<Value>,
    /// Custom variables attached when sending.
    #[serde(
        rename = "user-variables",
        default,
        deserialize_with = "null_as_default"
    )]
    pub user_variables: UserVariables,
    /// Authentication and test-mode flags.
    #[serde(default)]
    pub flags: Flags,
    /// Inbound routes that matched.
    #[serde(default)]
    pub routes: Vec<Route>,
    /// The accepted message.
    pub message: Message,
    /// The recipient this event is about.
    pub recipient: String,
    /// How the message was submitted.
    pub method: DeliveryMethod,
}

impl Accepted {
    /// Whether `recipient` appears in `message.recipients`.
    pub fn recipient_is_listed(&self) -> bool {
        self.message
            .recipients
            .iter()
            .any(|r| mailbox_address(r).eq_ignore_ascii_case(mailbox_address(&self.recipient)))
    }

    /// Whether the `From` header carries the envelope sender's address.
    pub fn sender_matches_from_header(&self) -> bool {
        self.message.from().is_some_and(|from| {
            mailbox_address(from).eq_ignore_ascii_case(mailbox_address(&self.envelope.sender))
        })
    }
}

/// The receiving MTA accepted the message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivered {
    /// Kind, id and timestamp.
    #[serde(flatten)]
    pub generic: Generic,
    /// Tags set when sending.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Transport-level sender.
    #[serde(default)]
    pub envelope: Envelope,
    /// MTA response.
    #[serde(rename = "delivery-status", default)]
    pub delivery_status: DeliveryStatus,
    /// Campaigns the message belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub campaigns: Vec<Value>,
    /// Custom variables attached when sending.
    #[serde(
        rename = "user-variables",
        default,
        deserialize_with = "null_as_default"
    )]
    pub user_variables: UserVariables,
    /// Event flags.
    #[serde(default)]
    pub flags: Flags,
    /// The delivered message.
    pub message: Message,
    /// The recipient this event is about.
    pub recipient: String,
}

/// Delivery failed. Also used for `rejected` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failed {
    /// Kind, id and timestamp.
    #[serde(flatten)]
    pub generic: Generic,
    /// `permanent` or `temporary`.
    #[serde(default)]
    pub severity: String,
    /// Tags set when sending.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Transport-level sender.
    #[serde(default)]
    pub envelope: Envelope,
    /// MTA response.
    #[serde(rename = "delivery-status", default)]
    pub delivery_status: DeliveryStatus,
    /// Campaigns the message belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub campaigns: Vec<Value>,
    /// Failure reason, e.g. `bounce`.
    #[serde(default)]
    pub reason: String,
    /// Custom variables attached when sending.
    #[serde(
        rename = "user-variables",
        default,
        deserialize_with = "null_as_default"
    )]
    pub user_variables: UserVariables,
    /// Event flags.
    #[serde(default)]
    pub flags: Flags,
    /// The failed message.
    #[serde(default)]
    pub message: Message,
    /// The recipient this event is about.
    #[serde(default)]
    pub recipient: String,
}

impl Failed {
    /// Whether Mailgun gave up on the recipient.
    pub fn is_permanent(&self) -> bool {
        self.severity == "permanent"
    }
}

/// The recipient opened the message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opened {
    /// Kind, id and timestamp.
    #[serde(flatten)]
    pub generic: Generic,
    /// The recipient this event is about.
    pub recipient: String,
    /// Where the open happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<Geolocation>,
    /// Tags set when sending.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Campaigns the message belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub campaigns: Vec<Value>,
    /// Custom variables attached when sending.
    #[serde(
        rename = "user-variables",
        default,
        deserialize_with = "null_as_default"
    )]
    pub user_variables: UserVariables,
    /// Client IP.
    #[serde(default)]
    pub ip: String,
    /// Client details.
    #[serde(
        rename = "client-info",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_info: Option<ClientInfo>,
    /// The opened message; usually only its `message-id` header.
    #[serde(default)]
    pub message: Message,
}

/// The recipient clicked a tracked link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clicked {
    /// Kind, id and timestamp.
    #[serde(flatten)]
    pub generic: Generic,
    /// The recipient this event is about.
    pub recipient: String,
    /// Where the click happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<Geolocation>,
    /// Tags set when sending.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// The clicked URL.
    #[serde(default)]
    pub url: String,
    /// Client IP.
    #[serde(default)]
    pub ip: String,
    /// Campaigns the message belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub campaigns: Vec<Value>,
    /// Custom variables attached when sending.
    #[serde(
        rename = "user-variables",
        default,
        deserialize_with = "null_as_default"
    )]
    pub user_variables: UserVariables,
    /// Client details.
    #[serde(
        rename = "client-info",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_info: Option<ClientInfo>,
    /// The message the link was in.
    #[serde(default)]
    pub message: Message,
}

/// The recipient unsubscribed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unsubscribed {
    /// Kind, id and timestamp.
    #[serde(flatten)]
    pub generic: Generic,
    /// The recipient this event is about.
    pub recipient: String,
    /// Where the unsubscribe happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geolocation: Option<Geolocation>,
    /// Campaigns the message belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub campaigns: Vec<Value>,
    /// Tags set when sending.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Custom variables attached when sending.
    #[serde(
        rename = "user-variables",
        default,
        deserialize_with = "null_as_default"
    )]
    pub user_variables: UserVariables,
    /// Client IP.
    #[serde(default)]
    pub ip: String,
    /// Client details.
    #[serde(
        rename = "client-info",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub client_info: Option<ClientInfo>,
    /// The message unsubscribed from.
    #[serde(default)]
    pub message: Message,
}

/// The recipient reported the message as spam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complained {
    /// Kind, id and timestamp.
    #[serde(flatten)]
    pub generic: Generic,
    /// The recipient this event is about.
    pub recipient: String,
    /// Tags set when sending.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Campaigns the message belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub campaigns: Vec<Value>,
    /// Custom variables attached when sending.
    #[serde(
        rename = "user-variables",
        default,
        deserialize_with = "null_as_default"
    )]
    pub user_variables: UserVariables,
    /// Event flags.
    #[serde(default)]
    pub flags: Flags,
    /// The message complained about.
    #[serde(default)]
    pub message: Message,
}

/// An inbound message was stored for later retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored {
    /// Kind, id and timestamp.
    #[serde(flatten)]
    pub generic: Generic,
    /// Retrieval location.
    pub storage: Storage,
    /// Campaigns the message belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub campaigns: Vec<Value>,
    /// Custom variables attached when sending.
    #[serde(
        rename = "user-variables",
        default,
        deserialize_with = "null_as_default"
    )]
    pub user_variables: UserVariables,
    /// Event flags.
    #[serde(default)]
    pub flags: Flags,
    /// Tags set when sending.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// The stored message.
    #[serde(default)]
    pub message: Message,
}
