//! Filter expressions for event queries.
//!
//! Each variant maps to one filter field of the events API. Values are
//! passed through untouched, so Mailgun's own filter syntax applies:
//! `Filter::Subject("Hello Sailor".into())` filters on that subject and
//! `Filter::Event("failed OR rejected".into())` combines kinds.

use mailgun_events_core::EventKind;
use std::fmt;

/// One filter field and its expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Filter {
    /// Event kind expression.
    Event(String),
    /// Mailing list address.
    List(String),
    /// Attachment file name.
    Attachment(String),
    /// `From` header address.
    From(String),
    /// `Message-Id` header.
    MessageId(String),
    /// Subject line.
    Subject(String),
    /// `To` header address.
    To(String),
    /// Message size expression, e.g. `>10000`.
    Size(String),
    /// Envelope recipient.
    Recipient(String),
    /// User-defined tag.
    Tags(String),
    /// Failure severity, `temporary` or `permanent`.
    Severity(String),
}

impl Filter {
    /// Wire name of the filter field.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Event(_) => "event",
            Filter::List(_) => "list",
            Filter::Attachment(_) => "attachment",
            Filter::From(_) => "from",
            Filter::MessageId(_) => "message-id",
            Filter::Subject(_) => "subject",
            Filter::To(_) => "to",
            Filter::Size(_) => "size",
            Filter::Recipient(_) => "recipient",
            Filter::Tags(_) => "tags",
            Filter::Severity(_) => "severity",
        }
    }

    /// The filter expression.
    pub fn value(&self) -> &str {
        match self {
            Filter::Event(v)
            | Filter::List(v)
            | Filter::Attachment(v)
            | Filter::From(v)
            | Filter::MessageId(v)
            | Filter::Subject(v)
            | Filter::To(v)
            | Filter::Size(v)
            | Filter::Recipient(v)
            | Filter::Tags(v)
            | Filter::Severity(v) => v,
        }
    }
}

impl From<EventKind> for Filter {
    fn from(kind: EventKind) -> Self {
        Filter::Event(kind.as_str().to_string())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name(), self.value())
    }
}
