//! Pages of events and the paging links between them.

use mailgun_events_core::Event;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::Result;

/// Which paging link to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageDirection {
    /// The first page of the result set.
    First,
    /// The last page of the result set.
    Last,
    /// The page after this one.
    Next,
    /// The page before this one.
    Previous,
}

impl fmt::Display for PageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageDirection::First => "first",
            PageDirection::Last => "last",
            PageDirection::Next => "next",
            PageDirection::Previous => "previous",
        };
        f.write_str(name)
    }
}

/// Absolute URLs of neighbouring pages. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Link to the first page.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub first: Option<String>,
    /// Link to the last page.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub last: Option<String>,
    /// Link to the next page.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub next: Option<String>,
    /// Link to the previous page.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub previous: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl Paging {
    /// The link for `direction`, if the API sent one.
    pub fn link(&self, direction: PageDirection) -> Option<&str> {
        match direction {
            PageDirection::First => self.first.as_deref(),
            PageDirection::Last => self.last.as_deref(),
            PageDirection::Next => self.next.as_deref(),
            PageDirection::Previous => self.previous.as_deref(),
        }
    }
}

#[derive(Deserialize)]
struct RawPage {
    #[serde(default)]
    items: Vec<Value>,
    #[serde(default)]
    paging: Option<Paging>,
}

/// One page of events.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPage {
    /// Decoded events, in the order the API returned them.
    pub items: Vec<Event>,
    /// Links to neighbouring pages.
    pub paging: Option<Paging>,
}

impl EventPage {
    /// Decodes a response body of the form `{"items": [...], "paging": {...}}`.
    ///
    /// A single undecodable item fails the whole page.
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: RawPage = serde_json::from_str(body)?;
        let mut items = Vec::with_capacity(raw.items.len());
        for (index, item) in raw.items.iter().enumerate() {
            match Event::from_value_ref(item) {
                Ok(event) => items.push(event),
                Err(e) => {
                    tracing::warn!(index, item = %item, error = %e, "undecodable event in page");
                    return Err(e.into());
                }
            }
        }
        Ok(Self {
            items,
            paging: raw.paging,
        })
    }

    /// The link for `direction`, if any.
    pub fn link(&self, direction: PageDirection) -> Option<&str> {
        self.paging.as_ref().and_then(|p| p.link(direction))
    }

    /// Number of events on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the page has no events.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the events on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.items.iter()
    }
}

impl IntoIterator for EventPage {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
