//! Event record types.

mod event;
mod ids;
mod parts;
mod proptests;
mod records;

pub use event::Event;
pub use ids::{EventId, EventKind};
pub use parts::{
    mailbox_address, ClientInfo, DeliveryMethod, DeliveryStatus, Envelope, Flags, Generic,
    Geolocation, Message, Route, Storage, UserVariables,
};
pub use records::{
    Accepted, Clicked, Complained, Delivered, Failed, Opened, Stored, Unsubscribed,
};
