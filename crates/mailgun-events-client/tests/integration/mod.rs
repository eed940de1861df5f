//! Integration tests for the events client.

mod http;
mod paging;
mod querying;
