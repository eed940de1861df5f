//! Following paging links.

use crate::common::{client, delivered, page_body, ScriptedTransport};
use mailgun_events_client::PageDirection;

const NEXT_1: &str = "https://api.mailgun.net/v3/mg.example.com/events/page-2";
const NEXT_2: &str = "https://api.mailgun.net/v3/mg.example.com/events/page-3";

#[tokio::test]
async fn test_next_link_is_fetched_verbatim() {
    let transport = ScriptedTransport::with_bodies([
        page_body(&[&delivered("a")], NEXT_1),
        page_body(&[&delivered("b")], NEXT_2),
    ]);
    let client = client(transport.clone());

    let first = client.query(&client.new_query()).await.unwrap();
    let second = client
        .page(&first, PageDirection::Next)
        .await
        .unwrap()
        .expect("next page");
    assert_eq!(second.items[0].id().as_str(), "b");

    let requests = transport.requests();
    assert_eq!(requests[1].url, NEXT_1);
    assert!(requests[1].params.is_empty());
}

#[tokio::test]
async fn test_empty_previous_link_means_no_page() {
    let transport = ScriptedTransport::with_bodies([page_body(&[&delivered("a")], NEXT_1)]);
    let client = client(transport.clone());

    let first = client.query(&client.new_query()).await.unwrap();
    let previous = client.page(&first, PageDirection::Previous).await.unwrap();
    assert!(previous.is_none());
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_query_pages_stops_at_empty_page() {
    let transport = ScriptedTransport::with_bodies([
        page_body(&[&delivered("a"), &delivered("b")], NEXT_1),
        page_body(&[&delivered("c")], NEXT_2),
        page_body(&[], "https://api.mailgun.net/v3/mg.example.com/events/page-4"),
    ]);
    let client = client(transport.clone());

    let events = client.query_pages(&client.new_query(), 10).await.unwrap();
    let ids: Vec<&str> = events.iter().map(|e| e.id().as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn test_query_pages_respects_page_cap() {
    let transport = ScriptedTransport::with_bodies([
        page_body(&[&delivered("a")], NEXT_1),
        page_body(&[&delivered("b")], NEXT_2),
    ]);
    let client = client(transport.clone());

    let events = client.query_pages(&client.new_query(), 1).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(transport.requests().len(), 1);
}
