//! Query construction and decoding through the client.

use crate::common::{client, delivered, page_body, ScriptedTransport};
use chrono::{TimeZone, Utc};
use mailgun_events_client::{Error, Filter};
use mailgun_events_core::{fixtures, Event, EventKind};

#[tokio::test]
async fn test_query_sends_params_to_events_url() {
    let transport = ScriptedTransport::with_bodies([page_body(&[fixtures::ACCEPTED_JSON], "")]);
    let client = client(transport.clone());

    let query = client
        .new_query()
        .begin(Utc.timestamp_opt(1377124856, 0).unwrap())
        .ascending(true)
        .filter(Filter::Tags("summer-sale-2018".into()))
        .filter(Filter::Event("delivered".into()));

    let page = client.query(&query).await.unwrap();
    assert_eq!(page.len(), 1);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url,
        "https://api.mailgun.net/v3/mg.example.com/events"
    );
    let params: Vec<(&str, &str)> = requests[0]
        .params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        params,
        vec![
            ("limit", "300"),
            ("begin", "Wed, 21 Aug 2013 22:40:56 UTC"),
            ("ascending", "true"),
            ("tags", "summer-sale-2018"),
            ("event", "delivered"),
        ]
    );
}

#[tokio::test]
async fn test_query_decodes_mixed_kinds() {
    let body = page_body(&[fixtures::ACCEPTED_JSON, &delivered("d1")], "");
    let client = client(ScriptedTransport::with_bodies([body]));

    let page = client.query(&client.new_query()).await.unwrap();
    let kinds: Vec<EventKind> = page.iter().map(Event::kind).collect();
    assert_eq!(kinds, vec![EventKind::Accepted, EventKind::Delivered]);

    let Event::Accepted(accepted) = &page.items[0] else {
        unreachable!("Expected Accepted event");
    };
    assert_eq!(accepted, &fixtures::accepted().unwrap());
}

#[tokio::test]
async fn test_unknown_event_fails_query() {
    let body = page_body(
        &[r#"{"event": "bounced", "id": "b", "timestamp": 1.0}"#],
        "",
    );
    let client = client(ScriptedTransport::with_bodies([body]));

    let err = client.query(&client.new_query()).await.unwrap_err();
    assert!(matches!(err, Error::Core(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_api_error_is_propagated() {
    let client = client(ScriptedTransport::failing(401, "Forbidden"));

    let err = client.query(&client.new_query()).await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 401, .. }));
}
