//! The reqwest transport against a local mock server.

use mailgun_events_client::{ClientConfig, Error, EventsClient, Filter};
use mailgun_events_core::EventKind;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::page_body;

const DOMAIN: &str = "mg.example.com";
const EVENTS_PATH: &str = "/v3/mg.example.com/events";

fn http_client(server: &MockServer) -> EventsClient {
    let config =
        ClientConfig::new("key-abc", DOMAIN).with_base_url(format!("{}/v3/", server.uri()));
    EventsClient::new(config).unwrap()
}

#[tokio::test]
async fn test_request_carries_auth_and_params() {
    let server = MockServer::start().await;
    // base64("api:key-abc")
    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .and(header("authorization", "Basic YXBpOmtleS1hYmM="))
        .and(query_param("limit", "300"))
        .and(query_param("event", "accepted"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(page_body(
                &[mailgun_events_core::fixtures::ACCEPTED_JSON],
                "",
            )),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = http_client(&server);
    let query = client.new_query().filter(Filter::from(EventKind::Accepted));
    let page = client.query(&query).await.unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.items[0].kind(), EventKind::Accepted);
}

#[tokio::test]
async fn test_paging_link_is_requested_as_given() {
    let server = MockServer::start().await;
    let next = format!("{}{EVENTS_PATH}/W3siYSI6IGZhbHNlfV0=", server.uri());
    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_body(&[], &next)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{EVENTS_PATH}/W3siYSI6IGZhbHNlfV0=")))
        .and(header("authorization", "Basic YXBpOmtleS1hYmM="))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_body(&[], "")))
        .expect(1)
        .mount(&server)
        .await;

    let client = http_client(&server);
    let first = client.query(&client.new_query()).await.unwrap();
    let second = client
        .page(&first, mailgun_events_client::PageDirection::Next)
        .await
        .unwrap();
    assert!(second.is_some_and(|p| p.is_empty()));
}

#[tokio::test]
async fn test_unauthorized_body_is_truncated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("x".repeat(200)))
        .mount(&server)
        .await;

    let client = http_client(&server);
    let err = client.query(&client.new_query()).await.unwrap_err();

    match &err {
        Error::Api { status, body } => {
            assert_eq!(*status, 401);
            assert_eq!(body.len(), 80);
        }
        other => unreachable!("Expected API error, got {other:?}"),
    }
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_unavailable_is_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(EVENTS_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = http_client(&server);
    let err = client.query(&client.new_query()).await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 503, .. }));
    assert!(err.is_retryable());
}
