//! Common test utilities for events client integration tests.

use async_trait::async_trait;
use mailgun_events_client::{ClientConfig, Error, EventsClient, Result, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A request the client made.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    /// URL before query parameters.
    pub url: String,
    /// Query parameters in order.
    pub params: Vec<(String, String)>,
}

/// Transport that replays scripted responses and records requests.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<Recorded>>,
}

impl ScriptedTransport {
    /// Creates a transport that serves `bodies` in order.
    pub fn with_bodies<I, S>(bodies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let responses = bodies.into_iter().map(|b| Ok(b.into())).collect();
        Arc::new(Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Creates a transport whose only response is an API error.
    pub fn failing(status: u16, body: &str) -> Arc<Self> {
        let transport = Self::default();
        transport.responses.lock().unwrap().push_back(Err(Error::Api {
            status,
            body: body.to_string(),
        }));
        Arc::new(transport)
    }

    /// Requests made so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<String> {
        self.requests.lock().unwrap().push(Recorded {
            url: url.to_string(),
            params: params.to_vec(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::config("no scripted response left")))
    }
}

/// Client for `mg.example.com` over `transport`.
pub fn client(transport: Arc<ScriptedTransport>) -> EventsClient {
    let config = ClientConfig::new("key-test", "mg.example.com");
    EventsClient::with_transport(config, transport).unwrap()
}

/// A page body holding `items` with a `next` link to `next`.
pub fn page_body(items: &[&str], next: &str) -> String {
    format!(
        r#"{{"items": [{}], "paging": {{"next": "{next}", "previous": "", "first": "https://api.mailgun.net/v3/mg.example.com/events/first", "last": "https://api.mailgun.net/v3/mg.example.com/events/last"}}}}"#,
        items.join(",")
    )
}

/// A minimal delivered event.
pub fn delivered(id: &str) -> String {
    format!(
        r#"{{"event": "delivered", "id": "{id}", "timestamp": 1377208314.173742, "delivery-status": {{"message": "", "code": 0, "description": null}}, "message": {{"headers": {{}}}}, "recipient": "recipient@example.com"}}"#
    )
}
