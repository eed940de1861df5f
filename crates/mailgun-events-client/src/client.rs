//! Events API client.

use mailgun_events_core::Event;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::page::{EventPage, PageDirection};
use crate::query::EventQuery;
use crate::transport::{HttpTransport, Transport};

/// Client for polling a domain's events.
///
/// Pages are fetched one at a time; follow paging links with
/// [`EventsClient::page`] or collect several with
/// [`EventsClient::query_pages`].
#[derive(Clone)]
pub struct EventsClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for EventsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventsClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl EventsClient {
    /// Creates a client that talks HTTP to the configured endpoint.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self { config, transport })
    }

    /// Creates a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// The active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{base_url}{domain}/events`.
    pub fn events_url(&self) -> String {
        format!(
            "{}/{}/events",
            self.config.base_url.trim_end_matches('/'),
            self.config.domain.trim_matches('/')
        )
    }

    /// A query preloaded with the configured page size.
    pub fn new_query(&self) -> EventQuery {
        EventQuery::new().limit(self.config.page_limit)
    }

    /// Runs a query and returns its first page.
    pub async fn query(&self, query: &EventQuery) -> Result<EventPage> {
        let params = query.to_params();
        tracing::debug!(
            domain = %self.config.domain,
            filters = query.filter_list().len(),
            "querying events"
        );
        self.fetch(&self.events_url(), &params).await
    }

    /// Follows a paging link from `page`.
    ///
    /// Returns `Ok(None)` when the API sent no link for `direction`.
    pub async fn page(
        &self,
        page: &EventPage,
        direction: PageDirection,
    ) -> Result<Option<EventPage>> {
        let Some(link) = page.link(direction) else {
            tracing::debug!(%direction, "no paging link");
            return Ok(None);
        };
        self.fetch(link, &[]).await.map(Some)
    }

    /// Runs a query and follows `next` links for up to `max_pages` pages.
    ///
    /// Stops early at the first empty page or missing link. The events
    /// API always sends a `next` link, so an empty page marks the end.
    pub async fn query_pages(&self, query: &EventQuery, max_pages: usize) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        if max_pages == 0 {
            return Ok(events);
        }

        let mut page = self.query(query).await?;
        let mut fetched = 1;
        loop {
            let next = if page.is_empty() || fetched >= max_pages {
                None
            } else {
                self.page(&page, PageDirection::Next).await?
            };
            events.extend(page);
            match next {
                Some(p) => {
                    page = p;
                    fetched += 1;
                }
                None => break,
            }
        }

        tracing::info!(events = events.len(), pages = fetched, "events collected");
        Ok(events)
    }

    async fn fetch(&self, url: &str, params: &[(String, String)]) -> Result<EventPage> {
        let body = self.transport.get(url, params).await?;
        let page = EventPage::from_json(&body)?;
        tracing::debug!(items = page.len(), "page decoded");
        Ok(page)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct Unreachable;

    #[async_trait::async_trait]
    impl Transport for Unreachable {
        async fn get(&self, _url: &str, _params: &[(String, String)]) -> Result<String> {
            unreachable!("no request expected")
        }
    }

    fn client(base_url: &str) -> EventsClient {
        let config = ClientConfig::new("key", "mg.example.com").with_base_url(base_url);
        EventsClient::with_transport(config, Arc::new(Unreachable)).unwrap()
    }

    #[test]
    fn test_events_url_joins_with_single_slash() {
        assert_eq!(
            client("https://api.mailgun.net/v3/").events_url(),
            "https://api.mailgun.net/v3/mg.example.com/events"
        );
        assert_eq!(
            client("https://api.eu.mailgun.net/v3").events_url(),
            "https://api.eu.mailgun.net/v3/mg.example.com/events"
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = EventsClient::with_transport(ClientConfig::default(), Arc::new(Unreachable));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_query_uses_page_limit() {
        let mut config = ClientConfig::new("key", "mg.example.com");
        config.page_limit = 50;
        let client = EventsClient::with_transport(config, Arc::new(Unreachable)).unwrap();
        assert_eq!(client.new_query().page_limit(), 50);
    }

    #[tokio::test]
    async fn test_page_without_link_makes_no_request() {
        let client = client("https://api.mailgun.net/v3/");
        let page = EventPage {
            items: Vec::new(),
            paging: None,
        };
        let next = client.page(&page, PageDirection::Next).await.unwrap();
        assert!(next.is_none());
    }

    #[tokio::test]
    async fn test_zero_pages_makes_no_request() {
        let client = client("https://api.mailgun.net/v3/");
        let events = client.query_pages(&EventQuery::new(), 0).await.unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_debug_hides_key() {
        let debug = format!("{:?}", client("https://api.mailgun.net/v3/"));
        assert!(!debug.contains("\"key\""));
    }
}
