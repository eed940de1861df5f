//! HTTP transport seam.
//!
//! [`EventsClient`](crate::EventsClient) talks to the API only through
//! [`Transport`], so tests can swap in canned responses.

use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Longest prefix of an error body kept in [`Error::Api`].
const ERROR_BODY_LIMIT: usize = 80;

/// Performs authenticated GET requests against the API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GETs `url` with `params` appended to its query string and returns
    /// the response body.
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<String>;
}

/// [`Transport`] backed by `reqwest`, authenticating as user `api`.
pub struct HttpTransport {
    client: reqwest::Client,
    api_key: String,
}

impl HttpTransport {
    /// Creates a transport with the config's key and timeout.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("mailgun-events/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<String> {
        let url = build_url(url, params)?;
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .basic_auth("api", Some(&self.api_key))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "API request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                body: truncate(&body, ERROR_BODY_LIMIT).to_string(),
            });
        }
        Ok(body)
    }
}

/// Parses `url` and appends `params`, leaving existing query pairs alone.
pub(crate) fn build_url(url: &str, params: &[(String, String)]) -> Result<Url> {
    let mut url = Url::parse(url).map_err(|e| Error::invalid_url(url, e))?;
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }
    Ok(url)
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
