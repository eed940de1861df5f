//! Client configuration.
//!
//! Values come from an optional TOML file and are then overridden by the
//! environment:
//!
//! | Variable           | Field      |
//! |--------------------|------------|
//! | `MAILGUN_KEY`      | `api_key`  |
//! | `MAILGUN_DOMAIN`   | `domain`   |
//! | `MAILGUN_BASE_URL` | `base_url` |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::query::MAX_LIMIT;

/// Default API prefix.
pub const DEFAULT_BASE_URL: &str = "https://api.mailgun.net/v3/";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "MAILGUN_KEY";

/// Environment variable holding the sending domain.
pub const ENV_DOMAIN: &str = "MAILGUN_DOMAIN";

/// Environment variable overriding the API prefix.
pub const ENV_BASE_URL: &str = "MAILGUN_BASE_URL";

/// Settings for [`EventsClient`](crate::EventsClient).
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Private API key.
    #[serde(default)]
    pub api_key: String,

    /// Sending domain whose events are polled.
    #[serde(default)]
    pub domain: String,

    /// API prefix, e.g. the EU endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Events requested per page.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_limit() -> u32 {
    MAX_LIMIT
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            domain: String::new(),
            base_url: default_base_url(),
            page_limit: default_page_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("domain", &self.domain)
            .field("base_url", &self.base_url)
            .field("page_limit", &self.page_limit)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a config for the given key and domain with default settings.
    pub fn new(api_key: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            domain: domain.into(),
            ..Default::default()
        }
    }

    /// Replaces the API prefix.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builds a config from the environment alone.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML file if given, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML file without applying overrides or validating.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from an arbitrary lookup; empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());
        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = key;
        }
        if let Some(domain) = get(ENV_DOMAIN) {
            self.domain = domain;
        }
        if let Some(base_url) = get(ENV_BASE_URL) {
            self.base_url = base_url;
        }
    }

    /// Checks that the config can be used to make requests.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::config(format!(
                "{ENV_API_KEY} not set, api key not supplied"
            )));
        }
        if self.domain.is_empty() {
            return Err(Error::config(format!(
                "{ENV_DOMAIN} not set, domain not supplied"
            )));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::config(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.page_limit == 0 || self.page_limit > MAX_LIMIT {
            return Err(Error::config(format!(
                "page_limit must be between 1 and {MAX_LIMIT}, got {}",
                self.page_limit
            )));
        }
        Ok(())
    }
}
