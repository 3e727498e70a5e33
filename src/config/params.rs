//! Transport params.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings passed to a transport factory or to the default transport.
///
/// Params deserialize from JSON with every field optional, so they can live
/// in an application's own configuration file.
///
/// # Example
///
/// ```rust
/// use snorlax::TransportParams;
///
/// let params: TransportParams = serde_json::from_str(
///     r#"{"base_url": "https://pokeapi.example.com/api/", "timeout_secs": 10}"#,
/// ).unwrap();
///
/// assert_eq!(params.timeout_secs, Some(10));
/// assert!(!params.cache);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportParams {
    /// Base URL that relative resource URIs are joined onto.
    pub base_url: Option<String>,
    /// Headers sent with every request.
    pub default_headers: HashMap<String, String>,
    /// Total request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Prefix for the `User-Agent` header.
    pub user_agent_prefix: Option<String>,
    /// Asks for a response caching layer. The default transport does not
    /// provide one; custom factories may honor it.
    pub cache: bool,
}

impl TransportParams {
    /// Creates empty params.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Adds a default header.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request timeout in seconds.
    #[must_use]
    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Sets the `User-Agent` prefix.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Requests a caching layer.
    #[must_use]
    pub const fn cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    /// Checks the params for values no transport could use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the base URL is not an
    /// absolute `http`/`https` URL with a host, and
    /// [`ConfigError::EmptyHeaderName`] for blank default header names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.base_url {
            let host = url
                .strip_prefix("https://")
                .or_else(|| url.strip_prefix("http://"))
                .map(|rest| rest.split('/').next().unwrap_or_default());

            if !matches!(host, Some(h) if !h.is_empty() && !h.contains(char::is_whitespace)) {
                return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
            }
        }

        if self.default_headers.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::EmptyHeaderName);
        }

        Ok(())
    }
}
