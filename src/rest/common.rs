//! Read shorthands available on every resource.
//!
//! These bypass the action table: [`Resource::all`] sends `GET <base_uri>`
//! and [`Resource::get`] sends `GET <base_uri>/<id>`. Query parameters and
//! headers are only attached when non-empty. The raw response is stored in
//! [`Resource::last_response`] and decoded the same way as an action
//! response; the after hook is not applied.

use std::collections::HashMap;
use std::fmt::Display;

use serde_json::Value;

use crate::clients::{HttpMethod, RequestOptions};
use crate::rest::errors::ResourceError;
use crate::rest::resource::{decode_body, Resource};

impl Resource {
    /// Fetches the collection at the resource's base URI.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] or [`ResourceError::Decode`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = HashMap::new();
    /// query.insert("limit".to_string(), "20".to_string());
    ///
    /// let pokemons = client.resource("pokemons")?.all(query, HashMap::new()).await?;
    /// ```
    #[allow(clippy::implicit_hasher)]
    pub async fn all(
        &self,
        query: HashMap<String, String>,
        headers: HashMap<String, String>,
    ) -> Result<Value, ResourceError> {
        self.fetch("all", self.base_uri().to_string(), query, headers)
            .await
    }

    /// Fetches a single item at `<base_uri>/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Transport`] or [`ResourceError::Decode`].
    #[allow(clippy::implicit_hasher)]
    pub async fn get(
        &self,
        id: impl Display + Send,
        query: HashMap<String, String>,
        headers: HashMap<String, String>,
    ) -> Result<Value, ResourceError> {
        let uri = format!("{}/{id}", self.base_uri());
        self.fetch("get", uri, query, headers).await
    }

    async fn fetch(
        &self,
        label: &str,
        uri: String,
        query: HashMap<String, String>,
        headers: HashMap<String, String>,
    ) -> Result<Value, ResourceError> {
        let mut options = RequestOptions::new();
        if !query.is_empty() {
            options = options.query(query);
        }
        if !headers.is_empty() {
            options = options.headers(headers);
        }

        tracing::debug!(resource = %self.name(), %uri, "Sending GET shorthand");

        let response = self
            .transport()
            .request(HttpMethod::Get, &uri, options)
            .await?;

        let decoded = decode_body(label, &response);
        self.record_response(response);
        decoded
    }
}
