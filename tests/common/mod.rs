//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use snorlax::clients::{
    merge_headers, HttpMethod, HttpResponse, RequestOptions, SharedTransport, Transport,
    TransportError,
};
use snorlax::rest::{ActionTable, ResourceDefinition};
use snorlax::{ClientConfig, RestClient};

/// The pokemon resource used throughout the tests.
#[derive(Debug, Default)]
pub struct PokemonResource;

impl ResourceDefinition for PokemonResource {
    fn base_uri(&self) -> String {
        "pokemons".to_string()
    }

    fn actions(&self) -> ActionTable {
        ActionTable::new()
            .get("all", "/")
            .get("get", "/{0}")
            .post("capture", "/")
            .patch("attack", "/{0}/{1}/{2}")
    }
}

/// A request as seen by [`SpyTransport`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub uri: String,
    pub options: RequestOptions,
    /// Default headers merged with the request headers at send time.
    pub headers: HashMap<String, String>,
}

/// Records every request and replays queued responses.
///
/// With an empty queue it answers `200 {}`.
#[derive(Debug, Default)]
pub struct SpyTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    defaults: Mutex<HashMap<String, String>>,
}

impl SpyTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_with(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn respond_json(&self, body: Value) {
        self.respond_with(HttpResponse::json(200, &body));
    }

    pub fn fail_with(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for SpyTransport {
    async fn request(
        &self,
        method: HttpMethod,
        uri: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, TransportError> {
        let headers = merge_headers(&self.default_headers(), options.headers.as_ref());
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            uri: uri.to_string(),
            options,
            headers,
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::json(200, &json!({}))))
    }

    fn set_default_header(&self, name: &str, value: &str) {
        let mut defaults = self.defaults.lock().unwrap();
        defaults.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        defaults.insert(name.to_string(), value.to_string());
    }

    fn default_headers(&self) -> HashMap<String, String> {
        self.defaults.lock().unwrap().clone()
    }
}

/// Builds a client with the pokemon resource registered on a spy transport.
pub fn pokemon_client() -> (RestClient, Arc<SpyTransport>) {
    let spy = SpyTransport::new();
    let transport: SharedTransport = spy.clone();
    let client = RestClient::new(
        ClientConfig::builder()
            .resource_type::<PokemonResource>("pokemons")
            .transport(transport)
            .build(),
    )
    .unwrap();
    (client, spy)
}

/// Compares two shared transports by address.
pub fn same_transport(a: &SharedTransport, b: &SharedTransport) -> bool {
    Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
}
