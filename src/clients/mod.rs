//! Client types: the transport seam and the resource registry.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: the pluggable HTTP collaborator every resource calls
//! - [`HttpTransport`]: the default `reqwest`-backed transport
//! - [`HttpMethod`]: verbs an action can be declared with
//! - [`RequestOptions`]: query, body, and headers for one request
//! - [`HttpResponse`]: the raw response a transport returns
//! - [`TransportError`]: everything a transport can fail with
//! - [`rest::RestClient`]: the registry owning the transport and resources
//! - [`rest::ClientError`]: registry-level errors
//!
//! # Example
//!
//! ```rust,ignore
//! use snorlax::clients::{HttpMethod, HttpTransport, RequestOptions, Transport};
//! use snorlax::TransportParams;
//!
//! let transport = HttpTransport::new(
//!     &TransportParams::new().base_url("https://pokeapi.example.com/api"),
//! )?;
//!
//! let response = transport
//!     .request(HttpMethod::Get, "pokemons/143", RequestOptions::new())
//!     .await?;
//! println!("{}", response.body);
//! ```

mod errors;
mod http_request;
mod http_response;
mod http_transport;
pub mod rest;
mod transport;

pub use errors::{HttpResponseError, InvalidHttpMethodError, TransportError};
pub use http_request::{value_to_string, HttpMethod, RequestOptions};
pub use http_response::HttpResponse;
pub use http_transport::{HttpTransport, SDK_VERSION};
pub use transport::{merge_headers, SharedTransport, Transport};

// Re-export registry types at the clients module level
pub use rest::{ClientError, RestClient};
