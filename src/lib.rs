//! # Snorlax
//!
//! A declarative REST client builder. Resources are described as data, a
//! base URI plus a table of named actions, and a client turns those
//! descriptions into callable endpoints sharing one HTTP transport.
//!
//! ## Overview
//!
//! This crate provides:
//! - Declarative resources via [`rest::ResourceDefinition`] and [`rest::ActionTable`]
//! - Positional `{n}` path templates filled from call arguments
//! - A lazily populated, cached resource registry in [`RestClient`]
//! - Pluggable transports behind the [`clients::Transport`] trait, with a
//!   `reqwest`-backed [`clients::HttpTransport`] as the default
//! - Basic and Bearer authorization via [`BasicAuth`] and [`BearerAuth`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use snorlax::{BearerAuth, ClientConfig, RestClient, TransportParams};
//! use snorlax::rest::{ActionArgs, ActionTable, ResourceDefinition};
//! use serde_json::json;
//!
//! #[derive(Debug, Default)]
//! struct Pokemons;
//!
//! impl ResourceDefinition for Pokemons {
//!     fn base_uri(&self) -> String {
//!         "pokemons".to_string()
//!     }
//!
//!     fn actions(&self) -> ActionTable {
//!         ActionTable::new()
//!             .get("all", "/")
//!             .get("get", "/{0}")
//!             .post("capture", "/")
//!             .patch("attack", "/{0}/{1}/{2}")
//!     }
//! }
//!
//! let client = RestClient::new(
//!     ClientConfig::builder()
//!         .resource_type::<Pokemons>("pokemons")
//!         .params(TransportParams::new().base_url("https://pokeapi.example.com/api/"))
//!         .build(),
//! )?;
//! client.set_auth_method(&BearerAuth::new("my-token"));
//!
//! let pokemons = client.resource("pokemons")?;
//!
//! // GET pokemons/143
//! let snorlax = pokemons.invoke("get", ActionArgs::new().arg(143)).await?;
//!
//! // POST pokemons/ with a JSON body
//! pokemons
//!     .call("capture", vec![json!({"body": {"pokemon_id": 143}})])
//!     .await?;
//! ```
//!
//! ## Custom Transports
//!
//! Any [`clients::Transport`] can replace the default, either as a ready
//! instance or through a factory receiving the [`TransportParams`]:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use snorlax::{ClientConfig, RestClient};
//!
//! let client = RestClient::new(
//!     ClientConfig::builder()
//!         .transport_factory(|params| Ok(Arc::new(MyTransport::new(params))))
//!         .build(),
//! )?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: every client owns its transport and registry
//! - **Fail-fast validation**: transport params are checked at construction
//! - **Thread-safe**: clients and resources are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{Authorization, BasicAuth, BearerAuth};
pub use config::{ClientConfig, ClientConfigBuilder, TransportParams};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    HttpMethod, HttpResponse, HttpResponseError, RequestOptions, TransportError,
};
pub use clients::{ClientError, RestClient};
