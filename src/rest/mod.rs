//! Declarative REST resources.
//!
//! This module provides the pieces a resource is described with and the
//! runtime object that executes it:
//!
//! - **[`ResourceDefinition`]**: base URI, action table, and after hook
//! - **[`ActionTable`] / [`ActionTemplate`]**: named `(verb, path template)` pairs
//! - **[`ActionArgs`]**: positional path arguments plus request options
//! - **[`Resource`]**: a definition bound to a transport, with
//!   [`invoke`](Resource::invoke), [`call`](Resource::call), and the
//!   [`all`](Resource::all) / [`get`](Resource::get) shorthands
//! - **Path building**: [`build_path`], [`placeholders`], [`required_args`]
//! - **[`ResourceError`]**: errors raised while invoking an action
//!
//! # Example
//!
//! ```rust,ignore
//! use snorlax::{ClientConfig, RestClient, TransportParams};
//! use snorlax::rest::{ActionArgs, ActionTable, ResourceDefinition};
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
//!             .get("get", "/{0}")
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
//!
//! let pokemons = client.resource("pokemons")?;
//! let snorlax = pokemons.invoke("get", ActionArgs::new().arg(143)).await?;
//! ```

mod action;
mod common;
mod errors;
mod path;
mod resource;

pub use action::{ActionArgs, ActionTable, ActionTemplate};
pub use errors::ResourceError;
pub use path::{build_path, placeholders, required_args, MissingPathArgument};
pub use resource::{resource_type, ResolvedRequest, Resource, ResourceDefinition, ResourceFactory};
