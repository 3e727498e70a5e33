//! Configuration types for building a [`RestClient`](crate::RestClient).
//!
//! # Overview
//!
//! - [`ClientConfig`]: everything a client needs at construction time
//! - [`ClientConfigBuilder`]: fluent builder for [`ClientConfig`]
//! - [`TransportParams`]: settings handed to the transport factory or to the
//!   default [`HttpTransport`](crate::clients::HttpTransport)
//! - [`TransportSource`]: where the client's transport comes from
//!
//! # Transport Selection
//!
//! Exactly one transport is built per client, in this order of preference:
//!
//! 1. a custom transport instance ([`ClientConfigBuilder::transport`])
//! 2. a factory receiving the params ([`ClientConfigBuilder::transport_factory`])
//! 3. the default [`HttpTransport`](crate::clients::HttpTransport) built from the params
//!
//! # Example
//!
//! ```rust
//! use snorlax::{ClientConfig, TransportParams};
//! use snorlax::rest::{ActionTable, ResourceDefinition};
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
//!         ActionTable::new().get("all", "/").get("get", "/{0}")
//!     }
//! }
//!
//! let config = ClientConfig::builder()
//!     .resource_type::<Pokemons>("pokemons")
//!     .params(TransportParams::new().base_url("https://pokeapi.example.com/api/"))
//!     .build();
//!
//! assert!(config.has_resource("pokemons"));
//! ```

mod params;

pub use params::TransportParams;

use std::collections::HashMap;
use std::fmt;

use crate::clients::SharedTransport;
use crate::error::ConfigError;
use crate::rest::{resource_type, ResourceDefinition, ResourceFactory};

/// A factory that builds the client's transport from its params.
pub type TransportFactory =
    Box<dyn FnOnce(&TransportParams) -> Result<SharedTransport, ConfigError> + Send>;

/// Where a client obtains its transport.
pub enum TransportSource {
    /// Build the default HTTP transport from the params.
    Default,
    /// Use a pre-built transport as-is.
    Instance(SharedTransport),
    /// Call a factory with the params.
    Factory(TransportFactory),
}

impl fmt::Debug for TransportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Instance(transport) => f.debug_tuple("Instance").field(transport).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Construction-time configuration for a [`RestClient`](crate::RestClient).
pub struct ClientConfig {
    resources: HashMap<String, ResourceFactory>,
    transport: TransportSource,
    params: TransportParams,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the params passed to the transport factory or default transport.
    #[must_use]
    pub const fn params(&self) -> &TransportParams {
        &self.params
    }

    /// Returns the configured transport source.
    #[must_use]
    pub const fn transport(&self) -> &TransportSource {
        &self.transport
    }

    /// Returns `true` if a resource with this name is configured.
    #[must_use]
    pub fn has_resource(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        HashMap<String, ResourceFactory>,
        TransportSource,
        TransportParams,
    ) {
        (self.resources, self.transport, self.params)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfigBuilder::new().build()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.resources.keys().collect();
        names.sort();
        f.debug_struct("ClientConfig")
            .field("resources", &names)
            .field("transport", &self.transport)
            .field("params", &self.params)
            .finish()
    }
}

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Defaults
///
/// - `resources`: empty
/// - transport: the default HTTP transport
/// - `params`: [`TransportParams::default`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    resources: HashMap<String, ResourceFactory>,
    instance: Option<SharedTransport>,
    factory: Option<TransportFactory>,
    params: Option<TransportParams>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource under `name`, replacing any earlier registration.
    #[must_use]
    pub fn resource(mut self, name: impl Into<String>, factory: ResourceFactory) -> Self {
        self.resources.insert(name.into(), factory);
        self
    }

    /// Registers a resource type under `name`.
    #[must_use]
    pub fn resource_type<R>(self, name: impl Into<String>) -> Self
    where
        R: ResourceDefinition + Default + 'static,
    {
        self.resource(name, resource_type::<R>())
    }

    /// Registers several resources at once.
    #[must_use]
    pub fn resources<I, K>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = (K, ResourceFactory)>,
        K: Into<String>,
    {
        self.resources
            .extend(resources.into_iter().map(|(name, factory)| (name.into(), factory)));
        self
    }

    /// Uses a pre-built transport. Takes precedence over a factory.
    #[must_use]
    pub fn transport(mut self, transport: SharedTransport) -> Self {
        self.instance = Some(transport);
        self
    }

    /// Builds the transport by calling `factory` with the params.
    #[must_use]
    pub fn transport_factory<F>(mut self, factory: F) -> Self
    where
        F: FnOnce(&TransportParams) -> Result<SharedTransport, ConfigError> + Send + 'static,
    {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Sets the params handed to the factory or default transport.
    #[must_use]
    pub fn params(mut self, params: TransportParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Builds the [`ClientConfig`].
    #[must_use]
    pub fn build(self) -> ClientConfig {
        let transport = match (self.instance, self.factory) {
            (Some(instance), _) => TransportSource::Instance(instance),
            (None, Some(factory)) => TransportSource::Factory(factory),
            (None, None) => TransportSource::Default,
        };

        ClientConfig {
            resources: self.resources,
            transport,
            params: self.params.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpTransport;
    use crate::rest::ActionTable;
    use std::sync::Arc;

    #[derive(Debug, Default)]
    struct Pokemons;

    impl ResourceDefinition for Pokemons {
        fn base_uri(&self) -> String {
            "pokemons".to_string()
        }

        fn actions(&self) -> ActionTable {
            ActionTable::new().get("get", "/{0}")
        }
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ClientConfig::builder().build();

        assert!(matches!(config.transport(), TransportSource::Default));
        assert_eq!(config.params(), &TransportParams::default());
        assert!(!config.has_resource("pokemons"));
    }

    #[test]
    fn test_instance_takes_precedence_over_factory() {
        let transport: SharedTransport =
            Arc::new(HttpTransport::new(&TransportParams::default()).unwrap());

        let config = ClientConfig::builder()
            .transport_factory(|params| Ok(Arc::new(HttpTransport::new(params)?)))
            .transport(transport)
            .build();

        assert!(matches!(config.transport(), TransportSource::Instance(_)));
    }

    #[test]
    fn test_factory_is_used_without_instance() {
        let config = ClientConfig::builder()
            .transport_factory(|params| Ok(Arc::new(HttpTransport::new(params)?)))
            .build();

        assert!(matches!(config.transport(), TransportSource::Factory(_)));
    }

    #[test]
    fn test_resource_registration_overwrites_by_name() {
        let config = ClientConfig::builder()
            .resource_type::<Pokemons>("pokemons")
            .resources(vec![("pokemons", resource_type::<Pokemons>())])
            .build();

        assert!(config.has_resource("pokemons"));
        let (resources, _, _) = config.into_parts();
        assert_eq!(resources.len(), 1);
    }

    #[test]
    fn test_debug_lists_resource_names() {
        let config = ClientConfig::builder()
            .resource_type::<Pokemons>("pokemons")
            .build();

        let debug = format!("{config:?}");
        assert!(debug.contains("ClientConfig"));
        assert!(debug.contains("pokemons"));
    }
}
