//! The resource registry.
//!
//! This module provides the [`RestClient`] type, which owns one transport
//! and lazily instantiates the resources registered with it.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::auth::Authorization;
use crate::clients::rest::ClientError;
use crate::clients::{HttpTransport, SharedTransport};
use crate::config::{ClientConfig, TransportParams, TransportSource};
use crate::rest::{resource_type, Resource, ResourceDefinition, ResourceFactory};

/// Registry of REST resources sharing one transport.
///
/// Resources are instantiated on first access and cached for the lifetime of
/// the client, so repeated lookups of the same name return the same
/// [`Arc<Resource>`]. Registering a name again replaces its definition for
/// future instantiation but never evicts an already cached resource.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`. Concurrent first accesses to the same name
/// instantiate the resource exactly once.
///
/// # Example
///
/// ```rust,ignore
/// use snorlax::{BearerAuth, ClientConfig, RestClient, TransportParams};
///
/// let client = RestClient::new(
///     ClientConfig::builder()
///         .resource_type::<Pokemons>("pokemons")
///         .params(TransportParams::new().base_url("https://pokeapi.example.com/api/"))
///         .build(),
/// )?;
///
/// client.set_auth_method(&BearerAuth::new("my-token"));
///
/// let pokemons = client.resource("pokemons")?;
/// let all = pokemons.call("all", vec![]).await?;
/// ```
pub struct RestClient {
    transport: SharedTransport,
    params: TransportParams,
    definitions: RwLock<HashMap<String, ResourceFactory>>,
    cache: Mutex<HashMap<String, Arc<Resource>>>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client from its configuration, building the transport.
    ///
    /// The transport comes from, in order of preference: a custom instance,
    /// a factory called with the params, or a default [`HttpTransport`]
    /// built from the params.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the factory fails or the default
    /// transport rejects the params.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let (resources, source, params) = config.into_parts();

        let transport: SharedTransport = match source {
            TransportSource::Instance(transport) => {
                tracing::debug!("Using custom transport instance");
                transport
            }
            TransportSource::Factory(factory) => {
                tracing::debug!("Building transport from custom factory");
                factory(&params)?
            }
            TransportSource::Default => {
                tracing::debug!("Building default HTTP transport");
                Arc::new(HttpTransport::new(&params)?)
            }
        };

        Ok(Self {
            transport,
            params,
            definitions: RwLock::new(resources),
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Registers several resources, replacing definitions with the same name.
    ///
    /// Already instantiated resources are kept as they are.
    pub fn add_resources<I, K>(&self, resources: I)
    where
        I: IntoIterator<Item = (K, ResourceFactory)>,
        K: Into<String>,
    {
        let mut definitions = self
            .definitions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for (name, factory) in resources {
            definitions.insert(name.into(), factory);
        }
    }

    /// Registers a single resource factory.
    pub fn add_resource(&self, name: impl Into<String>, factory: ResourceFactory) {
        self.add_resources(std::iter::once((name, factory)));
    }

    /// Registers a resource type instantiated through [`Default`].
    pub fn add_resource_type<R>(&self, name: impl Into<String>)
    where
        R: ResourceDefinition + Default + 'static,
    {
        self.add_resource(name, resource_type::<R>());
    }

    /// Returns the resource registered under `name`, instantiating and
    /// caching it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ResourceNotImplemented`] if the name is
    /// neither cached nor registered.
    pub fn resource(&self, name: &str) -> Result<Arc<Resource>, ClientError> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(resource) = cache.get(name) {
            return Ok(Arc::clone(resource));
        }

        let factory = self
            .definitions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| ClientError::ResourceNotImplemented {
                name: name.to_string(),
            })?;

        let resource = Arc::new(Resource::new(
            name,
            factory(),
            Arc::clone(&self.transport),
        ));
        cache.insert(name.to_string(), Arc::clone(&resource));
        drop(cache);

        tracing::debug!(resource = name, base_uri = %resource.base_uri(), "Instantiated resource");
        Ok(resource)
    }

    /// Installs a default `Authorization: <scheme> <credentials>` header on
    /// the transport.
    ///
    /// Applies to every request issued afterwards, including requests from
    /// resources that were instantiated earlier. Calling it again replaces
    /// the previous value.
    pub fn set_auth_method(&self, auth: &dyn Authorization) {
        tracing::debug!(scheme = auth.auth_type(), "Setting authorization header");
        self.transport
            .set_default_header("Authorization", &auth.header_value());
    }

    /// Returns the transport, exactly as configured or built.
    #[must_use]
    pub const fn original_client(&self) -> &SharedTransport {
        &self.transport
    }

    /// Returns the params the transport was built from.
    #[must_use]
    pub const fn params(&self) -> &TransportParams {
        &self.params
    }

    /// Returns the registered resource names, sorted.
    #[must_use]
    pub fn resource_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .definitions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Returns `true` if a resource with this name has been instantiated.
    #[must_use]
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("transport", &self.transport)
            .field("params", &self.params)
            .field("resources", &self.resource_names())
            .finish_non_exhaustive()
    }
}
