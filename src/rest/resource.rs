//! Resource definitions and the runtime resource object.
//!
//! A [`ResourceDefinition`] is the declarative side: a base URI, an
//! [`ActionTable`], and an optional post-processing hook. A [`Resource`] is
//! what a [`RestClient`](crate::RestClient) hands out: the definition bound
//! to the client's shared transport.
//!
//! # Invoking Actions
//!
//! For an action with verb `V` and path template `P`, invoking it sends
//! `V` to `base_uri + build_path(P, path_args)` with the call's options,
//! stores the raw response, decodes the body as JSON, and passes the result
//! through [`ResourceDefinition::after`].
//!
//! # Example
//!
//! ```rust,ignore
//! use snorlax::rest::ActionArgs;
//! use serde_json::json;
//!
//! let pokemons = client.resource("pokemons")?;
//!
//! // GET pokemons/143
//! let snorlax = pokemons.invoke("get", ActionArgs::new().arg(143)).await?;
//!
//! // PATCH pokemons/143/144/rest
//! pokemons.call("attack", vec![json!(143), json!(144), json!("rest")]).await?;
//!
//! println!("{:?}", pokemons.last_response().map(|r| r.code));
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;

use crate::clients::{value_to_string, HttpMethod, HttpResponse, RequestOptions, SharedTransport};
use crate::rest::action::{ActionArgs, ActionTable};
use crate::rest::errors::ResourceError;
use crate::rest::path::{build_path, placeholders};

/// Declarative description of a REST resource.
///
/// Implementors are usually unit structs registered with
/// [`ClientConfigBuilder::resource_type`](crate::ClientConfigBuilder::resource_type).
///
/// # Example
///
/// ```rust
/// use snorlax::rest::{ActionTable, ResourceDefinition};
/// use serde_json::Value;
///
/// #[derive(Debug, Default)]
/// struct Pokemons;
///
/// impl ResourceDefinition for Pokemons {
///     fn base_uri(&self) -> String {
///         "pokemons".to_string()
///     }
///
///     fn actions(&self) -> ActionTable {
///         ActionTable::new()
///             .get("all", "/")
///             .get("get", "/{0}")
///             .post("capture", "/")
///             .patch("attack", "/{0}/{1}/{2}")
///     }
///
///     fn after(&self, _action: &str, response: Value) -> Value {
///         response.get("pokemon").cloned().unwrap_or(response)
///     }
/// }
///
/// assert_eq!(Pokemons.actions().len(), 4);
/// ```
pub trait ResourceDefinition: Send + Sync + fmt::Debug {
    /// The URI prefix every action path is appended to.
    fn base_uri(&self) -> String;

    /// The actions this resource exposes.
    fn actions(&self) -> ActionTable;

    /// Post-processes the decoded response of `action`.
    ///
    /// The default returns the response unchanged.
    fn after(&self, _action: &str, response: Value) -> Value {
        response
    }
}

/// Produces a fresh definition each time a client instantiates a resource.
pub type ResourceFactory = Arc<dyn Fn() -> Arc<dyn ResourceDefinition> + Send + Sync>;

/// Returns a factory that instantiates `R` through [`Default`].
#[must_use]
pub fn resource_type<R>() -> ResourceFactory
where
    R: ResourceDefinition + Default + 'static,
{
    Arc::new(|| Arc::new(R::default()) as Arc<dyn ResourceDefinition>)
}

/// A fully resolved request, ready for the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// `base_uri` followed by the substituted action path.
    pub uri: String,
    /// Query, body, and headers for the request.
    pub options: RequestOptions,
}

/// A resource bound to a client's transport.
///
/// The base URI and action table are read from the definition once, when
/// the resource is created.
pub struct Resource {
    name: String,
    definition: Arc<dyn ResourceDefinition>,
    base_uri: String,
    actions: ActionTable,
    transport: SharedTransport,
    last_response: Mutex<Option<HttpResponse>>,
}

// Verify Resource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resource>();
};

impl Resource {
    /// Binds a definition to a transport.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        definition: Arc<dyn ResourceDefinition>,
        transport: SharedTransport,
    ) -> Self {
        let base_uri = definition.base_uri();
        let actions = definition.actions();
        Self {
            name: name.into(),
            definition,
            base_uri,
            actions,
            transport,
            last_response: Mutex::new(None),
        }
    }

    /// Returns the name the resource was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base URI captured at construction.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the action table captured at construction.
    #[must_use]
    pub const fn actions(&self) -> &ActionTable {
        &self.actions
    }

    /// Returns the underlying definition.
    #[must_use]
    pub fn definition(&self) -> &Arc<dyn ResourceDefinition> {
        &self.definition
    }

    /// Returns the transport this resource sends requests through.
    #[must_use]
    pub const fn transport(&self) -> &SharedTransport {
        &self.transport
    }

    /// Returns the raw response of the most recent call, either an action or
    /// one of the [`all`](Self::all) / [`get`](Self::get) shorthands.
    ///
    /// `None` until a call has completed at the transport level.
    #[must_use]
    pub fn last_response(&self) -> Option<HttpResponse> {
        self.last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Resolves an action into the request that would be sent, without
    /// sending it.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::ActionNotFound`] if `action` is not in the table
    /// - [`ResourceError::InvalidArguments`] if a placeholder has no
    ///   argument or refers to an array or object argument
    pub fn resolve(&self, action: &str, args: &ActionArgs) -> Result<ResolvedRequest, ResourceError> {
        let template = self
            .actions
            .get_action(action)
            .ok_or_else(|| ResourceError::ActionNotFound {
                action: action.to_string(),
                resource: self.name.clone(),
            })?;

        for index in placeholders(&template.path) {
            if let Some(value @ (Value::Array(_) | Value::Object(_))) = args.path_args().get(index) {
                return Err(ResourceError::InvalidArguments {
                    action: action.to_string(),
                    reason: format!("path argument {index} must be a scalar, got {value}"),
                });
            }
        }

        let path_args: Vec<String> = args.path_args().iter().map(value_to_string).collect();

        let path = build_path(&template.path, &path_args).map_err(|missing| {
            ResourceError::InvalidArguments {
                action: action.to_string(),
                reason: format!(
                    "path placeholder {{{}}} needs {} arguments, got {}",
                    missing.index,
                    missing.index + 1,
                    missing.supplied
                ),
            }
        })?;

        Ok(ResolvedRequest {
            method: template.verb,
            uri: format!("{}{path}", self.base_uri),
            options: args.request_options(template.verb),
        })
    }

    /// Invokes an action and returns its decoded, post-processed response.
    ///
    /// The raw response is stored before decoding, so
    /// [`last_response`](Self::last_response) is available even when the
    /// body is not valid JSON. An empty body decodes to [`Value::Null`].
    ///
    /// # Errors
    ///
    /// - [`ResourceError::ActionNotFound`] / [`ResourceError::InvalidArguments`]
    ///   before anything is sent
    /// - [`ResourceError::Transport`] if the transport fails
    /// - [`ResourceError::Decode`] if the body is not valid JSON
    pub async fn invoke(&self, action: &str, args: ActionArgs) -> Result<Value, ResourceError> {
        let request = self.resolve(action, &args)?;

        tracing::debug!(
            resource = %self.name,
            action,
            method = %request.method,
            uri = %request.uri,
            "Dispatching action"
        );

        let response = self
            .transport
            .request(request.method, &request.uri, request.options)
            .await?;

        let decoded = decode_body(action, &response);
        self.record_response(response);

        Ok(self.definition.after(action, decoded?))
    }

    /// Replaces the stored raw response.
    pub(crate) fn record_response(&self, response: HttpResponse) {
        *self
            .last_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(response);
    }

    /// Invokes an action with a positional argument list.
    ///
    /// A trailing JSON object is taken as the request options; see
    /// [`ActionArgs::from_values`].
    ///
    /// # Errors
    ///
    /// Same as [`invoke`](Self::invoke).
    pub async fn call(&self, action: &str, args: Vec<Value>) -> Result<Value, ResourceError> {
        self.invoke(action, ActionArgs::from_values(args)).await
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("name", &self.name)
            .field("base_uri", &self.base_uri)
            .field("actions", &self.actions.names())
            .finish_non_exhaustive()
    }
}

/// Decodes a response body as JSON; blank bodies decode to `null`.
pub(crate) fn decode_body(action: &str, response: &HttpResponse) -> Result<Value, ResourceError> {
    if response.is_body_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&response.body).map_err(|source| ResourceError::Decode {
        action: action.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpTransport, Transport};
    use crate::TransportParams;
    use serde_json::json;

    #[derive(Debug, Default)]
    struct Pokemons;

    impl ResourceDefinition for Pokemons {
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

    fn pokemons() -> Resource {
        let transport: SharedTransport =
            Arc::new(HttpTransport::new(&TransportParams::default()).unwrap());
        Resource::new("pokemons", resource_type::<Pokemons>()(), transport)
    }

    #[test]
    fn test_resolve_concatenates_base_uri_and_path() {
        let resource = pokemons();

        let all = resource.resolve("all", &ActionArgs::new()).unwrap();
        assert_eq!(all.method, HttpMethod::Get);
        assert_eq!(all.uri, "pokemons/");

        let attack = resource
            .resolve(
                "attack",
                &ActionArgs::new().arg(143).arg(144).arg("rest"),
            )
            .unwrap();
        assert_eq!(attack.method, HttpMethod::Patch);
        assert_eq!(attack.uri, "pokemons/143/144/rest");
        assert!(attack.options.is_empty());
    }

    #[test]
    fn test_resolve_routes_mapping_by_verb() {
        let resource = pokemons();

        let capture = resource
            .resolve(
                "capture",
                &ActionArgs::from_values(vec![json!({"body": {"pokemon_id": 143}})]),
            )
            .unwrap();
        assert_eq!(capture.uri, "pokemons/");
        assert_eq!(capture.options.body, Some(json!({"pokemon_id": 143})));
        assert!(capture.options.query.is_none());
    }

    #[test]
    fn test_resolve_unknown_action() {
        let result = pokemons().resolve("evolve", &ActionArgs::new());
        assert!(matches!(
            result,
            Err(ResourceError::ActionNotFound { ref action, ref resource })
                if action == "evolve" && resource == "pokemons"
        ));
    }

    #[test]
    fn test_resolve_missing_path_argument() {
        let result = pokemons().resolve("attack", &ActionArgs::new().arg(143).arg(144));
        match result {
            Err(ResourceError::InvalidArguments { action, reason }) => {
                assert_eq!(action, "attack");
                assert!(reason.contains("needs 3 arguments, got 2"));
            }
            other => panic!("Expected InvalidArguments, got: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_rejects_non_scalar_path_argument() {
        let result = pokemons().resolve("get", &ActionArgs::new().arg(json!([1, 2])));
        assert!(matches!(result, Err(ResourceError::InvalidArguments { .. })));
    }

    #[test]
    fn test_resolve_ignores_non_scalar_arguments_without_placeholder() {
        let resource = pokemons();

        let all = resource
            .resolve("all", &ActionArgs::new().arg(json!([1])))
            .unwrap();
        assert_eq!(all.uri, "pokemons/");

        let get = resource
            .resolve("get", &ActionArgs::new().arg(143).arg(json!({"x": 1})))
            .unwrap();
        assert_eq!(get.uri, "pokemons/143");
    }

    #[test]
    fn test_definition_is_read_once_at_construction() {
        let resource = pokemons();
        assert_eq!(resource.base_uri(), "pokemons");
        assert_eq!(resource.actions().len(), 4);
        assert_eq!(resource.name(), "pokemons");
        assert!(resource.last_response().is_none());
        assert!(resource.transport().default_headers().contains_key("Accept"));
    }

    #[test]
    fn test_decode_body_handles_empty_and_malformed() {
        assert_eq!(
            decode_body("get", &HttpResponse::empty(204)).unwrap(),
            Value::Null
        );
        assert_eq!(
            decode_body("get", &HttpResponse::new(200, Default::default(), "  \n")).unwrap(),
            Value::Null
        );
        assert!(matches!(
            decode_body("get", &HttpResponse::new(200, Default::default(), "<html>")),
            Err(ResourceError::Decode { .. })
        ));
        assert_eq!(
            decode_body("get", &HttpResponse::json(200, &json!({"id": 143}))).unwrap(),
            json!({"id": 143})
        );
    }

    #[test]
    fn test_default_after_hook_is_identity() {
        let body = json!({"pokemon": {"id": 143}});
        assert_eq!(Pokemons.after("get", body.clone()), body);
    }
}
