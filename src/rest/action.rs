//! Action templates and call-time arguments.
//!
//! An action is a named `(verb, path template)` pair. A resource declares
//! its actions once as an [`ActionTable`]; callers invoke them by name with
//! [`ActionArgs`].
//!
//! # Action Tables as Data
//!
//! Tables serialize to a plain JSON object, so they can be loaded from
//! configuration:
//!
//! ```rust
//! use snorlax::rest::ActionTable;
//! use snorlax::HttpMethod;
//!
//! let table = ActionTable::from_json(r#"{
//!     "all":    {"verb": "GET",   "path": "/"},
//!     "get":    {"verb": "GET",   "path": "/{0}"},
//!     "attack": {"verb": "PATCH", "path": "/{0}/{1}/{2}"}
//! }"#).unwrap();
//!
//! let attack = table.get_action("attack").unwrap();
//! assert_eq!(attack.verb, HttpMethod::Patch);
//! assert_eq!(attack.required_args(), 3);
//! ```

use std::collections::hash_map::Iter;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{HttpMethod, RequestOptions};
use crate::rest::path::required_args;

/// Static description of one operation: HTTP verb plus path template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTemplate {
    /// The HTTP method used for this action.
    #[serde(alias = "method")]
    pub verb: HttpMethod,
    /// The path appended to the resource's base URI, with `{n}` placeholders.
    #[serde(alias = "pathTemplate", alias = "path_template")]
    pub path: String,
}

impl ActionTemplate {
    /// Creates a new action template.
    #[must_use]
    pub fn new(verb: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
        }
    }

    /// Returns how many positional path arguments this action needs.
    #[must_use]
    pub fn required_args(&self) -> usize {
        required_args(&self.path)
    }
}

/// The actions a resource exposes, keyed by unique action name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionTable {
    actions: HashMap<String, ActionTemplate>,
}

impl ActionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a table from a JSON object of `name -> {verb, path}`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or unknown verbs.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Adds an action, replacing any action with the same name.
    #[must_use]
    pub fn action(mut self, name: impl Into<String>, verb: HttpMethod, path: impl Into<String>) -> Self {
        self.actions
            .insert(name.into(), ActionTemplate::new(verb, path));
        self
    }

    /// Adds a GET action.
    #[must_use]
    pub fn get(self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.action(name, HttpMethod::Get, path)
    }

    /// Adds a POST action.
    #[must_use]
    pub fn post(self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.action(name, HttpMethod::Post, path)
    }

    /// Adds a PUT action.
    #[must_use]
    pub fn put(self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.action(name, HttpMethod::Put, path)
    }

    /// Adds a PATCH action.
    #[must_use]
    pub fn patch(self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.action(name, HttpMethod::Patch, path)
    }

    /// Adds a DELETE action.
    #[must_use]
    pub fn delete(self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.action(name, HttpMethod::Delete, path)
    }

    /// Looks up an action by name.
    #[must_use]
    pub fn get_action(&self, name: &str) -> Option<&ActionTemplate> {
        self.actions.get(name)
    }

    /// Returns `true` if the table defines `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Returns the action names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if the table has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterates over `(name, template)` pairs in arbitrary order.
    pub fn iter(&self) -> Iter<'_, String, ActionTemplate> {
        self.actions.iter()
    }
}

impl<'a> IntoIterator for &'a ActionTable {
    type Item = (&'a String, &'a ActionTemplate);
    type IntoIter = Iter<'a, String, ActionTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// How the options of a call were supplied.
#[derive(Clone, Debug, PartialEq)]
enum OptionsPayload {
    Typed(RequestOptions),
    /// A loose mapping, routed by verb once the action is known.
    Mapping(Map<String, Value>),
}

/// Call-time arguments for an action: positional path arguments plus the
/// request options.
///
/// # Example
///
/// ```rust
/// use snorlax::rest::ActionArgs;
/// use snorlax::clients::RequestOptions;
/// use serde_json::json;
///
/// // Typed: path arguments and options are separate
/// let args = ActionArgs::new()
///     .arg(143)
///     .arg("rest")
///     .options(RequestOptions::new().query_param("verbose", "1"));
/// assert_eq!(args.path_args().len(), 2);
///
/// // Positional: a trailing JSON object is taken as the options
/// let args = ActionArgs::from_values(vec![json!({"body": {"pokemon_id": 143}})]);
/// assert!(args.path_args().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionArgs {
    path_args: Vec<Value>,
    options: Option<OptionsPayload>,
}

impl ActionArgs {
    /// Creates arguments with no path arguments and empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds arguments from a positional list.
    ///
    /// If the last value is a JSON object it becomes the options payload and
    /// is not used for path substitution. Any other trailing value stays a
    /// path argument and the options are empty.
    #[must_use]
    pub fn from_values(mut values: Vec<Value>) -> Self {
        let options = match values.last() {
            Some(Value::Object(_)) => match values.pop() {
                Some(Value::Object(map)) => Some(OptionsPayload::Mapping(map)),
                _ => None,
            },
            _ => None,
        };

        Self {
            path_args: values,
            options,
        }
    }

    /// Appends a positional path argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.path_args.push(value.into());
        self
    }

    /// Sets the request options.
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = Some(OptionsPayload::Typed(options));
        self
    }

    /// Sets the options from a loose mapping; see
    /// [`RequestOptions::from_mapping`] for how it is routed.
    #[must_use]
    pub fn mapping(mut self, mapping: Map<String, Value>) -> Self {
        self.options = Some(OptionsPayload::Mapping(mapping));
        self
    }

    /// Returns the positional path arguments.
    #[must_use]
    pub fn path_args(&self) -> &[Value] {
        &self.path_args
    }

    /// Resolves the options for an action with the given verb.
    #[must_use]
    pub fn request_options(&self, verb: HttpMethod) -> RequestOptions {
        match &self.options {
            None => RequestOptions::default(),
            Some(OptionsPayload::Typed(options)) => options.clone(),
            Some(OptionsPayload::Mapping(map)) => RequestOptions::from_mapping(verb, map.clone()),
        }
    }
}

impl From<Vec<Value>> for ActionArgs {
    fn from(values: Vec<Value>) -> Self {
        Self::from_values(values)
    }
}
