//! Pending API calls and the options that adjust them

use crate::context::Context;
use crate::{CircleError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use http::Method;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

/// Body field the idempotency key is written to
pub const IDEMPOTENCY_KEY_FIELD: &str = "idempotencyKey";

/// Characters escaped in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode a value so it occupies exactly one path segment.
///
/// Empty values and the dot segments `.` and `..` are rejected: URL
/// normalization would fold them into a neighbouring endpoint.
pub fn encode_segment(segment: &str) -> Result<String> {
    match segment {
        "" => Err(CircleError::invalid_input("Path parameter must not be empty")),
        "." | ".." => Err(CircleError::invalid_input(format!(
            "Path parameter '{}' is not a valid identifier",
            segment
        ))),
        _ => Ok(utf8_percent_encode(segment, PATH_SEGMENT).to_string()),
    }
}

/// One pending API call.
///
/// Built per call by a resource method, adjusted by [`CallOption`]s and
/// consumed by [`Client::dispatch`](crate::Client::dispatch).
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    endpoint: String,
    input: Option<Value>,
    unwrap_data: bool,
    idempotency_key: Option<String>,
    context: Context,
    query: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Create a descriptor for `endpoint`, relative to the base URL.
    /// Responses are unwrapped from the `data` envelope unless disabled.
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            input: None,
            unwrap_data: true,
            idempotency_key: None,
            context: Context::background(),
            query: Vec::new(),
        }
    }

    /// Create a GET descriptor
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// Create a POST descriptor
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    /// Create a PUT descriptor
    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    /// Attach a request body
    pub fn with_input<T: Serialize + ?Sized>(mut self, input: &T) -> Result<Self> {
        self.input = Some(serde_json::to_value(input)?);
        Ok(self)
    }

    /// Decode the whole response body instead of its `data` member
    pub fn without_unwrap(mut self) -> Self {
        self.unwrap_data = false;
        self
    }

    /// Append a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_query(key, value);
        self
    }

    /// Apply call options left to right, stopping at the first failure
    pub fn apply(mut self, options: impl IntoIterator<Item = CallOption>) -> Result<Self> {
        for option in options {
            option.apply(&mut self)?;
        }
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn input(&self) -> Option<&Value> {
        self.input.as_ref()
    }

    pub fn unwrap_data(&self) -> bool {
        self.unwrap_data
    }

    pub fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Query parameters in insertion order
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Values of a query parameter
    pub fn query_values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.query
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Append a query parameter, keeping earlier values for the same key
    pub fn add_query(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Set a single-valued query parameter, replacing earlier values
    pub fn set_query(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.query.retain(|(k, _)| *k != key);
        self.query.push((key, value.into()));
    }

    pub fn set_context(&mut self, context: Context) {
        self.context = context;
    }

    pub fn set_idempotency_key(&mut self, key: impl Into<String>) {
        self.idempotency_key = Some(key.into());
    }

    /// Whether the call carries an idempotency key in its body
    pub fn is_mutating(&self) -> bool {
        self.method == Method::POST || self.method == Method::PUT
    }

    /// Absolute URL of the call, with the query appended once
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.join(&self.endpoint).map_err(|e| {
            CircleError::invalid_input(format!("Invalid endpoint '{}': {}", self.endpoint, e))
        })?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }

    /// Serialized body, with the idempotency key written in for POST and PUT
    pub fn body(&self) -> Result<Option<Vec<u8>>> {
        let key = self
            .idempotency_key
            .as_deref()
            .filter(|key| !key.is_empty() && self.is_mutating());

        let payload = match (&self.input, key) {
            (None, None) => return Ok(None),
            (Some(input), None) => input.clone(),
            (None, Some(key)) => serde_json::json!({ IDEMPOTENCY_KEY_FIELD: key }),
            (Some(Value::Object(map)), Some(key)) => {
                let mut map = map.clone();
                map.insert(
                    IDEMPOTENCY_KEY_FIELD.to_string(),
                    Value::String(key.to_string()),
                );
                Value::Object(map)
            }
            (Some(_), Some(_)) => {
                return Err(CircleError::invalid_input(
                    "idempotency key requires a JSON object body",
                ))
            }
        };

        Ok(Some(serde_json::to_vec(&payload)?))
    }
}

/// A fallible adjustment of a pending call.
pub struct CallOption(Box<dyn FnOnce(&mut RequestDescriptor) -> Result<()> + Send>);

impl CallOption {
    /// Wrap a custom adjustment
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut RequestDescriptor) -> Result<()> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Apply the option to a descriptor
    pub fn apply(self, request: &mut RequestDescriptor) -> Result<()> {
        (self.0)(request)
    }
}

impl std::fmt::Debug for CallOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallOption(<function>)")
    }
}

/// Run the call within `context`
pub fn with_context(context: Context) -> CallOption {
    CallOption::new(move |request| {
        request.set_context(context);
        Ok(())
    })
}

/// Make the call idempotent.
///
/// An empty key generates a fresh UUID v4. Any other key must be a valid UUID.
pub fn with_idempotency_key(key: impl Into<String>) -> CallOption {
    let key = key.into();
    CallOption::new(move |request| {
        let key = if key.is_empty() {
            crate::new_idempotency_key()
        } else {
            Uuid::parse_str(&key).map_err(|e| {
                CircleError::invalid_option(format!("Invalid idempotency key '{}': {}", key, e))
            })?;
            key
        };
        tracing::trace!(idempotency_key = %key, "idempotency key set");
        request.set_idempotency_key(key);
        Ok(())
    })
}

/// Limit the number of items a collection returns
pub fn with_page_size(size: u32) -> CallOption {
    CallOption::new(move |request| {
        request.set_query("pageSize", size.to_string());
        Ok(())
    })
}

/// Limit a collection to items created within `[from, to]`
pub fn with_date_range(from: DateTime<Utc>, to: DateTime<Utc>) -> CallOption {
    CallOption::new(move |request| {
        if from > to {
            return Err(CircleError::invalid_option(format!(
                "date range start {} is after its end {}",
                from, to
            )));
        }
        request.set_query("from", from.to_rfc3339_opts(SecondsFormat::Secs, true));
        request.set_query("to", to.to_rfc3339_opts(SecondsFormat::Secs, true));
        Ok(())
    })
}

/// Return the items before `id`, exclusive
pub fn with_page_before(id: impl Into<String>) -> CallOption {
    let id = id.into();
    CallOption::new(move |request| {
        request.set_query("pageBefore", id);
        Ok(())
    })
}

/// Return the items after `id`, exclusive
pub fn with_page_after(id: impl Into<String>) -> CallOption {
    let id = id.into();
    CallOption::new(move |request| {
        request.set_query("pageAfter", id);
        Ok(())
    })
}

/// Append an arbitrary query parameter. Repeating a key sends it repeatedly.
pub fn with_query_param(key: impl Into<String>, value: impl Into<String>) -> CallOption {
    let key = key.into();
    let value = value.into();
    CallOption::new(move |request| {
        request.add_query(key, value);
        Ok(())
    })
}
