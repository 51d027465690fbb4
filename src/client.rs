//! HTTP client and request dispatcher for the Circle API

use crate::api::{AccountsApi, CoreApi, PaymentsApi, PayoutsApi};
use crate::config::{ClientConfig, ConfigOption};
use crate::error::{ApiError, TransportError};
use crate::request::RequestDescriptor;
use crate::{CircleError, Result};
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use url::Url;

/// Target of the request/response dumps enabled by [`with_debug`](crate::config::with_debug)
pub const DUMP_TARGET: &str = "circle_sdk::dump";

/// Client for the Circle API.
///
/// Cheap to clone; clones share configuration and the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    config: ClientConfig,
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. Defaults are applied first, then `options` in order.
    ///
    /// ```no_run
    /// use circle_sdk::{config, Client};
    ///
    /// let client = Client::new([
    ///     config::with_api_key_from_env(config::DEFAULT_API_KEY_ENV),
    ///     config::with_user_agent("my-app/1.0"),
    /// ])?;
    /// # Ok::<(), circle_sdk::CircleError>(())
    /// ```
    pub fn new(options: impl IntoIterator<Item = ConfigOption>) -> Result<Self> {
        Self::with_config(ClientConfig::from_options(options)?)
    }

    /// Create a client from a complete configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.backend.base_url()?;
        let http = config.http_client()?;

        debug!(base_url = %base_url, debug = config.debug, "circle client created");

        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                base_url,
                http,
            }),
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Base URL every endpoint is resolved against
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Configuration, balances and business account addresses
    pub fn core(&self) -> CoreApi<'_> {
        CoreApi::new(self)
    }

    /// Wallets and transfers
    pub fn accounts(&self) -> AccountsApi<'_> {
        AccountsApi::new(self)
    }

    /// Cards, bank accounts, payments, settlements, chargebacks and reversals
    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi::new(self)
    }

    /// Payouts and returns
    pub fn payouts(&self) -> PayoutsApi<'_> {
        PayoutsApi::new(self)
    }

    /// Send a request and decode its response into `T`
    pub async fn dispatch<T>(&self, request: RequestDescriptor) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let (status, body) = self.execute(&request).await?;
        decode_body(status, &body, request.unwrap_data())
    }

    /// Send a request whose response carries nothing of interest
    pub async fn dispatch_discard(&self, request: RequestDescriptor) -> Result<()> {
        self.execute(&request).await?;
        Ok(())
    }

    /// Run the round trip. Returns the status and full body of a 2xx response.
    async fn execute(&self, request: &RequestDescriptor) -> Result<(StatusCode, Vec<u8>)> {
        let config = &self.inner.config;
        let url = request.url(&self.inner.base_url)?;
        let body = request.body()?;

        let ctx = request.context();
        if let Some(reason) = ctx.err() {
            return Err(reason.into());
        }

        let mut builder = self
            .inner
            .http
            .request(request.method().clone(), url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(config.api_key.as_deref().unwrap_or_default());
        if !config.user_agent.is_empty() {
            builder = builder.header(USER_AGENT, config.user_agent.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let http_request = builder.build().map_err(TransportError::from)?;

        if config.debug {
            dump_request(&http_request);
        }

        let started = Instant::now();
        let exchange = async {
            let response = self.inner.http.execute(http_request).await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, headers, body.to_vec()))
        };

        let (status, headers, body) = tokio::select! {
            biased;
            reason = ctx.done() => {
                debug!(method = %request.method(), endpoint = request.endpoint(), reason = %reason, "request aborted");
                return Err(reason.into());
            }
            result = exchange => result.map_err(TransportError::from)?,
        };

        debug!(
            method = %request.method(),
            endpoint = request.endpoint(),
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request dispatched"
        );

        if config.debug {
            dump_response(status, &headers, &body);
        }

        if !status.is_success() {
            return Err(decode_error(status, &body));
        }
        Ok((status, body))
    }
}

/// Decode a 2xx body, taking the `data` member first when `unwrap_data` is set
fn decode_body<T>(status: StatusCode, body: &[u8], unwrap_data: bool) -> Result<T>
where
    T: DeserializeOwned,
{
    let malformed = |e: serde_json::Error| {
        CircleError::malformed_response(
            status.to_string(),
            e.to_string(),
            String::from_utf8_lossy(body),
        )
    };

    if !unwrap_data {
        return serde_json::from_slice(body).map_err(malformed);
    }

    let value: Value = serde_json::from_slice(body).map_err(malformed)?;
    let data = match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(data).map_err(malformed)
}

/// Map a non-2xx response to a structured error, or to a malformed response
/// when the body is not an error document
fn decode_error(status: StatusCode, body: &[u8]) -> CircleError {
    match serde_json::from_slice::<ApiError>(body) {
        Ok(mut err) if err.code != 0 || !err.message.is_empty() => {
            err.http_status = Some(status.as_u16());
            CircleError::Api(err)
        }
        Ok(_) => CircleError::malformed_response(
            status.to_string(),
            "error body carries neither code nor message",
            String::from_utf8_lossy(body),
        ),
        Err(e) => CircleError::malformed_response(
            status.to_string(),
            e.to_string(),
            String::from_utf8_lossy(body),
        ),
    }
}

/// Header list safe to log: the bearer credential is masked
fn redacted_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if name == AUTHORIZATION {
                "Bearer <redacted>".to_string()
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.as_str().to_string(), value)
        })
        .collect()
}

fn dump_request(request: &reqwest::Request) {
    let body = request
        .body()
        .and_then(|body| body.as_bytes())
        .map(String::from_utf8_lossy)
        .unwrap_or_default();
    debug!(
        target: DUMP_TARGET,
        method = %request.method(),
        url = %request.url(),
        headers = ?redacted_headers(request.headers()),
        body = %body,
        "outgoing request"
    );
}

fn dump_response(status: StatusCode, headers: &HeaderMap, body: &[u8]) {
    debug!(
        target: DUMP_TARGET,
        status = %status,
        headers = ?redacted_headers(headers),
        body = %String::from_utf8_lossy(body),
        "incoming response"
    );
}
