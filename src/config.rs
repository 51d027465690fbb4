//! Client configuration and construction options

use crate::{CircleError, Result};
use std::time::Duration;
use url::Url;

/// Base URL of the sandbox environment
pub const SANDBOX_URL: &str = "https://api-sandbox.circle.com/";

/// Base URL of the production environment
pub const PRODUCTION_URL: &str = "https://api.circle.com/";

/// Default time limit for a request, including connect and body read
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default lifetime of idle pooled connections
pub const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(600);

/// Default number of idle connections kept open with the service
pub const DEFAULT_MAX_CONNECTIONS: usize = 50;

/// Environment variable conventionally holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "CIRCLE_API_KEY";

/// Service environment the client talks to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Backend {
    /// Sandbox environment
    #[default]
    Sandbox,
    /// Production environment
    Production,
    /// Any other base URL, e.g. a local mock server
    Custom(String),
}

impl Backend {
    /// Base URL of the backend, always ending in `/` so endpoints join under it
    pub fn base_url(&self) -> Result<Url> {
        let raw = match self {
            Backend::Sandbox => SANDBOX_URL,
            Backend::Production => PRODUCTION_URL,
            Backend::Custom(url) => url.as_str(),
        };

        let mut url = Url::parse(raw)
            .map_err(|e| CircleError::config(format!("Invalid base URL '{}': {}", raw, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CircleError::config(format!(
                "Unsupported base URL scheme '{}'",
                url.scheme()
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

/// Settings of a [`Client`](crate::Client). Immutable once the client is built.
#[derive(Clone)]
pub struct ClientConfig {
    /// Service environment
    pub backend: Backend,
    /// Bearer credential
    pub api_key: Option<String>,
    /// `User-Agent` header value; not sent when empty
    pub user_agent: String,
    /// Per-request time limit; zero disables it
    pub timeout: Duration,
    /// Idle connection lifetime and TCP keep-alive interval; zero disables both
    pub keep_alive: Duration,
    /// Idle connections kept per host
    pub max_connections: usize,
    /// Dump requests and responses through `tracing`
    pub debug: bool,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("backend", &self.backend)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("keep_alive", &self.keep_alive)
            .field("max_connections", &self.max_connections)
            .field("debug", &self.debug)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Sandbox,
            api_key: None,
            user_agent: format!("circle-sdk-rs/{}", crate::VERSION),
            timeout: DEFAULT_TIMEOUT,
            keep_alive: DEFAULT_KEEP_ALIVE,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Apply options over the defaults, in order. The first failing option aborts.
    pub fn from_options(options: impl IntoIterator<Item = ConfigOption>) -> Result<Self> {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => {}
            _ => return Err(CircleError::config("API key is required")),
        }
        if self.max_connections == 0 {
            return Err(CircleError::config("max connections must be greater than zero"));
        }
        self.backend.base_url()?;
        Ok(())
    }

    /// Build the pooled HTTP transport shared by every call
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let keep_alive = (!self.keep_alive.is_zero()).then_some(self.keep_alive);
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(self.max_connections)
            .pool_idle_timeout(keep_alive)
            .tcp_keepalive(keep_alive);

        if !self.timeout.is_zero() {
            builder = builder.connect_timeout(self.timeout).timeout(self.timeout);
        }

        builder
            .build()
            .map_err(|e| CircleError::config(format!("Failed to create HTTP client: {}", e)))
    }
}

/// A fallible adjustment of a [`ClientConfig`], applied by [`Client::new`](crate::Client::new).
pub struct ConfigOption(Box<dyn FnOnce(&mut ClientConfig) -> Result<()> + Send>);

impl ConfigOption {
    /// Wrap a custom adjustment
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut ClientConfig) -> Result<()> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Apply the option to a configuration
    pub fn apply(self, config: &mut ClientConfig) -> Result<()> {
        (self.0)(config)
    }
}

impl std::fmt::Debug for ConfigOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ConfigOption(<function>)")
    }
}

/// Use `key` as the bearer credential
pub fn with_api_key(key: impl Into<String>) -> ConfigOption {
    let key = key.into();
    ConfigOption::new(move |config| {
        config.api_key = Some(key);
        Ok(())
    })
}

/// Load the bearer credential from the environment variable `name`
pub fn with_api_key_from_env(name: impl Into<String>) -> ConfigOption {
    let name = name.into();
    ConfigOption::new(move |config| match std::env::var(&name) {
        Ok(key) if !key.is_empty() => {
            config.api_key = Some(key);
            Ok(())
        }
        _ => Err(CircleError::config(format!(
            "environment variable {} is not set",
            name
        ))),
    })
}

/// Report `agent` as the `User-Agent`; an empty value suppresses the header
pub fn with_user_agent(agent: impl Into<String>) -> ConfigOption {
    let agent = agent.into();
    ConfigOption::new(move |config| {
        config.user_agent = agent;
        Ok(())
    })
}

/// Limit each request, including connect and reading the body. Zero means no limit.
pub fn with_timeout(timeout: Duration) -> ConfigOption {
    ConfigOption::new(move |config| {
        config.timeout = timeout;
        Ok(())
    })
}

/// Keep idle connections open for `keep_alive`
pub fn with_keep_alive(keep_alive: Duration) -> ConfigOption {
    ConfigOption::new(move |config| {
        config.keep_alive = keep_alive;
        Ok(())
    })
}

/// Keep at most `max` idle connections with the service
pub fn with_max_connections(max: usize) -> ConfigOption {
    ConfigOption::new(move |config| {
        if max == 0 {
            return Err(CircleError::config(
                "max connections must be greater than zero",
            ));
        }
        config.max_connections = max;
        Ok(())
    })
}

/// Dump every request and response at `DEBUG` on the `circle_sdk::dump` target.
/// Meant for development only.
pub fn with_debug() -> ConfigOption {
    ConfigOption::new(|config| {
        config.debug = true;
        Ok(())
    })
}

/// Talk to the production environment instead of the sandbox
pub fn with_production_backend() -> ConfigOption {
    with_backend(Backend::Production)
}

/// Talk to an explicit backend
pub fn with_backend(backend: Backend) -> ConfigOption {
    ConfigOption::new(move |config| {
        backend.base_url()?;
        config.backend = backend;
        Ok(())
    })
}
