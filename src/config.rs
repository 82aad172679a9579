//! Application configuration
//!
//! Loaded from an optional YAML file; every field has a default so an empty
//! file (or no file) is a valid configuration. CLI flags are applied on top.

use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use crate::types::{BackoffType, DEFAULT_ENDPOINT};
use reqwest::header::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete launchdeck configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// GraphQL endpoint serving `launchesPast`
    pub endpoint: String,

    /// Outbound HTTP settings
    pub http: HttpSettings,

    /// Web server settings
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: HttpSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load and validate a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML config text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| Error::invalid_value("endpoint", e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "endpoint",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_value(
                "http.timeout_secs",
                "must be greater than zero",
            ));
        }

        if self.http.requests_per_second == Some(0) {
            return Err(Error::invalid_value(
                "http.requests_per_second",
                "must be greater than zero",
            ));
        }

        if self.http.initial_backoff_ms > self.http.max_backoff_ms {
            return Err(Error::invalid_value(
                "http.initial_backoff_ms",
                format!(
                    "{} exceeds http.max_backoff_ms ({})",
                    self.http.initial_backoff_ms, self.http.max_backoff_ms
                ),
            ));
        }

        if let Some(agent) = &self.http.user_agent {
            HeaderValue::from_str(agent)
                .map_err(|e| Error::invalid_value("http.user_agent", e.to_string()))?;
        }

        for (name, value) in &self.http.headers {
            HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::invalid_value("http.headers", format!("'{name}': {e}")))?;
            HeaderValue::from_str(value)
                .map_err(|e| Error::invalid_value("http.headers", format!("'{name}': {e}")))?;
        }

        if self.server.session_ttl_secs == 0 {
            return Err(Error::invalid_value(
                "server.session_ttl_secs",
                "must be greater than zero",
            ));
        }

        self.server
            .host
            .parse::<IpAddr>()
            .map_err(|e| Error::invalid_value("server.host", e.to_string()))?;

        Ok(())
    }

    /// Override the endpoint (CLI `--endpoint`)
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Result<Self> {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
            self.validate()?;
        }
        Ok(self)
    }

    /// Override the bind address (CLI `--host` / `--port`)
    pub fn with_bind(mut self, host: Option<String>, port: Option<u16>) -> Result<Self> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self.validate()?;
        Ok(self)
    }

    /// Build the HTTP client described by `http`
    pub fn http_client(&self) -> Result<HttpClient> {
        HttpClient::with_config(self.http.client_config())
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// Outbound HTTP settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpSettings {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Retries after a failed query (0 = fail on first error)
    pub max_retries: u32,

    /// Delay growth between retries
    pub backoff: BackoffType,

    /// Delay before the first retry
    pub initial_backoff_ms: u64,

    /// Upper bound on any retry delay, `Retry-After` included
    pub max_backoff_ms: u64,

    /// Optional cap on outbound queries per second
    pub requests_per_second: Option<u32>,

    /// Replaces the default `launchdeck/<version>` user agent
    pub user_agent: Option<String>,

    /// Extra headers sent with every query (e.g. an API key)
    pub headers: BTreeMap<String, String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 0,
            backoff: BackoffType::Exponential,
            initial_backoff_ms: 100,
            max_backoff_ms: 10_000,
            requests_per_second: None,
            user_agent: None,
            headers: BTreeMap::new(),
        }
    }
}

impl HttpSettings {
    /// Translate into an HTTP client config
    pub fn client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff,
                Duration::from_millis(self.initial_backoff_ms),
                Duration::from_millis(self.max_backoff_ms),
            );
        if let Some(rps) = self.requests_per_second {
            builder = builder.rate_limit(RateLimiterConfig::per_second(rps));
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        for (name, value) in &self.headers {
            builder = builder.header(name.clone(), value.clone());
        }
        builder.build()
    }
}

// ============================================================================
// Server Settings
// ============================================================================

/// Web server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    /// Address to bind (IP literal)
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Seconds a browser session may sit idle before it is dropped
    pub session_ttl_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            session_ttl_secs: 30 * 60,
        }
    }
}

impl ServerSettings {
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Socket address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|e| Error::invalid_value("server.host", e.to_string()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
