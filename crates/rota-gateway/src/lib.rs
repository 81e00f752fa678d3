//! # rota-gateway
//!
//! HTTP gateway client for the Rota scheduling service.
//!
//! The service speaks HTTP with every parameter in the query string (never a
//! request body) and answers with JSON records, JSON arrays, or plain-text
//! confirmations. This crate turns those exchanges into tagged results:
//! - Task operations: list, lookup, create, delete
//! - Resource type operations: list, create, adjust quantity, delete
//! - Schedule operations: fetch, recompute, unschedule one task
//!
//! Every operation takes the calling tenant's `client_id` and forwards it
//! verbatim; the gateway holds no tenant state and one instance can serve
//! any number of tenants concurrently. Timestamps are rewritten to the
//! `yyyy-mm-dd hh:mm` display pattern before records are returned, and
//! [`payload`] flattens results into the single-key maps the rendering
//! layer consumes.

pub mod payload;
pub mod resources;
pub mod schedule;
pub mod tasks;

mod error;
mod http;

pub use error::ServiceError;
pub use resources::NewResourceType;
pub use tasks::NewTask;

use rota_config::{ConfigError, ServiceConfig};

use crate::http::Method;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the scheduling service.
///
/// Holds one connection pool and the configured origin; operations borrow
/// `&self`, so a single instance can be shared across concurrent callers.
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new(ServiceConfig::default().base_url)
    }
}

impl Gateway {
    /// Create a gateway against `base_url` with default transport settings.
    ///
    /// # Panics
    ///
    /// Panics if `base_url` is blank or the underlying `reqwest::Client`
    /// fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = ServiceConfig {
            base_url: base_url.into(),
            ..ServiceConfig::default()
        };
        Self::from_config(&config).expect("gateway should build with default transport settings")
    }

    /// Build a gateway from a `[service]` config section, applying its
    /// timeout and user agent to the transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the section fails validation or the
    /// transport cannot be built from it.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if config.timeout_secs > 0 {
            builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        }
        let http = builder.build().map_err(|error| ConfigError::InvalidValue {
            field: "service".to_string(),
            reason: error.to_string(),
        })?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url(),
        })
    }

    /// Origin every operation path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the service root to warm the connection and confirm the origin
    /// answers. Fire-and-forget: the response is discarded and failures are
    /// only logged, never surfaced.
    pub async fn ping(&self) {
        match self.send(Method::Get, "/index").await {
            Ok(raw) => tracing::debug!(status = raw.status, "service answered ping"),
            Err(error) => tracing::debug!(cause = %error.0, "service ping failed"),
        }
    }
}
