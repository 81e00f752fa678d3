//! Scheduling-service endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default service origin for local development.
fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

/// Default whole-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "rota/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Origin of the scheduling service (e.g., `https://sched.example.com`).
    /// A trailing slash is tolerated and stripped before use.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ServiceConfig {
    /// Check the section can back a gateway.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `base_url` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "service.base_url".to_string(),
                reason: "must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Base URL with any trailing slash stripped, ready for path concatenation.
    #[must_use]
    pub fn normalized_base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }
}
