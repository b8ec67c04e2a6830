//! Per-invocation tool configuration.
//!
//! The process environment is captured once into [`Environment`] and merged
//! with command-line overrides into a [`ToolConfig`]; tools never read
//! environment variables themselves.

use exa_sdk::{ExaClient, ExaResult};
use std::time::Duration;

/// Credential fallback when `--api-key` is absent.
pub const API_KEY_ENV: &str = "EXA_API_KEY";

/// Base URL override, mostly useful against a local mock.
pub const BASE_URL_ENV: &str = "EXA_BASE_URL";

/// Snapshot of the environment variables the dispatcher honours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Environment {
    /// Read the current process environment.
    pub fn capture() -> Self {
        Self {
            api_key: non_empty(std::env::var(API_KEY_ENV).ok()),
            base_url: non_empty(std::env::var(BASE_URL_ENV).ok()),
        }
    }
}

/// Settings threaded into every tool when a registry is built.
///
/// `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl ToolConfig {
    /// Environment defaults with an optional credential override on top.
    pub fn resolve(env: &Environment, api_key_override: Option<&str>) -> Self {
        Self {
            api_key: non_empty(api_key_override.map(str::to_string)).or_else(|| env.api_key.clone()),
            base_url: env.base_url.clone(),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build an API client for one tool call.
    pub fn client(&self) -> ExaResult<ExaClient> {
        let mut builder = ExaClient::builder();
        if let Some(ref base_url) = self.base_url {
            builder = builder.base_url(base_url);
        }
        match self.api_key {
            Some(ref api_key) => builder = builder.api_key(api_key),
            None => tracing::warn!("No API key configured; set {} or pass --api-key", API_KEY_ENV),
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with_key(key: &str) -> Environment {
        Environment {
            api_key: Some(key.to_string()),
            base_url: None,
        }
    }

    #[test]
    fn test_flag_overrides_environment() {
        let config = ToolConfig::resolve(&env_with_key("from-env"), Some("from-flag"));
        assert_eq!(config.api_key.as_deref(), Some("from-flag"));
    }

    #[test]
    fn test_environment_fallback() {
        let config = ToolConfig::resolve(&env_with_key("from-env"), None);
        assert_eq!(config.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_empty_flag_falls_back() {
        let config = ToolConfig::resolve(&env_with_key("from-env"), Some(""));
        assert_eq!(config.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_default_is_empty() {
        let config = ToolConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.base_url.is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_client_uses_overrides() {
        let client = ToolConfig::default()
            .with_api_key("k")
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(3))
            .client()
            .unwrap();

        assert_eq!(client.config().api_key.as_deref(), Some("k"));
        assert_eq!(client.config().base_url.as_str(), "http://localhost:8080/");
        assert_eq!(client.config().timeout, Duration::from_secs(3));
    }
}
