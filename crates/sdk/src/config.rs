//! Configuration types for the Exa SDK.

use std::time::Duration;
use url::Url;

/// Default Exa API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.exa.ai";

/// Integration identifier sent with every request.
pub const DEFAULT_INTEGRATION: &str = "exa-mcp-cli";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Exa client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Exa API.
    pub base_url: Url,
    /// API key sent in the `x-api-key` header.
    pub api_key: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
    /// Value of the `x-exa-integration` header.
    pub integration: String,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            integration: DEFAULT_INTEGRATION.to_string(),
        }
    }
}
