//! Main client for the Exa SDK.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_INTEGRATION, DEFAULT_TIMEOUT};
use crate::error::ExaResult;
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the Exa API.
#[derive(Clone)]
pub struct ExaClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl ExaClient {
    /// Create a new client builder.
    pub fn builder() -> ExaClientBuilder {
        ExaClientBuilder::new()
    }

    /// Create a client from configuration.
    fn from_config(config: ClientConfig) -> ExaResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the search API.
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Get the contents API.
    pub fn contents(&self) -> ContentsApi<'_> {
        ContentsApi::new(self)
    }

    /// Get the code context API.
    pub fn context(&self) -> ContextApi<'_> {
        ContextApi::new(self)
    }

    /// Get the research API.
    pub fn research(&self) -> ResearchApi<'_> {
        ResearchApi::new(self)
    }
}

/// Builder for creating an ExaClient.
pub struct ExaClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
    integration: String,
}

impl ExaClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            integration: DEFAULT_INTEGRATION.to_string(),
        }
    }

    /// Set the base URL of the Exa API. Defaults to `https://api.exa.ai`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the integration identifier header value.
    pub fn integration(mut self, name: impl Into<String>) -> Self {
        self.integration = name.into();
        self
    }

    /// Build the client.
    pub fn build(self) -> ExaResult<ExaClient> {
        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let config = ClientConfig {
            base_url,
            api_key: self.api_key,
            timeout: self.timeout,
            integration: self.integration,
        };

        ExaClient::from_config(config)
    }
}

impl Default for ExaClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
