//! HTTP transport layer for the Exa SDK.

use crate::config::ClientConfig;
use crate::error::{ExaError, ExaResult};
use reqwest::{header, Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> ExaResult<Self> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        if let Some(ref api_key) = config.api_key {
            headers.insert(
                header::HeaderName::from_static("x-api-key"),
                header::HeaderValue::from_str(api_key)
                    .map_err(|_| ExaError::Config("Invalid API key format".to_string()))?,
            );
        }

        headers.insert(
            header::HeaderName::from_static("x-exa-integration"),
            header::HeaderValue::from_str(&config.integration)
                .map_err(|_| ExaError::Config("Invalid integration name".to_string()))?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Append `segments` to the base URL's path. Each segment is
    /// percent-encoded, so `/`, `?` and `#` never leave it.
    fn build_url(&self, segments: &[&str]) -> ExaResult<Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ExaError::Config(format!("Base URL cannot carry a path: {}", self.config.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request once and decode the JSON body.
    async fn execute<T: DeserializeOwned>(&self, request_builder: RequestBuilder) -> ExaResult<T> {
        let response = request_builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Request failed");
            return Err(ExaError::from_response(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Execute a GET request against the given path segments.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ExaResult<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "GET request");

        self.execute(self.client.get(url)).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> ExaResult<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "POST request");

        self.execute(self.client.post(url).json(body)).await
    }
}
