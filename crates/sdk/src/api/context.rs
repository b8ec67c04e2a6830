//! Code context API endpoints.

use crate::client::ExaClient;
use crate::error::ExaResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Context API returning code snippets and documentation for a query.
pub struct ContextApi<'a> {
    client: &'a ExaClient,
}

impl<'a> ContextApi<'a> {
    pub(crate) fn new(client: &'a ExaClient) -> Self {
        Self { client }
    }

    /// Retrieve code context.
    pub async fn get(&self, request: &ContextRequest) -> ExaResult<ContextResponse> {
        self.client.http.post(&["context"], request).await
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextRequest {
    pub query: String,
    pub tokens_num: u32,
}

/// Response of `/context`; `response` holds the formatted context text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextResponse {
    #[serde(default)]
    pub response: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
