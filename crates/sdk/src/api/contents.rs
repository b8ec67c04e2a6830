//! Contents API endpoints.

use crate::api::search::{ContentsOptions, SearchResponse};
use crate::client::ExaClient;
use crate::error::ExaResult;
use serde::{Deserialize, Serialize};

/// Contents API for crawling known URLs.
pub struct ContentsApi<'a> {
    client: &'a ExaClient,
}

impl<'a> ContentsApi<'a> {
    pub(crate) fn new(client: &'a ExaClient) -> Self {
        Self { client }
    }

    /// Fetch page contents for the given URLs.
    pub async fn get(&self, request: &ContentsRequest) -> ExaResult<SearchResponse> {
        self.client.http.post(&["contents"], request).await
    }
}

/// Body of a `/contents` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentsRequest {
    pub urls: Vec<String>,
    #[serde(flatten)]
    pub options: ContentsOptions,
}

impl ContentsRequest {
    pub fn single(url: impl Into<String>, max_characters: u32) -> Self {
        Self {
            urls: vec![url.into()],
            options: ContentsOptions::text(max_characters),
        }
    }
}
