//! Search API endpoints.

use crate::client::ExaClient;
use crate::error::ExaResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Search API for neural/keyword web search.
pub struct SearchApi<'a> {
    client: &'a ExaClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a ExaClient) -> Self {
        Self { client }
    }

    /// Run a search.
    pub async fn search(&self, request: &SearchRequest) -> ExaResult<SearchResponse> {
        self.client.http.post(&["search"], request).await
    }
}

/// Body of a `/search` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    #[serde(rename = "type")]
    pub search_type: String,
    pub num_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<ContentsOptions>,
}

impl SearchRequest {
    /// An `auto`-type search returning `num_results` hits.
    pub fn new(query: impl Into<String>, num_results: u32) -> Self {
        Self {
            query: query.into(),
            search_type: "auto".to_string(),
            num_results,
            category: None,
            contents: None,
        }
    }

    /// Restrict results to a category such as `company`.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Ask for page contents alongside each hit.
    pub fn with_contents(mut self, contents: ContentsOptions) -> Self {
        self.contents = Some(contents);
        self
    }
}

/// Content retrieval options shared by `/search` and `/contents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentsOptions {
    pub text: TextOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livecrawl: Option<String>,
}

impl ContentsOptions {
    /// Page text capped at `max_characters`, live-crawling when preferred.
    pub fn text(max_characters: u32) -> Self {
        Self {
            text: TextOptions { max_characters },
            livecrawl: Some("preferred".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    pub max_characters: u32,
}

/// Response of `/search` and `/contents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single search hit or crawled page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_request_serialization() {
        let request = SearchRequest::new("rust", 3)
            .with_category("company")
            .with_contents(ContentsOptions::text(1000));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "rust",
                "type": "auto",
                "numResults": 3,
                "category": "company",
                "contents": {"text": {"maxCharacters": 1000}, "livecrawl": "preferred"}
            })
        );
    }

    #[tokio::test]
    async fn test_search() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_json(json!({"query": "rust", "type": "auto", "numResults": 2})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestId": "req-1",
                "results": [
                    {"url": "https://www.rust-lang.org", "title": "Rust", "score": 0.9}
                ],
                "costDollars": {"total": 0.005}
            })))
            .mount(&server)
            .await;

        let client = ExaClient::builder().base_url(server.uri()).build().unwrap();
        let response = client
            .search()
            .search(&SearchRequest::new("rust", 2))
            .await
            .unwrap();

        assert_eq!(response.request_id.as_deref(), Some("req-1"));
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title.as_deref(), Some("Rust"));
        assert_eq!(response.results[0].extra.get("score"), Some(&json!(0.9)));
        assert!(response.extra.contains_key("costDollars"));
    }
}
