//! Research API endpoints.

use crate::client::ExaClient;
use crate::error::{ExaError, ExaResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Research API for long-running research tasks.
pub struct ResearchApi<'a> {
    client: &'a ExaClient,
}

impl<'a> ResearchApi<'a> {
    pub(crate) fn new(client: &'a ExaClient) -> Self {
        Self { client }
    }

    /// Start a research task.
    pub async fn create(&self, request: &CreateResearchRequest) -> ExaResult<ResearchTask> {
        self.client.http.post(&["research", "v1"], request).await
    }

    /// Get the current state of a research task.
    ///
    /// The id is sent as a single encoded path segment.
    pub async fn get(&self, research_id: &str) -> ExaResult<ResearchTask> {
        if matches!(research_id, "" | "." | "..") {
            return Err(ExaError::Config(format!("Invalid research id: {:?}", research_id)));
        }
        self.client.http.get(&["research", "v1", research_id]).await
    }
}

/// Research model tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResearchModel {
    #[default]
    #[serde(rename = "exa-research")]
    Standard,
    #[serde(rename = "exa-research-pro")]
    Pro,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResearchRequest {
    pub instructions: String,
    pub model: ResearchModel,
}

/// A research task as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchTask {
    #[serde(alias = "id")]
    pub research_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResearchTask {
    /// True once the task has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.as_deref(),
            Some("completed" | "failed" | "canceled")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_and_get() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/research/v1"))
            .and(body_json(json!({
                "instructions": "Summarize Rust async runtimes",
                "model": "exa-research-pro"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "researchId": "r_123",
                "status": "pending"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/research/v1/r_123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "researchId": "r_123",
                "status": "completed",
                "output": {"content": "Tokio dominates."}
            })))
            .mount(&server)
            .await;

        let client = ExaClient::builder().base_url(server.uri()).build().unwrap();

        let task = client
            .research()
            .create(&CreateResearchRequest {
                instructions: "Summarize Rust async runtimes".to_string(),
                model: ResearchModel::Pro,
            })
            .await
            .unwrap();
        assert_eq!(task.research_id, "r_123");
        assert!(!task.is_finished());

        let task = client.research().get("r_123").await.unwrap();
        assert!(task.is_finished());
        assert_eq!(
            task.extra.get("output"),
            Some(&json!({"content": "Tokio dominates."}))
        );
    }

    #[tokio::test]
    async fn test_get_rejects_dot_segments() {
        let client = ExaClient::builder().base_url("http://127.0.0.1:1").build().unwrap();

        for id in ["", ".", ".."] {
            let err = client.research().get(id).await.unwrap_err();
            assert!(matches!(err, ExaError::Config(_)), "id {:?}", id);
        }
    }

    #[test]
    fn test_legacy_id_field() {
        let task: ResearchTask = serde_json::from_value(json!({"id": "t1"})).unwrap();
        assert_eq!(task.research_id, "t1");
        assert!(task.status.is_none());
    }
}
