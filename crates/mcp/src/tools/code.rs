// Code context tool

use crate::config::ToolConfig;
use crate::protocol::ToolResult;
use crate::tools::errors::failure_result;
use crate::tools::{
    json_schema_integer, json_schema_object, json_schema_string, require_non_empty,
    require_range, Tool, ValidateArgs,
};
use anyhow::Result;
use exa_sdk::api::ContextRequest;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

pub const CODE_CONTEXT: &str = "get_code_context_exa";

const MIN_TOKENS: u32 = 1000;
const MAX_TOKENS: u32 = 50_000;

/// Tool returning code examples and documentation for a programming question
pub struct CodeContextTool {
    config: ToolConfig,
}

impl CodeContextTool {
    const LABEL: &'static str = "Code search";
    const DEFAULT_TOKENS: u32 = 5000;

    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    async fn fetch(&self, args: CodeContextArgs) -> Result<ToolResult> {
        let client = self.config.client()?;
        let request = ContextRequest {
            query: args.query,
            tokens_num: args.tokens_num.unwrap_or(Self::DEFAULT_TOKENS),
        };
        let response = client.context().get(&request).await?;

        if response.response.trim().is_empty() {
            return Ok(ToolResult::text(
                "No code snippets or documentation found. Please try a different query.",
            ));
        }
        Ok(ToolResult::text(response.response))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeContextArgs {
    query: String,
    #[serde(default)]
    tokens_num: Option<u32>,
}

impl ValidateArgs for CodeContextArgs {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("query", &self.query)?;
        match self.tokens_num {
            Some(n) => require_range("tokensNum", n, MIN_TOKENS, MAX_TOKENS),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Tool for CodeContextTool {
    type Args = CodeContextArgs;

    fn id(&self) -> &'static str {
        CODE_CONTEXT
    }

    fn description(&self) -> String {
        "Find relevant code snippets and documentation for a programming question, library or API."
            .to_string()
    }

    fn input_schema(&self) -> Value {
        json_schema_object(
            serde_json::json!({
                "query": json_schema_string("What to look up, e.g. 'tokio select! with timeout'"),
                "tokensNum": json_schema_integer(
                    "Approximate size of the returned context in tokens (default: 5000)",
                    MIN_TOKENS,
                    Some(MAX_TOKENS)
                )
            }),
            vec!["query"],
        )
    }

    async fn execute(&self, args: CodeContextArgs) -> Result<ToolResult> {
        debug!(tool = CODE_CONTEXT, query = %args.query, "Executing tool");

        match self.fetch(args).await {
            Ok(result) => Ok(result),
            Err(err) => Ok(failure_result(Self::LABEL, &err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_returns_response_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/context"))
            .and(body_json(json!({"query": "serde flatten", "tokensNum": 5000})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": "#[serde(flatten)] inlines fields"
            })))
            .mount(&server)
            .await;

        let tool = CodeContextTool::new(ToolConfig::default().with_base_url(server.uri()));
        let args = serde_json::from_value(json!({"query": "serde flatten"})).unwrap();
        let result = tool.execute(args).await.unwrap();

        assert_eq!(result.first_text(), "#[serde(flatten)] inlines fields");
    }

    #[test]
    fn test_tokens_bounds() {
        let args: CodeContextArgs =
            serde_json::from_value(json!({"query": "q", "tokensNum": 500})).unwrap();
        assert_eq!(
            args.validate().unwrap_err(),
            "tokensNum must be between 1000 and 50000, got 500"
        );
    }
}
