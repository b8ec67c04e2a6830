// Search-backed tools: web, company and LinkedIn search

use crate::config::ToolConfig;
use crate::protocol::ToolResult;
use crate::tools::errors::failure_result;
use crate::tools::{
    json_schema_integer, json_schema_object, json_schema_string, require_non_empty,
    require_range, Tool, ValidateArgs,
};
use anyhow::Result;
use exa_sdk::api::{ContentsOptions, SearchRequest};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

pub const WEB_SEARCH: &str = "web_search_exa";
pub const COMPANY_RESEARCH: &str = "company_research_exa";
pub const LINKEDIN_SEARCH: &str = "linkedin_search_exa";

const MAX_RESULTS: u32 = 100;
const RESULT_TEXT_CHARS: u32 = 3000;

/// Run one `/search` call and render the response.
async fn run_search(config: &ToolConfig, request: SearchRequest, empty_message: &str) -> Result<ToolResult> {
    let client = config.client()?;
    let response = client.search().search(&request).await?;

    debug!(results = response.results.len(), "Search finished");

    if response.results.is_empty() {
        return Ok(ToolResult::text(empty_message));
    }
    Ok(ToolResult::text(serde_json::to_string_pretty(&response)?))
}

fn num_results_schema(default: u32) -> Value {
    json_schema_integer(
        &format!("Number of results to return (default: {})", default),
        1,
        Some(MAX_RESULTS),
    )
}

/// General web search
pub struct WebSearchTool {
    config: ToolConfig,
}

impl WebSearchTool {
    const LABEL: &'static str = "Search";
    const DEFAULT_RESULTS: u32 = 8;

    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSearchArgs {
    query: String,
    #[serde(default)]
    num_results: Option<u32>,
}

impl ValidateArgs for WebSearchArgs {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("query", &self.query)?;
        match self.num_results {
            Some(n) => require_range("numResults", n, 1, MAX_RESULTS),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Tool for WebSearchTool {
    type Args = WebSearchArgs;

    fn id(&self) -> &'static str {
        WEB_SEARCH
    }

    fn description(&self) -> String {
        "Search the web with Exa and return the matching pages with their text content.".to_string()
    }

    fn input_schema(&self) -> Value {
        json_schema_object(
            serde_json::json!({
                "query": json_schema_string("Search query"),
                "numResults": num_results_schema(Self::DEFAULT_RESULTS)
            }),
            vec!["query"],
        )
    }

    async fn execute(&self, args: WebSearchArgs) -> Result<ToolResult> {
        debug!(tool = WEB_SEARCH, query = %args.query, "Executing tool");

        let request = SearchRequest::new(
            args.query,
            args.num_results.unwrap_or(Self::DEFAULT_RESULTS),
        )
        .with_contents(ContentsOptions::text(RESULT_TEXT_CHARS));

        match run_search(
            &self.config,
            request,
            "No search results found. Please try a different query.",
        )
        .await
        {
            Ok(result) => Ok(result),
            Err(err) => Ok(failure_result(Self::LABEL, &err)),
        }
    }
}

/// Company-focused search
pub struct CompanyResearchTool {
    config: ToolConfig,
}

impl CompanyResearchTool {
    const LABEL: &'static str = "Company research";
    const DEFAULT_RESULTS: u32 = 5;

    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResearchArgs {
    company_name: String,
    #[serde(default)]
    num_results: Option<u32>,
}

impl ValidateArgs for CompanyResearchArgs {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("companyName", &self.company_name)?;
        match self.num_results {
            Some(n) => require_range("numResults", n, 1, MAX_RESULTS),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Tool for CompanyResearchTool {
    type Args = CompanyResearchArgs;

    fn id(&self) -> &'static str {
        COMPANY_RESEARCH
    }

    fn description(&self) -> String {
        "Research a company: find its website, products, funding and recent news.".to_string()
    }

    fn input_schema(&self) -> Value {
        json_schema_object(
            serde_json::json!({
                "companyName": json_schema_string("Name of the company to research"),
                "numResults": num_results_schema(Self::DEFAULT_RESULTS)
            }),
            vec!["companyName"],
        )
    }

    async fn execute(&self, args: CompanyResearchArgs) -> Result<ToolResult> {
        debug!(tool = COMPANY_RESEARCH, company = %args.company_name, "Executing tool");

        let request = SearchRequest::new(
            args.company_name,
            args.num_results.unwrap_or(Self::DEFAULT_RESULTS),
        )
        .with_category("company")
        .with_contents(ContentsOptions::text(RESULT_TEXT_CHARS));

        match run_search(
            &self.config,
            request,
            "No company information found. Please try a different company name.",
        )
        .await
        {
            Ok(result) => Ok(result),
            Err(err) => Ok(failure_result(Self::LABEL, &err)),
        }
    }
}

/// LinkedIn profile search
pub struct LinkedInSearchTool {
    config: ToolConfig,
}

impl LinkedInSearchTool {
    const LABEL: &'static str = "LinkedIn search";
    const DEFAULT_RESULTS: u32 = 5;

    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInSearchArgs {
    query: String,
    #[serde(default)]
    num_results: Option<u32>,
}

impl ValidateArgs for LinkedInSearchArgs {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("query", &self.query)?;
        match self.num_results {
            Some(n) => require_range("numResults", n, 1, MAX_RESULTS),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Tool for LinkedInSearchTool {
    type Args = LinkedInSearchArgs;

    fn id(&self) -> &'static str {
        LINKEDIN_SEARCH
    }

    fn description(&self) -> String {
        "Search LinkedIn for people and company profiles.".to_string()
    }

    fn input_schema(&self) -> Value {
        json_schema_object(
            serde_json::json!({
                "query": json_schema_string("Person, role or company to look for"),
                "numResults": num_results_schema(Self::DEFAULT_RESULTS)
            }),
            vec!["query"],
        )
    }

    async fn execute(&self, args: LinkedInSearchArgs) -> Result<ToolResult> {
        debug!(tool = LINKEDIN_SEARCH, query = %args.query, "Executing tool");

        let request = SearchRequest::new(
            args.query,
            args.num_results.unwrap_or(Self::DEFAULT_RESULTS),
        )
        .with_category("linkedin profile")
        .with_contents(ContentsOptions::text(RESULT_TEXT_CHARS));

        match run_search(
            &self.config,
            request,
            "No LinkedIn profiles found. Please try a different query.",
        )
        .await
        {
            Ok(result) => Ok(result),
            Err(err) => Ok(failure_result(Self::LABEL, &err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> ToolConfig {
        ToolConfig::default()
            .with_api_key("test-key")
            .with_base_url(server.uri())
    }

    fn args<T: serde::de::DeserializeOwned>(value: Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_web_search_returns_results() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("x-api-key", "test-key"))
            .and(body_partial_json(json!({"query": "rust", "numResults": 8})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"url": "https://www.rust-lang.org", "title": "Rust"}]
            })))
            .mount(&server)
            .await;

        let tool = WebSearchTool::new(config_for(&server));
        let result = tool.execute(args(json!({"query": "rust"}))).await.unwrap();

        assert!(!result.is_error());
        assert!(result.first_text().contains("https://www.rust-lang.org"));
    }

    #[tokio::test]
    async fn test_web_search_empty_results() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let tool = WebSearchTool::new(config_for(&server));
        let result = tool.execute(args(json!({"query": "zzzz"}))).await.unwrap();

        assert!(!result.is_error());
        assert_eq!(
            result.first_text(),
            "No search results found. Please try a different query."
        );
    }

    #[tokio::test]
    async fn test_web_search_remote_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "bad"})))
            .mount(&server)
            .await;

        let tool = WebSearchTool::new(config_for(&server));
        let result = tool.execute(args(json!({"query": "rust"}))).await.unwrap();

        assert!(result.is_error());
        assert_eq!(result.first_text(), "Search error (500): bad");
    }

    #[tokio::test]
    async fn test_company_research_uses_category() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(json!({
                "query": "Exa",
                "category": "company",
                "numResults": 2
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"url": "https://exa.ai", "title": "Exa"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tool = CompanyResearchTool::new(config_for(&server));
        let result = tool
            .execute(args(json!({"companyName": "Exa", "numResults": 2})))
            .await
            .unwrap();

        assert!(result.first_text().contains("https://exa.ai"));
    }

    #[tokio::test]
    async fn test_linkedin_error_label() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(json!({"category": "linkedin profile"})))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})))
            .mount(&server)
            .await;

        let tool = LinkedInSearchTool::new(config_for(&server));
        let result = tool.execute(args(json!({"query": "rust engineer"}))).await.unwrap();

        assert_eq!(result.first_text(), "LinkedIn search error (401): Invalid API key");
    }

    #[test]
    fn test_num_results_bounds() {
        let ok: WebSearchArgs = args(json!({"query": "q", "numResults": 100}));
        assert!(ok.validate().is_ok());

        let too_many: WebSearchArgs = args(json!({"query": "q", "numResults": 101}));
        assert!(too_many.validate().is_err());

        let blank: CompanyResearchArgs = args(json!({"companyName": " "}));
        assert_eq!(blank.validate().unwrap_err(), "companyName must not be empty");
    }
}
