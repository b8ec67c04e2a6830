// Crawling tool: fetch the contents of a known URL

use crate::config::ToolConfig;
use crate::protocol::ToolResult;
use crate::tools::errors::failure_result;
use crate::tools::{json_schema_integer, json_schema_object, json_schema_string, Tool, ValidateArgs};
use anyhow::Result;
use exa_sdk::api::ContentsRequest;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

pub const CRAWLING: &str = "crawling_exa";

/// Tool to extract page contents through Exa's crawler
pub struct CrawlingTool {
    config: ToolConfig,
}

impl CrawlingTool {
    const LABEL: &'static str = "Crawling";
    const DEFAULT_MAX_CHARACTERS: u32 = 3000;

    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    async fn crawl(&self, args: CrawlingArgs) -> Result<ToolResult> {
        let client = self.config.client()?;
        let request = ContentsRequest::single(
            args.url,
            args.max_characters.unwrap_or(Self::DEFAULT_MAX_CHARACTERS),
        );
        let response = client.contents().get(&request).await?;

        if response.results.is_empty() {
            return Ok(ToolResult::text("No content found for the provided URL."));
        }
        Ok(ToolResult::text(serde_json::to_string_pretty(&response)?))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlingArgs {
    url: String,
    #[serde(default)]
    max_characters: Option<u32>,
}

impl ValidateArgs for CrawlingArgs {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.url).map_err(|e| format!("url is invalid: {}", e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!("url must use http or https, got: {}", url.scheme()));
        }
        if self.max_characters == Some(0) {
            return Err("maxCharacters must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Tool for CrawlingTool {
    type Args = CrawlingArgs;

    fn id(&self) -> &'static str {
        CRAWLING
    }

    fn description(&self) -> String {
        "Extract the text content of a specific URL, e.g. an article, PDF or product page.".to_string()
    }

    fn input_schema(&self) -> Value {
        json_schema_object(
            serde_json::json!({
                "url": json_schema_string("URL to crawl"),
                "maxCharacters": json_schema_integer(
                    "Maximum characters of page text to return (default: 3000)",
                    1,
                    None
                )
            }),
            vec!["url"],
        )
    }

    async fn execute(&self, args: CrawlingArgs) -> Result<ToolResult> {
        debug!(tool = CRAWLING, url = %args.url, "Executing tool");

        match self.crawl(args).await {
            Ok(result) => Ok(result),
            Err(err) => Ok(failure_result(Self::LABEL, &err)),
        }
    }
}
