// Deep research tools: start a task, then poll it

use crate::config::ToolConfig;
use crate::protocol::{ToolAnnotations, ToolResult};
use crate::tools::errors::failure_result;
use crate::tools::{
    json_schema_enum, json_schema_object, json_schema_string, require_non_empty, Tool,
    ValidateArgs,
};
use anyhow::Result;
use exa_sdk::api::{CreateResearchRequest, ResearchModel};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

pub const RESEARCH_START: &str = "deep_researcher_start";
pub const RESEARCH_CHECK: &str = "deep_researcher_check";

/// Tool to start an asynchronous research task
pub struct ResearchStartTool {
    config: ToolConfig,
}

impl ResearchStartTool {
    const LABEL: &'static str = "Research start";

    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    async fn start(&self, args: ResearchStartArgs) -> Result<ToolResult> {
        let client = self.config.client()?;
        let model = args.model.unwrap_or_default();
        let task = client
            .research()
            .create(&CreateResearchRequest {
                instructions: args.instructions.clone(),
                model,
            })
            .await?;

        let summary = json!({
            "success": true,
            "taskId": task.research_id,
            "model": model,
            "instructions": args.instructions,
            "message": format!(
                "Research task started. Call {} with this taskId to poll for results.",
                RESEARCH_CHECK
            )
        });
        Ok(ToolResult::text(serde_json::to_string_pretty(&summary)?))
    }
}

#[derive(Debug, Deserialize)]
pub struct ResearchStartArgs {
    instructions: String,
    #[serde(default)]
    model: Option<ResearchModel>,
}

impl ValidateArgs for ResearchStartArgs {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("instructions", &self.instructions)
    }
}

#[async_trait::async_trait]
impl Tool for ResearchStartTool {
    type Args = ResearchStartArgs;

    fn id(&self) -> &'static str {
        RESEARCH_START
    }

    fn description(&self) -> String {
        format!(
            "Start an AI research task that searches, reads and writes a report. Returns a taskId for {}.",
            RESEARCH_CHECK
        )
    }

    fn input_schema(&self) -> Value {
        json_schema_object(
            json!({
                "instructions": json_schema_string("What to research, as detailed as possible"),
                "model": json_schema_enum(
                    &["exa-research", "exa-research-pro"],
                    "Research model (default: exa-research)"
                )
            }),
            vec!["instructions"],
        )
    }

    fn annotations(&self) -> ToolAnnotations {
        ToolAnnotations::creates_state()
    }

    async fn execute(&self, args: ResearchStartArgs) -> Result<ToolResult> {
        debug!(tool = RESEARCH_START, "Executing tool");

        match self.start(args).await {
            Ok(result) => Ok(result),
            Err(err) => Ok(failure_result(Self::LABEL, &err)),
        }
    }
}

/// Tool to poll a research task
pub struct ResearchCheckTool {
    config: ToolConfig,
}

impl ResearchCheckTool {
    const LABEL: &'static str = "Research check";

    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    async fn check(&self, args: ResearchCheckArgs) -> Result<ToolResult> {
        let client = self.config.client()?;
        let task = client.research().get(args.task_id.trim()).await?;

        debug!(task_id = %task.research_id, status = ?task.status, "Research task polled");

        if task.is_finished() {
            return Ok(ToolResult::text(serde_json::to_string_pretty(&task)?));
        }

        let pending = json!({
            "taskId": task.research_id,
            "status": task.status.as_deref().unwrap_or("running"),
            "message": "Research is still in progress. Check again in a few seconds."
        });
        Ok(ToolResult::text(serde_json::to_string_pretty(&pending)?))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchCheckArgs {
    task_id: String,
}

impl ValidateArgs for ResearchCheckArgs {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("taskId", &self.task_id)
    }
}

#[async_trait::async_trait]
impl Tool for ResearchCheckTool {
    type Args = ResearchCheckArgs;

    fn id(&self) -> &'static str {
        RESEARCH_CHECK
    }

    fn description(&self) -> String {
        format!(
            "Check the status of a research task started with {} and return the report once it is done.",
            RESEARCH_START
        )
    }

    fn input_schema(&self) -> Value {
        json_schema_object(
            json!({
                "taskId": json_schema_string("Task id returned by deep_researcher_start")
            }),
            vec!["taskId"],
        )
    }

    async fn execute(&self, args: ResearchCheckArgs) -> Result<ToolResult> {
        debug!(tool = RESEARCH_CHECK, task_id = %args.task_id, "Executing tool");

        match self.check(args).await {
            Ok(result) => Ok(result),
            Err(err) => Ok(failure_result(Self::LABEL, &err)),
        }
    }
}
