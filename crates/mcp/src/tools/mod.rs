pub mod code;
pub mod crawl;
pub mod errors;
pub mod research;
pub mod search;
mod registry;

pub use code::CodeContextTool;
pub use crawl::CrawlingTool;
pub use research::{ResearchCheckTool, ResearchStartTool};
pub use search::{CompanyResearchTool, LinkedInSearchTool, WebSearchTool};
pub use registry::{
    json_schema_enum, json_schema_integer, json_schema_object, json_schema_string,
    require_non_empty, require_range, SchemaError, Tool, ToolCall, ToolDefinition, ToolRegistry,
    ValidateArgs,
};

use crate::config::ToolConfig;

/// Every built-in tool id, in listing order.
pub const TOOL_IDS: [&str; 7] = [
    search::WEB_SEARCH,
    code::CODE_CONTEXT,
    crawl::CRAWLING,
    search::COMPANY_RESEARCH,
    search::LINKEDIN_SEARCH,
    research::RESEARCH_START,
    research::RESEARCH_CHECK,
];

/// Fresh definitions of every built-in tool, bound to `config`.
pub fn builtin_tools(config: &ToolConfig) -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(WebSearchTool::new(config.clone())),
        ToolDefinition::new(CodeContextTool::new(config.clone())),
        ToolDefinition::new(CrawlingTool::new(config.clone())),
        ToolDefinition::new(CompanyResearchTool::new(config.clone())),
        ToolDefinition::new(LinkedInSearchTool::new(config.clone())),
        ToolDefinition::new(ResearchStartTool::new(config.clone())),
        ToolDefinition::new(ResearchCheckTool::new(config.clone())),
    ]
}
