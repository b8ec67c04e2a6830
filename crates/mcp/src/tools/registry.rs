// Tool trait, schema binding and the registry

use crate::config::ToolConfig;
use crate::protocol::{ToolAnnotations, ToolResult, ToolSummary};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync + 'static {
    /// Validated argument type; binding is `Deserialize` then [`ValidateArgs::validate`].
    type Args: DeserializeOwned + ValidateArgs + Send + 'static;

    /// Stable identifier used on the command line
    fn id(&self) -> &'static str;

    fn description(&self) -> String;

    /// JSON Schema of `Args`, for display
    fn input_schema(&self) -> Value;

    fn annotations(&self) -> ToolAnnotations {
        ToolAnnotations::read_only()
    }

    /// Run the tool. Expected failures come back as an error [`ToolResult`];
    /// `Err` means the handler itself broke.
    async fn execute(&self, args: Self::Args) -> Result<ToolResult>;
}

/// Constraint checks that serde alone cannot express.
pub trait ValidateArgs {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Arguments did not match the tool's schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("{0}")]
    Shape(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}

/// A bound invocation, ready to be awaited.
pub type ToolCall = Pin<Box<dyn Future<Output = Result<ToolResult>> + Send>>;

trait BindTool: Send + Sync {
    fn bind(self: Arc<Self>, arguments: Value) -> Result<ToolCall, SchemaError>;
}

impl<T: Tool> BindTool for T {
    fn bind(self: Arc<Self>, arguments: Value) -> Result<ToolCall, SchemaError> {
        let args: T::Args = serde_json::from_value(arguments)?;
        args.validate().map_err(SchemaError::Invalid)?;
        Ok(Box::pin(async move { self.execute(args).await }))
    }
}

/// One catalog entry: metadata plus a handler behind a schema gate.
#[derive(Clone)]
pub struct ToolDefinition {
    pub id: &'static str,
    pub description: String,
    pub input_schema: Value,
    pub annotations: ToolAnnotations,
    handler: Arc<dyn BindTool>,
}

impl ToolDefinition {
    pub fn new<T: Tool>(tool: T) -> Self {
        Self {
            id: tool.id(),
            description: tool.description(),
            input_schema: tool.input_schema(),
            annotations: tool.annotations(),
            handler: Arc::new(tool),
        }
    }

    /// Validate `arguments` against the schema and prepare the call.
    pub fn bind(&self, arguments: Value) -> Result<ToolCall, SchemaError> {
        self.handler.clone().bind(arguments)
    }

    pub fn summary(&self) -> ToolSummary {
        ToolSummary {
            id: self.id.to_string(),
            description: self.description.clone(),
        }
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("id", &self.id)
            .field("annotations", &self.annotations)
            .finish_non_exhaustive()
    }
}

/// Ordered catalog of tools built for one configuration.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the built-in catalog. Cheap and side-effect-free; every call
    /// returns fresh definitions bound to `config`.
    pub fn create(config: &ToolConfig) -> Self {
        let mut registry = Self::new();
        for definition in super::builtin_tools(config) {
            registry.register(definition);
        }
        registry
    }

    /// Find a built-in tool, rebuilding the catalog for `config`.
    ///
    /// Entry point for library callers. [`crate::cli::Cli`] resolves through its
    /// own catalog function so tests can swap the tool set.
    pub fn lookup(id: &str, config: &ToolConfig) -> Option<ToolDefinition> {
        Self::create(config).get(id)
    }

    /// Register a tool; a later registration replaces an earlier one with the same id.
    pub fn register(&mut self, definition: ToolDefinition) {
        match self.tools.iter_mut().find(|t| t.id == definition.id) {
            Some(existing) => *existing = definition,
            None => self.tools.push(definition),
        }
    }

    pub fn get(&self, id: &str) -> Option<ToolDefinition> {
        self.tools.iter().find(|t| t.id == id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tools.iter().any(|t| t.id == id)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.id).collect()
    }

    /// `{id, description}` projection in registration order
    pub fn summaries(&self) -> Vec<ToolSummary> {
        self.tools.iter().map(ToolDefinition::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_integer(description: &str, minimum: u32, maximum: Option<u32>) -> Value {
    let mut schema = serde_json::json!({
        "type": "integer",
        "description": description,
        "minimum": minimum
    });
    if let Some(maximum) = maximum {
        schema["maximum"] = maximum.into();
    }
    schema
}

pub fn json_schema_enum(values: &[&str], description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "enum": values,
        "description": description
    })
}

/// Shared check for required free-text fields.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} must not be empty", field))
    } else {
        Ok(())
    }
}

/// Shared check for bounded numeric fields.
pub fn require_range(field: &str, value: u32, min: u32, max: u32) -> Result<(), String> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(format!("{} must be between {} and {}, got {}", field, min, max, value))
    }
}
