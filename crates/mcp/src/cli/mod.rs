//! Command-line front controller.
//!
//! One invocation runs strictly in order: parse flags, look up the tool,
//! resolve input, parse JSON, bind arguments to the tool's schema, run the
//! handler, write one JSON document. Exit code is 0 on success, help and
//! listing, and 1 for every usage, validation or tool failure.

mod options;

pub use options::CliOptions;

use crate::config::{Environment, ToolConfig, API_KEY_ENV};
use crate::input::{self, ResolveError, StdinHandle};
use crate::output::{error_payload, write_json, write_line};
use crate::protocol::ToolResult;
use crate::tools::{SchemaError, ToolDefinition, ToolRegistry};
use serde::Serialize;
use std::io::Write;
use tokio::task::JoinError;
use tracing::{debug, error};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

const PROGRAM: &str = "exa-mcp";

/// Builds the catalog for a configuration.
pub type CatalogFn = fn(&ToolConfig) -> ToolRegistry;

/// Streams for one invocation.
pub struct CliIo<'a> {
    pub stdin: StdinHandle,
    pub stdout: &'a mut (dyn Write + Send),
    pub stderr: &'a mut (dyn Write + Send),
}

/// Failures between input resolution and handler completion. All of them are
/// reported as `CLI error: <message>`.
#[derive(Debug, thiserror::Error)]
enum InvocationError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("{0}")]
    Handler(String),
}

/// The dispatcher.
#[derive(Debug, Clone, Copy)]
pub struct Cli {
    catalog: CatalogFn,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            catalog: ToolRegistry::create,
        }
    }
}

impl Cli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch against a different catalog.
    pub fn with_catalog(catalog: CatalogFn) -> Self {
        Self { catalog }
    }

    /// Run one invocation and return its exit code.
    pub async fn run<I, S>(&self, args: I, env: &Environment, io: CliIo<'_>) -> u8
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let CliIo {
            stdin,
            stdout,
            stderr,
        } = io;
        let options = CliOptions::parse(args);

        if options.help {
            emit_line(stdout, &self.usage());
            return EXIT_SUCCESS;
        }

        if options.list_tools {
            let summaries = (self.catalog)(&ToolConfig::default()).summaries();
            emit_json(stdout, &summaries, true);
            return EXIT_SUCCESS;
        }

        let Some(tool_id) = options.tool_id.as_deref() else {
            emit_line(stderr, "Missing tool_id.");
            emit_line(stdout, &self.usage());
            return EXIT_FAILURE;
        };

        let config = ToolConfig::resolve(env, options.api_key.as_deref());
        let Some(tool) = (self.catalog)(&config).get(tool_id) else {
            debug!(tool = tool_id, "Unknown tool");
            emit_json(
                stdout,
                &error_payload(format!("Unknown tool: {}", tool_id)),
                options.pretty,
            );
            return EXIT_FAILURE;
        };

        let result = match invoke(&options, &tool, stdin).await {
            Ok(Some(result)) => result,
            Ok(None) => error_payload("Missing --input JSON or stdin input."),
            Err(err) => {
                debug!(tool = tool_id, error = %err, "Invocation failed");
                error_payload(format!("CLI error: {}", err))
            }
        };

        emit_json(stdout, &result, options.pretty);
        if result.is_error() {
            EXIT_FAILURE
        } else {
            EXIT_SUCCESS
        }
    }

    /// Usage text, listing the catalog's tool ids.
    pub fn usage(&self) -> String {
        let registry = (self.catalog)(&ToolConfig::default());
        let mut text = format!(
            "Usage: {program} <tool_id> [--input <json> | --input @<file> | --input-file <file>] [--api-key <key>] [--pretty]\n\
             \x20      {program} --list-tools\n\
             \x20      {program} --help\n\
             \n\
             Input is taken from --input-file, then --input, then stdin.\n\
             The API key defaults to ${env}.\n\
             \n\
             Tools:",
            program = PROGRAM,
            env = API_KEY_ENV,
        );
        for id in registry.ids() {
            text.push_str("\n  ");
            text.push_str(id);
        }
        text
    }
}

/// Run one invocation with the built-in catalog.
pub async fn run_cli<I, S>(args: I, env: &Environment, io: CliIo<'_>) -> u8
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Cli::new().run(args, env, io).await
}

/// Resolve, parse, bind and run. `Ok(None)` means there was no input.
async fn invoke(
    options: &CliOptions,
    tool: &ToolDefinition,
    stdin: StdinHandle,
) -> Result<Option<ToolResult>, InvocationError> {
    let Some(raw) = input::resolve(options, stdin).await? else {
        return Ok(None);
    };

    let arguments: serde_json::Value = serde_json::from_str(&raw)?;
    let call = tool.bind(arguments)?;

    debug!(tool = tool.id, "Invoking handler");
    match tokio::spawn(call).await {
        Ok(Ok(result)) => Ok(Some(result)),
        Ok(Err(err)) => Err(InvocationError::Handler(err.to_string())),
        Err(join_err) => Err(InvocationError::Handler(panic_message(join_err))),
    }
}

fn panic_message(err: JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }
    let payload = err.into_panic();
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "tool handler panicked".to_string()
    }
}

fn emit_json<T: Serialize + ?Sized>(sink: &mut (dyn Write + Send), value: &T, pretty: bool) {
    if let Err(err) = write_json(sink, value, pretty) {
        error!(error = %err, "Failed to write output");
    }
}

fn emit_line(sink: &mut (dyn Write + Send), text: &str) {
    if let Err(err) = write_line(sink, text) {
        error!(error = %err, "Failed to write output");
    }
}
