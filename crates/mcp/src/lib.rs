// Command-line dispatcher for schema-validated Exa tools.
// Each invocation resolves one JSON input, runs one tool, and prints one JSON result.

pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod output;
pub mod protocol;
pub mod tools;

pub use cli::{run_cli, Cli, CliIo, CliOptions, EXIT_FAILURE, EXIT_SUCCESS};
pub use config::{Environment, ToolConfig};
pub use input::StdinHandle;
pub use protocol::ToolResult;
pub use tools::{Tool, ToolDefinition, ToolRegistry};
