//! Flag grammar for one invocation.
//!
//! `<program> [tool_id] [flags]` with `--help|-h`, `--list-tools`, `--pretty`,
//! `--api-key <v>`, `--input|-i <v>` and `--input-file <v>`. A value flag takes
//! the next token verbatim, even one that looks like a flag. The first bare
//! token is the tool id; later bare tokens, empty tokens and unrecognized
//! flags are ignored.

use tracing::debug;

/// Parsed flag state. Built fresh per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub tool_id: Option<String>,
    pub input: Option<String>,
    pub input_file: Option<String>,
    pub api_key: Option<String>,
    pub pretty: bool,
    pub list_tools: bool,
    pub help: bool,
}

impl CliOptions {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "" => continue,
                "--help" | "-h" => options.help = true,
                "--list-tools" => options.list_tools = true,
                "--pretty" => options.pretty = true,
                "--api-key" => options.api_key = args.next(),
                "--input" | "-i" => options.input = args.next(),
                "--input-file" => options.input_file = args.next(),
                flag if flag.starts_with('-') => {
                    debug!(flag, "Ignoring unrecognized flag");
                }
                _ => {
                    if options.tool_id.is_none() {
                        options.tool_id = Some(arg);
                    }
                }
            }
        }

        options
    }
}
