// exa-mcp command-line entry point

use exa_mcp::cli::{run_cli, CliIo};
use exa_mcp::config::Environment;
use exa_mcp::input::StdinHandle;
use exa_mcp::logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let env = Environment::capture();
    let args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let io = CliIo {
        stdin: StdinHandle::process(),
        stdout: &mut stdout,
        stderr: &mut stderr,
    };

    ExitCode::from(run_cli(args, &env, io).await)
}
