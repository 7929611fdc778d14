use dataprep_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_fetch, run_verify};
use dataprep_lib::error::DataPrepError;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, DataPrepError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    let outcome = match command {
        ResolvedCommand::Fetch(params) => run_fetch(params).await?,
        ResolvedCommand::Verify(params) => run_verify(params).await?,
    };

    Ok(outcome.exit_code())
}
