// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, set up logging, hand off to `run`.
// - Any error is printed to stderr and turned into exit status 1.

use jiraattach::cli::{Cli, Parsed};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = match Cli::parse_args(std::env::args_os())? {
        Parsed::Run(cli) => cli,
        Parsed::Info(info) => {
            info.print()?;
            return Ok(());
        }
    };
    setup_logging(&cli.log_level)?;

    let invocation = cli.invocation();
    tracing::debug!(config = %invocation.config_path.display(), key = %invocation.key, "starting");
    jiraattach::run(&invocation)?;
    Ok(())
}

fn setup_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
