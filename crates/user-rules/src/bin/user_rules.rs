//! `user-rules` command-line entry point.
//!
//! This binary delegates to `user_rules::cli` for parsing and rendering,
//! keeping the command behaviour testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use user_rules::cli::{self, CliArgs, CliError};
use user_rules::settings::RulesSettings;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(args) {
        Ok(output) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{output}") {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<String, CliError> {
    let settings = RulesSettings::from_environment()?;
    init_tracing(settings.json_logs);
    cli::run(args, &settings)
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = installed {
        warn!(error = %e, "tracing init failed");
    }
}
