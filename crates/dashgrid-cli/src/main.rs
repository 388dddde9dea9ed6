//! dashgrid: validate dashboard grid layouts and render grid forms.
//!
//! Results are printed to stdout as JSON; logs go to stderr.

mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::commands::Outcome;

const DEFAULT_LOG_DIRECTIVE: &str = "dashgrid=info";

fn init_logging(log_level: Option<&str>) {
    let filter = match log_level {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("invalid --log-level {directive:?}: {e}");
            EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
        }),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<Outcome, dashgrid_common::DashgridError> {
    let config = args.config.as_deref();
    match args.command {
        Command::Validate { file } => commands::validate_file(&file, &commands::registry(config)?),
        Command::Form {
            file,
            params,
            page_writable,
        } => commands::form(
            &file,
            params.as_deref(),
            page_writable,
            commands::registry(config)?,
        ),
        Command::Defaults { variant } => {
            commands::defaults(variant.as_deref(), &commands::registry(config)?)
        }
        Command::InitConfig { path, force } => {
            commands::init_config(path.as_deref().or(config), force)
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::debug!("dashgrid v{} starting", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
