//! redeploy CLI
//!
//! Usage: redeploy [OPTIONS] [COMMAND]
//!
//! Commands:
//!   run    Pull, rebuild the container, publish static files, restart the proxy (default)
//!   plan   Print the commands a redeploy would run
//!   check  Preflight checks

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use redeploy::error::DeployError;

fn main() {
    let cli = Cli::parse();
    redeploy::presentation::init_tracing(cli.verbose);

    if let Err(err) = dispatch(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn dispatch(cli: &Cli) -> Result<()> {
    let dir = cli.dir.as_deref();
    let config = cli.config.as_deref();

    match cli.command_or_default() {
        Commands::Run { dry_run } => {
            commands::run::cmd_run(dir, config, dry_run, cli.json, cli.no_color)
        }
        Commands::Plan => commands::plan::cmd_plan(dir, config, cli.json, cli.no_color),
        Commands::Check { strict_warnings } => {
            commands::check::cmd_check(dir, config, strict_warnings, cli.json, cli.no_color)
        }
    }
}

/// Exit code for an error that reached `main`
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DeployError>()
        .map(DeployError::exit_code)
        .unwrap_or(1)
}
