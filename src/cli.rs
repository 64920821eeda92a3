//! CLI Argument Parsing
//!
//! Global flags (--json, --no-color, --verbose, --config, --dir) are
//! inherited by all subcommands. Without a subcommand the redeploy runs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// redeploy - pull, rebuild the container, publish static files, restart the proxy
#[derive(Parser, Debug)]
#[command(name = "redeploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'redeploy' without arguments to redeploy with the current configuration.")]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./redeploy.toml, then the user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Working copy to deploy from (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the redeploy (default)
    Run {
        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the commands a redeploy would run
    Plan,

    /// Preflight checks: tools, working copy, env file, static files
    Check {
        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },
}

impl Cli {
    /// Subcommand to execute, `run` when none was given
    pub fn command_or_default(&self) -> Commands {
        match &self.command {
            Some(Commands::Run { dry_run }) => Commands::Run { dry_run: *dry_run },
            Some(Commands::Plan) => Commands::Plan,
            Some(Commands::Check { strict_warnings }) => Commands::Check {
                strict_warnings: *strict_warnings,
            },
            None => Commands::Run { dry_run: false },
        }
    }
}
