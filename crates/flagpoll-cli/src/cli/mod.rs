//! CLI for the flagpoll poll scheduler.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use flagpoll_core::config::{self, PollConfig};
use flagpoll_core::poll::PollPolicy;
use std::path::PathBuf;
use std::time::Duration;

use commands::{run_config, run_exec, run_file};

/// Top-level CLI: wait for a condition by polling it at a fixed interval.
#[derive(Debug, Parser)]
#[command(name = "flagpoll")]
#[command(about = "Poll a condition at a fixed interval until it holds or attempts run out", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Poll settings shared by every waiting command; unset values come from config.toml.
#[derive(Debug, Clone, Default, Args)]
pub struct PollArgs {
    /// Delay between attempts, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,
    /// Maximum number of attempts (including the first).
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,
}

impl PollArgs {
    pub fn policy(&self, cfg: &PollConfig) -> PollPolicy {
        PollPolicy::new(
            Duration::from_millis(self.interval_ms.unwrap_or(cfg.interval_ms)),
            self.max_attempts.unwrap_or(cfg.max_attempts),
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Wait until a file or directory exists.
    File {
        /// Path to wait for.
        path: PathBuf,
        #[command(flatten)]
        poll: PollArgs,
    },

    /// Rerun a command until it exits successfully.
    Exec {
        #[command(flatten)]
        poll: PollArgs,
        /// Program and arguments, e.g. `flagpoll exec -- curl -sf http://localhost:8080/health`.
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Show the config file location and effective poll settings.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::File { path, poll } => run_file(&path, &poll.policy(&cfg.poll)).await?,
            CliCommand::Exec { poll, command } => {
                run_exec(&command, &poll.policy(&cfg.poll)).await?
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
